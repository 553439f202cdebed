use clap::builder::PossibleValue;
use clap::{Parser, ValueEnum};

use crate::engine::PaletteType;

/// Generate harmonic five-color palettes in the terminal.
#[derive(Parser, Debug)]
#[command(name = "matiz", version, about)]
pub struct Args {
    /// Palette type to generate (unknown tags fall back to random)
    #[arg(short = 't', long = "type", value_enum, default_value_t = PaletteType::Random)]
    pub palette_type: PaletteType,

    /// Seed the random generator for reproducible palettes
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Print colored swatches instead of bare hex codes
    #[arg(long)]
    pub preview: bool,

    /// Launch interactive TUI mode
    #[arg(long)]
    pub tui: bool,
}

/// Clap integration lives here so the engine stays UI-agnostic. Parsing
/// goes through `PaletteType::from_tag`, so an unrecognized tag degrades
/// to `random` instead of erroring, matching the engine's own fallback.
impl ValueEnum for PaletteType {
    fn value_variants<'a>() -> &'a [Self] {
        &PaletteType::ALL
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.tag()))
    }

    fn from_str(input: &str, _ignore_case: bool) -> Result<Self, String> {
        Ok(PaletteType::from_tag(input))
    }
}
