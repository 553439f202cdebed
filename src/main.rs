use anyhow::Result;
use clap::Parser;
use crossterm::style::{Color as TermColor, Stylize};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use matiz::cli::Args;
use matiz::engine::PaletteEngine;
use matiz::tui::{self, TuiApp};

fn main() -> Result<()> {
    let args = Args::parse();
    match args.seed {
        Some(seed) => run(&args, PaletteEngine::with_rng(StdRng::seed_from_u64(seed))),
        None => run(&args, PaletteEngine::new()),
    }
}

fn run<R: Rng>(args: &Args, mut engine: PaletteEngine<R>) -> Result<()> {
    engine.set_type(args.palette_type);

    if args.tui {
        return tui::run(TuiApp::new(engine));
    }

    let palette = engine.regenerate();
    for slot in &palette {
        let hex = slot.color.to_hex();
        if args.preview {
            let swatch = "      ".on(TermColor::Rgb {
                r: slot.color.r,
                g: slot.color.g,
                b: slot.color.b,
            });
            println!("{swatch} {hex}");
        } else {
            println!("{hex}");
        }
    }
    Ok(())
}
