pub mod harmony;

use anyhow::{bail, Result};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::color::Color;

/// Number of slots in every palette. Regeneration never changes this.
pub const PALETTE_SIZE: usize = 5;

/// Which algorithm produces candidate colors on regeneration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteType {
    #[default]
    Random,
    Monochromatic,
    Analogous,
    Complementary,
    Triadic,
}

impl PaletteType {
    /// All types, in the order the UI cycles through them.
    pub const ALL: [PaletteType; 5] = [
        PaletteType::Random,
        PaletteType::Monochromatic,
        PaletteType::Analogous,
        PaletteType::Complementary,
        PaletteType::Triadic,
    ];

    /// Map a free-form tag to a palette type. Unrecognized tags fall back
    /// to `Random`, which is also what candidate generation produces for
    /// anything it does not know. This is the string boundary for UI
    /// collaborators; the CLI's `--type` flag parses through it.
    pub fn from_tag(tag: &str) -> PaletteType {
        match tag.to_ascii_lowercase().as_str() {
            "monochromatic" => PaletteType::Monochromatic,
            "analogous" => PaletteType::Analogous,
            "complementary" => PaletteType::Complementary,
            "triadic" => PaletteType::Triadic,
            _ => PaletteType::Random,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            PaletteType::Random => "random",
            PaletteType::Monochromatic => "monochromatic",
            PaletteType::Analogous => "analogous",
            PaletteType::Complementary => "complementary",
            PaletteType::Triadic => "triadic",
        }
    }

    /// The next type in cycling order, wrapping around.
    pub fn next(self) -> PaletteType {
        let i = Self::ALL.iter().position(|&t| t == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for PaletteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// One palette entry as returned to UI collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteSlot {
    pub color: Color,
    pub locked: bool,
}

/// Snapshot of all slots after a regeneration.
pub type Palette = [PaletteSlot; PALETTE_SIZE];

/// Owns the palette state tuple: slot colors, per-slot locks, the active
/// palette type, and the base color harmonic types are seeded from.
///
/// Generic over the random source so callers can pass a seeded `StdRng`
/// for reproducible output or a fixed byte stream in tests; `new()` uses
/// the thread-local generator.
pub struct PaletteEngine<R: Rng = ThreadRng> {
    colors: [Option<Color>; PALETTE_SIZE],
    locked: [bool; PALETTE_SIZE],
    active: PaletteType,
    base: Option<Color>,
    rng: R,
}

impl PaletteEngine<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for PaletteEngine<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PaletteEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            colors: [None; PALETTE_SIZE],
            locked: [false; PALETTE_SIZE],
            active: PaletteType::default(),
            base: None,
            rng,
        }
    }

    pub fn active_type(&self) -> PaletteType {
        self.active
    }

    /// Switch the active palette type. Every slot is unlocked; `Random`
    /// clears the base color, any other type draws a fresh one.
    pub fn set_type(&mut self, ty: PaletteType) {
        self.active = ty;
        self.locked = [false; PALETTE_SIZE];
        self.base = if ty == PaletteType::Random {
            None
        } else {
            Some(Color::random(&mut self.rng))
        };
    }

    /// Flip the lock on one slot, leaving its color untouched. Returns the
    /// new lock state. Out-of-range indices are a caller bug and fail.
    pub fn toggle_lock(&mut self, index: usize) -> Result<bool> {
        if index >= PALETTE_SIZE {
            bail!("palette slot index out of range: {index} (expected 0..{PALETTE_SIZE})");
        }
        self.locked[index] = !self.locked[index];
        Ok(self.locked[index])
    }

    /// Produce a new palette, honoring locks.
    ///
    /// The base color is reused only while a locked slot gives the palette
    /// continuity to preserve; otherwise each call re-anchors on a fresh
    /// random seed. Locked slots keep their color once they hold one; every
    /// other slot adopts its candidate.
    pub fn regenerate(&mut self) -> Palette {
        let anchored = self.active != PaletteType::Random && self.locked.iter().any(|&l| l);
        let base = match self.base {
            Some(base) if anchored => base,
            _ => {
                let fresh = Color::random(&mut self.rng);
                self.base = Some(fresh);
                fresh
            }
        };

        let candidates = harmony::candidates(self.active, base, &mut self.rng);

        let next: [Color; PALETTE_SIZE] = std::array::from_fn(|i| match self.colors[i] {
            Some(held) if self.locked[i] => held,
            _ => candidates[i],
        });
        self.colors = next.map(Some);

        std::array::from_fn(|i| PaletteSlot {
            color: next[i],
            locked: self.locked[i],
        })
    }
}
