//! Candidate color generation for each palette type.
//!
//! Harmonic types derive all candidates from one base color using fixed
//! hue offsets and lightness steps; `Random` draws independently. Every
//! branch is normalized to exactly `PALETTE_SIZE` colors.

use palette::Mix;
use rand::Rng;

use super::{PaletteType, PALETTE_SIZE};
use crate::color::Color;

/// Lightness delta (in darken/brighten units) for the ends of the
/// monochromatic ramp.
const RAMP_SPREAD: f32 = 2.0;

/// Smaller lightness delta used for the variant slots of the rotated types.
const VARIANT_STEP: f32 = 0.5;

/// Produce exactly `PALETTE_SIZE` candidates for the given type.
pub fn candidates<R: Rng>(ty: PaletteType, base: Color, rng: &mut R) -> [Color; PALETTE_SIZE] {
    let mut colors = match ty {
        PaletteType::Monochromatic => monochromatic(base),
        PaletteType::Analogous => analogous(base),
        PaletteType::Complementary => complementary(base),
        PaletteType::Triadic => triadic(base),
        PaletteType::Random => Vec::new(),
    };
    // Pad short branches with random draws, then cap at the slot count.
    while colors.len() < PALETTE_SIZE {
        colors.push(Color::random(rng));
    }
    colors.truncate(PALETTE_SIZE);
    std::array::from_fn(|i| colors[i])
}

/// Resample the 3-stop ramp dark..base..light into evenly spaced colors,
/// interpolating in LCh so the midpoints stay perceptually even.
fn monochromatic(base: Color) -> Vec<Color> {
    let dark = base.darken(RAMP_SPREAD).to_lch();
    let mid = base.to_lch();
    let light = base.brighten(RAMP_SPREAD).to_lch();

    (0..PALETTE_SIZE)
        .map(|i| {
            let t = i as f32 / (PALETTE_SIZE - 1) as f32;
            let lch = if t <= 0.5 {
                dark.mix(mid, t * 2.0)
            } else {
                mid.mix(light, (t - 0.5) * 2.0)
            };
            Color::from_lch(lch)
        })
        .collect()
}

/// Base plus its two 30-degree neighbors, with darker/brighter variants of
/// the neighbors filling the last two slots.
fn analogous(base: Color) -> Vec<Color> {
    let plus = base.rotate_hue(30.0);
    let minus = base.rotate_hue(-30.0);
    vec![
        base,
        plus,
        minus,
        plus.darken(VARIANT_STEP),
        minus.brighten(VARIANT_STEP),
    ]
}

/// Base and its opposite, padded with lightness variants of both.
fn complementary(base: Color) -> Vec<Color> {
    let opposite = base.rotate_hue(180.0);
    vec![
        base,
        opposite,
        base.brighten(1.0),
        base.darken(1.0),
        opposite.brighten(VARIANT_STEP),
    ]
}

/// Base and the two colors a third of the wheel away, plus variants.
fn triadic(base: Color) -> Vec<Color> {
    let second = base.rotate_hue(120.0);
    let third = base.rotate_hue(240.0);
    vec![
        base,
        second,
        third,
        second.darken(VARIANT_STEP),
        third.brighten(VARIANT_STEP),
    ]
}
