use std::convert::Infallible;

use rand::rngs::StdRng;
use rand::{SeedableRng, TryRng};

use matiz::color::{Color, TextTone};
use matiz::engine::{PaletteEngine, PaletteType, PALETTE_SIZE};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// RNG that replays a fixed byte cycle, pinning every "random" color draw.
/// Cycling `[0x33, 0x66, 0x99]` makes each 3-byte draw come out as #336699.
struct CycleRng {
    bytes: Vec<u8>,
    pos: usize,
}

impl CycleRng {
    fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            pos: 0,
        }
    }
}

impl TryRng for CycleRng {
    type Error = Infallible;

    fn try_next_u32(&mut self) -> Result<u32, Infallible> {
        let mut buf = [0u8; 4];
        self.try_fill_bytes(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    fn try_next_u64(&mut self) -> Result<u64, Infallible> {
        let mut buf = [0u8; 8];
        self.try_fill_bytes(&mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Infallible> {
        for byte in dest {
            *byte = self.bytes[self.pos];
            self.pos = (self.pos + 1) % self.bytes.len();
        }
        Ok(())
    }
}

fn seeded_engine(seed: u64) -> PaletteEngine<StdRng> {
    PaletteEngine::with_rng(StdRng::seed_from_u64(seed))
}

fn base_engine() -> PaletteEngine<CycleRng> {
    PaletteEngine::with_rng(CycleRng::new(&[0x33, 0x66, 0x99]))
}

fn assert_hex_shape(hex: &str) {
    assert!(
        hex.len() == 7
            && hex.starts_with('#')
            && hex[1..]
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
        "malformed hex color: {hex}"
    );
}

fn hue_close(a: f32, b: f32, tolerance: f32) -> bool {
    let diff = (a - b).rem_euclid(360.0);
    diff < tolerance || diff > 360.0 - tolerance
}

// ---------------------------------------------------------------------------
// Palette shape and lock behavior
// ---------------------------------------------------------------------------

#[test]
fn every_type_regenerates_exactly_five_slots() {
    for (i, ty) in PaletteType::ALL.into_iter().enumerate() {
        let mut engine = seeded_engine(i as u64);
        engine.set_type(ty);
        let palette = engine.regenerate();
        assert_eq!(palette.len(), PALETTE_SIZE, "wrong slot count for {ty}");
        for slot in &palette {
            assert_hex_shape(&slot.color.to_hex());
        }
    }
}

#[test]
fn locked_slot_keeps_its_color() {
    let mut engine = seeded_engine(11);
    let first = engine.regenerate();
    engine.toggle_lock(1).unwrap();
    let second = engine.regenerate();
    assert_eq!(
        second[1].color, first[1].color,
        "locked slot must survive regeneration"
    );
    assert!(second[1].locked);
}

#[test]
fn switching_type_unlocks_every_slot() {
    for ty in PaletteType::ALL {
        let mut engine = seeded_engine(3);
        engine.regenerate();
        engine.toggle_lock(0).unwrap();
        engine.toggle_lock(4).unwrap();
        engine.set_type(ty);
        let palette = engine.regenerate();
        assert!(
            palette.iter().all(|slot| !slot.locked),
            "set_type({ty}) should unlock all slots"
        );
    }
}

#[test]
fn switching_to_random_discards_locked_colors() {
    let mut engine = seeded_engine(5);
    engine.set_type(PaletteType::Analogous);
    let before = engine.regenerate();
    engine.toggle_lock(2).unwrap();

    engine.set_type(PaletteType::Random);
    let after = engine.regenerate();

    // The type switch unlocked everything, so slot 2 is fair game again.
    assert!(!after[2].locked);
    assert_ne!(
        after[2].color, before[2].color,
        "slot 2 must not survive the switch to random"
    );
}

// ---------------------------------------------------------------------------
// Harmonic generation against a pinned base draw
// ---------------------------------------------------------------------------

#[test]
fn complementary_hue_sits_opposite_the_base() {
    let mut engine = base_engine();
    engine.set_type(PaletteType::Complementary);
    let palette = engine.regenerate();

    let base = Color::from_hex("#336699").unwrap();
    assert_eq!(palette[0].color, base, "slot 0 should carry the base");

    let expected = (base.hue_degrees() + 180.0).rem_euclid(360.0);
    let actual = palette[1].color.hue_degrees();
    assert!(
        hue_close(actual, expected, 2.0),
        "complement hue should be {expected}, got {actual}"
    );
}

#[test]
fn monochromatic_ramp_from_pinned_base() {
    let mut engine = base_engine();
    engine.set_type(PaletteType::Monochromatic);
    let palette = engine.regenerate();

    // Lightness must climb monotonically along the ramp.
    for pair in palette.windows(2) {
        assert!(
            pair[0].color.to_lch().l <= pair[1].color.to_lch().l + 0.5,
            "ramp not monotonic: {} then {}",
            pair[0].color,
            pair[1].color
        );
    }

    // The middle slot is the base itself (within conversion rounding).
    let base = Color::from_hex("#336699").unwrap();
    let mid = palette[PALETTE_SIZE / 2].color;
    assert!(
        (mid.r as i16 - base.r as i16).abs() <= 2
            && (mid.g as i16 - base.g as i16).abs() <= 2
            && (mid.b as i16 - base.b as i16).abs() <= 2,
        "middle of the ramp should be the base: {mid} vs {base}"
    );
}

#[test]
fn locked_slot_anchors_the_harmonic_base() {
    let mut engine = seeded_engine(17);
    engine.set_type(PaletteType::Triadic);
    let first = engine.regenerate();
    engine.toggle_lock(0).unwrap();

    // With slot 0 locked the base is reused, so the derived slots repeat.
    let second = engine.regenerate();
    for i in 0..PALETTE_SIZE {
        assert_eq!(
            second[i].color, first[i].color,
            "slot {i} should repeat while the base is anchored"
        );
    }
}

// ---------------------------------------------------------------------------
// Contrast text tone
// ---------------------------------------------------------------------------

#[test]
fn white_takes_dark_text_and_black_takes_light() {
    assert_eq!(Color::from_hex("#ffffff").unwrap().text_tone(), TextTone::Dark);
    assert_eq!(Color::from_hex("#000000").unwrap().text_tone(), TextTone::Light);
}

#[test]
fn text_tone_is_stable_around_the_threshold() {
    // Gray 176 has relative luminance ~0.434, gray 175 ~0.429 -- one on
    // each side of the 0.43 cutoff.
    assert_eq!(Color::new(176, 176, 176).text_tone(), TextTone::Dark);
    assert_eq!(Color::new(175, 175, 175).text_tone(), TextTone::Light);
}

// ---------------------------------------------------------------------------
// Random output shape
// ---------------------------------------------------------------------------

#[test]
fn random_palettes_always_emit_canonical_hex() {
    let mut engine = seeded_engine(99);
    engine.set_type(PaletteType::Random);
    for _ in 0..200 {
        for slot in engine.regenerate() {
            assert_hex_shape(&slot.color.to_hex());
        }
    }
}

#[test]
fn random_regenerations_do_not_repeat() {
    let mut engine = seeded_engine(23);
    let first = engine.regenerate();
    let second = engine.regenerate();
    assert_ne!(
        first.map(|s| s.color),
        second.map(|s| s.color),
        "independent random draws should differ"
    );
}
