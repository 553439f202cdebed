use anyhow::{bail, Result};
use palette::{FromColor, Hsl, IntoColor, Lab, Lch, RgbHue, Srgb};
use rand::Rng;

/// CIELAB L* units removed/added per 1.0 of darken/brighten.
const LIGHTNESS_STEP: f32 = 18.0;

/// Relative luminance above which dark text is readable on the color.
const TEXT_TONE_THRESHOLD: f32 = 0.43;

/// Core color type used throughout the engine.
/// Wraps sRGB u8 components and provides conversions to perceptual color spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Which text tone stays readable on top of a given background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTone {
    Dark,
    Light,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string like `#ff8800` or `#FF8800`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            bail!(
                "invalid hex color: expected 6 hex digits, got {}",
                hex.len()
            );
        }
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Self { r, g, b })
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Draw a color uniformly over the 24-bit RGB space.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 3];
        rng.fill_bytes(&mut bytes);
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    fn to_srgb_f32(self) -> Srgb<f32> {
        Srgb::new(self.r, self.g, self.b).into_format()
    }

    /// Clamp an Srgb<f32> to [0, 1] and convert to Color.
    fn from_srgb_f32_clamped(srgb: Srgb<f32>) -> Self {
        let r = (srgb.red.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (srgb.green.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (srgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { r, g, b }
    }

    /// Convert to CIELAB (for lightness adjustments).
    pub fn to_lab(self) -> Lab {
        self.to_srgb_f32().into_color()
    }

    /// Create from CIELAB.
    pub fn from_lab(lab: Lab) -> Self {
        Self::from_srgb_f32_clamped(Srgb::from_color(lab))
    }

    /// Convert to CIE LCh (for perceptual lightness ramps).
    pub fn to_lch(self) -> Lch {
        self.to_srgb_f32().into_color()
    }

    /// Create from CIE LCh.
    pub fn from_lch(lch: Lch) -> Self {
        Self::from_srgb_f32_clamped(Srgb::from_color(lch))
    }

    /// Convert to HSL (for hue rotation).
    pub fn to_hsl(self) -> Hsl {
        self.to_srgb_f32().into_color()
    }

    /// Create from HSL.
    pub fn from_hsl(hsl: Hsl) -> Self {
        Self::from_srgb_f32_clamped(Srgb::from_color(hsl))
    }

    /// HSL hue in degrees, normalized to [0, 360).
    pub fn hue_degrees(self) -> f32 {
        self.to_hsl().hue.into_positive_degrees()
    }

    /// Rotate the HSL hue by `delta` degrees (mod 360), preserving
    /// saturation and lightness.
    pub fn rotate_hue(self, delta: f32) -> Color {
        let mut hsl = self.to_hsl();
        let rotated = (hsl.hue.into_positive_degrees() + delta).rem_euclid(360.0);
        hsl.hue = RgbHue::from_degrees(rotated);
        Color::from_hsl(hsl)
    }

    /// Darken by `amount` units of CIELAB lightness (1.0 = 18 L* units).
    pub fn darken(self, amount: f32) -> Color {
        let mut lab = self.to_lab();
        lab.l = (lab.l - amount * LIGHTNESS_STEP).clamp(0.0, 100.0);
        Color::from_lab(lab)
    }

    /// Brighten by `amount` units of CIELAB lightness (1.0 = 18 L* units).
    pub fn brighten(self, amount: f32) -> Color {
        self.darken(-amount)
    }

    /// WCAG relative luminance.
    ///
    /// Linearizes each sRGB channel, then computes the weighted sum.
    pub fn relative_luminance(self) -> f32 {
        fn linearize(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        let r = linearize(self.r);
        let g = linearize(self.g);
        let b = linearize(self.b);
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// Pick the text tone that stays readable on this background.
    ///
    /// Backgrounds brighter than the threshold take dark text, everything
    /// else takes light text.
    pub fn text_tone(self) -> TextTone {
        if self.relative_luminance() > TEXT_TONE_THRESHOLD {
            TextTone::Dark
        } else {
            TextTone::Light
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
