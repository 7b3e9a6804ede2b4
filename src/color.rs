//! Color value type — one immutable sRGB color with hex, HSL, and HSB views.
//!
//! Stores channels as f64 values in the 0.0–1.0 range so chained conversions
//! never compound integer rounding; integer degrees and percentages are
//! produced only at the API surface. Hex (`#rrggbb`) is the external
//! serialization form.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorError;
use crate::math;

/// sRGB color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

/// Hue/saturation/lightness as surfaced to callers: whole degrees (0–359
/// after wrapping) and whole percentages (0–100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: u16,
    /// Saturation percentage.
    pub s: u8,
    /// Lightness percentage.
    pub l: u8,
}

/// Hue/saturation/brightness with the same integer rounding as [`Hsl`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsb {
    /// Hue in degrees.
    pub h: u16,
    /// Saturation percentage.
    pub s: u8,
    /// Brightness percentage.
    pub b: u8,
}

impl Hsl {
    /// CSS custom-property value form: `"H S% L%"`.
    pub fn css(&self) -> String {
        format!("{} {}% {}%", self.h, self.s, self.l)
    }
}

impl Color {
    /// Pure black.
    pub const BLACK: Self = Self::from_rgb8(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::from_rgb8(255, 255, 255);

    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Create from 0–255 RGB values.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Convert to 0–255 RGB, rounding to nearest and clamping each channel.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let quantize = |c: f64| (math::clamp01(c) * 255.0).round() as u8;
        (quantize(self.r), quantize(self.g), quantize(self.b))
    }

    /// Create from normalized channels, clamping each into 0.0–1.0.
    pub(crate) fn from_normalized(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: math::clamp01(r),
            g: math::clamp01(g),
            b: math::clamp01(b),
        }
    }

    /// Parse a hex string, with or without a leading `#`, case-insensitive.
    ///
    /// Accepts 6-digit (`#rrggbb`) and 3-digit shorthand (`#rgb`, each nibble
    /// duplicated). Anything else is [`ColorError::InvalidFormat`].
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::invalid(hex));
        }
        match digits.len() {
            3 => {
                let mut nibbles = digits
                    .chars()
                    .map(|c| c.to_digit(16).unwrap_or(0) as u8 * 17);
                let r = nibbles.next().unwrap_or(0);
                let g = nibbles.next().unwrap_or(0);
                let b = nibbles.next().unwrap_or(0);
                Ok(Self::from_rgb8(r, g, b))
            }
            6 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 2], 16)
                        .map_err(|_| ColorError::invalid(hex))
                };
                Ok(Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
            }
            _ => Err(ColorError::invalid(hex)),
        }
    }

    /// Format as lowercase `#rrggbb` — always exactly six hex digits.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Create from HSB/HSV values: hue in degrees (wrapped into 0–360),
    /// saturation and brightness as percentages (clamped to 0–100).
    pub fn from_hsb(h: f64, s: f64, b: f64) -> Self {
        let (r, g, bl) = math::hsb_to_rgb(
            h.rem_euclid(360.0) / 360.0,
            math::clamp01(s / 100.0),
            math::clamp01(b / 100.0),
        );
        Self::from_normalized(r, g, bl)
    }

    /// Convert to HSB/HSV with integer rounding.
    pub fn to_hsb(&self) -> Hsb {
        let (h, s, b) = math::rgb_to_hsb(self.r, self.g, self.b);
        Hsb {
            h: round_hue(h),
            s: round_pct(s),
            b: round_pct(b),
        }
    }

    /// Create from HSL values: hue in degrees (wrapped into 0–360),
    /// saturation and lightness as percentages (clamped to 0–100).
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let (hb, sb, v) = math::hsl_to_hsb(
            h.rem_euclid(360.0) / 360.0,
            math::clamp01(s / 100.0),
            math::clamp01(l / 100.0),
        );
        let (r, g, b) = math::hsb_to_rgb(hb, sb, v);
        Self::from_normalized(r, g, b)
    }

    /// Convert to HSL with integer rounding.
    pub fn to_hsl(&self) -> Hsl {
        let (h, s, l) = math::rgb_to_hsl(self.r, self.g, self.b);
        Hsl {
            h: round_hue(h),
            s: round_pct(s),
            l: round_pct(l),
        }
    }
}

/// Normalized hue → whole degrees, with 360 wrapping back to 0.
fn round_hue(h: f64) -> u16 {
    (h * 360.0).round() as u16 % 360
}

/// Normalized fraction → whole percentage.
fn round_pct(v: f64) -> u8 {
    (math::clamp01(v) * 100.0).round() as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("#3b82f6", (59, 130, 246))]
    #[case("3b82f6", (59, 130, 246))]
    #[case("#3B82F6", (59, 130, 246))]
    #[case("#fff", (255, 255, 255))]
    #[case("0a1", (0, 170, 17))]
    fn parses_valid_hex(#[case] input: &str, #[case] expected: (u8, u8, u8)) {
        assert_eq!(Color::from_hex(input).unwrap().to_rgb8(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("#")]
    #[case("#12345")]
    #[case("#1234567")]
    #[case("#gggggg")]
    #[case("not a color")]
    fn rejects_malformed_hex(#[case] input: &str) {
        assert_eq!(
            Color::from_hex(input),
            Err(ColorError::invalid(input)),
        );
    }

    #[test]
    fn hex_output_is_zero_padded() {
        assert_eq!(Color::from_rgb8(0, 7, 15).to_hex(), "#00070f");
    }

    proptest! {
        #[test]
        fn hex_round_trips_exactly(r: u8, g: u8, b: u8) {
            let hex = format!("#{:02x}{:02x}{:02x}", r, g, b);
            prop_assert_eq!(Color::from_hex(&hex).unwrap().to_hex(), hex);
        }

        #[test]
        fn rgb8_round_trips_exactly(r: u8, g: u8, b: u8) {
            prop_assert_eq!(Color::from_rgb8(r, g, b).to_rgb8(), (r, g, b));
        }

        #[test]
        fn gray_axis_is_unsaturated(v: u8) {
            let hsl = Color::from_rgb8(v, v, v).to_hsl();
            prop_assert_eq!(hsl.h, 0);
            prop_assert_eq!(hsl.s, 0);
        }
    }

    #[test]
    fn hsb_round_trips_within_one_per_channel() {
        let samples = [
            "#000000", "#ffffff", "#ff0000", "#00ff00", "#0000ff", "#808080",
            "#d4c273", "#3b82f6", "#ff4d4f",
        ];
        for hex in samples {
            let color = Color::from_hex(hex).unwrap();
            let hsb = color.to_hsb();
            let back = Color::from_hsb(f64::from(hsb.h), f64::from(hsb.s), f64::from(hsb.b));
            let (r, g, b) = color.to_rgb8();
            let (r2, g2, b2) = back.to_rgb8();
            for (a, b) in [(r, r2), (g, g2), (b, b2)] {
                assert!(
                    (i16::from(a) - i16::from(b)).abs() <= 1,
                    "{hex}: {a} vs {b}"
                );
            }
        }
    }

    #[test]
    fn hsl_constructor_round_trips_within_one_per_channel() {
        let color = Color::from_hex("#3b82f6").unwrap();
        let hsl = color.to_hsl();
        let back = Color::from_hsl(f64::from(hsl.h), f64::from(hsl.s), f64::from(hsl.l));
        let (r, g, b) = color.to_rgb8();
        let (r2, g2, b2) = back.to_rgb8();
        for (a, b) in [(r, r2), (g, g2), (b, b2)] {
            assert!((i16::from(a) - i16::from(b)).abs() <= 2, "{a} vs {b}");
        }
    }

    #[test]
    fn hsl_values_stay_in_range_at_extremes() {
        for hex in ["#000000", "#ffffff", "#ff0000"] {
            let hsl = Color::from_hex(hex).unwrap().to_hsl();
            assert!(hsl.h < 360);
            assert!(hsl.s <= 100);
            assert!(hsl.l <= 100);
        }
    }

    #[test]
    fn hsl_css_form() {
        let hsl = Color::from_hex("#3b82f6").unwrap().to_hsl();
        assert_eq!(hsl.css(), format!("{} {}% {}%", hsl.h, hsl.s, hsl.l));
        // Blue family: hue between 210 and 230, well saturated.
        assert!(hsl.h >= 210 && hsl.h <= 230);
        assert!(hsl.s > 80);
    }

    #[test]
    fn display_and_from_str_use_hex() {
        let color: Color = "#d4c273".parse().unwrap();
        assert_eq!(color.to_string(), "#d4c273");
    }

    #[test]
    fn serde_uses_hex_strings() {
        let color = Color::from_hex("#d4c273").unwrap();
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#d4c273\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
        assert!(serde_json::from_str::<Color>("\"#nope\"").is_err());
    }
}
