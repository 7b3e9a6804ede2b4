//! WCAG relative luminance, contrast ratios, and foreground selection.

use crate::color::Color;
use crate::math;

/// WCAG 2.1 contrast-ratio thresholds.
#[derive(Debug, Clone, Copy)]
pub struct Contrast;

impl Contrast {
    /// Enhanced contrast for normal text.
    pub const AAA_NORMAL: f64 = 7.0;
    /// Minimum contrast for normal text.
    pub const AA_NORMAL: f64 = 4.5;
    /// Minimum contrast for large text.
    pub const AA_LARGE: f64 = 3.0;
}

impl Color {
    /// Relative luminance per WCAG 2.1: each channel gamma-expanded through
    /// the piecewise sRGB curve, weighted with the BT.709 coefficients.
    pub fn relative_luminance(&self) -> f64 {
        0.2126 * math::srgb_to_linear(self.r())
            + 0.7152 * math::srgb_to_linear(self.g())
            + 0.0722 * math::srgb_to_linear(self.b())
    }

    /// WCAG contrast ratio against `other`: `(L_lighter + 0.05) /
    /// (L_darker + 0.05)`. Symmetric, in 1.0–21.0.
    pub fn contrast_ratio(&self, other: &Self) -> f64 {
        let a = self.relative_luminance() + 0.05;
        let b = other.relative_luminance() + 0.05;
        if a > b {
            a / b
        } else {
            b / a
        }
    }

    /// Black or white, whichever contrasts more strongly against `self`.
    pub fn foreground(&self) -> Self {
        if self.contrast_ratio(&Self::BLACK) >= self.contrast_ratio(&Self::WHITE) {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }

    /// True if `fg` text on this background meets WCAG AA for normal text.
    pub fn meets_aa(&self, fg: &Self) -> bool {
        self.contrast_ratio(fg) >= Contrast::AA_NORMAL
    }

    /// True if `fg` text on this background meets WCAG AAA for normal text.
    pub fn meets_aaa(&self, fg: &Self) -> bool {
        self.contrast_ratio(fg) >= Contrast::AAA_NORMAL
    }
}
