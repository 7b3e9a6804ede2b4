//! Lightness and saturation transforms.
//!
//! All three are per-channel affine moves: lightening walks each channel
//! toward white by a fraction of its remaining headroom, darkening scales
//! toward black, desaturation blends toward the color's own channel average.
//! Channel differences scale uniformly, so hue never shifts.

use crate::color::Color;
use crate::math;

impl Color {
    /// Move each channel toward white by `amount` of its remaining distance.
    ///
    /// 0.0 is identity; 1.0 yields white regardless of input. Out-of-range
    /// amounts clamp.
    #[must_use]
    pub fn lighten(&self, amount: f64) -> Self {
        let amount = math::clamp01(amount);
        let lift = |c: f64| c + (1.0 - c) * amount;
        Self::from_normalized(lift(self.r()), lift(self.g()), lift(self.b()))
    }

    /// Scale each channel toward black. 0.0 is identity; 1.0 yields black.
    /// Out-of-range amounts clamp.
    #[must_use]
    pub fn darken(&self, amount: f64) -> Self {
        let keep = 1.0 - math::clamp01(amount);
        Self::from_normalized(self.r() * keep, self.g() * keep, self.b() * keep)
    }

    /// Blend each channel toward the color's own channel average.
    ///
    /// 0.0 is identity; 1.0 lands on the gray axis. Out-of-range amounts
    /// clamp.
    #[must_use]
    pub fn desaturate(&self, amount: f64) -> Self {
        let amount = math::clamp01(amount);
        let gray = (self.r() + self.g() + self.b()) / 3.0;
        let mix = |c: f64| c + (gray - c) * amount;
        Self::from_normalized(mix(self.r()), mix(self.g()), mix(self.b()))
    }
}
