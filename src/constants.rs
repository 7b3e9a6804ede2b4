//! Derivation coefficients and fixed semantic colors for scheme generation.
//!
//! The coefficients are empirically chosen design parameters, not invariants;
//! tune them for a different house style.

use crate::color::Color;

/// Blend fraction toward gray when muting the seed for the secondary family.
pub const SECONDARY_DESATURATE: f64 = 0.3;

/// Lightening applied to the muted seed to produce the secondary surface.
pub const SECONDARY_LIGHTEN: f64 = 0.8;

/// Darkening applied to the seed to produce the accent.
pub const ACCENT_DARKEN: f64 = 0.1;

/// Muted surface sits this much lighter than secondary.
pub const MUTED_LIGHTEN: f64 = 0.5;

/// Muted foreground sits this much darker than secondary.
pub const MUTED_FG_DARKEN: f64 = 0.5;

/// Border and input surfaces relative to the seed.
pub const BORDER_LIGHTEN: f64 = 0.7;

// Dark mode: the opposite transform per role, at reduced magnitude, so roles
// sit at inverted relative lightness in the same hue family.

/// Dark-mode primary relative to the seed.
pub const DARK_PRIMARY_LIGHTEN: f64 = 0.1;

/// Dark-mode secondary relative to the light secondary.
pub const DARK_SECONDARY_DARKEN: f64 = 0.6;

/// Dark-mode accent relative to the light accent.
pub const DARK_ACCENT_LIGHTEN: f64 = 0.1;

/// Dark-mode muted surface relative to the light muted.
pub const DARK_MUTED_DARKEN: f64 = 0.7;

/// Dark-mode muted foreground relative to the light muted foreground.
pub const DARK_MUTED_FG_LIGHTEN: f64 = 0.3;

/// Dark-mode destructive relative to the fixed destructive red.
pub const DARK_DESTRUCTIVE_LIGHTEN: f64 = 0.1;

/// Dark-mode border and input relative to the light border.
pub const DARK_BORDER_DARKEN: f64 = 0.6;

/// Fixed semantic red for destructive actions (#ff4d4f); intentionally
/// independent of the seed.
pub const DESTRUCTIVE: Color = Color::from_rgb8(255, 77, 79);
