//! Palette roles and the seed → scheme derivation pipeline.

use crate::color::Color;
use crate::constants;

/// A named slot in the UI theme.
///
/// Background roles pair with a `*Foreground` role carrying text that must
/// stay readable against them; `Border`, `Input`, and `Ring` are standalone
/// chrome roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteRole {
    Primary,
    PrimaryForeground,
    Secondary,
    SecondaryForeground,
    Accent,
    AccentForeground,
    Muted,
    MutedForeground,
    Destructive,
    DestructiveForeground,
    Border,
    Input,
    Ring,
}

impl PaletteRole {
    /// All roles, in the order their CSS variables are emitted.
    pub const ALL: [Self; 13] = [
        Self::Primary,
        Self::PrimaryForeground,
        Self::Secondary,
        Self::SecondaryForeground,
        Self::Accent,
        Self::AccentForeground,
        Self::Muted,
        Self::MutedForeground,
        Self::Destructive,
        Self::DestructiveForeground,
        Self::Border,
        Self::Input,
        Self::Ring,
    ];

    /// The CSS custom-property name this role is published under. These names
    /// are the wire-format contract with the consuming component library.
    pub fn css_var(&self) -> &'static str {
        match self {
            Self::Primary => "--primary",
            Self::PrimaryForeground => "--primary-foreground",
            Self::Secondary => "--secondary",
            Self::SecondaryForeground => "--secondary-foreground",
            Self::Accent => "--accent",
            Self::AccentForeground => "--accent-foreground",
            Self::Muted => "--muted",
            Self::MutedForeground => "--muted-foreground",
            Self::Destructive => "--destructive",
            Self::DestructiveForeground => "--destructive-foreground",
            Self::Border => "--border",
            Self::Input => "--input",
            Self::Ring => "--ring",
        }
    }
}

/// One color per role for a single mode (light or dark).
///
/// A struct rather than a map so that every role is populated by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    pub primary: Color,
    pub primary_foreground: Color,
    pub secondary: Color,
    pub secondary_foreground: Color,
    pub accent: Color,
    pub accent_foreground: Color,
    pub muted: Color,
    pub muted_foreground: Color,
    pub destructive: Color,
    pub destructive_foreground: Color,
    pub border: Color,
    pub input: Color,
    pub ring: Color,
}

impl ColorScheme {
    /// Look up the color assigned to `role`.
    pub fn get(&self, role: PaletteRole) -> Color {
        match role {
            PaletteRole::Primary => self.primary,
            PaletteRole::PrimaryForeground => self.primary_foreground,
            PaletteRole::Secondary => self.secondary,
            PaletteRole::SecondaryForeground => self.secondary_foreground,
            PaletteRole::Accent => self.accent,
            PaletteRole::AccentForeground => self.accent_foreground,
            PaletteRole::Muted => self.muted,
            PaletteRole::MutedForeground => self.muted_foreground,
            PaletteRole::Destructive => self.destructive,
            PaletteRole::DestructiveForeground => self.destructive_foreground,
            PaletteRole::Border => self.border,
            PaletteRole::Input => self.input,
            PaletteRole::Ring => self.ring,
        }
    }

    /// Iterate `(role, color)` pairs in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (PaletteRole, Color)> + '_ {
        PaletteRole::ALL.iter().map(move |&role| (role, self.get(role)))
    }
}

/// The light and dark schemes derived from one seed color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemePair {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl ThemePair {
    /// Derive both modes from a single accent seed.
    ///
    /// Deterministic: the same seed always yields the same pair. Every
    /// foreground is recomputed from its own background; the one exception
    /// is the muted foreground, which follows the secondary family so it
    /// stays legible as muted surfaces drift lighter.
    pub fn generate(seed: Color) -> Self {
        let primary = seed;
        let secondary = seed
            .desaturate(constants::SECONDARY_DESATURATE)
            .lighten(constants::SECONDARY_LIGHTEN);
        let accent = seed.darken(constants::ACCENT_DARKEN);
        let muted = secondary.lighten(constants::MUTED_LIGHTEN);
        let muted_foreground = secondary.darken(constants::MUTED_FG_DARKEN);
        let border = seed.lighten(constants::BORDER_LIGHTEN);

        let light = ColorScheme {
            primary,
            primary_foreground: primary.foreground(),
            secondary,
            secondary_foreground: secondary.foreground(),
            accent,
            accent_foreground: accent.foreground(),
            muted,
            muted_foreground,
            destructive: constants::DESTRUCTIVE,
            destructive_foreground: Color::WHITE,
            border,
            input: border,
            ring: primary,
        };

        let dark_primary = primary.lighten(constants::DARK_PRIMARY_LIGHTEN);
        let dark_secondary = secondary.darken(constants::DARK_SECONDARY_DARKEN);
        let dark_accent = accent.lighten(constants::DARK_ACCENT_LIGHTEN);
        let dark_border = border.darken(constants::DARK_BORDER_DARKEN);

        let dark = ColorScheme {
            primary: dark_primary,
            primary_foreground: dark_primary.foreground(),
            secondary: dark_secondary,
            secondary_foreground: dark_secondary.foreground(),
            accent: dark_accent,
            accent_foreground: dark_accent.foreground(),
            muted: muted.darken(constants::DARK_MUTED_DARKEN),
            muted_foreground: muted_foreground.lighten(constants::DARK_MUTED_FG_LIGHTEN),
            destructive: constants::DESTRUCTIVE.lighten(constants::DARK_DESTRUCTIVE_LIGHTEN),
            destructive_foreground: Color::WHITE,
            border: dark_border,
            input: dark_border,
            ring: dark_primary,
        };

        Self { light, dark }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> ThemePair {
        ThemePair::generate(Color::from_hex("#d4c273").unwrap())
    }

    #[test]
    fn every_role_carries_a_valid_hsl_value() {
        let pair = pair();
        for scheme in [&pair.light, &pair.dark] {
            let mut seen = 0;
            for (_, color) in scheme.iter() {
                let hsl = color.to_hsl();
                assert!(hsl.h < 360);
                assert!(hsl.s <= 100);
                assert!(hsl.l <= 100);
                seen += 1;
            }
            assert_eq!(seen, 13);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(pair(), pair());
    }

    #[test]
    fn primary_is_the_seed_and_ring_follows_it() {
        let seed = Color::from_hex("#d4c273").unwrap();
        let pair = ThemePair::generate(seed);
        assert_eq!(pair.light.primary, seed);
        assert_eq!(pair.light.ring, pair.light.primary);
        assert_eq!(pair.dark.ring, pair.dark.primary);
    }

    #[test]
    fn border_and_input_share_a_surface() {
        let pair = pair();
        assert_eq!(pair.light.border, pair.light.input);
        assert_eq!(pair.dark.border, pair.dark.input);
    }

    #[test]
    fn muted_foreground_follows_the_secondary_family() {
        let seed = Color::from_hex("#d4c273").unwrap();
        let pair = ThemePair::generate(seed);
        let secondary = seed
            .desaturate(0.3)
            .lighten(0.8);
        assert_eq!(pair.light.muted_foreground, secondary.darken(0.5));
    }

    #[test]
    fn destructive_ignores_the_seed() {
        let a = ThemePair::generate(Color::from_hex("#0000ff").unwrap());
        let b = ThemePair::generate(Color::from_hex("#ffff00").unwrap());
        assert_eq!(a.light.destructive, b.light.destructive);
        assert_eq!(a.light.destructive.to_hex(), "#ff4d4f");
        assert_eq!(a.light.destructive_foreground, Color::WHITE);
        assert_eq!(a.dark.destructive_foreground, Color::WHITE);
    }

    #[test]
    fn foregrounds_come_from_their_own_backgrounds() {
        let pair = pair();
        for scheme in [&pair.light, &pair.dark] {
            assert_eq!(scheme.primary_foreground, scheme.primary.foreground());
            assert_eq!(scheme.secondary_foreground, scheme.secondary.foreground());
            assert_eq!(scheme.accent_foreground, scheme.accent.foreground());
        }
    }

    #[test]
    fn dark_mode_inverts_relative_lightness() {
        let pair = pair();
        // Light secondary is a pale tint; its dark counterpart must sit well
        // below it.
        assert!(pair.dark.secondary.to_hsl().l < pair.light.secondary.to_hsl().l);
        assert!(pair.dark.muted.to_hsl().l < pair.light.muted.to_hsl().l);
        assert!(pair.dark.primary.to_hsl().l >= pair.light.primary.to_hsl().l);
    }

    #[test]
    fn light_foregrounds_read_against_their_surfaces() {
        // The pale secondary/muted surfaces should take a dark foreground.
        let pair = pair();
        assert_eq!(pair.light.secondary_foreground, Color::BLACK);
        assert!(pair.light.secondary.contrast_ratio(&pair.light.secondary_foreground) >= 4.5);
    }
}
