//! CSS custom-property emission for a derived theme.
//!
//! Values use the `"H S% L%"` form so consumers can wrap them in `hsl()`
//! with their own alpha. Variable names come from
//! [`PaletteRole::css_var`](crate::PaletteRole::css_var) and must not drift;
//! downstream components resolve them by name.

use std::fmt::Write;

use crate::scheme::{ColorScheme, ThemePair};

/// Selector scoping the dark-mode declarations.
pub const DARK_SELECTOR: &str = ".dark";

/// Render both modes: a `:root` rule for light, a `.dark` rule for dark.
pub fn render(pair: &ThemePair) -> String {
    let mut out = String::new();
    write_rule(&mut out, ":root", &pair.light);
    out.push('\n');
    write_rule(&mut out, DARK_SELECTOR, &pair.dark);
    out
}

fn write_rule(out: &mut String, selector: &str, scheme: &ColorScheme) {
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{selector} {{");
    for (role, color) in scheme.iter() {
        let _ = writeln!(out, "  {}: {};", role.css_var(), color.to_hsl().css());
    }
    let _ = writeln!(out, "}}");
}
