//! # huesmith
//!
//! Turns one accent color into a complete light/dark UI palette and emits it
//! as CSS custom properties.
//!
//! The derivation is pure and deterministic: the same seed always produces
//! the same [`ThemePair`], every foreground is chosen for readable contrast
//! against its own background, and the side effects (persisting the seed,
//! replacing the published stylesheet block) live behind the [`SeedStore`]
//! and [`ThemeSink`] abstractions wired together by [`ThemeEngine`].
//!
//! ## Usage
//!
//! ```rust
//! use huesmith::{Color, ThemePair};
//!
//! let seed = Color::from_hex("#d4c273").unwrap();
//! let pair = ThemePair::generate(seed);
//! assert_eq!(pair.light.ring, seed);
//! println!("{}", huesmith::css::render(&pair));
//! ```

mod adjust;
mod color;
mod constants;
mod contrast;
pub mod css;
mod engine;
mod error;
mod math;
mod scheme;
mod sink;
mod store;

pub use color::{Color, Hsb, Hsl};
pub use contrast::Contrast;
pub use engine::ThemeEngine;
pub use error::ColorError;
pub use scheme::{ColorScheme, PaletteRole, ThemePair};
pub use sink::{MemorySink, StylesheetFile, ThemeSink};
pub use store::{JsonFileStore, MemoryStore, SeedStore};
