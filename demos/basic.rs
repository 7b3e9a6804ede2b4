//! Standalone demo: derives a scheme from an accent seed, persists it, and
//! publishes the stylesheet next to it.

use huesmith::{JsonFileStore, StylesheetFile, ThemeEngine};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let seed = std::env::args().nth(1).unwrap_or_else(|| "#d4c273".into());
    let dir = std::env::temp_dir().join("huesmith-demo");

    let engine = ThemeEngine::new(
        JsonFileStore::new(dir.join("theme.json")),
        StylesheetFile::new(dir.join("theme.css"), "huesmith-theme"),
    );
    engine.apply(&seed)?;

    let css = std::fs::read_to_string(dir.join("theme.css"))?;
    println!("{css}");
    println!("seed persisted to {}", dir.join("theme.json").display());
    Ok(())
}
