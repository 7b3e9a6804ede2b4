//! Stylesheet output — where a rendered theme lands.
//!
//! The sink abstraction keeps the pure derivation independent of any
//! rendering target; swapping in a different stylesheet mechanism (or a
//! test double) is a one-type change.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use parking_lot::Mutex;

use crate::css;
use crate::scheme::ThemePair;

/// Target for a rendered theme.
///
/// Applying replaces whatever the sink held before — repeated applications
/// never accumulate; clearing removes the theme entirely.
pub trait ThemeSink {
    /// Publish `pair`, replacing any previously published theme.
    fn apply(&self, pair: &ThemePair) -> Result<()>;
    /// Remove the published theme, if any.
    fn clear(&self) -> Result<()>;
}

/// In-memory sink recording the most recently applied stylesheet.
#[derive(Debug, Default)]
pub struct MemorySink {
    current: Mutex<Option<String>>,
}

impl MemorySink {
    /// The most recently applied stylesheet, if any.
    pub fn current(&self) -> Option<String> {
        self.current.lock().clone()
    }
}

impl ThemeSink for MemorySink {
    fn apply(&self, pair: &ThemePair) -> Result<()> {
        *self.current.lock() = Some(css::render(pair));
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.current.lock() = None;
        Ok(())
    }
}

/// Sink owning one marker-delimited block inside a CSS file.
///
/// Only the block between this sink's markers is rewritten; any surrounding
/// file content is preserved. Re-applying strips the previous block before
/// inserting the new one, so repeated theme changes leave exactly one block.
#[derive(Debug, Clone)]
pub struct StylesheetFile {
    path: PathBuf,
    block_id: String,
}

impl StylesheetFile {
    /// Sink writing to `path`, identified by `block_id`. Two sinks with
    /// distinct ids can share one file without touching each other's blocks.
    pub fn new(path: impl Into<PathBuf>, block_id: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            block_id: block_id.into(),
        }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn begin_marker(&self) -> String {
        format!("/* {} begin */", self.block_id)
    }

    fn end_marker(&self) -> String {
        format!("/* {} end */", self.block_id)
    }

    /// `contents` with this sink's block removed.
    fn strip_block(&self, contents: &str) -> String {
        let begin = self.begin_marker();
        let end = self.end_marker();
        match (contents.find(&begin), contents.find(&end)) {
            (Some(start), Some(stop)) if stop >= start => {
                let mut tail = &contents[stop + end.len()..];
                // Swallow the newline that followed the old block.
                if let Some(rest) = tail.strip_prefix('\n') {
                    tail = rest;
                }
                format!("{}{}", &contents[..start], tail)
            }
            _ => contents.to_string(),
        }
    }

    fn read_existing(&self) -> Result<String> {
        if !self.path.exists() {
            return Ok(String::new());
        }
        fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read stylesheet {}", self.path.display()))
    }

    fn write(&self, contents: String) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&self.path, contents)
            .with_context(|| format!("failed to write stylesheet {}", self.path.display()))
    }
}

impl ThemeSink for StylesheetFile {
    fn apply(&self, pair: &ThemePair) -> Result<()> {
        let mut next = self.strip_block(&self.read_existing()?);
        if !next.is_empty() && !next.ends_with('\n') {
            next.push('\n');
        }
        next.push_str(&self.begin_marker());
        next.push('\n');
        next.push_str(&css::render(pair));
        next.push_str(&self.end_marker());
        next.push('\n');
        self.write(next)
    }

    fn clear(&self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        let stripped = self.strip_block(&self.read_existing()?);
        self.write(stripped)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::color::Color;

    fn pair(hex: &str) -> ThemePair {
        ThemePair::generate(Color::from_hex(hex).unwrap())
    }

    #[test]
    fn memory_sink_replaces_on_reapply() {
        let sink = MemorySink::default();
        assert_eq!(sink.current(), None);

        sink.apply(&pair("#0000ff")).unwrap();
        let first = sink.current().unwrap();
        sink.apply(&pair("#ffff00")).unwrap();
        let second = sink.current().unwrap();

        assert_ne!(first, second);
        sink.clear().unwrap();
        assert_eq!(sink.current(), None);
    }

    #[test]
    fn file_sink_writes_one_delimited_block() {
        let dir = TempDir::new().unwrap();
        let sink = StylesheetFile::new(dir.path().join("theme.css"), "app-theme");

        sink.apply(&pair("#d4c273")).unwrap();
        let css = std::fs::read_to_string(sink.path()).unwrap();
        assert_eq!(css.matches("/* app-theme begin */").count(), 1);
        assert_eq!(css.matches("/* app-theme end */").count(), 1);
        assert!(css.contains(":root {"));
        assert!(css.contains(".dark {"));
    }

    #[test]
    fn reapplying_leaves_exactly_one_block() {
        let dir = TempDir::new().unwrap();
        let sink = StylesheetFile::new(dir.path().join("theme.css"), "app-theme");

        sink.apply(&pair("#0000ff")).unwrap();
        sink.apply(&pair("#ffff00")).unwrap();

        let css = std::fs::read_to_string(sink.path()).unwrap();
        assert_eq!(css.matches("/* app-theme begin */").count(), 1);
        assert_eq!(css.matches(":root {").count(), 1);
        // Only the latest seed's primary survives.
        let yellow_primary = Color::from_hex("#ffff00").unwrap().to_hsl().css();
        let blue_primary = Color::from_hex("#0000ff").unwrap().to_hsl().css();
        assert!(css.contains(&format!("--primary: {yellow_primary};")));
        assert!(!css.contains(&format!("--primary: {blue_primary};")));
    }

    #[test]
    fn surrounding_content_is_preserved() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.css");
        std::fs::write(&path, "body { margin: 0; }\n").unwrap();

        let sink = StylesheetFile::new(&path, "app-theme");
        sink.apply(&pair("#d4c273")).unwrap();
        sink.apply(&pair("#3b82f6")).unwrap();

        let css = std::fs::read_to_string(&path).unwrap();
        assert!(css.starts_with("body { margin: 0; }\n"));
        assert_eq!(css.matches("/* app-theme begin */").count(), 1);
    }

    #[test]
    fn clear_removes_only_the_owned_block() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.css");
        std::fs::write(&path, "body { margin: 0; }\n").unwrap();

        let sink = StylesheetFile::new(&path, "app-theme");
        sink.apply(&pair("#d4c273")).unwrap();
        sink.clear().unwrap();

        let css = std::fs::read_to_string(&path).unwrap();
        assert_eq!(css, "body { margin: 0; }\n");
        // Clearing an absent file is a no-op.
        let other = StylesheetFile::new(dir.path().join("missing.css"), "x");
        other.clear().unwrap();
    }

    #[test]
    fn distinct_block_ids_coexist() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.css");

        let a = StylesheetFile::new(&path, "theme-a");
        let b = StylesheetFile::new(&path, "theme-b");
        a.apply(&pair("#0000ff")).unwrap();
        b.apply(&pair("#ffff00")).unwrap();
        a.apply(&pair("#d4c273")).unwrap();

        let css = std::fs::read_to_string(&path).unwrap();
        assert_eq!(css.matches("/* theme-a begin */").count(), 1);
        assert_eq!(css.matches("/* theme-b begin */").count(), 1);
    }
}
