//! Persisted seed storage — a single named slot holding the accent seed.
//!
//! The slot is modeled explicitly as a get/set/clear abstraction so the
//! engine never reaches for hidden global state.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Durable slot for the last-applied accent seed.
pub trait SeedStore {
    /// Read the stored seed, if any.
    fn load(&self) -> Result<Option<Color>>;
    /// Replace the stored seed. Last write wins.
    fn save(&self, seed: Color) -> Result<()>;
    /// Remove the stored seed.
    fn clear(&self) -> Result<()>;
}

/// In-memory slot for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<Color>>,
}

impl SeedStore for MemoryStore {
    fn load(&self) -> Result<Option<Color>> {
        Ok(*self.slot.lock())
    }

    fn save(&self, seed: Color) -> Result<()> {
        *self.slot.lock() = Some(seed);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.slot.lock() = None;
        Ok(())
    }
}

/// On-disk document backing [`JsonFileStore`]. The seed serializes as its
/// hex string.
#[derive(Debug, Serialize, Deserialize)]
struct ThemeDoc {
    accent: Color,
}

/// Seed slot persisted as a small JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by the file at `path`. The file is created on first
    /// save; a missing file reads as an empty slot.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SeedStore for JsonFileStore {
    fn load(&self) -> Result<Option<Color>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read theme state from {}", self.path.display()))?;
        let doc: ThemeDoc = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse theme state in {}", self.path.display()))?;
        Ok(Some(doc.accent))
    }

    fn save(&self, seed: Color) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(&ThemeDoc { accent: seed })?;
        fs::write(&self.path, contents)
            .with_context(|| format!("failed to write theme state to {}", self.path.display()))
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).with_context(|| {
                format!("failed to remove theme state at {}", self.path.display())
            })?;
        }
        Ok(())
    }
}
