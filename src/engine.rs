//! The boundary operation: validate, derive, persist, publish.

use anyhow::{Context, Result};
use tracing::debug;

use crate::color::Color;
use crate::scheme::ThemePair;
use crate::sink::ThemeSink;
use crate::store::SeedStore;

/// Ties scheme derivation to a seed store and a stylesheet sink.
///
/// The pure derivation ([`ThemePair::generate`]) touches neither; this type
/// is the only place the two side effects meet. Input is validated before
/// any side effect, so a malformed seed leaves the previous theme fully in
/// place. Re-applying with a new seed replaces both the stored seed and the
/// published block — last write wins.
#[derive(Debug)]
pub struct ThemeEngine<S, K> {
    store: S,
    sink: K,
}

impl<S: SeedStore, K: ThemeSink> ThemeEngine<S, K> {
    /// Engine writing through `store` and `sink`.
    pub fn new(store: S, sink: K) -> Self {
        Self { store, sink }
    }

    /// Apply the scheme derived from the accent seed `hex`.
    pub fn apply(&self, hex: &str) -> Result<()> {
        let seed = Color::from_hex(hex).context("invalid accent color")?;
        self.apply_seed(seed)
    }

    /// Apply the scheme derived from a pre-validated seed.
    pub fn apply_seed(&self, seed: Color) -> Result<()> {
        let pair = ThemePair::generate(seed);
        self.store
            .save(seed)
            .context("failed to persist accent seed")?;
        self.sink
            .apply(&pair)
            .context("failed to publish theme stylesheet")?;
        debug!(seed = %seed, "applied color scheme");
        Ok(())
    }

    /// Re-apply the persisted seed, if one exists.
    ///
    /// Returns whether a seed was found; `false` means the sink was left
    /// untouched.
    pub fn reapply(&self) -> Result<bool> {
        let seed = self
            .store
            .load()
            .context("failed to load persisted accent seed")?;
        match seed {
            Some(seed) => {
                self.sink
                    .apply(&ThemePair::generate(seed))
                    .context("failed to publish theme stylesheet")?;
                debug!(seed = %seed, "reapplied persisted color scheme");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Drop both the persisted seed and the published stylesheet block.
    pub fn reset(&self) -> Result<()> {
        self.store.clear().context("failed to clear accent seed")?;
        self.sink
            .clear()
            .context("failed to clear theme stylesheet")?;
        debug!("cleared color scheme");
        Ok(())
    }

    /// The underlying seed store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The underlying stylesheet sink.
    pub fn sink(&self) -> &K {
        &self.sink
    }
}
