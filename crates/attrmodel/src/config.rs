//! # Configuration
//!
//! A record type's mass-assignment and visibility policy can come from code
//! ([`Schema::config`](crate::Schema::config)) or from a TOML file loaded
//! with [`confique`].
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `fillable` | `[]` | Attributes a guarded fill may write (empty = no allow-list) |
//! | `guarded` | `[]` | Attributes a guarded fill never writes |
//! | `hidden` | `[]` | Attributes left out of exports |
//! | `visible` | `[]` | Exclusive allow-list for exports (empty = no allow-list) |
//!
//! ## Example
//!
//! ```toml
//! fillable = ["name", "email"]
//! hidden = ["password"]
//! ```

use std::path::Path;

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Policy sets for a record type, stored in a TOML file.
#[derive(Config, Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelConfig {
    /// Attributes a guarded fill may write. Empty means no allow-list.
    #[config(default = [])]
    pub fillable: Vec<String>,

    /// Attributes a guarded fill never writes.
    #[config(default = [])]
    pub guarded: Vec<String>,

    /// Attributes left out of exports.
    #[config(default = [])]
    pub hidden: Vec<String>,

    /// Exclusive allow-list for exports. Empty means no allow-list.
    #[config(default = [])]
    pub visible: Vec<String>,
}

impl ModelConfig {
    /// Load policy sets from a TOML file, falling back to defaults for
    /// missing keys.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let config = ModelConfig::builder().file(path.as_ref()).load()?;
        log::debug!("loaded model config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Layer `other` on top of this config: every non-empty set in `other`
    /// replaces the corresponding set here.
    pub fn merged_with(mut self, other: &ModelConfig) -> Self {
        fn take(target: &mut Vec<String>, source: &[String]) {
            if !source.is_empty() {
                *target = source.to_vec();
            }
        }
        take(&mut self.fillable, &other.fillable);
        take(&mut self.guarded, &other.guarded);
        take(&mut self.hidden, &other.hidden);
        take(&mut self.visible, &other.visible);
        self
    }
}
