//! Mass-assignment protection.
//!
//! Decides, key by key, whether a guarded bulk fill may write an attribute.
//! Rejections are silent: the key is skipped and the fill carries on.

use std::collections::BTreeSet;

/// Allow-list and deny-list for guarded bulk fills.
///
/// Policy for a key `K`:
/// 1. `K` is guarded → rejected.
/// 2. `fillable` is non-empty → accepted only if `K` is fillable.
/// 3. Otherwise → accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MassAssignmentGuard {
    fillable: BTreeSet<String>,
    guarded: BTreeSet<String>,
}

impl MassAssignmentGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the fillable set.
    pub fn set_fillable<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fillable = names.into_iter().map(Into::into).collect();
    }

    /// Replace the guarded set.
    pub fn set_guarded<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.guarded = names.into_iter().map(Into::into).collect();
    }

    pub fn fillable(&self) -> &BTreeSet<String> {
        &self.fillable
    }

    pub fn guarded(&self) -> &BTreeSet<String> {
        &self.guarded
    }

    pub fn is_guarded(&self, key: &str) -> bool {
        self.guarded.contains(key)
    }

    /// Whether a guarded fill may write `key`.
    pub fn permits(&self, key: &str) -> bool {
        if self.is_guarded(key) {
            return false;
        }
        self.fillable.is_empty() || self.fillable.contains(key)
    }
}
