//! Serialization visibility.
//!
//! `VisibilityFilter` decides which stored attributes appear in a record's
//! exported view. Only stored keys are considered; an accessor alone does not
//! add a key to the export.

use std::collections::BTreeSet;

/// Deny-list and allow-list for exported attributes.
///
/// A non-empty `visible` set is exclusive and `hidden` is then ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityFilter {
    hidden: BTreeSet<String>,
    visible: BTreeSet<String>,
}

impl VisibilityFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the hidden set.
    pub fn set_hidden<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hidden = names.into_iter().map(Into::into).collect();
    }

    /// Replace the visible set.
    pub fn set_visible<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.visible = names.into_iter().map(Into::into).collect();
    }

    pub fn hidden(&self) -> &BTreeSet<String> {
        &self.hidden
    }

    pub fn visible(&self) -> &BTreeSet<String> {
        &self.visible
    }

    /// Check if `key` belongs in the exported view.
    pub fn includes(&self, key: &str) -> bool {
        if !self.visible.is_empty() {
            return self.visible.contains(key);
        }
        !self.hidden.contains(key)
    }
}
