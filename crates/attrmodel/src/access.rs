//! Key-based attribute access.
//!
//! [`AttributeAccess`] is the container-style interface over anything that
//! holds attributes. On a [`Model`](crate::Model) it is observably identical
//! to the named operations (`get`, `set`, `has`, `unset`), so generic code can
//! treat models and plain attribute maps alike.

use crate::attributes::{AttrValue, Attributes};

pub trait AttributeAccess {
    /// Effective value for `key`, `None` when not set.
    fn get_attr(&self, key: &str) -> Option<AttrValue>;

    /// Write `value` under `key`.
    fn set_attr(&mut self, key: &str, value: AttrValue);

    /// Whether `key` is observable.
    fn has_attr(&self, key: &str) -> bool;

    /// Remove `key` from storage.
    fn unset_attr(&mut self, key: &str);
}

/// Raw maps have no transformations: reads and writes hit storage directly.
impl AttributeAccess for Attributes {
    fn get_attr(&self, key: &str) -> Option<AttrValue> {
        self.get(key).cloned()
    }

    fn set_attr(&mut self, key: &str, value: AttrValue) {
        self.set(key, value);
    }

    fn has_attr(&self, key: &str) -> bool {
        self.has(key)
    }

    fn unset_attr(&mut self, key: &str) {
        self.unset(key);
    }
}
