//! Routing between raw storage and declared transformations.
//!
//! Every read, write and existence check for a record goes through
//! [`AccessDispatcher`]. When the record type declares an accessor or
//! mutator for the attribute, that function mediates the access; otherwise
//! the raw store is used directly.

use super::spec::{accessor_method_name, find_accessor, find_mutator, mutator_method_name};
use super::{AttrValue, AttributeSpec, Attributes};

/// Dispatches attribute access for one record type's declarations.
#[derive(Debug, Clone, Copy)]
pub struct AccessDispatcher {
    specs: &'static [AttributeSpec],
}

impl AccessDispatcher {
    pub const fn new(specs: &'static [AttributeSpec]) -> Self {
        Self { specs }
    }

    /// Effective value of `name`.
    ///
    /// A declared accessor always produces a value, even when nothing is
    /// stored. Without one, `None` means the attribute is not set.
    pub fn read(&self, store: &Attributes, name: &str) -> Option<AttrValue> {
        match find_accessor(self.specs, name) {
            Some(accessor) => {
                log::trace!("reading {name} through {}", accessor_method_name(name));
                Some(accessor(store.get(name)))
            }
            None => store.get(name).cloned(),
        }
    }

    /// Write `value` to `name`, through the mutator when one is declared.
    pub fn write(&self, store: &mut Attributes, name: &str, value: AttrValue) {
        match find_mutator(self.specs, name) {
            Some(mutator) => {
                log::trace!("writing {name} through {}", mutator_method_name(name));
                mutator(store, value);
            }
            None => {
                store.set(name, value);
            }
        }
    }

    /// Whether `name` is observable: stored, or synthesized by an accessor.
    ///
    /// Never invokes the accessor.
    pub fn exists(&self, store: &Attributes, name: &str) -> bool {
        store.has(name) || self.has_accessor(name)
    }

    pub fn has_accessor(&self, name: &str) -> bool {
        find_accessor(self.specs, name).is_some()
    }

    pub fn has_mutator(&self, name: &str) -> bool {
        find_mutator(self.specs, name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper(value: Option<&AttrValue>) -> AttrValue {
        AttrValue::text_of(value).to_uppercase().into()
    }

    fn lower(attrs: &mut Attributes, value: AttrValue) {
        attrs.set("name", value.to_text().to_lowercase());
    }

    fn panics(_: Option<&AttrValue>) -> AttrValue {
        panic!("accessor must not run during an existence check")
    }

    fn alias(attrs: &mut Attributes, value: AttrValue) {
        attrs.set("full_name", value);
    }

    const SPECS: &[AttributeSpec] = &[
        AttributeSpec::new("name").accessor(upper).mutator(lower),
        AttributeSpec::new("secret").accessor(panics),
        AttributeSpec::new("display_name").mutator(alias),
    ];

    const DISPATCHER: AccessDispatcher = AccessDispatcher::new(SPECS);

    #[test]
    fn read_without_accessor_returns_raw() {
        let store = Attributes::from([("age", 30)]);
        assert_eq!(DISPATCHER.read(&store, "age"), Some(AttrValue::Int(30)));
        assert_eq!(DISPATCHER.read(&store, "missing"), None);
    }

    #[test]
    fn read_with_accessor_transforms() {
        let store = Attributes::from([("name", "ada")]);
        assert_eq!(DISPATCHER.read(&store, "name"), Some(AttrValue::from("ADA")));
    }

    #[test]
    fn read_with_accessor_synthesizes_absent_value() {
        let store = Attributes::new();
        assert_eq!(DISPATCHER.read(&store, "name"), Some(AttrValue::from("")));
    }

    #[test]
    fn write_without_mutator_stores_raw() {
        let mut store = Attributes::new();
        DISPATCHER.write(&mut store, "age", 25.into());
        assert_eq!(store.get("age"), Some(&AttrValue::Int(25)));
    }

    #[test]
    fn write_with_mutator_transforms() {
        let mut store = Attributes::new();
        DISPATCHER.write(&mut store, "name", "New Name".into());
        assert_eq!(store.get("name"), Some(&AttrValue::from("new name")));
    }

    #[test]
    fn mutator_may_store_under_another_key() {
        let mut store = Attributes::new();
        DISPATCHER.write(&mut store, "display_name", "Ada".into());
        assert!(!store.has("display_name"));
        assert_eq!(store.get("full_name"), Some(&AttrValue::from("Ada")));
    }

    #[test]
    fn read_after_write_composes_both_transforms() {
        let mut store = Attributes::new();
        DISPATCHER.write(&mut store, "name", "MiXeD".into());
        assert_eq!(DISPATCHER.read(&store, "name"), Some(AttrValue::from("MIXED")));
    }

    #[test]
    fn exists_checks_store_or_accessor() {
        let store = Attributes::from([("age", 30)]);
        assert!(DISPATCHER.exists(&store, "age"));
        assert!(DISPATCHER.exists(&store, "name"));
        assert!(!DISPATCHER.exists(&store, "x_age"));
    }

    #[test]
    fn exists_does_not_invoke_accessor() {
        let store = Attributes::new();
        assert!(DISPATCHER.exists(&store, "secret"));
    }

    #[test]
    fn mutator_only_does_not_make_attribute_observable() {
        let store = Attributes::new();
        assert!(DISPATCHER.has_mutator("display_name"));
        assert!(!DISPATCHER.exists(&store, "display_name"));
    }
}
