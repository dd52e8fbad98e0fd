//! Attribute transformation declarations.
//!
//! A record type declares the attributes that need custom reads or writes
//! as a static table of [`AttributeSpec`]s. Lookups go through the studly
//! form of the name, so `user_name`, `user-name` and `userName` all find the
//! spec declared for any of them, matching the conventional
//! `getUserNameAttribute` / `setUserNameAttribute` names.

use std::fmt;

use super::{AttrValue, Attributes};
use crate::strings::studly;

/// Read transformation. Receives the raw stored value, `None` when absent.
pub type Accessor = fn(Option<&AttrValue>) -> AttrValue;

/// Write transformation. Responsible for writing into the store itself.
pub type Mutator = fn(&mut Attributes, AttrValue);

/// Declared transformations for a single attribute.
#[derive(Clone, Copy)]
pub struct AttributeSpec {
    /// The attribute name as declared (e.g. "name", "first_name")
    pub name: &'static str,

    /// Applied on every read of the attribute
    pub accessor: Option<Accessor>,

    /// Applied on every write of the attribute
    pub mutator: Option<Mutator>,
}

impl AttributeSpec {
    /// Create a spec with no transformations.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            accessor: None,
            mutator: None,
        }
    }

    /// Set the accessor.
    pub const fn accessor(mut self, accessor: Accessor) -> Self {
        self.accessor = Some(accessor);
        self
    }

    /// Set the mutator.
    pub const fn mutator(mut self, mutator: Mutator) -> Self {
        self.mutator = Some(mutator);
        self
    }

    fn answers_to(&self, studly_name: &str) -> bool {
        studly(self.name) == studly_name
    }
}

impl fmt::Debug for AttributeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeSpec")
            .field("name", &self.name)
            .field("accessor", &self.accessor.is_some())
            .field("mutator", &self.mutator.is_some())
            .finish()
    }
}

/// Conventional accessor name for an attribute: `first_name` → `getFirstNameAttribute`.
pub fn accessor_method_name(name: &str) -> String {
    format!("get{}Attribute", studly(name))
}

/// Conventional mutator name for an attribute: `first_name` → `setFirstNameAttribute`.
pub fn mutator_method_name(name: &str) -> String {
    format!("set{}Attribute", studly(name))
}

/// Find the accessor declared for `name`, if any.
pub fn find_accessor(specs: &[AttributeSpec], name: &str) -> Option<Accessor> {
    let key = studly(name);
    specs
        .iter()
        .filter(|spec| spec.answers_to(&key))
        .find_map(|spec| spec.accessor)
}

/// Find the mutator declared for `name`, if any.
pub fn find_mutator(specs: &[AttributeSpec], name: &str) -> Option<Mutator> {
    let key = studly(name);
    specs
        .iter()
        .filter(|spec| spec.answers_to(&key))
        .find_map(|spec| spec.mutator)
}
