//! # Attribute System
//!
//! Building blocks that a [`Model`](crate::Model) composes:
//!
//! - **Values**: [`AttrValue`], the closed set of things an attribute can hold
//! - **Storage**: [`Attributes`], raw values in insertion order
//! - **Specifications**: [`AttributeSpec`], a record type's declared accessors and mutators
//! - **Dispatch**: [`AccessDispatcher`], routes reads/writes through declared transformations
//! - **Guarding**: [`MassAssignmentGuard`], fillable/guarded policy for bulk fills
//! - **Filtering**: [`VisibilityFilter`], hidden/visible policy for exports
//!
//! ## Declaring transformations
//!
//! ```
//! use attrmodel::attributes::{AttrValue, AttributeSpec, Attributes};
//!
//! fn upper_name(raw: Option<&AttrValue>) -> AttrValue {
//!     AttrValue::text_of(raw).to_uppercase().into()
//! }
//!
//! fn lower_name(attrs: &mut Attributes, value: AttrValue) {
//!     attrs.set("name", value.to_text().to_lowercase());
//! }
//!
//! const ATTRIBUTES: &[AttributeSpec] = &[
//!     AttributeSpec::new("name").accessor(upper_name).mutator(lower_name),
//! ];
//! ```

mod dispatch;
mod filter;
mod guard;
mod spec;
mod store;
mod value;

pub use dispatch::AccessDispatcher;
pub use filter::VisibilityFilter;
pub use guard::MassAssignmentGuard;
pub use spec::{
    accessor_method_name, find_accessor, find_mutator, mutator_method_name, Accessor,
    AttributeSpec, Mutator,
};
pub use store::Attributes;
pub use value::AttrValue;
