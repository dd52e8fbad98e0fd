//! # attrmodel
//!
//! In-memory data records with controlled attribute access.
//!
//! A [`Model`] holds a named, ordered set of attribute values. Concrete record
//! types implement [`Schema`] to declare per-attribute accessors and mutators,
//! default values and policy; callers read and write attributes without
//! knowing which ones are transformed.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model<S: Schema>  (model.rs)                               │
//! │  - get/set/has/unset, fill/force_fill, to_array/to_json     │
//! │  - hydrate: one instance per raw map                        │
//! └─────────────────────────────────────────────────────────────┘
//!          │                  │                     │
//!          ▼                  ▼                     ▼
//! ┌────────────────┐ ┌─────────────────────┐ ┌──────────────────┐
//! │ AccessDispatch │ │ MassAssignmentGuard │ │ VisibilityFilter │
//! │ accessors and  │ │ fillable / guarded  │ │ hidden / visible │
//! │ mutators       │ │                     │ │                  │
//! └────────────────┘ └─────────────────────┘ └──────────────────┘
//!          │
//!          ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Attributes: raw values in insertion order                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Guarantees
//!
//! - Reads and writes never fail; an unset attribute reads as `None`
//!   unless an accessor synthesizes a value.
//! - Guarded fills skip rejected keys silently.
//! - Only JSON encoding can fail, with [`ModelError::Encoding`], when a
//!   visible value is a non-finite number.
//!
//! The crate is single-threaded by nature: a `Model` is plain owned data and
//! callers that share one across threads must synchronize access themselves.

pub mod access;
pub mod attributes;
pub mod config;
pub mod error;
pub mod model;
pub mod strings;

pub use access::AttributeAccess;
pub use attributes::{AttrValue, AttributeSpec, Attributes};
pub use config::ModelConfig;
pub use error::{ModelError, Result};
pub use model::{Model, Schema};

/// Build an [`Attributes`] map from `key => value` pairs, in order.
///
/// ```
/// use attrmodel::{attrs, AttrValue};
///
/// let attributes = attrs! { "name" => "Ada", "age" => 36 };
/// assert_eq!(attributes.get("age"), Some(&AttrValue::Int(36)));
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::attributes::Attributes::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut attributes = $crate::attributes::Attributes::new();
        $(
            attributes.set($key, $value);
        )+
        attributes
    }};
}
