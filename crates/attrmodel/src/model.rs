//! The record type.
//!
//! A [`Model`] owns its raw [`Attributes`] and the policy sets that control
//! bulk fills and exports. The record type parameter `S` supplies the
//! declared accessors, mutators, default values and default policy.
//!
//! ## Data flow
//!
//! ```text
//! get/set/has ──────────────► AccessDispatcher ──► Attributes
//! fill ───► MassAssignmentGuard ──► AccessDispatcher ──► Attributes
//! force_fill ───────────────► AccessDispatcher ──► Attributes
//! to_array/to_json ─► VisibilityFilter ─► AccessDispatcher (read) ─► output
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::{Serialize, Serializer};

use crate::access::AttributeAccess;
use crate::attributes::{
    AccessDispatcher, AttrValue, AttributeSpec, Attributes, MassAssignmentGuard, VisibilityFilter,
};
use crate::config::ModelConfig;
use crate::error::{ModelError, Result};

/// Declarations for a concrete record type.
///
/// Implemented by a zero-sized marker type:
///
/// ```
/// use attrmodel::attributes::{AttrValue, AttributeSpec, Attributes};
/// use attrmodel::{attrs, Model, Schema};
///
/// struct User;
///
/// fn upper_name(raw: Option<&AttrValue>) -> AttrValue {
///     AttrValue::text_of(raw).to_uppercase().into()
/// }
///
/// impl Schema for User {
///     const ATTRIBUTES: &'static [AttributeSpec] =
///         &[AttributeSpec::new("name").accessor(upper_name)];
///
///     fn defaults() -> Attributes {
///         attrs! { "name" => "guest" }
///     }
/// }
///
/// let user = Model::<User>::new();
/// assert_eq!(user.get("name"), Some(AttrValue::from("GUEST")));
/// ```
pub trait Schema {
    /// Declared accessors and mutators.
    const ATTRIBUTES: &'static [AttributeSpec] = &[];

    /// Raw values every new instance starts with. Stored as-is, without
    /// going through mutators.
    fn defaults() -> Attributes {
        Attributes::new()
    }

    /// Default fillable/guarded/hidden/visible sets.
    fn config() -> ModelConfig {
        ModelConfig::default()
    }
}

pub struct Model<S: Schema> {
    attributes: Attributes,
    guard: MassAssignmentGuard,
    visibility: VisibilityFilter,
    _schema: PhantomData<fn() -> S>,
}

impl<S: Schema> Model<S> {
    const DISPATCHER: AccessDispatcher = AccessDispatcher::new(S::ATTRIBUTES);

    /// Create an instance holding the record type's defaults.
    pub fn new() -> Self {
        let mut model = Self {
            attributes: S::defaults(),
            guard: MassAssignmentGuard::new(),
            visibility: VisibilityFilter::new(),
            _schema: PhantomData,
        };
        model.apply_config(&S::config());
        model
    }

    /// Create an instance and write every initial value through the
    /// mutators, bypassing the mass-assignment guard.
    pub fn from_attributes(initial: Attributes) -> Self {
        let mut model = Self::new();
        model.force_fill(initial);
        model
    }

    /// Create an instance with `config` layered over the record type's policy.
    pub fn with_config(config: &ModelConfig) -> Self {
        let mut model = Self::new();
        model.apply_config(config);
        model
    }

    /// Replace each policy set that `config` declares non-empty.
    pub fn apply_config(&mut self, config: &ModelConfig) -> &mut Self {
        if !config.fillable.is_empty() {
            self.guard.set_fillable(config.fillable.iter().cloned());
        }
        if !config.guarded.is_empty() {
            self.guard.set_guarded(config.guarded.iter().cloned());
        }
        if !config.hidden.is_empty() {
            self.visibility.set_hidden(config.hidden.iter().cloned());
        }
        if !config.visible.is_empty() {
            self.visibility.set_visible(config.visible.iter().cloned());
        }
        self
    }

    /// Build one instance per raw map, in order.
    pub fn hydrate<I>(items: I) -> Vec<Self>
    where
        I: IntoIterator<Item = Attributes>,
    {
        let models: Vec<Self> = items.into_iter().map(Self::from_attributes).collect();
        log::debug!("hydrated {} model(s)", models.len());
        models
    }

    /// Create an instance from a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        match serde_json::from_str::<AttrValue>(json).map_err(ModelError::Decoding)? {
            AttrValue::Map(initial) => Ok(Self::from_attributes(initial)),
            other => Err(ModelError::InvalidPayload(format!(
                "expected a JSON object, found {}",
                kind_of(&other)
            ))),
        }
    }

    /// Hydrate from a JSON array of objects.
    pub fn hydrate_json(json: &str) -> Result<Vec<Self>> {
        let items = match serde_json::from_str::<AttrValue>(json).map_err(ModelError::Decoding)? {
            AttrValue::List(items) => items,
            other => {
                return Err(ModelError::InvalidPayload(format!(
                    "expected a JSON array, found {}",
                    kind_of(&other)
                )))
            }
        };

        let maps = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                AttrValue::Map(map) => Ok(map),
                other => Err(ModelError::InvalidPayload(format!(
                    "item {index}: expected a JSON object, found {}",
                    kind_of(&other)
                ))),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::hydrate(maps))
    }

    // --- Single attribute access ---

    /// Effective value of `name`, through its accessor when one is declared.
    pub fn get(&self, name: &str) -> Option<AttrValue> {
        Self::DISPATCHER.read(&self.attributes, name)
    }

    /// Write `name`, through its mutator when one is declared.
    pub fn set(&mut self, name: &str, value: impl Into<AttrValue>) -> &mut Self {
        Self::DISPATCHER.write(&mut self.attributes, name, value.into());
        self
    }

    /// Whether `name` is stored or has a declared accessor.
    pub fn has(&self, name: &str) -> bool {
        Self::DISPATCHER.exists(&self.attributes, name)
    }

    /// Remove `name` from storage. A declared accessor keeps answering reads.
    pub fn unset(&mut self, name: &str) -> &mut Self {
        self.attributes.unset(name);
        self
    }

    pub fn get_attribute(&self, name: &str) -> Option<AttrValue> {
        self.get(name)
    }

    pub fn set_attribute(&mut self, name: &str, value: impl Into<AttrValue>) -> &mut Self {
        self.set(name, value)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.has(name)
    }

    pub fn unset_attribute(&mut self, name: &str) -> &mut Self {
        self.unset(name)
    }

    /// Stored value of `name`, bypassing any accessor.
    pub fn raw(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Stored values, bypassing accessors and visibility.
    pub fn get_attributes(&self) -> &Attributes {
        &self.attributes
    }

    // --- Mass assignment ---

    /// Guarded mass assignment. Keys the guard rejects are skipped.
    pub fn fill(&mut self, payload: Attributes) -> &mut Self {
        for (name, value) in payload {
            if self.guard.permits(&name) {
                Self::DISPATCHER.write(&mut self.attributes, &name, value);
            } else {
                log::debug!("fill skipped non-fillable attribute {name}");
            }
        }
        self
    }

    /// Unguarded mass assignment, for trusted input only.
    pub fn force_fill(&mut self, payload: Attributes) -> &mut Self {
        for (name, value) in payload {
            Self::DISPATCHER.write(&mut self.attributes, &name, value);
        }
        self
    }

    /// Replace the fillable set.
    pub fn fillable<I, N>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.guard.set_fillable(names);
        self
    }

    /// Replace the guarded set.
    pub fn guard<I, N>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.guard.set_guarded(names);
        self
    }

    pub fn get_fillable(&self) -> Vec<&str> {
        self.guard.fillable().iter().map(String::as_str).collect()
    }

    pub fn get_guarded(&self) -> Vec<&str> {
        self.guard.guarded().iter().map(String::as_str).collect()
    }

    /// Whether a guarded fill would write `name`.
    pub fn is_fillable(&self, name: &str) -> bool {
        self.guard.permits(name)
    }

    // --- Serialization ---

    /// Replace the hidden set.
    pub fn set_hidden<I, N>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.visibility.set_hidden(names);
        self
    }

    /// Replace the visible set.
    pub fn set_visible<I, N>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.visibility.set_visible(names);
        self
    }

    pub fn get_hidden(&self) -> Vec<&str> {
        self.visibility.hidden().iter().map(String::as_str).collect()
    }

    pub fn get_visible(&self) -> Vec<&str> {
        self.visibility.visible().iter().map(String::as_str).collect()
    }

    /// Whether `name` would appear in an export, if stored.
    pub fn is_visible(&self, name: &str) -> bool {
        self.visibility.includes(name)
    }

    /// Stored attributes that pass the visibility filter, in storage order,
    /// with accessors applied.
    pub fn to_array(&self) -> Attributes {
        self.attributes
            .keys()
            .filter(|name| self.visibility.includes(name))
            .filter_map(|name| self.get(name).map(|value| (name, value)))
            .collect()
    }

    /// Compact JSON encoding of [`to_array`](Self::to_array).
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.to_array()).map_err(ModelError::Encoding)
    }

    /// Pretty-printed JSON encoding of [`to_array`](Self::to_array).
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.to_array()).map_err(ModelError::Encoding)
    }
}

fn kind_of(value: &AttrValue) -> &'static str {
    match value {
        AttrValue::Null => "null",
        AttrValue::Bool(_) => "a boolean",
        AttrValue::Int(_) | AttrValue::Float(_) => "a number",
        AttrValue::String(_) => "a string",
        AttrValue::List(_) => "an array",
        AttrValue::Map(_) => "an object",
    }
}

impl<S: Schema> Default for Model<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Schema> Clone for Model<S> {
    fn clone(&self) -> Self {
        Self {
            attributes: self.attributes.clone(),
            guard: self.guard.clone(),
            visibility: self.visibility.clone(),
            _schema: PhantomData,
        }
    }
}

impl<S: Schema> PartialEq for Model<S> {
    fn eq(&self, other: &Self) -> bool {
        self.attributes == other.attributes
            && self.guard == other.guard
            && self.visibility == other.visibility
    }
}

impl<S: Schema> fmt::Debug for Model<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("schema", &std::any::type_name::<S>())
            .field("attributes", &self.attributes)
            .field("guard", &self.guard)
            .field("visibility", &self.visibility)
            .finish()
    }
}

impl<S: Schema> From<Attributes> for Model<S> {
    fn from(initial: Attributes) -> Self {
        Self::from_attributes(initial)
    }
}

/// Serializes as the exported view, like [`Model::to_array`].
impl<S: Schema> Serialize for Model<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> std::result::Result<Ser::Ok, Ser::Error> {
        self.to_array().serialize(serializer)
    }
}

impl<S: Schema> AttributeAccess for Model<S> {
    fn get_attr(&self, key: &str) -> Option<AttrValue> {
        self.get(key)
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
