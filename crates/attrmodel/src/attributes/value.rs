//! Attribute value type.
//!
//! This module defines the runtime representation of attribute values. A
//! record may hold strings, numbers, flags and nested structures side by
//! side, so values are a closed tagged variant rather than a generic.

use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Attributes;

/// Runtime representation of an attribute value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AttrValue {
    /// Explicit null. Distinct from an attribute that was never stored.
    #[default]
    Null,

    Bool(bool),

    Int(i64),

    /// Floating point number. Non-finite values are storable but fail to
    /// encode as JSON.
    Float(f64),

    String(String),

    /// Ordered sequence of values.
    List(Vec<AttrValue>),

    /// Nested map, keeping insertion order like the top-level store.
    Map(Attributes),
}

impl AttrValue {
    /// Check if this value represents a "truthy" state.
    ///
    /// - Null: false
    /// - Bool: the boolean value itself
    /// - Int / Float: non-zero
    /// - String / List / Map: non-empty
    pub fn is_truthy(&self) -> bool {
        match self {
            AttrValue::Null => false,
            AttrValue::Bool(v) => *v,
            AttrValue::Int(v) => *v != 0,
            AttrValue::Float(v) => *v != 0.0,
            AttrValue::String(v) => !v.is_empty(),
            AttrValue::List(v) => !v.is_empty(),
            AttrValue::Map(v) => !v.is_empty(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AttrValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the value as a float. Integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Int(v) => Some(*v as f64),
            AttrValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[AttrValue]> {
        match self {
            AttrValue::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Attributes> {
        match self {
            AttrValue::Map(v) => Some(v),
            _ => None,
        }
    }

    /// Render the value as text.
    ///
    /// Null renders as the empty string, which is what an accessor sees as
    /// the text of an attribute that was never stored. Lists and maps render
    /// as compact JSON.
    pub fn to_text(&self) -> String {
        match self {
            AttrValue::Null => String::new(),
            AttrValue::Bool(v) => v.to_string(),
            AttrValue::Int(v) => v.to_string(),
            AttrValue::Float(v) => v.to_string(),
            AttrValue::String(s) => s.clone(),
            AttrValue::List(_) | AttrValue::Map(_) => {
                serde_json::to_string(self).unwrap_or_default()
            }
        }
    }

    /// Text of an optional raw value, treating absence as empty.
    pub fn text_of(value: Option<&AttrValue>) -> String {
        value.map(AttrValue::to_text).unwrap_or_default()
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Int(value.into())
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        AttrValue::Int(value.into())
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Float(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::String(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::String(value)
    }
}

impl From<Attributes> for AttrValue {
    fn from(value: Attributes) -> Self {
        AttrValue::Map(value)
    }
}

impl<T: Into<AttrValue>> From<Vec<T>> for AttrValue {
    fn from(value: Vec<T>) -> Self {
        AttrValue::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttrValue::Null, Into::into)
    }
}

impl From<serde_json::Value> for AttrValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => AttrValue::Null,
            Value::Bool(v) => AttrValue::Bool(v),
            Value::Number(n) => match n.as_i64() {
                Some(i) => AttrValue::Int(i),
                None => AttrValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => AttrValue::String(s),
            Value::Array(items) => AttrValue::List(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => AttrValue::Map(
                map.into_iter()
                    .map(|(key, value)| (key, AttrValue::from(value)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for AttrValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AttrValue::Null => serializer.serialize_unit(),
            AttrValue::Bool(v) => serializer.serialize_bool(*v),
            AttrValue::Int(v) => serializer.serialize_i64(*v),
            AttrValue::Float(v) if v.is_finite() => serializer.serialize_f64(*v),
            AttrValue::Float(v) => Err(S::Error::custom(format!(
                "non-finite number {v} cannot be encoded"
            ))),
            AttrValue::String(s) => serializer.serialize_str(s),
            AttrValue::List(items) => items.serialize(serializer),
            AttrValue::Map(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for AttrValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AttrValueVisitor)
    }
}

struct AttrValueVisitor;

impl<'de> Visitor<'de> for AttrValueVisitor {
    type Value = AttrValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, boolean, null, list or map")
    }

    fn visit_unit<E: de::Error>(self) -> Result<AttrValue, E> {
        Ok(AttrValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<AttrValue, E> {
        Ok(AttrValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<AttrValue, D::Error> {
        AttrValue::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<AttrValue, E> {
        Ok(AttrValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<AttrValue, E> {
        Ok(AttrValue::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<AttrValue, E> {
        Ok(i64::try_from(v).map_or(AttrValue::Float(v as f64), AttrValue::Int))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<AttrValue, E> {
        Ok(AttrValue::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<AttrValue, E> {
        Ok(AttrValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<AttrValue, E> {
        Ok(AttrValue::String(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<AttrValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(AttrValue::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<AttrValue, A::Error> {
        let mut map = Attributes::new();
        while let Some((key, value)) = access.next_entry::<String, AttrValue>()? {
            map.set(key, value);
        }
        Ok(AttrValue::Map(map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_truthy_for_scalars() {
        assert!(!AttrValue::Null.is_truthy());
        assert!(AttrValue::Bool(true).is_truthy());
        assert!(!AttrValue::Bool(false).is_truthy());
        assert!(AttrValue::Int(3).is_truthy());
        assert!(!AttrValue::Int(0).is_truthy());
        assert!(!AttrValue::Float(0.0).is_truthy());
    }

    #[test]
    fn is_truthy_for_containers() {
        assert!(AttrValue::from("x").is_truthy());
        assert!(!AttrValue::from("").is_truthy());
        assert!(AttrValue::from(vec![1]).is_truthy());
        assert!(!AttrValue::List(vec![]).is_truthy());
        assert!(!AttrValue::Map(Attributes::new()).is_truthy());
    }

    #[test]
    fn to_text_of_absent_is_empty() {
        assert_eq!(AttrValue::text_of(None), "");
        assert_eq!(AttrValue::Null.to_text(), "");
        assert_eq!(AttrValue::from(30).to_text(), "30");
        assert_eq!(AttrValue::from("name").to_text(), "name");
    }

    #[test]
    fn to_text_of_list_is_json() {
        let value = AttrValue::from(vec!["a", "b"]);
        assert_eq!(value.to_text(), r#"["a","b"]"#);
    }

    #[test]
    fn accessors_extract_matching_variants() {
        assert_eq!(AttrValue::from(true).as_bool(), Some(true));
        assert_eq!(AttrValue::from(7).as_i64(), Some(7));
        assert_eq!(AttrValue::from(7).as_f64(), Some(7.0));
        assert_eq!(AttrValue::from("s").as_str(), Some("s"));
        assert_eq!(AttrValue::from("s").as_i64(), None);
        assert_eq!(AttrValue::from(1.5).as_str(), None);
    }

    #[test]
    fn from_option_maps_none_to_null() {
        assert_eq!(AttrValue::from(None::<i64>), AttrValue::Null);
        assert_eq!(AttrValue::from(Some("x")), AttrValue::from("x"));
    }

    #[test]
    fn from_json_converts_nested_values() {
        let json = serde_json::json!({"z": 1, "a": [true, null], "m": 2.5});
        let value = AttrValue::from(json);
        let map = value.as_map().unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map.get("z"), Some(&AttrValue::Int(1)));
        assert_eq!(map.get("m"), Some(&AttrValue::Float(2.5)));
        assert_eq!(
            map.get("a"),
            Some(&AttrValue::List(vec![AttrValue::Bool(true), AttrValue::Null]))
        );
    }

    #[test]
    fn serialize_scalars() {
        assert_eq!(serde_json::to_string(&AttrValue::Null).unwrap(), "null");
        assert_eq!(serde_json::to_string(&AttrValue::from(30)).unwrap(), "30");
        assert_eq!(
            serde_json::to_string(&AttrValue::from("say \"hi\"")).unwrap(),
            r#""say \"hi\"""#
        );
    }

    #[test]
    fn serialize_non_finite_fails() {
        assert!(serde_json::to_string(&AttrValue::Float(f64::NAN)).is_err());
        assert!(serde_json::to_string(&AttrValue::Float(f64::INFINITY)).is_err());
        let nested = AttrValue::from(vec![AttrValue::Float(f64::NEG_INFINITY)]);
        assert!(serde_json::to_string(&nested).is_err());
    }

    #[test]
    fn deserialize_preserves_map_order() {
        let value: AttrValue = serde_json::from_str(r#"{"z":1,"a":"x","m":[1,2]}"#).unwrap();
        let map = value.as_map().unwrap();
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
        assert_eq!(map.get("m"), Some(&AttrValue::from(vec![1, 2])));
    }
}
