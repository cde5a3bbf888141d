//! The raw data model as fetched from the dataset.
//!
//! A [`RawRecord`] is one node of the fetched JSON tree. Leaves carry a
//! `category` and a `value`; internal nodes carry `children`. Deserialization
//! is permissive: the published dataset encodes values as strings, and a
//! missing or unparsable value is treated as absent.

use std::fmt;

use log::warn;
use serde::{
    Deserialize, Deserializer,
    de::{self, Visitor},
};

/// A node of the fetched data tree.
///
/// # Examples
///
/// ```
/// # use quilt_core::record::RawRecord;
/// let leaf = RawRecord::leaf("Wii Sports", "Wii", 82.53);
/// let root = RawRecord::branch("Video Game Sales Data", vec![
///     RawRecord::branch("Wii", vec![leaf]),
/// ]);
/// assert_eq!(root.children().len(), 1);
/// assert!(root.value().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    name: String,

    #[serde(default)]
    category: Option<String>,

    #[serde(default, deserialize_with = "deserialize_value")]
    value: Option<f64>,

    #[serde(default)]
    children: Option<Vec<RawRecord>>,
}

impl RawRecord {
    /// Creates a leaf record.
    pub fn leaf(name: impl Into<String>, category: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            category: Some(category.into()),
            value: Some(value),
            children: None,
        }
    }

    /// Creates an internal record with the given children.
    pub fn branch(name: impl Into<String>, children: Vec<RawRecord>) -> Self {
        Self {
            name: name.into(),
            category: None,
            value: None,
            children: Some(children),
        }
    }

    /// Sets the value of this record (builder style).
    pub fn with_value(mut self, value: Option<f64>) -> Self {
        self.value = value;
        self
    }

    /// Sets the category of this record (builder style).
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// The record's own value, if present and numeric.
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Children in document order; empty for leaves.
    pub fn children(&self) -> &[RawRecord] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Returns true when the record has no children.
    ///
    /// An explicit but empty `children` array also counts as a leaf.
    pub fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }
}

fn deserialize_value<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ValueVisitor)
}

/// Accepts JSON numbers, numeric strings and null.
struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Option<f64>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number, a numeric string or null")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(Some(value).filter(|v| v.is_finite()))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Some(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(Some(value as f64))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        match value.trim().parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => Ok(Some(parsed)),
            _ => {
                warn!(value; "Ignoring non-numeric record value");
                Ok(None)
            }
        }
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        warn!(value; "Ignoring boolean record value");
        Ok(None)
    }
}
