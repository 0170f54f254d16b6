//! Owned, map-backed records.

use crate::value::{Value, ValueRef};
use std::collections::BTreeMap;

/// A uniform-shape record: field name to scalar value.
///
/// Field order is irrelevant to paging, so a `BTreeMap` keeps `Debug` output
/// and serialization deterministic.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn insert(
        &mut self,
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn get_ref(&self, field: &str) -> Option<ValueRef<'_>> {
        self.fields.get(field).map(Value::as_value_ref)
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn into_inner(self) -> BTreeMap<String, Value> {
        self.fields
    }
}

impl From<BTreeMap<String, Value>> for Record {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Self { fields }
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(feature = "json")]
mod json {
    use super::Record;
    use crate::error::ModelError;
    use crate::value::Value;

    fn kind_of(value: &serde_json::Value) -> &'static str {
        match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "bool",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        }
    }

    pub(crate) fn scalar_from_json(value: &serde_json::Value) -> Option<Value> {
        match value {
            serde_json::Value::Null => Some(Value::Null),
            serde_json::Value::Bool(b) => Some(Value::Bool(*b)),
            serde_json::Value::Number(n) => Some(
                n.as_i64()
                    .map(Value::Int)
                    .or_else(|| n.as_f64().map(Value::Float))
                    .unwrap_or(Value::Null),
            ),
            serde_json::Value::String(s) => Some(Value::Text(s.clone())),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
        }
    }

    impl TryFrom<serde_json::Map<String, serde_json::Value>> for Record {
        type Error = ModelError;

        fn try_from(
            map: serde_json::Map<String, serde_json::Value>,
        ) -> Result<Self, Self::Error> {
            let mut record = Record::new();
            for (field, value) in map {
                let scalar = scalar_from_json(&value)
                    .ok_or_else(|| ModelError::NonScalarField {
                        field: field.clone(),
                    })?;
                record.insert(field, scalar);
            }
            Ok(record)
        }
    }

    impl TryFrom<serde_json::Value> for Record {
        type Error = ModelError;

        fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
            match value {
                serde_json::Value::Object(map) => Record::try_from(map),
                other => Err(ModelError::NotAnObject {
                    found: kind_of(&other),
                }),
            }
        }
    }
}
