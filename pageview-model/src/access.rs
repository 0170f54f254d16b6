//! Dynamic field access over heterogeneous record types.

use crate::record::Record;
use crate::value::{Value, ValueRef};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;

/// Reads a named scalar off a record.
///
/// `None` means the field is absent or holds something that is not a scalar
/// (an array or nested object). Paging treats both the same way, so
/// implementations do not need to tell them apart.
pub trait FieldAccess {
    fn field(&self, name: &str) -> Option<ValueRef<'_>>;

    fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

impl FieldAccess for Record {
    fn field(&self, name: &str) -> Option<ValueRef<'_>> {
        self.get_ref(name)
    }
}

impl FieldAccess for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> Option<ValueRef<'_>> {
        self.get(name).map(Value::as_value_ref)
    }
}

impl<S: BuildHasher> FieldAccess for HashMap<String, Value, S> {
    fn field(&self, name: &str) -> Option<ValueRef<'_>> {
        self.get(name).map(Value::as_value_ref)
    }
}

impl<T: FieldAccess + ?Sized> FieldAccess for &T {
    fn field(&self, name: &str) -> Option<ValueRef<'_>> {
        (**self).field(name)
    }
}

impl<T: FieldAccess + ?Sized> FieldAccess for Box<T> {
    fn field(&self, name: &str) -> Option<ValueRef<'_>> {
        (**self).field(name)
    }
}

impl<T: FieldAccess + ?Sized> FieldAccess for Rc<T> {
    fn field(&self, name: &str) -> Option<ValueRef<'_>> {
        (**self).field(name)
    }
}

impl<T: FieldAccess + ?Sized> FieldAccess for Arc<T> {
    fn field(&self, name: &str) -> Option<ValueRef<'_>> {
        (**self).field(name)
    }
}

#[cfg(feature = "json")]
mod json {
    use super::FieldAccess;
    use crate::value::ValueRef;

    fn scalar_ref(value: &serde_json::Value) -> Option<ValueRef<'_>> {
        match value {
            serde_json::Value::Null => Some(ValueRef::Null),
            serde_json::Value::Bool(b) => Some(ValueRef::Bool(*b)),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(ValueRef::Int)
                .or_else(|| n.as_f64().map(ValueRef::Float)),
            serde_json::Value::String(s) => Some(ValueRef::Text(s.as_str())),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
        }
    }

    impl FieldAccess for serde_json::Map<String, serde_json::Value> {
        fn field(&self, name: &str) -> Option<ValueRef<'_>> {
            self.get(name).and_then(scalar_ref)
        }
    }

    /// Only objects have fields; any other JSON value reads as empty.
    impl FieldAccess for serde_json::Value {
        fn field(&self, name: &str) -> Option<ValueRef<'_>> {
            self.as_object().and_then(|map| map.field(name))
        }
    }
}
