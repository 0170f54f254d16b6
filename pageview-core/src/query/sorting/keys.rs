//! Sort key types for comparing record values
//!
//! Keys borrow text from the record they came from, so building them never
//! clones strings. Missing data is represented by [`OptionalKey`] and always
//! sorts last.

use ordered_float::OrderedFloat;
use pageview_model::ValueRef;
use std::cmp::Ordering;

/// Numeric key that compares integers and floats by value.
#[derive(Clone, Copy, Debug)]
pub enum NumberKey {
    Int(i64),
    Float(OrderedFloat<f64>),
}

impl NumberKey {
    fn cmp_mixed(int: i64, float: OrderedFloat<f64>) -> Ordering {
        let float = float.0;
        // NaN is the largest float under OrderedFloat; keep that with ints too
        if float.is_nan() {
            return Ordering::Less;
        }
        // 2^63 is exact as f64; anything at or past it is out of i64 range
        const BOUND: f64 = 9_223_372_036_854_775_808.0;
        if float >= BOUND {
            return Ordering::Less;
        }
        if float < -BOUND {
            return Ordering::Greater;
        }
        let floor = float.floor();
        match int.cmp(&(floor as i64)) {
            Ordering::Equal if float > floor => Ordering::Less,
            other => other,
        }
    }
}

impl Ord for NumberKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (NumberKey::Int(a), NumberKey::Int(b)) => a.cmp(b),
            (NumberKey::Float(a), NumberKey::Float(b)) => a.cmp(b),
            (NumberKey::Int(a), NumberKey::Float(b)) => Self::cmp_mixed(*a, *b),
            (NumberKey::Float(a), NumberKey::Int(b)) => {
                Self::cmp_mixed(*b, *a).reverse()
            }
        }
    }
}

impl PartialOrd for NumberKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NumberKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NumberKey {}

/// A present, comparable value.
///
/// Variants rank `Bool < Number < Text` when a field mixes types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValueKey<'a> {
    Bool(bool),
    Number(NumberKey),
    Text(&'a str),
}

impl<'a> ValueKey<'a> {
    /// `None` for null values; they sort with missing fields.
    pub fn from_value(value: ValueRef<'a>) -> Option<Self> {
        match value {
            ValueRef::Null => None,
            ValueRef::Bool(b) => Some(ValueKey::Bool(b)),
            ValueRef::Int(i) => Some(ValueKey::Number(NumberKey::Int(i))),
            ValueRef::Float(f) => {
                Some(ValueKey::Number(NumberKey::Float(OrderedFloat(f))))
            }
            ValueRef::Text(s) => Some(ValueKey::Text(s)),
        }
    }
}

/// Key for a possibly missing value
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OptionalKey<'a>(Option<ValueKey<'a>>);

impl<'a> OptionalKey<'a> {
    pub fn new(value: Option<ValueRef<'a>>) -> Self {
        OptionalKey(value.and_then(ValueKey::from_value))
    }

    pub fn missing() -> Self {
        OptionalKey(None)
    }

    pub fn is_missing(&self) -> bool {
        self.0.is_none()
    }

    /// Compare two keys; missing values always sort last regardless of
    /// direction.
    #[inline]
    pub fn compare_with_order(&self, other: &Self, reverse: bool) -> Ordering {
        match (&self.0, &other.0) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => {
                if reverse {
                    b.cmp(a)
                } else {
                    a.cmp(b)
                }
            }
        }
    }
}

impl Ord for OptionalKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_with_order(other, false)
    }
}

impl PartialOrd for OptionalKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
