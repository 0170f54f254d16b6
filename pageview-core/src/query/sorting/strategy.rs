//! Strategy pattern for sorting keyed entries
//!
//! The pipeline never sorts records directly. It sorts `(key, index)` pairs
//! and then gathers records by index, so the caller's collection is never
//! touched and only borrowed keys move during the sort.

use super::keys::OptionalKey;
use crate::query::types::SortOrder;
use std::fmt;

/// A record's sort key paired with its position in the input collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyedEntry<'a> {
    pub key: OptionalKey<'a>,
    pub index: usize,
}

impl<'a> KeyedEntry<'a> {
    pub fn new(key: OptionalKey<'a>, index: usize) -> Self {
        Self { key, index }
    }
}

/// A sorting strategy over keyed entries.
///
/// Implementations must be stable: entries with equal keys keep their
/// relative order in both directions.
pub trait SortStrategy: fmt::Debug + Send + Sync {
    /// Sort entries in place.
    fn sort_entries(&self, entries: &mut [KeyedEntry<'_>], order: SortOrder);

    /// Short label used in trace output.
    fn name(&self) -> &'static str;

    /// Label of the path that actually runs for `len` entries.
    fn name_for(&self, _len: usize) -> &'static str {
        self.name()
    }
}

#[inline]
pub(crate) fn compare_entries(
    a: &KeyedEntry<'_>,
    b: &KeyedEntry<'_>,
    order: SortOrder,
) -> std::cmp::Ordering {
    a.key.compare_with_order(&b.key, order.is_descending())
}

/// Single-threaded stable sort.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialSort;

impl SortStrategy for SerialSort {
    fn sort_entries(&self, entries: &mut [KeyedEntry<'_>], order: SortOrder) {
        entries.sort_by(|a, b| compare_entries(a, b, order));
    }

    fn name(&self) -> &'static str {
        "serial"
    }
}
