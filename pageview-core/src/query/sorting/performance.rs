//! Parallel sorting for large collections
//!
//! Uses rayon's stable merge sort once the filtered set reaches a threshold.
//! Output is identical to [`SerialSort`]; only the wall-clock time changes.

use super::strategy::{KeyedEntry, SerialSort, SortStrategy, compare_entries};
use crate::query::types::SortOrder;

#[cfg(feature = "parallel-sorting")]
use rayon::prelude::*;

/// Default row count at which sorting moves onto the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 10_000;

/// Parallel sorting for large datasets
#[derive(Debug, Clone, Copy)]
pub struct ParallelSort {
    pub threshold: usize,
}

impl Default for ParallelSort {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallelSort {
    /// Create a new parallel sort with default threshold (10,000 items)
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Create a parallel sort with custom threshold
    pub fn with_threshold(threshold: usize) -> Self {
        Self { threshold }
    }

    pub fn applies_to(&self, len: usize) -> bool {
        cfg!(feature = "parallel-sorting") && len >= self.threshold
    }
}

#[cfg(feature = "parallel-sorting")]
impl SortStrategy for ParallelSort {
    fn sort_entries(&self, entries: &mut [KeyedEntry<'_>], order: SortOrder) {
        if !self.applies_to(entries.len()) {
            // Dataset too small, use sequential sorting
            SerialSort.sort_entries(entries, order);
            return;
        }
        entries.par_sort_by(|a, b| compare_entries(a, b, order));
    }

    fn name(&self) -> &'static str {
        "parallel"
    }

    fn name_for(&self, len: usize) -> &'static str {
        if self.applies_to(len) {
            self.name()
        } else {
            SerialSort.name()
        }
    }
}

#[cfg(not(feature = "parallel-sorting"))]
impl SortStrategy for ParallelSort {
    fn sort_entries(&self, entries: &mut [KeyedEntry<'_>], order: SortOrder) {
        // Fallback to sequential sorting when parallel feature is disabled
        SerialSort.sort_entries(entries, order);
    }

    fn name(&self) -> &'static str {
        "serial"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::sorting::keys::OptionalKey;
    use pageview_model::ValueRef;

    #[test]
    fn parallel_matches_serial_above_threshold() {
        let texts: Vec<String> = (0..2_000)
            .map(|i| format!("k{:03}", (i * 7919) % 300))
            .collect();
        let build = || {
            texts
                .iter()
                .enumerate()
                .map(|(index, text)| {
                    KeyedEntry::new(OptionalKey::new(Some(ValueRef::Text(text))), index)
                })
                .collect::<Vec<_>>()
        };

        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let mut serial = build();
            SerialSort.sort_entries(&mut serial, order);

            let mut parallel = build();
            ParallelSort::with_threshold(16).sort_entries(&mut parallel, order);

            assert_eq!(serial, parallel);
        }
    }

    #[test]
    fn threshold_gates_parallelism() {
        let sort = ParallelSort::with_threshold(100);
        assert!(!sort.applies_to(99));
        assert_eq!(sort.applies_to(100), cfg!(feature = "parallel-sorting"));
    }

    #[test]
    fn label_reports_the_path_taken() {
        let sort = ParallelSort::with_threshold(100);
        assert_eq!(sort.name_for(99), "serial");
        let expected = if cfg!(feature = "parallel-sorting") {
            "parallel"
        } else {
            "serial"
        };
        assert_eq!(sort.name_for(100), expected);
        assert_eq!(SerialSort.name_for(1_000_000), "serial");
    }
}
