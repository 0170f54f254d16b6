//! Search stage: case-insensitive substring matching on a single field.
//!
//! A record passes when the searched field holds text containing the
//! needle, ignoring case. Absent fields and non-text values never match;
//! they are not errors.

use super::types::{PageRequest, PageWindow, Search};
use pageview_model::ValueRef;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// A search ready to run: field name plus the lowercased needle.
#[derive(Debug, Clone)]
pub struct SearchFilter<'a> {
    field: &'a str,
    needle_lower: String,
}

impl<'a> SearchFilter<'a> {
    /// `None` when the search would be a no-op.
    pub fn from_search(search: &'a Search) -> Option<Self> {
        let needle = search.needle()?;
        Some(Self {
            field: search.field.as_str(),
            needle_lower: needle.to_lowercase(),
        })
    }

    pub fn field(&self) -> &'a str {
        self.field
    }

    pub fn matches(&self, value: Option<ValueRef<'_>>) -> bool {
        match value {
            Some(ValueRef::Text(text)) => {
                contains_ignore_case(text, &self.needle_lower)
            }
            _ => false,
        }
    }
}

/// Case-insensitive containment check against an already-lowercased needle.
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    // ASCII fast path avoids allocating a lowercased copy per record
    if haystack.is_ascii() && needle_lower.is_ascii() {
        let haystack = haystack.as_bytes();
        let needle = needle_lower.as_bytes();
        if needle.len() > haystack.len() {
            return false;
        }
        return haystack.windows(needle.len()).any(|window| {
            window
                .iter()
                .zip(needle)
                .all(|(h, n)| h.to_ascii_lowercase() == *n)
        });
    }
    haystack.to_lowercase().contains(needle_lower)
}

/// Compute a stable hash for a page request.
///
/// Requests the pipeline treats identically hash identically: an absent
/// `sort` equals `asc`, an empty search equals no search, an empty order
/// field equals no order, and search values compare case-insensitively.
pub fn hash_page_request(request: &PageRequest) -> u64 {
    let mut hasher = DefaultHasher::new();

    match request.active_search() {
        Some(search) => {
            search.field.hash(&mut hasher);
            search.needle().map(str::to_lowercase).hash(&mut hasher);
        }
        None => ().hash(&mut hasher),
    }

    match request.active_order() {
        Some(order) => {
            order.field.hash(&mut hasher);
            order.order().hash(&mut hasher);
        }
        None => ().hash(&mut hasher),
    }

    let window = PageWindow::for_request(request, None);
    window.page_num.hash(&mut hasher);
    window.page_size.hash(&mut hasher);

    hasher.finish()
}
