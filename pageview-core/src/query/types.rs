use serde::{Deserialize, Deserializer, Serialize};
use std::ops::Range;

/// Page used when a request does not name one.
pub const DEFAULT_PAGE_NUM: usize = 1;
/// Page size used when a request does not name one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A single paging request: which page, how big, optional order and search.
///
/// `page_num` is 1-based. Zero values are clamped to 1 wherever the request
/// is turned into a window, so a hand-built request can never produce a
/// negative offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    #[serde(
        default = "default_page_num",
        deserialize_with = "deserialize_page_param"
    )]
    pub page_num: usize,
    #[serde(
        default = "default_page_size",
        deserialize_with = "deserialize_page_param"
    )]
    pub page_size: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<Search>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_num: DEFAULT_PAGE_NUM,
            page_size: DEFAULT_PAGE_SIZE,
            order_by: None,
            search: None,
        }
    }
}

impl PageRequest {
    /// Build a request for one page, clamping zero values to 1.
    pub fn new(page_num: usize, page_size: usize) -> Self {
        Self {
            page_num: page_num.max(1),
            page_size: page_size.max(1),
            ..Self::default()
        }
    }

    /// Strict constructor for callers holding signed input (e.g. query
    /// strings) who want non-positive values rejected instead of clamped.
    pub fn try_new(page_num: i64, page_size: i64) -> Result<Self, QueryError> {
        if page_num < 1 {
            return Err(QueryError::InvalidPageNum(page_num));
        }
        if page_size < 1 {
            return Err(QueryError::InvalidPageSize(page_size));
        }
        Ok(Self::new(clamp_positive(page_num), clamp_positive(page_size)))
    }

    pub fn with_order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    pub fn with_search(mut self, search: Search) -> Self {
        self.search = Some(search);
        self
    }

    /// The order stage, if it will run.
    pub fn active_order(&self) -> Option<&OrderBy> {
        self.order_by.as_ref().filter(|order| order.is_active())
    }

    /// The search stage, if it will run.
    pub fn active_search(&self) -> Option<&Search> {
        self.search.as_ref().filter(|search| search.needle().is_some())
    }

    /// Stable hash of everything that influences the result.
    pub fn fingerprint(&self) -> u64 {
        super::filtering::hash_page_request(self)
    }
}

fn default_page_num() -> usize {
    DEFAULT_PAGE_NUM
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn clamp_positive(value: i64) -> usize {
    usize::try_from(value.max(1)).unwrap_or(usize::MAX)
}

/// Front ends post whatever their number input holds, including 0 and
/// negatives; clamp instead of failing the whole request.
fn deserialize_page_param<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(clamp_positive(raw))
}

/// Single-field ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderBy {
    pub field: String,
    /// Absent means ascending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
}

impl OrderBy {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            sort: None,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            sort: Some(SortOrder::Ascending),
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            sort: Some(SortOrder::Descending),
        }
    }

    pub fn order(&self) -> SortOrder {
        self.sort.unwrap_or_default()
    }

    /// An empty field name disables sorting.
    pub fn is_active(&self) -> bool {
        !self.field.is_empty()
    }
}

/// Sort order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "asc", alias = "ascending")]
    Ascending,
    #[serde(rename = "desc", alias = "descending")]
    Descending,
}

impl SortOrder {
    pub fn is_descending(self) -> bool {
        self == SortOrder::Descending
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

/// Single-field, case-insensitive substring search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Search {
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Search {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: Some(value.into()),
        }
    }

    /// The text to look for, or `None` when the search is a no-op
    /// (empty field name, absent value, or empty value).
    pub fn needle(&self) -> Option<&str> {
        if self.field.is_empty() {
            return None;
        }
        self.value.as_deref().filter(|value| !value.is_empty())
    }
}

/// One page of results plus the size of the filtered set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Records that survived the search stage, before slicing.
    pub item_total: usize,
    /// Page number actually applied after clamping.
    pub page_num: usize,
    /// Page size actually applied after clamping.
    pub page_size: usize,
}

impl<T> Page<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of pages needed for `item_total` records; 0 when nothing matched.
    pub fn page_count(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.item_total.div_ceil(self.page_size)
    }

    pub fn has_next(&self) -> bool {
        self.page_num < self.page_count()
    }

    pub fn has_previous(&self) -> bool {
        self.page_num > 1
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            item_total: self.item_total,
            page_num: self.page_num,
            page_size: self.page_size,
        }
    }
}

impl<T: Clone> Page<&T> {
    pub fn cloned(self) -> Page<T> {
        self.map(Clone::clone)
    }
}

/// The resolved slice bounds for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page_num: usize,
    pub page_size: usize,
}

impl PageWindow {
    /// Clamp page number and size to at least 1, and size to `max_page_size`.
    pub fn new(page_num: usize, page_size: usize, max_page_size: Option<usize>) -> Self {
        let mut page_size = page_size.max(1);
        if let Some(max) = max_page_size {
            page_size = page_size.min(max.max(1));
        }
        Self {
            page_num: page_num.max(1),
            page_size,
        }
    }

    pub fn for_request(request: &PageRequest, max_page_size: Option<usize>) -> Self {
        Self::new(request.page_num, request.page_size, max_page_size)
    }

    pub fn start(&self) -> usize {
        (self.page_num - 1).saturating_mul(self.page_size)
    }

    /// Half-open range into a set of `len` items, clamped to its bounds.
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = self.start();
        let end = start.saturating_add(self.page_size);
        start.min(len)..end.min(len)
    }
}

/// Query validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum QueryError {
    #[error("page number must be at least 1, got {0}")]
    InvalidPageNum(i64),

    #[error("page size must be at least 1, got {0}")]
    InvalidPageSize(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_is_first_page_of_ten() {
        let request = PageRequest::default();
        assert_eq!(request.page_num, 1);
        assert_eq!(request.page_size, 10);
        assert!(request.active_order().is_none());
        assert!(request.active_search().is_none());
    }

    #[test]
    fn zero_page_params_clamp_to_one() {
        let request = PageRequest::new(0, 0);
        assert_eq!((request.page_num, request.page_size), (1, 1));

        let window = PageWindow::new(0, 0, None);
        assert_eq!(window.range(5), 0..1);
    }

    #[test]
    fn strict_constructor_rejects_non_positive_values() {
        assert_eq!(
            PageRequest::try_new(0, 10),
            Err(QueryError::InvalidPageNum(0))
        );
        assert_eq!(
            PageRequest::try_new(1, -5),
            Err(QueryError::InvalidPageSize(-5))
        );
        assert_eq!(PageRequest::try_new(2, 5).unwrap(), PageRequest::new(2, 5));
    }

    #[test]
    fn window_clamps_to_available_items() {
        let window = PageWindow::new(2, 2, None);
        assert_eq!(window.range(3), 2..3);
        assert_eq!(window.range(1), 1..1);
        assert_eq!(PageWindow::new(4, 10, None).range(3), 3..3);
    }

    #[test]
    fn window_does_not_overflow() {
        let window = PageWindow::new(usize::MAX, usize::MAX, None);
        assert_eq!(window.range(10), 10..10);
    }

    #[test]
    fn max_page_size_caps_the_window() {
        let window = PageWindow::new(1, 500, Some(100));
        assert_eq!(window.page_size, 100);
        assert_eq!(PageWindow::new(1, 5, Some(100)).page_size, 5);
    }

    #[test]
    fn search_needle_requires_field_and_value() {
        assert_eq!(Search::new("name", "al").needle(), Some("al"));
        assert_eq!(Search::new("name", "").needle(), None);
        assert_eq!(Search::new("", "al").needle(), None);
        let absent = Search {
            field: "name".into(),
            value: None,
        };
        assert_eq!(absent.needle(), None);
    }

    #[test]
    fn page_navigation_helpers() {
        let page = Page {
            items: vec![1, 2],
            item_total: 5,
            page_num: 2,
            page_size: 2,
        };
        assert_eq!(page.page_count(), 3);
        assert!(page.has_next());
        assert!(page.has_previous());

        let last = Page {
            items: vec![5],
            item_total: 5,
            page_num: 3,
            page_size: 2,
        };
        assert!(!last.has_next());
    }

    #[test]
    fn request_json_matches_front_end_shape() {
        let request: PageRequest = serde_json::from_str(
            r#"{
                "pageNum": 2,
                "pageSize": 1,
                "orderBy": { "field": "name" },
                "search": { "field": "favoriteFood", "value": "bana" }
            }"#,
        )
        .unwrap();

        assert_eq!(request.page_num, 2);
        assert_eq!(request.page_size, 1);
        assert_eq!(request.order_by, Some(OrderBy::new("name")));
        assert_eq!(request.search, Some(Search::new("favoriteFood", "bana")));
    }

    #[test]
    fn request_json_defaults_and_clamps() {
        let request: PageRequest = serde_json::from_str(
            r#"{ "pageNum": -3, "orderBy": { "field": "age", "sort": "desc" } }"#,
        )
        .unwrap();
        assert_eq!(request.page_num, 1);
        assert_eq!(request.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(request.order_by.unwrap().order(), SortOrder::Descending);
    }

    #[test]
    fn page_serializes_item_total_in_camel_case() {
        let page = Page {
            items: vec!["a"],
            item_total: 1,
            page_num: 1,
            page_size: 10,
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["itemTotal"], 1);
        assert_eq!(json["pageSize"], 10);
    }
}
