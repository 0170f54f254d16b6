use super::types::*;

/// Fluent API for building page requests
#[derive(Debug, Clone, Default)]
pub struct PageQueryBuilder {
    request: PageRequest,
}

impl PageQueryBuilder {
    /// Create a new builder for page 1 of 10
    pub fn new() -> Self {
        Self {
            request: PageRequest::default(),
        }
    }

    // === Pagination methods ===

    /// Set page number and size together
    pub fn page(self, page_num: usize, page_size: usize) -> Self {
        self.page_num(page_num).page_size(page_size)
    }

    /// Set 1-based page number (0 clamps to 1)
    pub fn page_num(mut self, page_num: usize) -> Self {
        self.request.page_num = page_num.max(1);
        self
    }

    /// Set page size (0 clamps to 1)
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.request.page_size = page_size.max(1);
        self
    }

    // === Sort methods ===

    /// Sort by `field` in the given order
    pub fn order_by(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.request.order_by = Some(OrderBy {
            field: field.into(),
            sort: Some(order),
        });
        self
    }

    pub fn ascending(self, field: impl Into<String>) -> Self {
        self.order_by(field, SortOrder::Ascending)
    }

    pub fn descending(self, field: impl Into<String>) -> Self {
        self.order_by(field, SortOrder::Descending)
    }

    /// Keep the filtered order
    pub fn unordered(mut self) -> Self {
        self.request.order_by = None;
        self
    }

    // === Search methods ===

    /// Add case-insensitive substring search on one field
    pub fn search(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.search = Some(Search::new(field, value));
        self
    }

    pub fn clear_search(mut self) -> Self {
        self.request.search = None;
        self
    }

    // === Build method ===

    /// Build the final request
    pub fn build(self) -> PageRequest {
        self.request
    }
}

impl From<PageQueryBuilder> for PageRequest {
    fn from(builder: PageQueryBuilder) -> Self {
        builder.build()
    }
}

// === Convenience constructors ===

impl PageRequest {
    pub fn builder() -> PageQueryBuilder {
        PageQueryBuilder::new()
    }

    /// First page, sorted by `field`
    pub fn sorted(field: impl Into<String>, order: SortOrder) -> Self {
        PageQueryBuilder::new().order_by(field, order).build()
    }

    /// First page of records whose `field` contains `value`
    pub fn searching(field: impl Into<String>, value: impl Into<String>) -> Self {
        PageQueryBuilder::new().search(field, value).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_full_request() {
        let request = PageQueryBuilder::new()
            .page(3, 25)
            .descending("age")
            .search("name", "al")
            .build();

        assert_eq!(request.page_num, 3);
        assert_eq!(request.page_size, 25);
        assert_eq!(request.order_by, Some(OrderBy::desc("age")));
        assert_eq!(request.search, Some(Search::new("name", "al")));
    }

    #[test]
    fn clears_stages() {
        let request = PageRequest::builder()
            .ascending("name")
            .search("name", "al")
            .unordered()
            .clear_search()
            .build();
        assert_eq!(request, PageRequest::default());
    }

    #[test]
    fn zero_page_values_clamp() {
        let request = PageQueryBuilder::new().page(0, 0).build();
        assert_eq!((request.page_num, request.page_size), (1, 1));
    }
}
