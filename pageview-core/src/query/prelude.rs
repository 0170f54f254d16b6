//! Intentional query crate surface consumed by list views.

pub use super::builder::PageQueryBuilder;
pub use super::filtering::contains_ignore_case;
pub use super::types::{
    OrderBy, Page, PageRequest, QueryError, Search, SortOrder,
};
pub use super::view::{PagedView, paginate, paginate_with, view};
pub use pageview_model::prelude::*;
