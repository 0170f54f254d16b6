//! # Pageview Core
//!
//! Search, sort and paginate in-memory record collections for list views.
//!
//! ## Overview
//!
//! Every call runs the same pipeline over a borrowed slice:
//!
//! 1. **Search**: keep records whose field contains the needle, ignoring case
//! 2. **Sort**: stable sort on one field, ascending unless asked otherwise
//! 3. **Count**: `item_total` is the number of records that survived search
//! 4. **Slice**: return the requested 1-based page, empty past the end
//!
//! The input is never mutated. [`paginate`] clones only the records on the
//! returned page and [`view`] borrows them.
//!
//! ## Modules
//!
//! - [`query`]: request types, the builder, filtering, sorting and the pipeline
//! - [`config`]: [`PagingConfig`] and its environment/file loaders
//! - [`model`]: record and value types re-exported from `pageview-model`
//!
//! ## Examples
//!
//! ```
//! use pageview_core::prelude::*;
//!
//! let people = vec![
//!     Record::new().with("name", "Alice").with("age", 30),
//!     Record::new().with("name", "Bob").with("age", 25),
//!     Record::new().with("name", "Charlie").with("age", 35),
//! ];
//!
//! let request = PageRequest::builder()
//!     .page(1, 2)
//!     .descending("age")
//!     .build();
//! let page = paginate(&people, &request);
//!
//! assert_eq!(page.item_total, 3);
//! assert_eq!(page.items[0].get_ref("name"), Some(ValueRef::Text("Charlie")));
//! assert!(page.has_next());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Paging configuration and loaders
pub mod config;

/// Prelude for list-view call sites
pub mod prelude;

/// Query types, filtering, sorting and the paging pipeline
pub mod query;

/// Record model shared with `pageview-model`
pub use pageview_model as model;

pub use config::{ConfigError, PagingConfig, PagingConfigSource};
pub use pageview_model::{FieldAccess, ModelError, Record, Value, ValueRef};
pub use query::{
    OrderBy, Page, PageQueryBuilder, PageRequest, PagedView, QueryError, Search,
    SortOrder, paginate, paginate_with, view,
};
