//! Everything a list view needs to page a collection.

pub use crate::config::{ConfigError, PagingConfig, PagingConfigSource};
pub use crate::query::prelude::*;
