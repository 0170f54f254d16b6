//! Core data model definitions shared across pageview crates.
//!
//! A record is anything that can answer "what scalar lives at field `x`?".
//! [`Record`] is the owned, map-backed shape; [`FieldAccess`] is the seam that
//! lets callers page over their own types or over raw `serde_json` objects
//! without converting them first.
#![allow(missing_docs)]

pub mod access;
pub mod error;
pub mod prelude;
pub mod record;
pub mod value;

pub use access::FieldAccess;
pub use error::{ModelError, Result as ModelResult};
pub use record::Record;
pub use value::{Value, ValueRef};
