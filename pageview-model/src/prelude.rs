//! Convenience re-exports for crates that page over records.

pub use crate::access::FieldAccess;
pub use crate::error::ModelError;
pub use crate::record::Record;
pub use crate::value::{Value, ValueRef};
