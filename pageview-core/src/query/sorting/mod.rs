//! Sorting stage for the paging pipeline
//!
//! This module provides:
//! - Sort key extraction and comparison rules
//! - Strategy implementations (serial and rayon-backed parallel)

pub mod keys;
pub mod performance;
pub mod strategy;

#[cfg(test)]
mod tests;

pub use keys::*;
pub use performance::*;
pub use strategy::*;
