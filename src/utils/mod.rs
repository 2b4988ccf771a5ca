//! Utility functions shared across layers.
//!
//! - [`price`] - Indian digit grouping for displayed prices

pub mod price;
