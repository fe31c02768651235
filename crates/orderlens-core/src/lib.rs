//! Shared types and logic for OrderLens components.
//!
//! The dataset loads once per process and is threaded by reference into
//! every query; all aggregation paths are pure reads of it.

pub mod chart;
pub mod dataset;
pub mod error;
pub mod insights;
pub mod query;
pub mod ui;

pub use dataset::{Dataset, OrderRecord};
pub use error::LensError;
pub use query::{answer_query, QueryReply};
