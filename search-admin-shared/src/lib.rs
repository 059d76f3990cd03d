//! # Search Admin Shared
//!
//! This crate defines shared data structures and types used across the search
//! admin console. It includes the document model and the normalized index
//! name identifier.

pub mod types;

pub use types::document::{Document, FieldValue};
pub use types::index_name::{IndexListing, IndexName};
