//! This module defines the core data structures and types used across the
//! search admin console. It re-exports `Document`, `FieldValue`, `IndexName`
//! and `IndexListing`.

pub mod document;
pub mod index_name;

pub use document::{Document, FieldValue};
pub use index_name::{IndexListing, IndexName};
