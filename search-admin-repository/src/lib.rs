//! # Search Admin Repository
//!
//! This crate provides traits and implementations for administering the
//! search cluster. It includes definitions for errors, interfaces, and a
//! concrete implementation for OpenSearch.

pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod service;
pub mod types;

pub use errors::SearchAdminError;
pub use interfaces::SearchAdminProvider;
pub use opensearch::{ConnectionConfig, OpenSearchProvider};
pub use service::SearchAdminService;
pub use types::{ClusterIdentity, CreateOutcome};
