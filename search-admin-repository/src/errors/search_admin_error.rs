//! Search admin error types.
//!
//! This module defines the unified error type for all administrative
//! operations against the search cluster. Each variant corresponds to one
//! operation family so the caller can decide what is fatal and what is not.

use thiserror::Error;

/// Unified errors from search admin operations.
///
/// Used by the `SearchAdminProvider` trait and `SearchAdminService` for all
/// operations. The fatality policy lives with the caller: connection,
/// creation and ingest failures end the admin flow, while listing failures
/// are advisory (the listing is informational only).
#[derive(Debug, Clone, Error)]
pub enum SearchAdminError {
    /// Precondition violated before any remote call (e.g. empty index name,
    /// duplicate document identifiers).
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Failed to reach the cluster or the cluster rejected authentication.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Failed to list the cluster's indexes.
    #[error("Listing error: {0}")]
    ListingError(String),

    /// The cluster rejected an index creation request.
    #[error("Index creation error: {0}")]
    IndexCreationError(String),

    /// A document write or the verification query failed.
    #[error("Ingest error: {0}")]
    IngestError(String),

    /// A response body did not have the expected shape.
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl SearchAdminError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a listing error.
    pub fn listing(msg: impl Into<String>) -> Self {
        Self::ListingError(msg.into())
    }

    /// Create an index creation error.
    pub fn index_creation(msg: impl Into<String>) -> Self {
        Self::IndexCreationError(msg.into())
    }

    /// Create an ingest error.
    pub fn ingest(msg: impl Into<String>) -> Self {
        Self::IngestError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }
}
