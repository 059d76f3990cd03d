//! Search admin provider trait definition.
//!
//! This module defines the abstract interface for administrative operations
//! against a document-search backend, allowing for different implementations
//! (OpenSearch, Elasticsearch, mocks in tests).

use async_trait::async_trait;

use search_admin_shared::{Document, IndexListing, IndexName};

use crate::errors::SearchAdminError;
use crate::types::ClusterIdentity;

/// Abstracts the underlying search backend (OpenSearch, Elasticsearch, etc.).
///
/// This trait defines the interface for all backend implementations.
/// Implementations are injected into `SearchAdminService` to enable
/// dependency injection and easy testing with mock implementations.
///
/// All methods return `Result<T, SearchAdminError>` for consistent error
/// handling across backends.
#[async_trait]
pub trait SearchAdminProvider: Send + Sync {
    /// Request the cluster's identity metadata.
    ///
    /// # Returns
    ///
    /// * `Ok(ClusterIdentity)` - The cluster's display name and health status
    /// * `Err(SearchAdminError::ConnectionError)` - If the cluster is
    ///   unreachable or rejects authentication
    async fn cluster_identity(&self) -> Result<ClusterIdentity, SearchAdminError>;

    /// List all index names known to the cluster via a wildcard alias lookup.
    ///
    /// An empty listing is a valid result, not an error.
    ///
    /// # Returns
    ///
    /// * `Ok(IndexListing)` - The index names at this point in time
    /// * `Err(SearchAdminError::ListingError)` - On transport or server error
    async fn list_indexes(&self) -> Result<IndexListing, SearchAdminError>;

    /// Check whether an index exists.
    async fn index_exists(&self, name: &IndexName) -> Result<bool, SearchAdminError>;

    /// Create an index.
    ///
    /// Callers are expected to check existence first; the service-level
    /// `create_index_if_absent` does so.
    async fn create_index(&self, name: &IndexName) -> Result<(), SearchAdminError>;

    /// Write a single document with immediate visibility.
    ///
    /// The write is acknowledged only once it is visible to subsequent
    /// reads; no eventual-consistency window is tolerated.
    async fn index_document(
        &self,
        index: &IndexName,
        document: &Document,
    ) -> Result<(), SearchAdminError>;

    /// Read back every document in an index via a match-all query.
    async fn fetch_all_documents(
        &self,
        index: &IndexName,
    ) -> Result<Vec<Document>, SearchAdminError>;
}
