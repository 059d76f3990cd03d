//! Search admin service implementation.
//!
//! This module provides the main service for administering the search
//! cluster. Application code uses this to identify the cluster, list
//! indexes, create indexes idempotently and ingest documents.

use std::collections::HashSet;

use tracing::{debug, info};

use search_admin_shared::{Document, IndexListing, IndexName};

use crate::errors::SearchAdminError;
use crate::interfaces::SearchAdminProvider;
use crate::types::{ClusterIdentity, CreateOutcome};

/// The main service for administering the search cluster.
///
/// This is the high-level API that application code should use. It provides
/// input validation and delegates to a `SearchAdminProvider` for actual
/// backend operations. All operations return `SearchAdminError` for
/// consistent error handling.
///
/// # Example
///
/// ```no_run
/// use search_admin_repository::opensearch::{ConnectionConfig, OpenSearchProvider};
/// use search_admin_repository::SearchAdminService;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ConnectionConfig::new("https://localhost:9200", "admin", "secret");
/// let provider = Box::new(OpenSearchProvider::new(config)?);
/// let service = SearchAdminService::new(provider);
///
/// let identity = service.connect_and_identify().await?;
/// println!("Connected to: {}", identity.name);
/// # Ok(())
/// # }
/// ```
pub struct SearchAdminService {
    provider: Box<dyn SearchAdminProvider>,
}

impl SearchAdminService {
    /// Create a new service over the given provider.
    ///
    /// # Arguments
    ///
    /// * `provider` - A boxed implementation of `SearchAdminProvider`
    ///   (e.g. `OpenSearchProvider`)
    pub fn new(provider: Box<dyn SearchAdminProvider>) -> Self {
        Self { provider }
    }

    /// Establish the connection and request the cluster's identity.
    ///
    /// # Returns
    ///
    /// * `Ok(ClusterIdentity)` - The cluster's display name and health
    /// * `Err(SearchAdminError::ConnectionError)` - If the cluster is
    ///   unreachable or rejects authentication; fatal for the caller
    pub async fn connect_and_identify(&self) -> Result<ClusterIdentity, SearchAdminError> {
        self.provider.cluster_identity().await
    }

    /// List all index names known to the cluster.
    ///
    /// An empty listing is a valid result. Failures are `ListingError`;
    /// whether that is fatal is the caller's policy (the interactive
    /// session treats the listing as advisory).
    pub async fn list_indexes(&self) -> Result<IndexListing, SearchAdminError> {
        self.provider.list_indexes().await
    }

    /// Create an index if it does not exist yet.
    ///
    /// The raw name is normalized (trimmed, lower-cased) first. An empty
    /// name is a precondition violation reported without contacting the
    /// cluster. If the index already exists the operation is a no-op and
    /// reports `AlreadyExists`; calling twice in sequence with the same
    /// name yields `Created` then `AlreadyExists`.
    ///
    /// # Arguments
    ///
    /// * `raw_name` - The index name as entered, normalized internally
    ///
    /// # Returns
    ///
    /// * `Ok(CreateOutcome)` - `Created` or `AlreadyExists`
    /// * `Err(SearchAdminError::ValidationError)` - If the name is empty
    ///   after normalization
    /// * `Err(SearchAdminError::IndexCreationError)` - If the cluster
    ///   rejects the existence check or the creation request
    pub async fn create_index_if_absent(
        &self,
        raw_name: &str,
    ) -> Result<CreateOutcome, SearchAdminError> {
        let name = IndexName::normalize(raw_name).ok_or_else(|| {
            SearchAdminError::validation("Index name must not be empty after normalization")
        })?;

        if self.provider.index_exists(&name).await? {
            debug!(index = %name, "Index already exists, skipping creation");
            return Ok(CreateOutcome::AlreadyExists);
        }

        self.provider.create_index(&name).await?;
        Ok(CreateOutcome::Created)
    }

    /// Ingest documents with immediate visibility, then read them back.
    ///
    /// Each document identifier must be unique within the call; duplicates
    /// are rejected before any write is issued. Every write is acknowledged
    /// only once visible to reads, so the verification query that follows
    /// observes all of them. Partial writes before a failure are not rolled
    /// back.
    ///
    /// # Arguments
    ///
    /// * `index` - The target index; must already exist
    /// * `documents` - The documents to write, in order
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Document>)` - The documents read back by the match-all
    ///   verification query
    /// * `Err(SearchAdminError::ValidationError)` - On duplicate identifiers
    /// * `Err(SearchAdminError::IngestError)` - If any write or the
    ///   verification query fails
    pub async fn ingest_and_verify(
        &self,
        index: &IndexName,
        documents: &[Document],
    ) -> Result<Vec<Document>, SearchAdminError> {
        let mut seen = HashSet::new();
        for document in documents {
            if !seen.insert(document.id.as_str()) {
                return Err(SearchAdminError::validation(format!(
                    "Duplicate document identifier '{}' in ingest batch",
                    document.id
                )));
            }
        }

        for document in documents {
            self.provider.index_document(index, document).await?;
        }

        info!(
            index = %index,
            document_count = documents.len(),
            "Ingest complete, running verification query"
        );

        self.provider.fetch_all_documents(index).await
    }
}
