//! OpenSearch provider implementation.
//!
//! This module provides the concrete implementation of `SearchAdminProvider`
//! using the OpenSearch Rust crate.

use async_trait::async_trait;
use opensearch::{
    auth::Credentials,
    cert::CertificateValidation,
    cluster::ClusterHealthParts,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesCreateParts, IndicesExistsParts, IndicesGetAliasParts},
    params::Refresh,
    IndexParts, OpenSearch, SearchParts,
};
use serde_json::{json, Value};
use tracing::{debug, error, info};
use url::Url;

use search_admin_shared::{Document, IndexListing, IndexName};

use crate::errors::SearchAdminError;
use crate::interfaces::SearchAdminProvider;
use crate::opensearch::connection_config::ConnectionConfig;
use crate::types::ClusterIdentity;

/// OpenSearch provider implementation.
///
/// Implements the administrative operations against an OpenSearch cluster
/// over HTTPS with basic authentication.
///
/// # Example
///
/// ```ignore
/// use search_admin_repository::opensearch::{ConnectionConfig, OpenSearchProvider};
///
/// let config = ConnectionConfig::new("https://localhost:9200", "admin", "secret")
///     .with_verify_certs(false);
/// let provider = OpenSearchProvider::new(config)?;
///
/// let identity = provider.cluster_identity().await?;
/// println!("Connected to: {}", identity.name);
/// ```
pub struct OpenSearchProvider {
    client: OpenSearch,
    endpoint: String,
}

impl OpenSearchProvider {
    /// Create a new OpenSearch provider from the given connection config.
    ///
    /// Builds the transport but does not contact the cluster; the first
    /// remote call is `cluster_identity`.
    ///
    /// # Arguments
    ///
    /// * `config` - Endpoint, credentials and TLS verification mode
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchProvider)` - A new provider instance
    /// * `Err(SearchAdminError)` - If the endpoint URL is invalid or the
    ///   transport cannot be built
    pub fn new(config: ConnectionConfig) -> Result<Self, SearchAdminError> {
        let parsed_url =
            Url::parse(&config.endpoint).map_err(|e| SearchAdminError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let mut builder = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .auth(Credentials::Basic(
                config.username.clone(),
                config.password.clone(),
            ));
        if !config.verify_certs {
            builder = builder.cert_validation(CertificateValidation::None);
        }
        let transport = builder
            .build()
            .map_err(|e| SearchAdminError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(
            endpoint = %config.endpoint,
            username = %config.username,
            verify_certs = config.verify_certs,
            "Created OpenSearch provider"
        );

        Ok(Self {
            client,
            endpoint: config.endpoint,
        })
    }

    /// Extract the cluster identity from a `_cluster/health` response body.
    fn parse_cluster_identity(body: &Value) -> Result<ClusterIdentity, SearchAdminError> {
        let name = body
            .get("cluster_name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                SearchAdminError::parse("Cluster health response missing 'cluster_name'")
            })?;
        let health = body
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or("unknown");

        Ok(ClusterIdentity {
            name: name.to_string(),
            health: health.to_string(),
        })
    }

    /// Extract index names from a wildcard `_alias` response body.
    ///
    /// The response is an object whose keys are index names; the alias
    /// mappings under each key are not needed here.
    fn parse_index_listing(body: &Value) -> IndexListing {
        body.as_object()
            .map(|indexes| {
                indexes
                    .keys()
                    .filter_map(|name| IndexName::normalize(name))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Extract documents from a search response body.
    fn parse_search_hits(body: &Value) -> Result<Vec<Document>, SearchAdminError> {
        let hits = body
            .get("hits")
            .and_then(|h| h.get("hits"))
            .and_then(Value::as_array)
            .ok_or_else(|| SearchAdminError::parse("Search response missing 'hits.hits'"))?;

        let mut documents = Vec::with_capacity(hits.len());
        for hit in hits {
            let id = hit
                .get("_id")
                .and_then(Value::as_str)
                .ok_or_else(|| SearchAdminError::parse("Search hit missing '_id'"))?;
            let source = hit
                .get("_source")
                .ok_or_else(|| SearchAdminError::parse(format!("Search hit '{}' missing '_source'", id)))?;
            let document = Document::from_source(id, source).ok_or_else(|| {
                SearchAdminError::parse(format!("Search hit '{}' has a non-scalar source field", id))
            })?;
            documents.push(document);
        }

        Ok(documents)
    }
}

#[async_trait]
impl SearchAdminProvider for OpenSearchProvider {
    /// Request the cluster's identity via `_cluster/health`.
    ///
    /// The health endpoint reports the cluster's display name alongside its
    /// status, so a single round trip covers the handshake and a basic
    /// liveness signal.
    async fn cluster_identity(&self) -> Result<ClusterIdentity, SearchAdminError> {
        let response = self
            .client
            .cluster()
            .health(ClusterHealthParts::None)
            .send()
            .await
            .map_err(|e| SearchAdminError::connection(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Cluster health request failed");
            return Err(SearchAdminError::connection(format!(
                "Cluster health request failed with status {}: {}",
                status, error_body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SearchAdminError::connection(e.to_string()))?;
        let identity = Self::parse_cluster_identity(&body)?;

        info!(
            endpoint = %self.endpoint,
            cluster = %identity.name,
            health = %identity.health,
            "Connected to cluster"
        );
        Ok(identity)
    }

    /// List all index names via a wildcard alias lookup (`GET */_alias`).
    async fn list_indexes(&self) -> Result<IndexListing, SearchAdminError> {
        let response = self
            .client
            .indices()
            .get_alias(IndicesGetAliasParts::Index(&["*"]))
            .send()
            .await
            .map_err(|e| SearchAdminError::listing(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Alias listing request failed");
            return Err(SearchAdminError::listing(format!(
                "Alias listing failed with status {}: {}",
                status, error_body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SearchAdminError::listing(e.to_string()))?;
        let listing = Self::parse_index_listing(&body);

        debug!(index_count = listing.len(), "Fetched index listing");
        Ok(listing)
    }

    /// Check index existence via `HEAD {index}`.
    ///
    /// A 404 means the index is absent; any other non-success status is a
    /// failure of the creation flow this check belongs to.
    async fn index_exists(&self, name: &IndexName) -> Result<bool, SearchAdminError> {
        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[name.as_str()]))
            .send()
            .await
            .map_err(|e| SearchAdminError::index_creation(e.to_string()))?;

        let status = response.status_code();
        if status.as_u16() == 404 {
            return Ok(false);
        }
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Index existence check failed");
            return Err(SearchAdminError::index_creation(format!(
                "Existence check for '{}' failed with status {}: {}",
                name, status, error_body
            )));
        }

        Ok(true)
    }

    async fn create_index(&self, name: &IndexName) -> Result<(), SearchAdminError> {
        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(name.as_str()))
            .send()
            .await
            .map_err(|e| SearchAdminError::index_creation(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Index creation request failed");
            return Err(SearchAdminError::index_creation(format!(
                "Creation of '{}' failed with status {}: {}",
                name, status, error_body
            )));
        }

        info!(index = %name, "Index created");
        Ok(())
    }

    /// Write a document with `refresh=true` so it is visible to the
    /// verification read that follows.
    async fn index_document(
        &self,
        index: &IndexName,
        document: &Document,
    ) -> Result<(), SearchAdminError> {
        let response = self
            .client
            .index(IndexParts::IndexId(index.as_str(), &document.id))
            .refresh(Refresh::True)
            .body(document.to_source())
            .send()
            .await
            .map_err(|e| SearchAdminError::ingest(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Index document request failed");
            return Err(SearchAdminError::ingest(format!(
                "Indexing '{}' into '{}' failed with status {}: {}",
                document.id, index, status, error_body
            )));
        }

        debug!(index = %index, doc_id = %document.id, "Document indexed");
        Ok(())
    }

    /// Read back every document via a match-all search.
    async fn fetch_all_documents(
        &self,
        index: &IndexName,
    ) -> Result<Vec<Document>, SearchAdminError> {
        let response = self
            .client
            .search(SearchParts::Index(&[index.as_str()]))
            .body(json!({
                "query": {
                    "match_all": {}
                }
            }))
            .send()
            .await
            .map_err(|e| SearchAdminError::ingest(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Verification search failed");
            return Err(SearchAdminError::ingest(format!(
                "Verification search on '{}' failed with status {}: {}",
                index, status, error_body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SearchAdminError::ingest(e.to_string()))?;
        let documents = Self::parse_search_hits(&body)?;

        debug!(index = %index, hit_count = documents.len(), "Fetched documents");
        Ok(documents)
    }
}
