//! Dependency initialization and wiring for the admin console.

use std::env;

use tracing::{info, warn};

use search_admin_repository::{ConnectionConfig, OpenSearchProvider, SearchAdminService};

use crate::errors::AdminCliError;
use crate::prompt::StdinPrompter;
use crate::session::AdminSession;

/// Default OpenSearch URL.
const DEFAULT_OPENSEARCH_URL: &str = "https://localhost:9200";

/// Default basic-auth username.
const DEFAULT_USERNAME: &str = "admin";

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured session ready to run.
    pub session: AdminSession<StdinPrompter>,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OPENSEARCH_URL`: Cluster URL (default: https://localhost:9200)
    /// - `OPENSEARCH_USERNAME`: Basic-auth username (default: admin)
    /// - `OPENSEARCH_PASSWORD`: Basic-auth password (required)
    /// - `OPENSEARCH_VERIFY_CERTS`: TLS certificate validation - "true" or
    ///   "false" (default: true)
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(AdminCliError)` - If configuration is missing or the provider
    ///   cannot be built; nothing has contacted the cluster at this point
    pub fn new() -> Result<Self, AdminCliError> {
        let endpoint =
            env::var("OPENSEARCH_URL").unwrap_or_else(|_| DEFAULT_OPENSEARCH_URL.to_string());
        let username =
            env::var("OPENSEARCH_USERNAME").unwrap_or_else(|_| DEFAULT_USERNAME.to_string());
        let password = env::var("OPENSEARCH_PASSWORD")
            .map_err(|_| AdminCliError::config("OPENSEARCH_PASSWORD is not set"))?;
        let verify_certs =
            parse_verify_certs(env::var("OPENSEARCH_VERIFY_CERTS").ok().as_deref());

        info!(
            endpoint = %endpoint,
            username = %username,
            verify_certs = verify_certs,
            "Initializing dependencies"
        );

        let connection = ConnectionConfig::new(endpoint, username, password)
            .with_verify_certs(verify_certs);
        let provider = OpenSearchProvider::new(connection).map_err(|e| {
            AdminCliError::config(format!("Failed to create OpenSearch provider: {}", e))
        })?;
        let service = SearchAdminService::new(Box::new(provider));
        let session = AdminSession::new(service, StdinPrompter::new());

        Ok(Self { session })
    }
}

/// Parse the certificate-validation toggle.
///
/// Unset means validation stays enabled. An unrecognized value also keeps
/// validation enabled, since silently downgrading to insecure on a typo
/// would be the wrong failure mode.
fn parse_verify_certs(raw: Option<&str>) -> bool {
    match raw {
        None => true,
        Some(value) => match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" => true,
            "false" | "0" | "no" => false,
            _ => {
                warn!("Invalid OPENSEARCH_VERIFY_CERTS, keeping certificate validation enabled");
                true
            }
        },
    }
}
