//! OpenSearch connection configuration.

use std::fmt;

/// Connection parameters for the OpenSearch cluster.
///
/// Owned by the provider for the process lifetime; created at startup and
/// never mutated afterwards. Credentials are passed through to the cluster
/// as HTTP basic authentication.
#[derive(Clone)]
pub struct ConnectionConfig {
    /// Cluster endpoint, e.g. "https://localhost:9200".
    pub endpoint: String,
    /// Basic-auth username.
    pub username: String,
    /// Basic-auth password.
    pub password: String,
    /// Whether to validate the cluster's TLS certificate. Disabling this is
    /// insecure and intended for local clusters with self-signed
    /// certificates only.
    pub verify_certs: bool,
}

impl ConnectionConfig {
    /// Create a configuration with certificate validation enabled.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The cluster URL, e.g. "https://localhost:9200"
    /// * `username` - Basic-auth username
    /// * `password` - Basic-auth password
    pub fn new(
        endpoint: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            username: username.into(),
            password: password.into(),
            verify_certs: true,
        }
    }

    /// Set whether the cluster's TLS certificate is validated.
    pub fn with_verify_certs(mut self, verify_certs: bool) -> Self {
        self.verify_certs = verify_certs;
        self
    }
}

// Manual Debug so the password never lands in logs.
impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("verify_certs", &self.verify_certs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_to_verified_certs() {
        let config = ConnectionConfig::new("https://localhost:9200", "admin", "secret");
        assert!(config.verify_certs);
    }

    #[test]
    fn test_with_verify_certs_disables_validation() {
        let config =
            ConnectionConfig::new("https://localhost:9200", "admin", "secret").with_verify_certs(false);
        assert!(!config.verify_certs);
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = ConnectionConfig::new("https://localhost:9200", "admin", "secret");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
