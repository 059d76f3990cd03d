//! Search Admin Main Entry Point
//!
//! This is the main binary for the OpenSearch admin console. It connects to
//! the configured cluster, lists indexes, and interactively creates and
//! seeds a new index.

use dotenv::dotenv;
use search_admin::{AdminCliError, Dependencies};
use std::env;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("search_admin=info,search_admin_repository=info"));

    let json_logs = env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .init();

        info!(
            service_name = "search-admin",
            service_version = env!("CARGO_PKG_VERSION"),
            "Tracing initialized with JSON format"
        );
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .init();

        info!(
            service_name = "search-admin",
            service_version = env!("CARGO_PKG_VERSION"),
            "Tracing initialized with console output"
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), AdminCliError> {
    // Load environment variables from .env file
    dotenv().ok();

    init_tracing();

    info!("Starting OpenSearch admin console");

    let mut deps = match Dependencies::new() {
        Ok(deps) => {
            info!("Dependencies initialized successfully");
            deps
        }
        Err(e) => {
            error!(error = %e, "Failed to initialize dependencies");
            return Err(e);
        }
    };

    match deps.session.run().await {
        Ok(outcome) => {
            info!(outcome = ?outcome, "Admin session completed");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Admin session failed");
            Err(e)
        }
    }
}
