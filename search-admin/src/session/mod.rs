//! The interactive admin session.
//!
//! Drives the linear administration flow: connect and identify, list
//! indexes, optionally create a new index and seed it with the demo
//! inventory, then verify the documents read back.

use tracing::{error, info, warn};

use search_admin_repository::{CreateOutcome, SearchAdminService};
use search_admin_shared::{Document, IndexName};

use crate::dataset::demo_inventory;
use crate::errors::AdminCliError;
use crate::prompt::Prompter;

/// How an admin session ended, short of a fatal error.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// The user declined to create an index.
    Declined,
    /// The user provided no index name at the prompt.
    NoNameProvided,
    /// The requested index already exists; nothing was created or ingested.
    AlreadyExists(IndexName),
    /// A new index was created, seeded, and verified. Carries the documents
    /// the verification query returned.
    Seeded {
        index: IndexName,
        documents: Vec<Document>,
    },
}

/// The interactive admin session.
///
/// Owns the service and a prompter for the session's lifetime and acts as
/// the single top-level error handler: every fatal error propagates out of
/// [`run`](Self::run) to terminate the process, while the advisory listing
/// failure is handled here.
pub struct AdminSession<P: Prompter> {
    service: SearchAdminService,
    prompter: P,
}

impl<P: Prompter> AdminSession<P> {
    /// Create a new session over the given service and prompter.
    pub fn new(service: SearchAdminService, prompter: P) -> Self {
        Self { service, prompter }
    }

    /// Run the admin session.
    ///
    /// Returns the session outcome on success or graceful decline. Connection,
    /// creation and ingest failures are fatal and propagate as errors;
    /// listing failures are advisory (see `list_indexes_advisory`).
    pub async fn run(&mut self) -> Result<SessionOutcome, AdminCliError> {
        let identity = self.service.connect_and_identify().await.map_err(|e| {
            error!(error = %e, "Could not connect to OpenSearch");
            e
        })?;
        println!("Connected to: {}", identity.name);

        self.list_indexes_advisory().await;

        println!();
        println!("--- Create New Index ---");
        if !self
            .prompter
            .confirm("Do you want to create a new index? (yes/no): ")?
        {
            println!("No new index will be created. Exiting.");
            return Ok(SessionOutcome::Declined);
        }

        let raw_name = self.prompter.read_line("Enter the name for the new index: ")?;
        let Some(index) = IndexName::normalize(&raw_name) else {
            println!("No index name provided. Exiting.");
            return Ok(SessionOutcome::NoNameProvided);
        };

        match self.service.create_index_if_absent(index.as_str()).await? {
            CreateOutcome::AlreadyExists => {
                println!(
                    "Index '{}' already exists. No new index will be created.",
                    index
                );
                return Ok(SessionOutcome::AlreadyExists(index));
            }
            CreateOutcome::Created => {
                println!("Index '{}' created.", index);
            }
        }

        println!("Adding demo data to '{}'...", index);
        let documents = self
            .service
            .ingest_and_verify(&index, &demo_inventory())
            .await?;
        info!(index = %index, document_count = documents.len(), "Demo data verified");

        println!();
        println!("Fetching demo data from '{}':", index);
        if documents.is_empty() {
            println!("No documents found in the new index.");
        } else {
            for document in &documents {
                println!("  ID: {}, Source: {}", document.id, document.to_source());
            }
        }

        Ok(SessionOutcome::Seeded { index, documents })
    }

    /// List and display the cluster's indexes.
    ///
    /// Listing is advisory: the display is informational only, so a
    /// `ListingError` is logged and the session continues. Mutating
    /// operations stay fatal because continuing past them would act on
    /// unknown remote state.
    async fn list_indexes_advisory(&self) {
        println!();
        println!("--- Available OpenSearch Indexes ---");
        match self.service.list_indexes().await {
            Ok(listing) if listing.is_empty() => println!("No indexes found."),
            Ok(listing) => {
                for name in &listing {
                    println!("- {}", name);
                }
            }
            Err(e) => {
                warn!(error = %e, "Error fetching index list, continuing without it");
                println!("Error fetching index list: {}", e);
            }
        }
    }
}
