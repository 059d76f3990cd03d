//! # Search Admin
//!
//! Interactive administration console for an OpenSearch cluster: connects
//! and identifies the cluster, lists existing indexes, and optionally
//! creates a new index seeded with a demo inventory that is read back for
//! verification.
//!
//! ## Architecture
//!
//! The console is a linear flow over a small set of components:
//!
//! 1. **Config**: Reads connection settings from the environment
//! 2. **Prompt**: Line-oriented stdin prompts behind a trait
//! 3. **Session**: Drives the connect → list → create → ingest flow
//! 4. **Dataset**: The demo inventory seeded into a fresh index
//!
//! ## Modules
//!
//! - [`config`]: Configuration and dependency initialization
//! - [`prompt`]: Interactive prompting
//! - [`session`]: The admin session flow
//! - [`dataset`]: Demo documents
//! - [`errors`]: Error types for the console

pub mod config;
pub mod dataset;
pub mod errors;
pub mod prompt;
pub mod session;

pub use config::Dependencies;
pub use errors::AdminCliError;
pub use session::{AdminSession, SessionOutcome};
