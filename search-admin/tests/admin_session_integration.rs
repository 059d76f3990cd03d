//! Integration tests for the admin session.
//!
//! These tests use the real AdminSession but mock dependencies (the
//! SearchAdminProvider backend and a scripted Prompter) to ensure reliable
//! testing without a cluster.

use std::collections::{BTreeSet, VecDeque};
use std::io;
use std::sync::Arc;

use tokio::sync::Mutex;

use search_admin::errors::AdminCliError;
use search_admin::prompt::Prompter;
use search_admin::session::{AdminSession, SessionOutcome};
use search_admin_repository::{
    ClusterIdentity, SearchAdminError, SearchAdminProvider, SearchAdminService,
};
use search_admin_shared::{Document, FieldValue, IndexListing, IndexName};

/// Prompter that replays a scripted sequence of answers.
struct ScriptedPrompter {
    answers: VecDeque<&'static str>,
}

impl ScriptedPrompter {
    fn new(answers: Vec<&'static str>) -> Self {
        Self {
            answers: answers.into(),
        }
    }

    fn next_answer(&mut self) -> io::Result<String> {
        self.answers
            .pop_front()
            .map(str::to_string)
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted input left"))
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, _question: &str) -> io::Result<bool> {
        Ok(self.next_answer()?.trim().eq_ignore_ascii_case("yes"))
    }

    fn read_line(&mut self, _prompt: &str) -> io::Result<String> {
        self.next_answer()
    }
}

/// Mock backend with shared state so tests can inspect it after the run
/// and share a "cluster" between two sessions.
struct MockProvider {
    indexes: Arc<Mutex<BTreeSet<String>>>,
    stored: Arc<Mutex<Vec<Document>>>,
    calls: Arc<Mutex<Vec<String>>>,
    fail_connection: bool,
    fail_listing: bool,
}

impl MockProvider {
    fn new() -> Self {
        Self {
            indexes: Arc::new(Mutex::new(BTreeSet::new())),
            stored: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_connection: false,
            fail_listing: false,
        }
    }

    /// A second provider over the same mock cluster state.
    fn sharing_cluster(&self) -> Self {
        Self {
            indexes: Arc::clone(&self.indexes),
            stored: Arc::clone(&self.stored),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_connection: false,
            fail_listing: false,
        }
    }
}

#[async_trait::async_trait]
impl SearchAdminProvider for MockProvider {
    async fn cluster_identity(&self) -> Result<ClusterIdentity, SearchAdminError> {
        self.calls.lock().await.push("cluster_identity".to_string());
        if self.fail_connection {
            return Err(SearchAdminError::connection("Mock connection refused"));
        }
        Ok(ClusterIdentity {
            name: "mock-cluster".to_string(),
            health: "green".to_string(),
        })
    }

    async fn list_indexes(&self) -> Result<IndexListing, SearchAdminError> {
        self.calls.lock().await.push("list_indexes".to_string());
        if self.fail_listing {
            return Err(SearchAdminError::listing("Mock listing failure"));
        }
        Ok(self
            .indexes
            .lock()
            .await
            .iter()
            .filter_map(|name| IndexName::normalize(name))
            .collect())
    }

    async fn index_exists(&self, name: &IndexName) -> Result<bool, SearchAdminError> {
        self.calls
            .lock()
            .await
            .push(format!("index_exists:{}", name));
        Ok(self.indexes.lock().await.contains(name.as_str()))
    }

    async fn create_index(&self, name: &IndexName) -> Result<(), SearchAdminError> {
        self.calls
            .lock()
            .await
            .push(format!("create_index:{}", name));
        self.indexes.lock().await.insert(name.as_str().to_string());
        Ok(())
    }

    async fn index_document(
        &self,
        index: &IndexName,
        document: &Document,
    ) -> Result<(), SearchAdminError> {
        self.calls
            .lock()
            .await
            .push(format!("index_document:{}:{}", index, document.id));
        self.stored.lock().await.push(document.clone());
        Ok(())
    }

    async fn fetch_all_documents(
        &self,
        index: &IndexName,
    ) -> Result<Vec<Document>, SearchAdminError> {
        self.calls
            .lock()
            .await
            .push(format!("fetch_all_documents:{}", index));
        Ok(self.stored.lock().await.clone())
    }
}

fn session_with(provider: MockProvider, answers: Vec<&'static str>) -> AdminSession<ScriptedPrompter> {
    AdminSession::new(
        SearchAdminService::new(Box::new(provider)),
        ScriptedPrompter::new(answers),
    )
}

#[tokio::test]
async fn test_session_declines_gracefully() {
    let provider = MockProvider::new();
    let calls = Arc::clone(&provider.calls);
    let mut session = session_with(provider, vec!["no"]);

    let outcome = session.run().await.unwrap();

    assert_eq!(outcome, SessionOutcome::Declined);
    let calls = calls.lock().await;
    assert!(calls.iter().all(|c| !c.starts_with("create_index")));
    assert!(calls.iter().all(|c| !c.starts_with("index_document")));
}

#[tokio::test]
async fn test_session_empty_index_name_is_graceful() {
    let provider = MockProvider::new();
    let calls = Arc::clone(&provider.calls);
    let mut session = session_with(provider, vec!["yes", "   "]);

    let outcome = session.run().await.unwrap();

    assert_eq!(outcome, SessionOutcome::NoNameProvided);
    // The service is never contacted about the empty name.
    let calls = calls.lock().await;
    assert!(calls.iter().all(|c| !c.starts_with("index_exists")));
    assert!(calls.iter().all(|c| !c.starts_with("create_index")));
}

#[tokio::test]
async fn test_end_to_end_create_ingest_verify() {
    let provider = MockProvider::new();
    let indexes = Arc::clone(&provider.indexes);
    let mut session = session_with(provider, vec!["yes", "Electronics"]);

    let outcome = session.run().await.unwrap();

    let SessionOutcome::Seeded { index, documents } = outcome else {
        panic!("expected a seeded session, got {:?}", outcome);
    };
    assert_eq!(index.as_str(), "electronics");
    assert!(indexes.lock().await.contains("electronics"));

    assert_eq!(documents.len(), 3);
    let ids: BTreeSet<&str> = documents.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, BTreeSet::from(["dummy_1", "dummy_2", "dummy_3"]));

    let laptop = documents.iter().find(|d| d.id == "dummy_1").unwrap();
    assert_eq!(laptop.field("price"), Some(&FieldValue::Integer(1200)));
    assert_eq!(laptop.field("item"), Some(&FieldValue::Text("Laptop".to_string())));
    assert_eq!(laptop.field("in_stock"), Some(&FieldValue::Bool(true)));
}

#[tokio::test]
async fn test_existing_index_skips_ingest() {
    let provider = MockProvider::new();
    provider
        .indexes
        .try_lock()
        .unwrap()
        .insert("electronics".to_string());
    let calls = Arc::clone(&provider.calls);
    let mut session = session_with(provider, vec!["yes", "electronics"]);

    let outcome = session.run().await.unwrap();

    assert_eq!(
        outcome,
        SessionOutcome::AlreadyExists(IndexName::normalize("electronics").unwrap())
    );
    let calls = calls.lock().await;
    assert!(calls.iter().all(|c| !c.starts_with("create_index")));
    assert!(calls.iter().all(|c| !c.starts_with("index_document")));
}

#[tokio::test]
async fn test_listing_failure_is_advisory() {
    let provider = MockProvider {
        fail_listing: true,
        ..MockProvider::new()
    };
    let mut session = session_with(provider, vec!["yes", "electronics"]);

    // The session proceeds to a full create-and-seed despite the listing error.
    let outcome = session.run().await.unwrap();

    assert!(matches!(outcome, SessionOutcome::Seeded { .. }));
}

#[tokio::test]
async fn test_connection_failure_is_fatal() {
    let provider = MockProvider {
        fail_connection: true,
        ..MockProvider::new()
    };
    let calls = Arc::clone(&provider.calls);
    let mut session = session_with(provider, vec!["yes", "electronics"]);

    let result = session.run().await;

    assert!(matches!(
        result,
        Err(AdminCliError::AdminError(SearchAdminError::ConnectionError(_)))
    ));
    // Nothing past the handshake runs.
    assert_eq!(*calls.lock().await, vec!["cluster_identity".to_string()]);
}

#[tokio::test]
async fn test_create_is_idempotent_across_sessions() {
    let first_provider = MockProvider::new();
    let second_provider = first_provider.sharing_cluster();
    let second_calls = Arc::clone(&second_provider.calls);

    let mut first = session_with(first_provider, vec!["yes", "electronics"]);
    let outcome = first.run().await.unwrap();
    assert!(matches!(outcome, SessionOutcome::Seeded { .. }));

    let mut second = session_with(second_provider, vec!["yes", "electronics"]);
    let outcome = second.run().await.unwrap();
    assert_eq!(
        outcome,
        SessionOutcome::AlreadyExists(IndexName::normalize("electronics").unwrap())
    );
    // The second call performed no mutation.
    let calls = second_calls.lock().await;
    assert!(calls.iter().all(|c| !c.starts_with("create_index")));
}
