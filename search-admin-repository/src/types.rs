//! Request and response types for search admin operations.

/// Identity metadata reported by the cluster on connect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterIdentity {
    /// The cluster's display name.
    pub name: String,
    /// The cluster's health status string ("green", "yellow", "red").
    pub health: String,
}

/// Outcome of an idempotent index creation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The index did not exist and was created.
    Created,
    /// The index already existed; no mutation was performed.
    AlreadyExists,
}

impl CreateOutcome {
    /// Whether the cluster state was mutated.
    pub fn created(&self) -> bool {
        matches!(self, Self::Created)
    }
}
