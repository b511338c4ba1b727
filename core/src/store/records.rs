use serde::{Deserialize, Serialize};

/// Lifecycle tag for a stored contract.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    Draft,
    Completed,
    Analyzed,
}

/// A persisted contract, either generated or uploaded for analysis.
///
/// Records are scoped by `owner_id`; the core generator and analyzer
/// never read or write them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContractRecord {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub contract_type: String,
    pub content: String,
    pub content_sha256: String,
    /// RFC 3339, assigned at insertion.
    pub created_at: String,
    pub status: ContractStatus,
    pub risk_score: Option<u8>,
}

/// Fields for a new record; id, content hash, and timestamp are
/// assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewContract {
    pub title: String,
    pub contract_type: String,
    pub content: String,
    /// Defaults to `Completed` when absent.
    pub status: Option<ContractStatus>,
    pub risk_score: Option<u8>,
}

/// Partial update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ContractUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<ContractStatus>,
    pub risk_score: Option<u8>,
}

/// Per-owner record counts by status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OwnerStats {
    pub total_contracts: usize,
    pub completed_contracts: usize,
    pub analyzed_contracts: usize,
    pub draft_contracts: usize,
}
