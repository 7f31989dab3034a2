use serde::Serialize;

/// One append-only row per completed assessment. Instrument payloads are
/// stored as opaque JSON blobs so the archive schema survives catalog edits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchivedSession {
    pub session_id: String,
    pub investor_data: serde_json::Value,
    pub literacy_data: serde_json::Value,
    pub risk_data: serde_json::Value,
    pub completed_at: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("archive unavailable: {0}")]
    Unavailable(String),
}

/// Destination for completed sessions. Inserts are fire-and-forget from the
/// caller's perspective: a failure is reported but must never block the
/// participant from seeing their results.
pub trait SessionArchive: Send + Sync {
    fn insert(&self, record: ArchivedSession) -> Result<(), ArchiveError>;
}
