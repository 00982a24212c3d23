use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Discriminator value stored in every punch-in document.
///
/// The read query filters on this field, so it must match between the
/// write and read paths.
pub const PUNCH_IN_TYPE: &str = "punch-in";

/// A punch-in event as persisted in the document store.
///
/// The document key (`id`) lives outside the document itself; see
/// [`StoredRecord`] for the key + document pairing returned by queries.
/// `timestamp` is kept as the verbatim ISO-8601 string the client sent so
/// it round-trips byte-identically through storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PunchInRecord {
    /// The punch-in moment, user-supplied or taken from the client clock.
    pub timestamp: String,
    /// True when the user typed the time instead of using "now".
    pub manual_entry: bool,
    /// Server-assigned write time, RFC 3339 with millisecond precision.
    pub created_at: String,
    /// Always [`PUNCH_IN_TYPE`].
    #[serde(rename = "type")]
    pub doc_type: String,
}

impl PunchInRecord {
    /// Builds a new record with a server-assigned `createdAt`.
    pub fn new(timestamp: String, manual_entry: bool) -> Self {
        Self {
            timestamp,
            manual_entry,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            doc_type: PUNCH_IN_TYPE.to_string(),
        }
    }
}

/// A document paired with its storage key, as returned by queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: String,
    #[serde(flatten)]
    pub record: PunchInRecord,
}

/// Generates a fresh document key.
///
/// UUID v4 behind a readable prefix; callers must treat the exact format
/// as opaque.
pub fn new_record_id() -> String {
    format!("{}::{}", PUNCH_IN_TYPE, uuid::Uuid::new_v4())
}

/// Failures surfaced by any [`DocumentStore`](super::DocumentStore) call.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The gateway never connected (or was constructed disconnected).
    /// Every call fails with this until the process is restarted.
    #[error("document store is not connected")]
    Unavailable,
    #[error("document {id} already exists")]
    DuplicateKey { id: String },
    #[error("document {id} not found")]
    NotFound { id: String },
    #[error("failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Backend(#[from] sqlx::Error),
}
