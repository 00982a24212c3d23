//! HTTP API Protocol
//!
//! Defines the route paths and the Data Transfer Objects (DTOs) exchanged
//! with the browser client as JSON.

use serde::{Deserialize, Serialize};

use crate::store::StoredRecord;

// --- API Endpoints ---

/// Liveness probe; always succeeds.
pub const ENDPOINT_HEALTH: &str = "/api/health";
/// Create (POST) and delete (DELETE, with `/:id`) a punch-in record.
pub const ENDPOINT_PUNCH_IN: &str = "/api/punch-in";
/// List all punch-in records, newest first.
pub const ENDPOINT_PUNCH_INS: &str = "/api/punch-ins";

// --- Data Transfer Objects ---

/// Body of `POST /api/punch-in`.
///
/// `timestamp` is modeled as an `Option` so its absence reaches the
/// handler, which turns it into a 400 rather than a deserialization error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePunchInRequest {
    pub timestamp: Option<String>,
    /// Defaults to false when omitted.
    pub manual_entry: Option<bool>,
}

/// Response of `GET /api/health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Success response of `POST /api/punch-in`; echoes the stored record
/// including its generated id.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatePunchInResponse {
    pub success: bool,
    pub message: String,
    pub data: StoredRecord,
}

/// Success response of `GET /api/punch-ins`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListPunchInsResponse {
    pub success: bool,
    pub data: Vec<StoredRecord>,
}

/// Success response of `DELETE /api/punch-in/:id`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeletePunchInResponse {
    pub success: bool,
    pub message: String,
}

/// Uniform failure body for every non-2xx response.
///
/// `message` carries the underlying storage error when there is one; a
/// hardened deployment would stop passing that through verbatim.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
