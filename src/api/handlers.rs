use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;

use super::protocol::{
    CreatePunchInRequest, CreatePunchInResponse, DeletePunchInResponse, ErrorResponse,
    HealthResponse, ListPunchInsResponse,
};
use crate::store::{new_record_id, DocumentStore, PunchInRecord, StoreError, PUNCH_IN_TYPE};

/// Error half of every handler; carries the status code together with the
/// uniform `{error, message}` body.
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    fn validation(error: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse {
                error: error.to_string(),
                message: None,
            },
        }
    }

    /// Maps a storage failure onto the HTTP surface: a disconnected
    /// gateway is 503, everything else (including not-found deletes, to
    /// match the original contract) is 500 with the underlying message.
    fn storage(error: &str, err: StoreError) -> Self {
        let status = match err {
            StoreError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            body: ErrorResponse {
                error: error.to_string(),
                message: Some(err.to_string()),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Server is running".to_string(),
    })
}

pub async fn handle_create_punch_in(
    Extension(store): Extension<Arc<dyn DocumentStore>>,
    Json(req): Json<CreatePunchInRequest>,
) -> Result<(StatusCode, Json<CreatePunchInResponse>), ApiError> {
    let timestamp = match req.timestamp {
        Some(timestamp) if !timestamp.is_empty() => timestamp,
        _ => return Err(ApiError::validation("Timestamp is required")),
    };

    let record = PunchInRecord::new(timestamp, req.manual_entry.unwrap_or(false));
    let id = new_record_id();

    if let Err(err) = store.insert(&id, &record).await {
        tracing::error!("Failed to save punch-in {}: {}", id, err);
        return Err(ApiError::storage("Failed to save punch-in", err));
    }

    Ok((
        StatusCode::CREATED,
        Json(CreatePunchInResponse {
            success: true,
            message: "Punch-in recorded successfully".to_string(),
            data: crate::store::StoredRecord { id, record },
        }),
    ))
}

pub async fn handle_list_punch_ins(
    Extension(store): Extension<Arc<dyn DocumentStore>>,
) -> Result<Json<ListPunchInsResponse>, ApiError> {
    match store.query_all_by_type(PUNCH_IN_TYPE).await {
        Ok(data) => Ok(Json(ListPunchInsResponse {
            success: true,
            data,
        })),
        Err(err) => {
            tracing::error!("Failed to fetch punch-ins: {}", err);
            Err(ApiError::storage("Failed to fetch punch-ins", err))
        }
    }
}

pub async fn handle_delete_punch_in(
    Extension(store): Extension<Arc<dyn DocumentStore>>,
    Path(id): Path<String>,
) -> Result<Json<DeletePunchInResponse>, ApiError> {
    if let Err(err) = store.remove(&id).await {
        tracing::error!("Failed to delete punch-in {}: {}", id, err);
        return Err(ApiError::storage("Failed to delete punch-in", err));
    }

    Ok(Json(DeletePunchInResponse {
        success: true,
        message: "Punch-in deleted successfully".to_string(),
    }))
}
