//! HTTP API
//!
//! Stateless route handlers over the Storage Gateway.
//!
//! ## Core Concepts
//! - **One handler per operation**: health, create, list, delete; each
//!   request is handled atomically start-to-finish with no cross-request
//!   state beyond the shared store handle.
//! - **Uniform errors**: storage failures become `{error, message}` bodies
//!   with 503 for a disconnected store and 500 for everything else.
//! - **SPA fallback**: any unmatched route serves the embedded UI page.

pub mod handlers;
pub mod protocol;


use axum::extract::Extension;
use axum::routing::{delete, get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::store::DocumentStore;
use protocol::{ENDPOINT_HEALTH, ENDPOINT_PUNCH_IN, ENDPOINT_PUNCH_INS};

/// Builds the full application router around an injected store handle.
pub fn router(store: Arc<dyn DocumentStore>) -> Router {
    Router::new()
        .route(ENDPOINT_HEALTH, get(handlers::handle_health))
        .route(ENDPOINT_PUNCH_IN, post(handlers::handle_create_punch_in))
        .route(ENDPOINT_PUNCH_INS, get(handlers::handle_list_punch_ins))
        .route(
            &format!("{}/:id", ENDPOINT_PUNCH_IN),
            delete(handlers::handle_delete_punch_in),
        )
        .fallback(crate::ui::serve_app)
        .layer(CorsLayer::permissive())
        .layer(Extension(store))
}
