//! UI Client
//!
//! A single embedded HTML page (vanilla JS) served as the fallback for
//! every unmatched route. The page fetches the record list on load,
//! submits new punch-ins (current instant or manually entered time),
//! re-fetches after each mutation, and surfaces transient status messages.
//! All state lives in the browser tab; nothing is persisted client-side.

use axum::response::Html;

pub async fn serve_app() -> Html<&'static str> {
    Html(include_str!("app.html"))
}
