//! Punch-In Tracker Library
//!
//! This library crate defines the modules behind the binary executable
//! (`main.rs`): a minimal time-tracking web app that records punch-in
//! events over a JSON HTTP API and persists them in a document store.
//!
//! ## Architecture Modules
//! - **`api`**: stateless axum route handlers (health, create, list,
//!   delete) plus the router assembling them with the SPA fallback.
//! - **`config`**: environment-driven runtime configuration with
//!   documented defaults.
//! - **`store`**: the Storage Gateway. A `DocumentStore` trait fronted by
//!   a Postgres-backed gateway (and an in-memory double for tests).
//! - **`ui`**: the embedded single-page browser client.

pub mod api;
pub mod config;
pub mod store;
pub mod ui;
