//! Storage Gateway
//!
//! Sole point of contact with the document store; hides connection setup
//! and query syntax from the HTTP layer.
//!
//! ## Core Concepts
//! - **Documents**: each punch-in is one JSON document stored under an
//!   opaque string key; records are only ever created and deleted.
//! - **Seam**: handlers depend on the [`DocumentStore`] trait, not on a
//!   concrete backend, so tests inject [`memory::MemoryStore`].
//! - **Degraded mode**: a failed startup connect leaves the gateway
//!   [`gateway::StorageGateway::disconnected`]; every call then fails with
//!   [`types::StoreError::Unavailable`] instead of crashing the process.

pub mod gateway;
pub mod memory;
pub mod types;

pub use gateway::{DocumentStore, StorageGateway};
pub use types::{new_record_id, PunchInRecord, StoreError, StoredRecord, PUNCH_IN_TYPE};
