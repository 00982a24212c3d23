use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres, Row};

use super::types::{PunchInRecord, StoreError, StoredRecord};

/// The seam between the HTTP handlers and the document store.
///
/// Handlers hold an `Arc<dyn DocumentStore>`, so tests can swap in
/// [`MemoryStore`](super::memory::MemoryStore) without a running database.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Writes a new document under `id`. Fails with
    /// [`StoreError::DuplicateKey`] if the key already exists.
    async fn insert(&self, id: &str, record: &PunchInRecord) -> Result<(), StoreError>;

    /// Deletes the document with the given key. Fails with
    /// [`StoreError::NotFound`] if no such document exists.
    async fn remove(&self, id: &str) -> Result<(), StoreError>;

    /// Returns every document matching the discriminator, ordered by
    /// `createdAt` descending.
    async fn query_all_by_type(&self, doc_type: &str) -> Result<Vec<StoredRecord>, StoreError>;
}

/// Connection state, checked on every call.
///
/// A failed startup connect leaves the gateway `Disconnected`; the process
/// keeps serving requests and each storage call fails with
/// [`StoreError::Unavailable`]. There is no automatic reconnect.
enum StoreState {
    Disconnected,
    Connected(Pool<Postgres>),
}

/// Postgres-backed document store.
///
/// Documents live in a single configurable table ("collection") of
/// `(id TEXT PRIMARY KEY, doc JSONB)` rows, created on connect. Each call
/// is one independent round trip; no transactions, batching, or caching.
pub struct StorageGateway {
    state: StoreState,
    table: String,
}

impl StorageGateway {
    /// Connects to the store and ensures the target table exists.
    pub async fn connect(url: &str, collection: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new().max_connections(10).connect(url).await?;

        sqlx::query(&format!(
            "CREATE TABLE IF NOT EXISTS \"{}\" (id TEXT PRIMARY KEY, doc JSONB NOT NULL)",
            collection
        ))
        .execute(&pool)
        .await?;

        tracing::info!("Connected to document store, collection: {}", collection);

        Ok(Self {
            state: StoreState::Connected(pool),
            table: collection.to_string(),
        })
    }

    /// Builds a gateway that fails every call with [`StoreError::Unavailable`].
    ///
    /// Used when the startup connect fails but the server should keep
    /// running in a degraded state.
    pub fn disconnected(collection: &str) -> Self {
        Self {
            state: StoreState::Disconnected,
            table: collection.to_string(),
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.state, StoreState::Connected(_))
    }

    fn pool(&self) -> Result<&Pool<Postgres>, StoreError> {
        match &self.state {
            StoreState::Connected(pool) => Ok(pool),
            StoreState::Disconnected => Err(StoreError::Unavailable),
        }
    }
}

#[async_trait]
impl DocumentStore for StorageGateway {
    async fn insert(&self, id: &str, record: &PunchInRecord) -> Result<(), StoreError> {
        let pool = self.pool()?;
        let doc = serde_json::to_value(record)?;

        let result = sqlx::query(&format!(
            "INSERT INTO \"{}\" (id, doc) VALUES ($1, $2)",
            self.table
        ))
        .bind(id)
        .bind(doc)
        .execute(pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
                Err(StoreError::DuplicateKey { id: id.to_string() })
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn remove(&self, id: &str) -> Result<(), StoreError> {
        let pool = self.pool()?;

        let result = sqlx::query(&format!("DELETE FROM \"{}\" WHERE id = $1", self.table))
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { id: id.to_string() });
        }

        Ok(())
    }

    async fn query_all_by_type(&self, doc_type: &str) -> Result<Vec<StoredRecord>, StoreError> {
        let pool = self.pool()?;

        // ISO-8601 strings in a uniform format sort lexicographically, so
        // ordering on the raw JSON field is ordering by creation time.
        let rows = sqlx::query(&format!(
            "SELECT id, doc FROM \"{}\" WHERE doc->>'type' = $1 ORDER BY doc->>'createdAt' DESC",
            self.table
        ))
        .bind(doc_type)
        .fetch_all(pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                let id: String = row.get("id");
                let doc: serde_json::Value = row.get("doc");
                let record: PunchInRecord = serde_json::from_value(doc)?;
                Ok(StoredRecord { id, record })
            })
            .collect()
    }
}
