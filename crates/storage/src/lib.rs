pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

use async_trait::async_trait;
use pdfmeta_common::{DocumentId, DocumentMetadata, Result, UpsertOutcome};

/// Persistent document store keyed by filename.
///
/// Exactly one record per distinct `name`. On conflict only `summary` and
/// `keywords` are overwritten; `path`, `size` and `num_pages` keep the
/// values from the first successful insertion.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// Insert the record, or refresh summary/keywords of the existing one
    async fn upsert(&self, doc: &DocumentMetadata) -> Result<UpsertOutcome>;

    /// Look up a record by exact filename match
    async fn find_by_name(&self, name: &str) -> Result<Option<(DocumentId, DocumentMetadata)>>;
}

/// Initialize the PostgreSQL backend and run migrations
pub async fn initialize_storage(postgres_url: &str) -> anyhow::Result<PostgresStore> {
    let store = PostgresStore::new(postgres_url).await?;
    store.run_migrations().await?;

    tracing::info!("Storage backend initialized successfully");
    Ok(store)
}
