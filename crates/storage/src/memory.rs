use crate::MetadataStore;
use async_trait::async_trait;
use pdfmeta_common::{DocumentId, DocumentMetadata, Result, UpsertOutcome};
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::info;

/// In-memory store backend for tests and dry runs.
///
/// The check-then-write upsert runs under a single lock, so concurrent
/// writers of the same name serialize to one record (last write wins on
/// summary/keywords).
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, (DocumentId, DocumentMetadata)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }
}

#[async_trait]
impl MetadataStore for MemoryStore {
    async fn upsert(&self, doc: &DocumentMetadata) -> Result<UpsertOutcome> {
        let mut records = self.records.lock().await;

        if let Some((id, existing)) = records.get_mut(&doc.name) {
            existing.summary = doc.summary.clone();
            existing.keywords = doc.keywords.clone();
            let id = *id;
            info!("{} already exists in the database.", doc.name);
            info!("Updated {} with new summary and keywords.", doc.name);
            Ok(UpsertOutcome::Updated(id))
        } else {
            let id = DocumentId::new();
            records.insert(doc.name.clone(), (id, doc.clone()));
            info!("Processed {} and stored metadata with ID: {}", doc.name, id);
            Ok(UpsertOutcome::Inserted(id))
        }
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<(DocumentId, DocumentMetadata)>> {
        Ok(self.records.lock().await.get(name).cloned())
    }
}
