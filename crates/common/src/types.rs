use serde::{Deserialize, Serialize};
use std::fmt::{self};
use uuid::Uuid;

/// Unique identifier for stored document records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metadata persisted for one unique filename.
///
/// `name` is the dedup key. `path`, `size_bytes` and `page_count` are set
/// on first insertion and never overwritten; `summary` and `keywords` are
/// refreshed on every successful reprocessing of the same name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub name: String,
    pub path: String,
    pub size_bytes: u64,
    pub page_count: u32,
    pub summary: String,
    pub keywords: Vec<String>,
}

/// Raw output of the PDF text-extraction engine
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedDocument {
    pub text: String,
    pub page_count: u32,
}

/// Result of a store upsert, carrying the record's identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted(DocumentId),
    Updated(DocumentId),
}

impl UpsertOutcome {
    pub fn id(&self) -> DocumentId {
        match self {
            UpsertOutcome::Inserted(id) | UpsertOutcome::Updated(id) => *id,
        }
    }
}

/// Per-batch counters reported by the orchestrator; log output only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub failed: usize,
}
