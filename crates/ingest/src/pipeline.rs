use crate::annotate::Annotator;
use crate::extract::TextExtractor;
use crate::keywords::KeywordExtractor;
use crate::scanner::scan_folder;
use crate::summarize::summarize;
use pdfmeta_common::{BatchSummary, DocumentMetadata, IngestError, Result, UpsertOutcome};
use pdfmeta_storage::MetadataStore;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, info};

/// Ingestion orchestrator.
///
/// Holds every shared handle explicitly (no ambient globals) and is cloned
/// into each file task. One task per discovered path is submitted eagerly;
/// execution is bounded by a fixed-size worker pool. A failure in any stage
/// is caught at the task boundary and logged; sibling tasks are unaffected
/// and nothing is retried.
#[derive(Clone)]
pub struct IngestPipeline {
    extractor: Arc<dyn TextExtractor>,
    keywords: KeywordExtractor,
    store: Arc<dyn MetadataStore>,
    workers: usize,
}

impl IngestPipeline {
    pub fn new(
        extractor: Arc<dyn TextExtractor>,
        annotator: Arc<dyn Annotator>,
        store: Arc<dyn MetadataStore>,
        workers: Option<usize>,
    ) -> Self {
        let workers = workers.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        });

        Self {
            extractor,
            keywords: KeywordExtractor::new(annotator),
            store,
            workers,
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Process every `.pdf` file in one directory.
    ///
    /// Waits for all tasks to finish. The returned counters feed log output
    /// only; per-file failures never fail the batch.
    pub async fn process_folder(&self, dir: &Path) -> Result<BatchSummary> {
        let paths = scan_folder(dir)?;
        info!("Discovered {} PDF files in {}", paths.len(), dir.display());

        let semaphore = Arc::new(Semaphore::new(self.workers));
        let mut tasks = JoinSet::new();

        for path in paths {
            let pipeline = self.clone();
            let semaphore = Arc::clone(&semaphore);
            tasks.spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .expect("worker semaphore closed");

                match pipeline.process_file(&path).await {
                    Ok(outcome) => {
                        debug!("Done: {} ({:?})", path.display(), outcome);
                        true
                    }
                    Err(e) => {
                        error!("Error processing {}: {}", path.display(), e);
                        false
                    }
                }
            });
        }

        let mut summary = BatchSummary::default();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(true) => summary.processed += 1,
                Ok(false) => summary.failed += 1,
                Err(e) => {
                    error!("File task aborted: {}", e);
                    summary.failed += 1;
                }
            }
        }

        info!(
            "Batch complete: {} processed, {} failed",
            summary.processed, summary.failed
        );
        Ok(summary)
    }

    /// Run one file through extract → summarize/keywords → upsert.
    ///
    /// Stages are strictly sequential; the upsert runs last, so a failing
    /// file never leaves a partial record.
    pub async fn process_file(&self, path: &Path) -> Result<UpsertOutcome> {
        let name = file_name(path);
        let size_bytes = tokio::fs::metadata(path).await?.len();

        debug!("Extracting {}", name);
        let extractor = Arc::clone(&self.extractor);
        let extract_path = path.to_path_buf();
        let extracted = tokio::task::spawn_blocking(move || extractor.extract(&extract_path))
            .await
            .map_err(|e| IngestError::Extraction(format!("extraction task aborted: {}", e)))??;

        debug!("Summarizing {} ({} pages)", name, extracted.page_count);
        let summary = summarize(&extracted.text, extracted.page_count);

        debug!("Extracting keywords for {}", name);
        let keywords = self
            .keywords
            .extract(&extracted.text, extracted.page_count)?;

        let doc = DocumentMetadata {
            name,
            path: path.display().to_string(),
            size_bytes,
            page_count: extracted.page_count,
            summary,
            keywords,
        };

        debug!("Upserting {}", doc.name);
        self.store.upsert(&doc).await
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
