use anyhow::Result;
use clap::Parser;
use pdfmeta_common::SystemConfig;
use pdfmeta_ingest::{IngestPipeline, PdfExtractor, RuleAnnotator};
use pdfmeta_storage::{initialize_storage, MemoryStore, MetadataStore};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pdfmeta")]
#[command(about = "PDF metadata ingestion pipeline", long_about = None)]
struct Cli {
    /// Folder containing the PDF files to ingest
    folder: PathBuf,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Override the configured Postgres URL
    #[arg(long)]
    database_url: Option<String>,

    /// Override the configured worker pool size
    #[arg(long)]
    workers: Option<usize>,

    /// Process without persisting (in-memory store)
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_target(true)
        .init();

    info!("🚀 Starting PDF metadata ingestion");

    let mut config = if std::path::Path::new(&cli.config).exists() {
        info!("📄 Using config: {}", cli.config);
        SystemConfig::from_file(&cli.config)?
    } else {
        SystemConfig::default()
    };

    if let Some(url) = cli.database_url {
        config.storage.postgres_url = url;
    }
    if let Some(workers) = cli.workers {
        config.ingest.workers = Some(workers);
    }
    config.validate()?;

    let store: Arc<dyn MetadataStore> = if cli.dry_run {
        info!("Dry run: nothing will be persisted");
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(initialize_storage(&config.storage.postgres_url).await?)
    };

    let pipeline = IngestPipeline::new(
        Arc::new(PdfExtractor),
        Arc::new(RuleAnnotator::new()),
        store,
        config.ingest.workers,
    );
    info!("Worker pool size: {}", pipeline.workers());

    let summary = pipeline.process_folder(&cli.folder).await?;

    // Per-file failures are reported through the log only; the batch itself
    // exits cleanly either way.
    info!(
        "✅ Batch finished: {} processed, {} failed",
        summary.processed, summary.failed
    );
    Ok(())
}
