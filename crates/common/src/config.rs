use crate::error::{IngestError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default)]
    pub ingest: IngestConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Worker pool size; omit to use available parallelism
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub postgres_url: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            postgres_url: "postgresql://localhost/pdf_metadata".to_string(),
        }
    }
}

impl SystemConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SystemConfig = toml::from_str(&content)
            .map_err(|e| IngestError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.ingest.workers == Some(0) {
            return Err(IngestError::Config(
                "ingest.workers must be at least 1".to_string(),
            ));
        }
        if self.storage.postgres_url.is_empty() {
            return Err(IngestError::Config(
                "storage.postgres_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
