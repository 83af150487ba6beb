use crate::MetadataStore;
use async_trait::async_trait;
use pdfmeta_common::{DocumentId, DocumentMetadata, IngestError, Result, UpsertOutcome};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use tracing::info;
use uuid::Uuid;

pub struct PostgresStore {
    pool: PgPool,
}

fn store_err(e: sqlx::Error) -> IngestError {
    IngestError::Store(e.to_string())
}

impl PostgresStore {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .map_err(store_err)?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                id        UUID PRIMARY KEY,
                name      TEXT UNIQUE NOT NULL,
                path      TEXT NOT NULL,
                size      BIGINT NOT NULL,
                num_pages INTEGER NOT NULL,
                summary   TEXT NOT NULL,
                keywords  TEXT[] NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(store_err)?;
        Ok(())
    }
}

#[async_trait]
impl MetadataStore for PostgresStore {
    async fn upsert(&self, doc: &DocumentMetadata) -> Result<UpsertOutcome> {
        // Single-statement atomic upsert: the UNIQUE constraint on `name`
        // resolves concurrent writers to one row, and the conflict branch
        // touches only the two mutable fields. `xmax = 0` distinguishes a
        // fresh insert from a conflict update.
        let row = sqlx::query(
            r#"
            INSERT INTO documents (id, name, path, size, num_pages, summary, keywords)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (name) DO UPDATE
                SET summary = EXCLUDED.summary,
                    keywords = EXCLUDED.keywords
            RETURNING id, (xmax = 0) AS inserted
            "#,
        )
        .bind(DocumentId::new().0)
        .bind(&doc.name)
        .bind(&doc.path)
        .bind(doc.size_bytes as i64)
        .bind(doc.page_count as i32)
        .bind(&doc.summary)
        .bind(&doc.keywords)
        .fetch_one(&self.pool)
        .await
        .map_err(store_err)?;

        let id = DocumentId(row.get::<Uuid, _>("id"));
        let inserted: bool = row.get("inserted");

        if inserted {
            info!("Processed {} and stored metadata with ID: {}", doc.name, id);
            Ok(UpsertOutcome::Inserted(id))
        } else {
            info!("{} already exists in the database.", doc.name);
            info!("Updated {} with new summary and keywords.", doc.name);
            Ok(UpsertOutcome::Updated(id))
        }
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<(DocumentId, DocumentMetadata)>> {
        let row = sqlx::query(
            "SELECT id, name, path, size, num_pages, summary, keywords \
             FROM documents WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(row.map(|row| {
            let id = DocumentId(row.get::<Uuid, _>("id"));
            let doc = DocumentMetadata {
                name: row.get("name"),
                path: row.get("path"),
                size_bytes: row.get::<i64, _>("size") as u64,
                page_count: row.get::<i32, _>("num_pages") as u32,
                summary: row.get("summary"),
                keywords: row.get("keywords"),
            };
            (id, doc)
        }))
    }
}
