//! Resume persistence over PostgreSQL.
//!
//! One `resumes` table; the document body is a JSONB column (see
//! `schema.sql`). Partial updates are top-level JSONB merges — the whole
//! subtree named by each key is replaced, last write wins, no conflict
//! detection across concurrent editing sessions.

use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::resume::{ResumeDocument, ResumeRow, ResumeSummary};
use crate::sections::{ResumePersistence, SectionSettings};

pub async fn create_resume(
    pool: &PgPool,
    user_id: Uuid,
    document: &ResumeDocument,
) -> Result<ResumeRow, sqlx::Error> {
    let body = serde_json::to_value(document).unwrap_or(Value::Null);
    sqlx::query_as(
        r#"
        INSERT INTO resumes (id, user_id, document, created_at, updated_at)
        VALUES ($1, $2, $3, now(), now())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(body)
    .fetch_one(pool)
    .await
}

pub async fn fetch_resume(pool: &PgPool, id: Uuid) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM resumes WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_resumes(pool: &PgPool, user_id: Uuid) -> Result<Vec<ResumeSummary>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, COALESCE(document->>'title', '') AS title, updated_at
        FROM resumes
        WHERE user_id = $1
        ORDER BY updated_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Merges the provided top-level keys into the document. Each named subtree
/// is replaced wholesale (`jsonb ||`), matching the document-level
/// last-write-wins model.
pub async fn merge_document(
    pool: &PgPool,
    id: Uuid,
    patch: &Value,
) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as(
        r#"
        UPDATE resumes
        SET document = document || $2, updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(patch)
    .fetch_optional(pool)
    .await
}

/// Returns `true` when a row was deleted.
pub async fn delete_resume(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Replaces the `sectionSettings` subtree of the document.
pub async fn save_section_settings(
    pool: &PgPool,
    id: Uuid,
    settings: &SectionSettings,
) -> Result<u64, sqlx::Error> {
    let body = serde_json::to_value(settings).unwrap_or(Value::Null);
    let result = sqlx::query(
        r#"
        UPDATE resumes
        SET document = jsonb_set(document, '{sectionSettings}', $2, true),
            updated_at = now()
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(body)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

/// The production persistence collaborator behind the Section Settings
/// Store. Carried in `AppState` as `Arc<dyn ResumePersistence>`.
pub struct PgResumePersistence {
    pool: PgPool,
}

impl PgResumePersistence {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumePersistence for PgResumePersistence {
    async fn save_section_settings(
        &self,
        resume_id: Uuid,
        settings: &SectionSettings,
    ) -> anyhow::Result<()> {
        let updated = save_section_settings(&self.pool, resume_id, settings)
            .await
            .context("section settings write failed")?;
        if updated == 0 {
            anyhow::bail!("resume {resume_id} no longer exists");
        }
        Ok(())
    }
}
