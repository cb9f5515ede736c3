use time::OffsetDateTime;

use super::model::{JobPatch, JobStatus, TranslationJob};
use crate::infrastructure::db::pool::DbPool;

const COLUMNS: &str = "id, original_filename, original_file_path, detected_language, \
     target_language, status, translated_file_path, transcript, translated_transcript, \
     error_message, created_at, updated_at";

pub struct JobRepository;

impl JobRepository {
    pub async fn insert(
        pool: &DbPool,
        original_filename: &str,
        original_file_path: &str,
        target_language: &str,
    ) -> Result<TranslationJob, sqlx::Error> {
        let now = OffsetDateTime::now_utc();
        let sql = format!(
            "INSERT INTO translation_jobs \
             (original_filename, original_file_path, target_language, status, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
             RETURNING {COLUMNS}"
        );

        sqlx::query_as::<_, TranslationJob>(&sql)
            .bind(original_filename)
            .bind(original_file_path)
            .bind(target_language)
            .bind(JobStatus::Pending)
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &DbPool, id: i64) -> Result<Option<TranslationJob>, sqlx::Error> {
        let sql = format!("SELECT {COLUMNS} FROM translation_jobs WHERE id = ?1");

        sqlx::query_as::<_, TranslationJob>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Newest first; equal timestamps keep insertion order.
    pub async fn find_all(pool: &DbPool) -> Result<Vec<TranslationJob>, sqlx::Error> {
        let sql = format!(
            "SELECT {COLUMNS} FROM translation_jobs ORDER BY created_at DESC, id ASC"
        );

        sqlx::query_as::<_, TranslationJob>(&sql).fetch_all(pool).await
    }

    /// Applies `patch` to the row, rewriting every mutable column in one
    /// statement. `updated_at` is reset even when the patch is empty or the
    /// values are unchanged. Returns `None` without writing when `id` does
    /// not exist.
    pub async fn update(
        pool: &DbPool,
        id: i64,
        patch: JobPatch,
    ) -> Result<Option<TranslationJob>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let sql = format!("SELECT {COLUMNS} FROM translation_jobs WHERE id = ?1");
        let Some(mut job) = sqlx::query_as::<_, TranslationJob>(&sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        if let Some(detected_language) = patch.detected_language {
            job.detected_language = detected_language;
        }
        if let Some(status) = patch.status {
            job.status = status;
        }
        if let Some(translated_file_path) = patch.translated_file_path {
            job.translated_file_path = translated_file_path;
        }
        if let Some(transcript) = patch.transcript {
            job.transcript = transcript;
        }
        if let Some(translated_transcript) = patch.translated_transcript {
            job.translated_transcript = translated_transcript;
        }
        if let Some(error_message) = patch.error_message {
            job.error_message = error_message;
        }
        job.updated_at = OffsetDateTime::now_utc();

        let sql = format!(
            "UPDATE translation_jobs SET \
             detected_language = ?2, status = ?3, translated_file_path = ?4, \
             transcript = ?5, translated_transcript = ?6, error_message = ?7, \
             updated_at = ?8 \
             WHERE id = ?1 \
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, TranslationJob>(&sql)
            .bind(id)
            .bind(&job.detected_language)
            .bind(job.status)
            .bind(&job.translated_file_path)
            .bind(&job.transcript)
            .bind(&job.translated_transcript)
            .bind(&job.error_message)
            .bind(job.updated_at)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }
}
