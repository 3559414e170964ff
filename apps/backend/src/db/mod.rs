//! PostgreSQL database operations

use chrono::{DateTime, Utc};
use sqlx::{postgres::PgPoolOptions, PgPool};
use vocab_core::SchedulerError;

use crate::error::{ApiError, Result};
use crate::models::*;

const WORD_COLUMNS: &str = "id, term, translation, audio_url, progress_level, next_review_at, \
                            status, created_at, updated_at";

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Create a pool that only connects when a query first needs it
    pub fn connect_lazy(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_lazy(database_url)?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Word Repository ===

    /// Insert a freshly parsed word, due immediately
    pub async fn insert_word(
        &self,
        candidate: &Candidate,
        audio_url: &str,
        now: DateTime<Utc>,
    ) -> Result<DbWord> {
        let word = sqlx::query_as::<_, DbWord>(&format!(
            r#"
            INSERT INTO words (term, translation, audio_url, progress_level, next_review_at, status)
            VALUES ($1, $2, $3, 0, $4, 'active')
            RETURNING {WORD_COLUMNS}
            "#
        ))
        .bind(&candidate.term)
        .bind(&candidate.translation)
        .bind(audio_url)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(word)
    }

    /// Get word by ID
    pub async fn get_word(&self, id: i64) -> Result<Option<DbWord>> {
        let word = sqlx::query_as::<_, DbWord>(&format!(
            "SELECT {WORD_COLUMNS} FROM words WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(word)
    }

    /// Get all active words whose review time has come
    pub async fn get_due_words(&self, now: DateTime<Utc>) -> Result<Vec<DbWord>> {
        let words = sqlx::query_as::<_, DbWord>(&format!(
            r#"
            SELECT {WORD_COLUMNS}
            FROM words
            WHERE status = 'active' AND next_review_at <= $1
            ORDER BY id
            "#
        ))
        .bind(now)
        .fetch_all(&self.pool)
        .await?;

        Ok(words)
    }

    /// Apply a review to a word under a row lock.
    ///
    /// `review` computes the next state from the locked entry. The row is only
    /// written when the state changed. Concurrent reviews of the same word are
    /// serialized by `FOR UPDATE`.
    pub async fn review_word<F>(&self, id: i64, review: F) -> Result<ReviewState>
    where
        F: FnOnce(&VocabularyEntry) -> Result<ReviewState>,
    {
        let mut tx = self.pool.begin().await?;

        let word = sqlx::query_as::<_, DbWord>(&format!(
            "SELECT {WORD_COLUMNS} FROM words WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(SchedulerError::EntryNotFound { id })?;

        let entry = word.to_core_entry();
        let next = review(&entry)?;

        if next != entry.state() {
            let db_state = DbWordState::from_core_state(&next);
            sqlx::query(
                r#"
                UPDATE words
                SET progress_level = $1, next_review_at = $2, status = $3, updated_at = NOW()
                WHERE id = $4
                "#,
            )
            .bind(db_state.progress_level)
            .bind(db_state.next_review_at)
            .bind(db_state.status)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(next)
    }
}
