//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up the router with a database and audio directory
//! - A stub speech synthesizer so tests never call the real TTS service
//!
//! # Requirements
//! Tests built with `TestContext::new` require a PostgreSQL database
//! (set DATABASE_URL env var). `TestContext::without_database` uses a lazy
//! pool and only works for requests that never reach the database.

pub mod fixtures;

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use tempfile::TempDir;
use vocab_core::Scheduler;

use vocab_backend::db::Database;
use vocab_backend::services::audio::{AudioError, AudioLibrary, SpeechSynthesizer};
use vocab_backend::{router, AppState};

/// Bytes returned by [`StubTts`] for every successful synthesis.
pub const STUB_AUDIO: &[u8] = b"ID3stub-audio";

/// Speech synthesizer that returns fixed bytes, failing for selected terms.
#[derive(Default)]
pub struct StubTts {
    failing: HashSet<String>,
    fail_all: bool,
}

impl StubTts {
    pub fn failing_on(terms: &[&str]) -> Self {
        Self {
            failing: terms.iter().map(|t| t.to_string()).collect(),
            fail_all: false,
        }
    }

    pub fn always_failing() -> Self {
        Self {
            failing: HashSet::new(),
            fail_all: true,
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for StubTts {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, AudioError> {
        if self.fail_all || self.failing.contains(text) {
            return Err(AudioError::EmptyResponse);
        }
        Ok(STUB_AUDIO.to_vec())
    }
}

/// Test context containing database handle, audio directory and router.
pub struct TestContext {
    pub db: Arc<Database>,
    pub audio: Arc<AudioLibrary>,
    app: Router,
    _audio_dir: TempDir,
}

impl TestContext {
    /// Create a new test context backed by a real database.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn new(tts: StubTts) -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

        let db = Database::connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        db.run_migrations()
            .await
            .expect("Failed to run migrations");

        Self::build(db, tts)
    }

    /// Create a context whose pool never connects.
    ///
    /// Only use it for requests that are answered before any query runs.
    pub fn without_database(tts: StubTts) -> Self {
        let db = Database::connect_lazy("postgres://localhost/vocab_test")
            .expect("Failed to create lazy pool");

        Self::build(db, tts)
    }

    fn build(db: Database, tts: StubTts) -> Self {
        let audio_dir = tempfile::tempdir().expect("Failed to create audio dir");
        let audio = Arc::new(AudioLibrary::new(audio_dir.path()));
        let db = Arc::new(db);

        let state = AppState {
            db: db.clone(),
            audio: audio.clone(),
            tts: Arc::new(tts),
            scheduler: Arc::new(Scheduler::default()),
        };

        Self {
            db,
            audio,
            app: router(state),
            _audio_dir: audio_dir,
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Insert a word directly, bypassing parsing and audio.
    pub async fn create_word(&self, term: &str, translation: &str) -> i64 {
        let candidate = vocab_core::Candidate::new(term, translation);
        let word = self
            .db
            .insert_word(&candidate, "/audio/test.mp3", chrono::Utc::now())
            .await
            .expect("Failed to create test word");
        word.id
    }

    /// Find the ids of stored words with the given term.
    pub async fn word_ids_by_term(&self, term: &str) -> Vec<i64> {
        sqlx::query_scalar::<_, i64>("SELECT id FROM words WHERE term = $1 ORDER BY id")
            .bind(term)
            .fetch_all(self.db.pool())
            .await
            .expect("Failed to query words")
    }

    /// Clean up test words.
    pub async fn cleanup_words(&self, ids: &[i64]) {
        let _ = sqlx::query("DELETE FROM words WHERE id = ANY($1)")
            .bind(ids)
            .execute(self.db.pool())
            .await;
    }
}
