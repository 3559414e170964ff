//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Re-export shared types from vocab-core
pub use vocab_core::types::{Candidate, EntryStatus, Outcome, ReviewState, VocabularyEntry};

// === Database Entity Types ===

/// Vocabulary entry stored in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbWord {
    pub id: i64,
    pub term: String,
    pub translation: String,
    pub audio_url: String,
    pub progress_level: i32,
    pub next_review_at: DateTime<Utc>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DbWord {
    /// Convert to vocab-core entry
    pub fn to_core_entry(&self) -> VocabularyEntry {
        VocabularyEntry {
            id: self.id,
            term: self.term.clone(),
            translation: self.translation.clone(),
            audio_reference: self.audio_url.clone(),
            progress_level: u32::try_from(self.progress_level).unwrap_or(0),
            next_review_at: self.next_review_at,
            // The column has a CHECK constraint, unknown values only come from manual edits.
            status: self.status.parse().unwrap_or(EntryStatus::Active),
        }
    }
}

/// Columns written back after a review
#[derive(Debug, Clone)]
pub struct DbWordState {
    pub progress_level: i32,
    pub next_review_at: DateTime<Utc>,
    pub status: &'static str,
}

impl DbWordState {
    /// Create from vocab-core ReviewState
    pub fn from_core_state(state: &ReviewState) -> Self {
        Self {
            progress_level: i32::try_from(state.progress_level).unwrap_or(i32::MAX),
            next_review_at: state.next_review_at,
            status: state.status.as_str(),
        }
    }
}

// === API Request/Response Types ===

// Ingestion types
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitWordsRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitWordsResponse {
    pub success: bool,
    /// Entries stored.
    pub added: usize,
    /// Non-empty lines that did not parse.
    pub skipped: usize,
    /// Parsed words whose audio or insert failed.
    pub failed: usize,
}

// Review types
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateWordRequest {
    pub id: i64,
    /// Raw outcome, validated against `know` / `study`.
    pub action: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateWordResponse {
    pub success: bool,
    pub state: ReviewState,
}
