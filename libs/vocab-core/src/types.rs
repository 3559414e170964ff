//! Core types for the vocabulary trainer.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;

/// Entry learning status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    Active,
    Mastered,
}

impl Default for EntryStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl EntryStatus {
    /// Get the status name as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Mastered => "mastered",
        }
    }
}

impl FromStr for EntryStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "mastered" => Ok(Self::Mastered),
            other => Err(format!("unknown entry status: {other}")),
        }
    }
}

/// Learner's answer to a review prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The learner recalled the translation.
    Know,
    /// The learner did not; the entry goes back to the start.
    Study,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Know => "know",
            Self::Study => "study",
        }
    }
}

impl FromStr for Outcome {
    type Err = SchedulerError;

    /// Only the exact strings `know` and `study` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "know" => Ok(Self::Know),
            "study" => Ok(Self::Study),
            other => Err(SchedulerError::InvalidOutcome {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Term/translation pair produced by the parser, not yet stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub term: String,
    pub translation: String,
}

impl Candidate {
    pub fn new(term: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            translation: translation.into(),
        }
    }
}

/// Schedulable part of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewState {
    pub progress_level: u32,
    pub next_review_at: DateTime<Utc>,
    pub status: EntryStatus,
}

impl ReviewState {
    /// State of an entry created at `now`: level 0, due immediately.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            progress_level: 0,
            next_review_at: now,
            status: EntryStatus::Active,
        }
    }

    /// Whether the entry may be presented at `now`.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.status == EntryStatus::Active && self.next_review_at <= now
    }
}

/// Stored flashcard with its review progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub id: i64,
    pub term: String,
    pub translation: String,
    pub audio_reference: String,
    pub progress_level: u32,
    pub next_review_at: DateTime<Utc>,
    pub status: EntryStatus,
}

impl VocabularyEntry {
    /// Build a freshly ingested entry.
    pub fn new(
        id: i64,
        candidate: Candidate,
        audio_reference: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        let state = ReviewState::new(now);
        Self {
            id,
            term: candidate.term,
            translation: candidate.translation,
            audio_reference: audio_reference.into(),
            progress_level: state.progress_level,
            next_review_at: state.next_review_at,
            status: state.status,
        }
    }

    pub fn state(&self) -> ReviewState {
        ReviewState {
            progress_level: self.progress_level,
            next_review_at: self.next_review_at,
            status: self.status,
        }
    }

    /// Overwrite the review progress with a state computed by the scheduler.
    pub fn apply(&mut self, state: ReviewState) {
        self.progress_level = state.progress_level;
        self.next_review_at = state.next_review_at;
        self.status = state.status;
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.state().is_due(now)
    }
}
