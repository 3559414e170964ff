//! Core vocabulary library used by the backend.
//!
//! Provides:
//! - Bilingual line parser (Latin term, Cyrillic translation)
//! - Fixed-interval spaced repetition scheduler with a mastered state
//! - Uniform random selection of due entries
//! - Shared types (VocabularyEntry, ReviewState, Outcome, etc.)

pub mod error;
pub mod parser;
pub mod scheduler;
pub mod types;

pub use error::{Result, SchedulerError};
pub use parser::{parse, parse_with_report, ParseReport, SkippedLine};
pub use scheduler::{IntervalTable, Scheduler};
pub use types::{Candidate, EntryStatus, Outcome, ReviewState, VocabularyEntry};
