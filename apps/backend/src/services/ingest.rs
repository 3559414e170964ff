//! Ingestion of pasted vocabulary lists.

use chrono::{DateTime, Utc};
use vocab_core::parse_with_report;

use crate::error::Result;
use crate::models::{Candidate, DbWord, SubmitWordsResponse};
use crate::AppState;

/// Parse `text`, synthesize audio for every term and store the new words.
///
/// One bad word does not stop the batch; it is logged and counted as failed.
pub async fn ingest_text(state: &AppState, text: &str, now: DateTime<Utc>) -> SubmitWordsResponse {
    let report = parse_with_report(text);

    for line in &report.skipped {
        tracing::debug!("Skipping line {}: {:?}", line.line_number, line.content);
    }

    let mut added = 0;
    let mut failed = 0;

    for candidate in &report.candidates {
        match add_word(state, candidate, now).await {
            Ok(word) => {
                added += 1;
                tracing::info!("Added word {} ({:?})", word.id, word.term);
            }
            Err(e) => {
                failed += 1;
                tracing::error!("Failed to add word {:?}: {}", candidate.term, e);
            }
        }
    }

    SubmitWordsResponse {
        success: true,
        added,
        skipped: report.skipped.len(),
        failed,
    }
}

async fn add_word(state: &AppState, candidate: &Candidate, now: DateTime<Utc>) -> Result<DbWord> {
    let audio = state.tts.synthesize(&candidate.term).await?;
    let audio_url = state.audio.store(&candidate.term, &audio).await?;
    state.db.insert_word(candidate, &audio_url, now).await
}
