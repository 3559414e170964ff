//! Study endpoints

use axum::{extract::State, Json};
use chrono::Utc;

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/train
/// Random due word, or `null` when nothing is due
pub async fn train(State(state): State<AppState>) -> Result<Json<Option<VocabularyEntry>>> {
    let now = Utc::now();
    let due: Vec<VocabularyEntry> = state
        .db
        .get_due_words(now)
        .await?
        .iter()
        .map(DbWord::to_core_entry)
        .collect();

    let picked = state
        .scheduler
        .pick_due(&due, now, &mut rand::rng())
        .cloned();

    Ok(Json(picked))
}

/// POST /api/update
/// Record a review outcome for a word
pub async fn update(
    State(state): State<AppState>,
    Json(payload): Json<UpdateWordRequest>,
) -> Result<Json<UpdateWordResponse>> {
    // Reject unknown outcomes before touching the database
    let outcome: Outcome = payload.action.parse()?;

    let now = Utc::now();
    let next = state
        .db
        .review_word(payload.id, |entry| {
            Ok(state.scheduler.apply_outcome(&entry.state(), outcome, now))
        })
        .await?;

    tracing::info!(
        "Word {} reviewed ({}): level {}, next review {}, {}",
        payload.id,
        outcome,
        next.progress_level,
        next.next_review_at,
        next.status.as_str()
    );

    Ok(Json(UpdateWordResponse {
        success: true,
        state: next,
    }))
}
