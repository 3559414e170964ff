//! Word ingestion endpoints

use axum::{extract::State, Json};
use chrono::Utc;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::ingest::ingest_text;
use crate::AppState;

/// POST /api/words
/// Parse pasted lines and store every recognised term/translation pair
pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<SubmitWordsRequest>,
) -> Result<Json<SubmitWordsResponse>> {
    if payload.text.len() > MAX_SUBMISSION_BYTES {
        return Err(ApiError::BadRequest(format!(
            "text exceeds {} bytes",
            MAX_SUBMISSION_BYTES
        )));
    }

    let response = ingest_text(&state, &payload.text, Utc::now()).await;
    Ok(Json(response))
}

/// Each parsed line costs a speech request, keep batches bounded.
const MAX_SUBMISSION_BYTES: usize = 64 * 1024;
