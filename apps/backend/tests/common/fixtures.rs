//! Test fixtures and factory functions for creating test data.

use serde_json::json;
use uuid::Uuid;

/// Generate a pasted word list with `num_words` parseable lines.
///
/// Terms carry `tag` so concurrent tests do not see each other's rows.
pub fn sample_word_list(tag: &str, num_words: usize) -> String {
    (0..num_words)
        .map(|i| format!("mot{}{} слово {}", tag, i + 1, i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Term produced by [`sample_word_list`] for line `n` (1-based).
pub fn sample_term(tag: &str, n: usize) -> String {
    format!("mot{}{}", tag, n)
}

/// Create a submit words request body.
pub fn submit_words_request(text: &str) -> serde_json::Value {
    json!({ "text": text })
}

/// Create an update request body.
pub fn update_request(id: i64, action: &str) -> serde_json::Value {
    json!({ "id": id, "action": action })
}

/// Generate a unique tag to avoid collisions between test runs.
pub fn unique_tag() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}
