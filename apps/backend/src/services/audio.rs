//! Pronunciation audio: speech synthesis client and the on-disk audio library.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Public route the audio directory is served under.
pub const AUDIO_ROUTE: &str = "/audio";

/// The translate endpoint refuses longer input.
const MAX_TEXT_CHARS: usize = 200;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("nothing to synthesize")]
    EmptyText,
    #[error("text is {0} characters, limit is 200")]
    TextTooLong(usize),
    #[error("speech service request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("speech service returned no audio")]
    EmptyResponse,
    #[error("audio file error: {0}")]
    Io(#[from] std::io::Error),
}

/// Turns a term into spoken audio bytes (MP3).
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, AudioError>;
}

/// Google Translate text-to-speech client.
pub struct TranslateTts {
    client: reqwest::Client,
    endpoint: String,
    lang: String,
}

impl TranslateTts {
    pub fn new(endpoint: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            lang: lang.into(),
        }
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }
}

#[async_trait]
impl SpeechSynthesizer for TranslateTts {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, AudioError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AudioError::EmptyText);
        }
        let chars = text.chars().count();
        if chars > MAX_TEXT_CHARS {
            return Err(AudioError::TextTooLong(chars));
        }

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", self.lang.as_str()),
                ("q", text),
            ])
            .send()
            .await?
            .error_for_status()?;

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(AudioError::EmptyResponse);
        }

        tracing::debug!("Synthesized {} bytes for {:?}", bytes.len(), text);
        Ok(bytes.to_vec())
    }
}

/// Directory of synthesized audio files, served statically under [`AUDIO_ROUTE`].
#[derive(Debug, Clone)]
pub struct AudioLibrary {
    dir: PathBuf,
}

impl AudioLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<(), AudioError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// Write the audio for `term` and return its public reference.
    pub async fn store(&self, term: &str, audio: &[u8]) -> Result<String, AudioError> {
        let file_name = audio_file_name(term);
        tokio::fs::write(self.dir.join(&file_name), audio).await?;
        Ok(format!("{AUDIO_ROUTE}/{file_name}"))
    }
}

/// Compute SHA256 hash of a term.
pub fn hash_term(term: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(term.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// File name for a term's audio: an ASCII slug plus a short content hash.
///
/// E.g., "avoir 20 ans" -> "avoir_20_ans-<8 hex>.mp3"
pub fn audio_file_name(term: &str) -> String {
    let slug = term
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    let hash = hash_term(term);

    if slug.is_empty() {
        format!("{}.mp3", &hash[..8])
    } else {
        format!("{}-{}.mp3", slug, &hash[..8])
    }
}
