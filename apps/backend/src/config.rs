//! Process configuration read from the environment (and `.env`).

use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_TTS_ENDPOINT: &str = "https://translate.google.com/translate_tts";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} has invalid value {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Backend configuration.
///
/// | Variable | Default |
/// |---|---|
/// | `DATABASE_URL` | required |
/// | `HOST` | `0.0.0.0` |
/// | `PORT` | `3000` |
/// | `AUDIO_DIR` | `audio` |
/// | `TTS_LANG` | `fr` |
/// | `TTS_ENDPOINT` | Google Translate TTS |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub audio_dir: PathBuf,
    pub tts_lang: String,
    pub tts_endpoint: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, so tests do not touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let port: u16 = match lookup("PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value,
            })?,
            None => 3000,
        };

        Ok(Self {
            database_url,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            audio_dir: lookup("AUDIO_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("audio")),
            tts_lang: lookup("TTS_LANG").unwrap_or_else(|| "fr".to_string()),
            tts_endpoint: lookup("TTS_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_TTS_ENDPOINT.to_string()),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
