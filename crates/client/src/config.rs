use serde::{Deserialize, Serialize};

use jvox_protocol::ChunkRequest;

/// Client-side settings for a JVox session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the speech backend.
    pub base_url: String,

    /// Tokens per chunk for chunked reading.
    pub chunk_len: usize,

    /// Audio playback rate (1.0 = natural speed).
    pub reading_rate: f32,

    /// Linter whose diagnostics are trusted for error correlation.
    pub trusted_source: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8888".to_string(),
            chunk_len: ChunkRequest::DEFAULT_CHUNK_LEN,
            reading_rate: 2.0,
            trusted_source: "pyflakes".to_string(),
        }
    }
}

impl ClientConfig {
    /// Validate configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }
        if self.chunk_len == 0 {
            return Err("chunk_len must be > 0".to_string());
        }
        if self.reading_rate <= 0.0 {
            return Err(format!(
                "reading_rate must be positive, got {}",
                self.reading_rate
            ));
        }
        Ok(())
    }
}
