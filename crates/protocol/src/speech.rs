use serde::{Deserialize, Serialize};

/// Request for the plain text-to-speech endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechRequest {
    /// Text to synthesize.
    pub speech: String,
}

impl SpeechRequest {
    /// Create a synthesis request.
    #[must_use]
    pub fn new(speech: impl Into<String>) -> Self {
        Self {
            speech: speech.into(),
        }
    }
}

/// Response from the text-to-speech endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechResponse {
    /// The text that was synthesized.
    #[serde(default)]
    pub speech: String,

    /// Base64-encoded MP3 bytes.
    pub audio: String,
}
