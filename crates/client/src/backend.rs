use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use jvox_chunker::ChunkNavigator;
use jvox_protocol::{ChunkRequest, ChunkResponse, SpeechRequest, SpeechResponse};

use crate::error::ClientError;

/// The speech backend contract: chunked reading and plain synthesis.
///
/// Backend-level failures surface as a non-empty `error_message` inside a
/// success response; only transport problems become `Err`.
#[async_trait]
pub trait SpeechBackend: Send + Sync {
    /// Ask the backend which chunk to read and where to move the cursor.
    async fn read_chunk(&self, request: &ChunkRequest) -> Result<ChunkResponse, ClientError>;

    /// Synthesize arbitrary text to audio.
    async fn synthesize(&self, request: &SpeechRequest) -> Result<SpeechResponse, ClientError>;
}

#[async_trait]
impl<B: SpeechBackend + ?Sized> SpeechBackend for std::sync::Arc<B> {
    async fn read_chunk(&self, request: &ChunkRequest) -> Result<ChunkResponse, ClientError> {
        (**self).read_chunk(request).await
    }

    async fn synthesize(&self, request: &SpeechRequest) -> Result<SpeechResponse, ClientError> {
        (**self).synthesize(request).await
    }
}

/// Decode the base64 MP3 payload of a backend response.
pub fn decode_audio(audio: &str) -> Result<Vec<u8>, ClientError> {
    Ok(BASE64.decode(audio)?)
}

/// HTTP client for the JVox server extension.
///
/// POSTs JSON to `<base>/readChunk` and `<base>/audio`.
#[derive(Debug, Clone)]
pub struct HttpSpeechBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSpeechBackend {
    /// Create a backend client for the server at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    async fn post_json<B, R>(&self, endpoint: &str, body: &B) -> Result<R, ClientError>
    where
        B: serde::Serialize + Sync,
        R: serde::de::DeserializeOwned,
    {
        let url = format!("{}/{endpoint}", self.base_url);
        let response = self.client.post(&url).json(body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Backend(format!("{status} from {url}: {body}")));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl SpeechBackend for HttpSpeechBackend {
    async fn read_chunk(&self, request: &ChunkRequest) -> Result<ChunkResponse, ClientError> {
        log::debug!(
            "read chunk: command={} cursor={} statement={:?}",
            request.command.as_str(),
            request.cursor_pos,
            request.statement
        );
        self.post_json("readChunk", request).await
    }

    async fn synthesize(&self, request: &SpeechRequest) -> Result<SpeechResponse, ClientError> {
        self.post_json("audio", request).await
    }
}

/// In-process backend serving the chunk contract with the local navigator.
///
/// Produces no audio (synthesis stays server-side); useful for hosts
/// running without a JVox server and for tests.
pub struct LocalChunkBackend {
    navigator: ChunkNavigator,
}

impl LocalChunkBackend {
    /// Create a local backend reading `chunk_len` tokens per step.
    pub fn new(chunk_len: usize) -> Result<Self, ClientError> {
        let navigator =
            ChunkNavigator::new(chunk_len).map_err(|e| ClientError::Backend(e.to_string()))?;
        Ok(Self { navigator })
    }
}

#[async_trait]
impl SpeechBackend for LocalChunkBackend {
    async fn read_chunk(&self, request: &ChunkRequest) -> Result<ChunkResponse, ClientError> {
        Ok(self.navigator.respond(request))
    }

    async fn synthesize(&self, _request: &SpeechRequest) -> Result<SpeechResponse, ClientError> {
        Err(ClientError::Backend(
            "local backend cannot synthesize speech".to_string(),
        ))
    }
}
