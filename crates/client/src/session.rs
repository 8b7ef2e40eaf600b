use jvox_debug_support::{
    DiagnosticCorrelator, DiagnosticsStore, PositionTranslator, CORRECT_LINE_PHRASE,
};
use jvox_protocol::{ChunkRequest, LastError, NavigationCommand, SpeechRequest};

use crate::backend::{decode_audio, SpeechBackend};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::events::JvoxEvent;
use crate::surface::{AudioSink, AudioSource, EditorSurface};

/// Session-scoped coordinator for one editing session.
///
/// Owns the two mutable slots of the system, the diagnostics store and the
/// "last error" record, and is the only writer to either. Writes are atomic
/// replacements that happen before any suspension point, so user-command
/// consumers never observe partial state.
///
/// Every failure is handled here, at the point of occurrence: backend
/// errors are spoken, transport errors are logged, and the
/// no-adjacent-chunk sentinel is a silent no-op. Nothing propagates to the
/// caller.
pub struct Session<E, A, T> {
    config: ClientConfig,
    backend: Box<dyn SpeechBackend>,
    editor: E,
    audio: A,
    translator: T,
    diagnostics: DiagnosticsStore,
    correlator: DiagnosticCorrelator,
    last_error: Option<LastError>,
}

impl<E, A, T> Session<E, A, T>
where
    E: EditorSurface,
    A: AudioSink,
    T: PositionTranslator,
{
    /// Create a session around an editor binding.
    pub fn new(
        config: ClientConfig,
        backend: Box<dyn SpeechBackend>,
        editor: E,
        audio: A,
        translator: T,
    ) -> Result<Self, ClientError> {
        config.validate().map_err(ClientError::Config)?;
        let correlator = DiagnosticCorrelator::new(config.trusted_source.clone());
        Ok(Self {
            config,
            backend,
            editor,
            audio,
            translator,
            diagnostics: DiagnosticsStore::new(),
            correlator,
            last_error: None,
        })
    }

    /// Consume one event from the editor host.
    ///
    /// Slot updates happen synchronously; only the subsequent speech round
    /// trip suspends.
    pub async fn handle_event(&mut self, event: JvoxEvent) {
        match event {
            JvoxEvent::DiagnosticsPushed { diagnostics } => {
                self.diagnostics.replace_batch(&diagnostics, &self.translator);
            }
            JvoxEvent::ExecutionFinished(outcome) => {
                if outcome.success {
                    log::debug!("cell {} executed cleanly", outcome.cell);
                    return;
                }
                let Some(error) = outcome.error else {
                    log::warn!("cell {} failed without error details", outcome.cell);
                    return;
                };
                self.last_error = Some(self.correlator.record_error(
                    self.diagnostics.diagnostics(),
                    &outcome.cell,
                    &error,
                ));
                self.read_last_error().await;
            }
        }
    }

    /// Read the chunk selected by `command` at the current cursor.
    ///
    /// Applies the backend's verdict: speak the error message on failure,
    /// do nothing on the no-adjacent-chunk sentinel, otherwise play the
    /// returned audio and move the cursor to the new position.
    pub async fn read_chunk(&mut self, command: NavigationCommand) {
        let (line_no, col) = self.editor.cursor_position();
        let Some(statement) = self.editor.line(line_no) else {
            log::warn!("no line {line_no} under the cursor");
            return;
        };

        let request = ChunkRequest::new(statement, col, self.config.chunk_len, command);
        let response = match self.backend.read_chunk(&request).await {
            Ok(response) => response,
            Err(error) => {
                log::warn!("chunk request failed: {error}");
                return;
            }
        };

        if response.is_error() {
            log::debug!("backend refused chunk read: {}", response.error_message);
            let message = response.error_message.clone();
            self.speak(&message).await;
            return;
        }
        if response.is_noop() {
            return;
        }

        if let Some(audio) = &response.audio {
            self.play_encoded(audio);
        }

        if response.new_pos >= 0 {
            self.editor
                .set_cursor_position(line_no, response.new_pos as usize);
            self.editor.focus();
        }
    }

    /// Speak the last error, or the neutral correct-line phrase when no
    /// error is recorded.
    pub async fn read_last_error(&self) {
        let text = match &self.last_error {
            Some(error) => error.spoken_message(),
            None => CORRECT_LINE_PHRASE.to_string(),
        };
        self.speak(&text).await;
    }

    /// Move the cursor to the last error's position.
    ///
    /// With a matched diagnostic this lands on its exact start column;
    /// without one it degrades to the traceback line, column 0. With no
    /// recorded error, or no usable line, the cursor stays put.
    pub fn jump_to_last_error(&mut self) {
        let Some(last) = &self.last_error else {
            log::debug!("no last error to jump to");
            return;
        };

        match &last.diagnostic {
            Some(diagnostic) => {
                self.editor
                    .set_cursor_position(diagnostic.start_line, diagnostic.start_col);
            }
            None => {
                let line = jvox_debug_support::error_line_from_traceback(&last.traceback);
                if line < 1 {
                    log::debug!("last error has no usable line number");
                    return;
                }
                self.editor.set_cursor_position((line - 1) as usize, 0);
            }
        }
        self.editor.focus();
    }

    /// Synthesize and play `text` through the backend and audio sink.
    ///
    /// A transport failure is logged and otherwise dropped; the session
    /// state is already consistent by the time this is called.
    async fn speak(&self, text: &str) {
        log::debug!("speaking: {text}");
        match self.backend.synthesize(&SpeechRequest::new(text)).await {
            Ok(response) => self.play_encoded(&response.audio),
            Err(error) => log::warn!("speech synthesis failed: {error}"),
        }
    }

    fn play_encoded(&self, audio: &str) {
        match decode_audio(audio) {
            Ok(bytes) => self
                .audio
                .play(AudioSource::Bytes(bytes), self.config.reading_rate),
            Err(error) => log::warn!("unplayable audio payload: {error}"),
        }
    }

    /// The current diagnostics set.
    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsStore {
        &self.diagnostics
    }

    /// The last recorded error, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&LastError> {
        self.last_error.as_ref()
    }

    /// The editor binding.
    #[must_use]
    pub fn editor(&self) -> &E {
        &self.editor
    }
}
