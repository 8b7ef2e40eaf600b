use jvox_protocol::CellId;

/// Capability interface onto one editing surface ("cell").
///
/// Replaces the original duck-typed editor access with a compile-time
/// contract; any concrete editor binding must implement all of it.
pub trait EditorSurface {
    /// Identifier of this cell.
    fn cell_id(&self) -> CellId;

    /// Current cursor position as (line, column), both 0-based.
    fn cursor_position(&self) -> (usize, usize);

    /// Full text of line `n`, if it exists.
    fn line(&self, n: usize) -> Option<String>;

    /// Move the cursor.
    fn set_cursor_position(&mut self, line: usize, col: usize);

    /// Give the editor keyboard focus.
    fn focus(&mut self);
}

/// A playable audio resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioSource {
    /// A URL the host's audio element can load directly.
    Url(String),

    /// Decoded MP3 bytes.
    Bytes(Vec<u8>),
}

/// Fire-and-forget audio playback.
///
/// The session never waits on playback and consumes no return value.
pub trait AudioSink {
    /// Start playing `audio` at `rate` times natural speed.
    fn play(&self, audio: AudioSource, rate: f32);
}
