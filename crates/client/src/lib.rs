//! # JVox Client
//!
//! Integration glue between an editor host and the JVox speech backend.
//!
//! The [`Session`] owns the session-scoped state (diagnostics store and the
//! last-error slot), consumes typed [`JvoxEvent`]s from the editor's
//! execution and diagnostics channels, and drives chunked reading through a
//! [`SpeechBackend`]. The editor itself is reached only through the
//! [`EditorSurface`] and [`AudioSink`] capability traits, so any host that
//! can report a cursor, hand over a line of text, and play a buffer can be
//! wired in.
//!
//! Two backends ship here: [`HttpSpeechBackend`] POSTs to the real JVox
//! server, and [`LocalChunkBackend`] serves the same chunk contract
//! in-process (no audio) for hosts running without a server.

mod backend;
mod config;
mod error;
mod events;
mod session;
mod surface;

pub use backend::{decode_audio, HttpSpeechBackend, LocalChunkBackend, SpeechBackend};
pub use config::ClientConfig;
pub use error::ClientError;
pub use events::JvoxEvent;
pub use session::Session;
pub use surface::{AudioSink, AudioSource, EditorSurface};
