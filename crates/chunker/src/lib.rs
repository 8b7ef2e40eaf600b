//! # JVox Chunker
//!
//! Chunk navigation over a single line of source text.
//!
//! A line is tokenized into non-whitespace tokens with character spans,
//! consecutive tokens are grouped into fixed-size "chunks" (the unit read
//! aloud per navigation step), and the navigator maps a cursor offset plus
//! a command (`next`/`pre`/`current`/`read_then_next`) to the chunk to
//! speak and the cursor's next position.
//!
//! The exact token grammar is owned by the speech backend; the default
//! [`WhitespaceTokenizer`] splits on whitespace runs, and [`Tokenizer`] lets
//! an integration plug in the backend's real grammar.
//!
//! ## Example
//!
//! ```rust
//! use jvox_chunker::ChunkNavigator;
//! use jvox_protocol::NavigationCommand;
//!
//! let navigator = ChunkNavigator::new(3).unwrap();
//! let step = navigator
//!     .navigate("x = 1 + 2 # comment", 0, NavigationCommand::Next)
//!     .unwrap();
//! assert_eq!(step.chunk, "+ 2 #");
//! assert_eq!(step.new_pos, 6);
//! ```

mod error;
mod navigator;
mod token;

pub use error::{ChunkError, Result};
pub use navigator::{ChunkNavigator, ChunkStep};
pub use token::{Token, Tokenizer, WhitespaceTokenizer};
