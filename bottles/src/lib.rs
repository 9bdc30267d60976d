//! Bottles Verse Emitter
//!
//! A stateless library that renders the "99 Bottles of Beer" song through
//! caller-supplied closures.
//!
//! # Architecture
//!
//! This library is intentionally minimal:
//! - Renders one line or one whole verse of the well-known text
//! - Asks the caller for every number it prints
//! - Hands every rendered line to the caller
//!
//! The library does NOT:
//! - Loop over verses or sing the whole song
//! - Keep any counter between calls
//! - Spawn threads or take locks
//!
//! Whether concurrent use is safe depends only on the closures passed in. See
//! [`verse`] for the details of that contract. Song drivers, shared counters and
//! concurrent orchestration live in the `bottles-chorus` crate.
//!
//! # Example Usage
//!
//! ```
//! use bottles::{emit_line, emit_verse, BottlesError};
//!
//! let mut song = Vec::new();
//! for n in (1..=3).rev() {
//!     emit_verse(|line| song.push(line), || n, || n - 1);
//! }
//! assert_eq!(song.len(), 15);
//! assert_eq!(song.last().unwrap(), "0 bottles of beer on the wall");
//!
//! let err = emit_line(|_| {}, || 1, || 0, 5).unwrap_err();
//! assert_eq!(err, BottlesError::InvalidLineIndex(5));
//! ```

// Public modules
pub mod types;
pub mod verse;

// Re-export main types for convenience
pub use types::{BottlesError, Result, VerseLine, LINES_PER_VERSE};
pub use verse::{emit_line, emit_line_with_reaction, emit_verse, emit_verse_with_reaction, render_line};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
