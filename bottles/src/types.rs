//! Core types for the verse emitter
//!
//! This module defines the fixed line positions of a verse, their templates and the
//! single error kind the emitter can return.

use std::fmt;

/// Result type for emitter operations
pub type Result<T> = std::result::Result<T, BottlesError>;

/// Number of lines in one verse
pub const LINES_PER_VERSE: usize = 5;

/// Errors that can occur while emitting
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BottlesError {
    #[error("{0} isn't a valid line number")]
    InvalidLineIndex(i32),
}

/// One of the five fixed line positions in a verse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerseLine {
    /// "N bottles of beer on the wall", N from the start provider
    WallCount,
    /// "N bottles of beer", N from a second call to the start provider
    Count,
    /// "take one down", preceded by the taken-down reaction
    TakeOneDown,
    /// "pass it around"
    PassItAround,
    /// "N bottles of beer on the wall", N from the next provider
    NextWallCount,
}

impl VerseLine {
    /// All lines of a verse, in the order they are sung
    pub const ALL: [VerseLine; LINES_PER_VERSE] = [
        VerseLine::WallCount,
        VerseLine::Count,
        VerseLine::TakeOneDown,
        VerseLine::PassItAround,
        VerseLine::NextWallCount,
    ];

    /// Position of this line within the verse (0-based)
    pub fn index(self) -> i32 {
        match self {
            VerseLine::WallCount => 0,
            VerseLine::Count => 1,
            VerseLine::TakeOneDown => 2,
            VerseLine::PassItAround => 3,
            VerseLine::NextWallCount => 4,
        }
    }

    /// The well-known text for this line, with `{N}` marking the number slot
    pub fn template(self) -> &'static str {
        match self {
            VerseLine::WallCount | VerseLine::NextWallCount => "{N} bottles of beer on the wall",
            VerseLine::Count => "{N} bottles of beer",
            VerseLine::TakeOneDown => "take one down",
            VerseLine::PassItAround => "pass it around",
        }
    }

    /// Render this line's template with the given number.
    ///
    /// Static lines ignore `count`.
    pub fn format(self, count: i32) -> String {
        match self {
            VerseLine::WallCount | VerseLine::NextWallCount => {
                format!("{} bottles of beer on the wall", count)
            }
            VerseLine::Count => format!("{} bottles of beer", count),
            VerseLine::TakeOneDown | VerseLine::PassItAround => self.template().to_string(),
        }
    }
}

impl TryFrom<i32> for VerseLine {
    type Error = BottlesError;

    fn try_from(index: i32) -> Result<Self> {
        match index {
            0 => Ok(VerseLine::WallCount),
            1 => Ok(VerseLine::Count),
            2 => Ok(VerseLine::TakeOneDown),
            3 => Ok(VerseLine::PassItAround),
            4 => Ok(VerseLine::NextWallCount),
            other => Err(BottlesError::InvalidLineIndex(other)),
        }
    }
}

impl fmt::Display for VerseLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.template())
    }
}
