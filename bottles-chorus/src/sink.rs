//! Concurrency-safe line sink
//!
//! Appends from any number of threads are all kept. Nothing is promised about the
//! order in which lines from different threads land.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// An append-only collection of lines that many singers can share
#[derive(Debug, Default)]
pub struct LineSink {
    lines: Mutex<Vec<String>>,
}

impl LineSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line
    pub fn push(&self, line: String) {
        self.guard().push(line);
    }

    /// Number of lines received so far
    pub fn len(&self) -> usize {
        self.guard().len()
    }

    /// True if no line has been received
    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    /// Copy of the lines received so far
    pub fn lines(&self) -> Vec<String> {
        self.guard().clone()
    }

    /// Take the collected lines
    pub fn into_lines(self) -> Vec<String> {
        self.lines.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    // A singer that panicked mid-push leaves a complete Vec behind
    fn guard(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_take() {
        let sink = LineSink::new();
        assert!(sink.is_empty());

        sink.push("take one down".to_string());
        sink.push("pass it around".to_string());

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.lines(), vec!["take one down", "pass it around"]);
        assert_eq!(sink.into_lines().len(), 2);
    }

    #[test]
    fn test_concurrent_pushes_are_all_kept() {
        let sink = LineSink::new();
        std::thread::scope(|s| {
            for t in 0..16 {
                let sink = &sink;
                s.spawn(move || {
                    for i in 0..250 {
                        sink.push(format!("{}-{}", t, i));
                    }
                });
            }
        });
        assert_eq!(sink.len(), 4000);
    }
}
