//! Bottles Chorus
//!
//! The caller side of the `bottles` emitter. The emitter itself holds no state and
//! takes no locks; this crate supplies what it asks for and shows how the answer to
//! "is it thread safe?" depends on those supplies:
//! - Independent suppliers: one fresh pair of closures per verse
//! - A shared [`BottleCounter`] used as both start and next provider
//! - A [`LineSink`] that many concurrent singers can append to
//! - Chorus runners on scoped threads or a rayon pool
//! - TOML configuration for the runs
//!
//! # Example Usage
//!
//! ```
//! use bottles_chorus::{sing_in_threads, BottleCounter, ChorusConfig, LineSink};
//! use bottles_chorus::song::{sing_with_independent_suppliers, sing_with_shared_counter};
//!
//! // One singer, independent suppliers
//! let mut alone = Vec::new();
//! sing_with_independent_suppliers(99, |line| alone.push(line));
//!
//! // One singer, one shared counter: same song
//! let counter = BottleCounter::new(99);
//! let mut shared = Vec::new();
//! sing_with_shared_counter(&counter, |line| shared.push(line));
//! assert_eq!(alone, shared);
//!
//! // Many singers, one sink: only the total is guaranteed
//! let config = ChorusConfig::new().with_bottles(10).with_singers(8);
//! let sink = LineSink::new();
//! sing_in_threads(&config, &sink).unwrap();
//! assert_eq!(sink.len(), config.total_lines());
//! ```

// Public modules
pub mod chorus;
pub mod config;
pub mod counter;
pub mod sink;
pub mod song;

// Re-export main types for convenience
pub use chorus::{sing_in_pool, sing_in_threads, ChorusError};
pub use config::{load_config, ChorusConfig, ConfigError};
pub use counter::BottleCounter;
pub use sink::LineSink;
