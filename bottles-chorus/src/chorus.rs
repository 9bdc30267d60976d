//! Many singers, one sink
//!
//! Every singer sings the whole song with its own independent suppliers and pushes
//! each line into the same [`LineSink`]. Singers do not coordinate, so the only
//! guarantee is terminal: once all of them are done the sink holds exactly
//! `singers * lines_per_singer` lines. Their relative order is unspecified.

use crate::config::{ChorusConfig, ConfigError};
use crate::sink::LineSink;
use crate::song::sing_with_independent_suppliers;
use rayon::prelude::*;

/// Errors that stop a chorus before anyone sings
#[derive(Debug, thiserror::Error)]
pub enum ChorusError {
    #[error("Invalid chorus config: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to build singer pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for chorus operations
pub type Result<T> = std::result::Result<T, ChorusError>;

/// Sing with one OS thread per singer.
///
/// Returns once every singer has finished. A panic in any singer is re-raised here.
pub fn sing_in_threads(config: &ChorusConfig, sink: &LineSink) -> Result<()> {
    config.validate()?;
    log::info!(
        "Starting chorus of {} threads, {} bottles each",
        config.singers,
        config.bottles
    );

    std::thread::scope(|s| {
        for singer in 0..config.singers {
            s.spawn(move || {
                log::debug!("Singer {} started", singer);
                sing_with_independent_suppliers(config.bottles, |line| sink.push(line));
                log::debug!("Singer {} finished", singer);
            });
        }
    });

    log::info!("Chorus finished with {} lines", sink.len());
    Ok(())
}

/// Sing with the singers scheduled on a rayon pool.
///
/// The pool has `config.pool_threads` workers when set, rayon's default otherwise.
pub fn sing_in_pool(config: &ChorusConfig, sink: &LineSink) -> Result<()> {
    config.validate()?;

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = config.pool_threads {
        builder = builder.num_threads(threads);
    }
    let pool = builder.build()?;

    log::info!(
        "Starting chorus of {} singers on {} pool threads",
        config.singers,
        pool.current_num_threads()
    );

    pool.install(|| {
        (0..config.singers).into_par_iter().for_each(|singer| {
            log::debug!("Singer {} started", singer);
            sing_with_independent_suppliers(config.bottles, |line| sink.push(line));
        });
    });

    log::info!("Chorus finished with {} lines", sink.len());
    Ok(())
}
