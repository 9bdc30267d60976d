//! Chorus demo
//!
//! Sings the song once from a shared counter, then as a chorus of concurrent
//! singers into one sink, and reports what each run guarantees.
//!
//! Usage:
//!   cargo run -p bottles-chorus --example chorus [config.toml]
//!
//! Set RUST_LOG=debug to follow each singer.

use anyhow::Result;
use bottles_chorus::song::sing_with_shared_counter;
use bottles_chorus::{load_config, sing_in_pool, sing_in_threads, BottleCounter, ChorusConfig, LineSink};
use std::env;
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match env::args().nth(1) {
        Some(path) => load_config(&PathBuf::from(path))?,
        None => ChorusConfig::default(),
    };

    let counter = BottleCounter::new(config.bottles);
    let mut solo = Vec::new();
    sing_with_shared_counter(&counter, |line| solo.push(line));
    println!("Solo from a shared counter: {} lines", solo.len());
    for line in solo.iter().take(5) {
        println!("  {}", line);
    }

    let sink = LineSink::new();
    sing_in_threads(&config, &sink)?;
    report("Thread chorus", &config, &sink);

    let sink = LineSink::new();
    sing_in_pool(&config, &sink)?;
    report("Pool chorus", &config, &sink);

    Ok(())
}

fn report(name: &str, config: &ChorusConfig, sink: &LineSink) {
    let lines = sink.lines();
    println!(
        "{}: {} of {} expected lines from {} singers",
        name,
        lines.len(),
        config.total_lines(),
        config.singers
    );
    println!("  first line received: {:?}", lines.first());
    println!("  last line received:  {:?}", lines.last());
}
