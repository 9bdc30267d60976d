//! Whole-song drivers
//!
//! Both drivers run on the calling thread and hand every line to `emit`. They
//! differ only in where the numbers come from.

use crate::counter::BottleCounter;
use bottles::{emit_verse, emit_verse_with_reaction, LINES_PER_VERSE};

/// Number of lines in a song starting at `bottles`
pub fn expected_lines(bottles: i32) -> usize {
    usize::try_from(bottles).unwrap_or(0).saturating_mul(LINES_PER_VERSE)
}

/// Sing from `bottles` down to one, with a fresh pair of suppliers per verse.
///
/// Each verse captures its own count, so no verse can see another's state.
pub fn sing_with_independent_suppliers<E>(bottles: i32, mut emit: E)
where
    E: FnMut(String),
{
    log::debug!("Singing {} verses from independent suppliers", bottles.max(0));
    for n in (1..=bottles).rev() {
        emit_verse(&mut emit, || n, || n - 1);
    }
}

/// Sing while `counter` is above zero, using it for every number.
///
/// The counter is read for the first two lines, decremented when a bottle is taken
/// down and read again for the last line. Called from one thread this produces the
/// same text as [`sing_with_independent_suppliers`]. Sharing the counter with a
/// concurrent singer does not make it an error, only unpredictable.
pub fn sing_with_shared_counter<E>(counter: &BottleCounter, mut emit: E)
where
    E: FnMut(String),
{
    log::debug!("Singing from shared counter at {}", counter.get());
    while counter.get() > 0 {
        emit_verse_with_reaction(
            &mut emit,
            || counter.get(),
            || {
                counter.decrement_and_get();
            },
            || counter.get(),
        );
    }
}
