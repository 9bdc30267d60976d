//! Verse emission
//!
//! Every function here renders song text purely through the closures it is given:
//! one to receive each line, one for the starting number, one for the next number
//! and an optional reaction to "take one down".
//!
//! # Thread safety is the caller's job
//!
//! The emitter holds no state and takes no locks. It is safe to call from many
//! threads at once exactly when the closures handed to it are. Whether `start` and
//! `next` read independent values or one shared counter, and whether `emit` appends
//! to a private buffer or a shared one, is entirely up to the caller. Do not add
//! synchronization here: the absence of it is the contract.
//!
//! Sharing a plain `Vec` between concurrent callers does not compile:
//!
//! ```compile_fail
//! use bottles::emit_verse;
//!
//! let mut lines = Vec::new();
//! std::thread::scope(|s| {
//!     for _ in 0..2 {
//!         s.spawn(|| emit_verse(|line| lines.push(line), || 99, || 98));
//!     }
//! });
//! ```
//!
//! A collection that supports concurrent appends does, and ends up with every line,
//! in no particular order across callers:
//!
//! ```
//! use bottles::emit_verse;
//! use std::sync::Mutex;
//!
//! let lines = Mutex::new(Vec::new());
//! std::thread::scope(|s| {
//!     for _ in 0..2 {
//!         s.spawn(|| {
//!             emit_verse(|line| lines.lock().unwrap().push(line), || 99, || 98)
//!         });
//!     }
//! });
//! assert_eq!(lines.into_inner().unwrap().len(), 10);
//! ```

use crate::types::{Result, VerseLine};

/// Render a single, already validated line.
///
/// `start` is called for both [`VerseLine::WallCount`] and [`VerseLine::Count`];
/// its result is never cached between the two, so a stateful provider is observed
/// twice per verse. `taken_down` runs before the "take one down" text is emitted.
pub fn render_line<E, S, T, N>(
    mut emit: E,
    mut start: S,
    mut taken_down: T,
    mut next: N,
    line: VerseLine,
) where
    E: FnMut(String),
    S: FnMut() -> i32,
    T: FnMut(),
    N: FnMut() -> i32,
{
    log::trace!("Emitting verse line {}", line.index());

    let text = match line {
        VerseLine::WallCount | VerseLine::Count => line.format(start()),
        VerseLine::TakeOneDown => {
            taken_down();
            line.template().to_string()
        }
        VerseLine::PassItAround => line.template().to_string(),
        VerseLine::NextWallCount => line.format(next()),
    };
    emit(text);
}

/// Emit one line of a verse, reacting when a bottle is taken down.
///
/// # Arguments
/// * `emit` - Receives the rendered line
/// * `start` - Starting number for the first two lines
/// * `taken_down` - Called when the song says a bottle is taken down
/// * `next` - Ending number for the last line
/// * `line_index` - Which line to emit, 0 through 4
///
/// # Errors
/// [`BottlesError::InvalidLineIndex`](crate::BottlesError::InvalidLineIndex) when
/// `line_index` is outside `0..=4`. No closure is called in that case.
///
/// # Example
/// ```
/// use bottles::emit_line_with_reaction;
///
/// let mut lines = Vec::new();
/// let mut taken = 0;
/// emit_line_with_reaction(|l| lines.push(l), || 99, || taken += 1, || 98, 2).unwrap();
///
/// assert_eq!(lines, vec!["take one down"]);
/// assert_eq!(taken, 1);
/// ```
pub fn emit_line_with_reaction<E, S, T, N>(
    emit: E,
    start: S,
    taken_down: T,
    next: N,
    line_index: i32,
) -> Result<()>
where
    E: FnMut(String),
    S: FnMut() -> i32,
    T: FnMut(),
    N: FnMut() -> i32,
{
    let line = VerseLine::try_from(line_index).map_err(|e| {
        log::debug!("Rejected line index {}", line_index);
        e
    })?;
    render_line(emit, start, taken_down, next, line);
    Ok(())
}

/// Emit one line of a verse. Does nothing when a bottle is taken down.
///
/// See [`emit_line_with_reaction`].
pub fn emit_line<E, S, N>(emit: E, start: S, next: N, line_index: i32) -> Result<()>
where
    E: FnMut(String),
    S: FnMut() -> i32,
    N: FnMut() -> i32,
{
    emit_line_with_reaction(emit, start, || {}, next, line_index)
}

/// Emit a whole verse, reacting when a bottle is taken down.
///
/// The five lines are emitted in order on the calling thread.
///
/// # Example
/// ```
/// use bottles::emit_verse_with_reaction;
/// use std::sync::atomic::{AtomicI32, Ordering};
///
/// let counter = AtomicI32::new(3);
/// let mut lines = Vec::new();
/// emit_verse_with_reaction(
///     |l| lines.push(l),
///     || counter.load(Ordering::SeqCst),
///     || { counter.fetch_sub(1, Ordering::SeqCst); },
///     || counter.load(Ordering::SeqCst),
/// );
///
/// assert_eq!(lines.first().unwrap(), "3 bottles of beer on the wall");
/// assert_eq!(lines.last().unwrap(), "2 bottles of beer on the wall");
/// ```
pub fn emit_verse_with_reaction<E, S, T, N>(mut emit: E, mut start: S, mut taken_down: T, mut next: N)
where
    E: FnMut(String),
    S: FnMut() -> i32,
    T: FnMut(),
    N: FnMut() -> i32,
{
    for line in VerseLine::ALL {
        render_line(&mut emit, &mut start, &mut taken_down, &mut next, line);
    }
}

/// Emit a whole verse. Does nothing when a bottle is taken down.
///
/// # Example
/// ```
/// use bottles::emit_verse;
///
/// let mut lines = Vec::new();
/// emit_verse(|l| lines.push(l), || 99, || 98);
///
/// assert_eq!(lines.len(), 5);
/// assert_eq!(lines[4], "98 bottles of beer on the wall");
/// ```
pub fn emit_verse<E, S, N>(emit: E, start: S, next: N)
where
    E: FnMut(String),
    S: FnMut() -> i32,
    N: FnMut() -> i32,
{
    emit_verse_with_reaction(emit, start, || {}, next)
}
