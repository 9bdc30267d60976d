//! Shared bottle counter
//!
//! The canonical dependent supplier: one counter read and decremented by whoever
//! holds a reference to it. Every call may observe the effects of earlier calls,
//! from this thread or any other.

use std::sync::atomic::{AtomicI32, Ordering};

/// A counter that can stand in for both the start and next providers
#[derive(Debug, Default)]
pub struct BottleCounter {
    value: AtomicI32,
}

impl BottleCounter {
    /// Create a counter holding `start`
    pub fn new(start: i32) -> Self {
        Self {
            value: AtomicI32::new(start),
        }
    }

    /// Current value
    pub fn get(&self) -> i32 {
        self.value.load(Ordering::SeqCst)
    }

    /// Take one bottle down and return what is left.
    ///
    /// Wraps around at `i32::MIN`, like the stored value does.
    pub fn decrement_and_get(&self) -> i32 {
        self.value.fetch_sub(1, Ordering::SeqCst).wrapping_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decrement_and_get() {
        let counter = BottleCounter::new(2);
        assert_eq!(counter.get(), 2);
        assert_eq!(counter.decrement_and_get(), 1);
        assert_eq!(counter.decrement_and_get(), 0);
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn test_decrement_wraps_at_min() {
        let counter = BottleCounter::new(i32::MIN);
        assert_eq!(counter.decrement_and_get(), i32::MAX);
        assert_eq!(counter.get(), i32::MAX);
    }

    #[test]
    fn test_concurrent_decrements_are_not_lost() {
        let counter = BottleCounter::new(1000);
        std::thread::scope(|s| {
            for _ in 0..10 {
                s.spawn(|| {
                    for _ in 0..100 {
                        counter.decrement_and_get();
                    }
                });
            }
        });
        assert_eq!(counter.get(), 0);
    }
}
