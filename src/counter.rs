//! The counter: an encapsulated integer accumulator.
//!
//! [`Counter`] is the single-owner form; taking `&mut self` on the mutating
//! operations makes the single-threaded contract a compile-time guarantee.
//! [`SharedCounter`] is the concurrent form required when the same count is
//! exposed to multiple callers: a cheaply cloneable handle over an atomic
//! with the same three operations taking `&self`.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

/// An encapsulated signed accumulator starting at zero.
///
/// The count moves by exactly ±1 per mutating call and is never clamped:
/// repeated [`decrement`](Counter::decrement) drives it arbitrarily
/// negative. The field is private; the three methods below are the whole
/// surface.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Counter {
    count: i64,
}

impl Counter {
    /// Creates a counter holding zero.
    pub fn new() -> Self {
        Self { count: 0 }
    }

    /// Increases the count by exactly 1.
    pub fn increment(&mut self) {
        self.count += 1;
    }

    /// Decreases the count by exactly 1. No floor is enforced.
    pub fn decrement(&mut self) {
        self.count -= 1;
    }

    /// Returns the current count without modifying it.
    pub fn count(&self) -> i64 {
        self.count
    }
}

/// A thread-safe counter handle.
///
/// Clones share one underlying count. `Relaxed` ordering is sufficient for
/// a pure accumulator: the final value is the signed sum of all increments
/// and decrements regardless of interleaving, and no other memory is
/// published through the counter.
#[derive(Debug, Default, Clone)]
pub struct SharedCounter {
    count: Arc<AtomicI64>,
}

impl SharedCounter {
    /// Creates a shared counter holding zero.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicI64::new(0)),
        }
    }

    /// Increases the shared count by exactly 1.
    pub fn increment(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    /// Decreases the shared count by exactly 1. No floor is enforced.
    pub fn decrement(&self) {
        self.count.fetch_sub(1, Ordering::Relaxed);
    }

    /// Returns the current shared count.
    pub fn count(&self) -> i64 {
        self.count.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_counter_reads_zero() {
        let counter = Counter::new();
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(Counter::default(), Counter::new());
    }

    #[test]
    fn test_increment_twice_decrement_once() {
        let mut counter = Counter::new();
        counter.increment();
        counter.increment();
        counter.decrement();
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn test_decrement_goes_negative() {
        let mut counter = Counter::new();
        counter.decrement();
        counter.decrement();
        assert_eq!(counter.count(), -2);
    }

    #[test]
    fn test_count_is_read_only() {
        let mut counter = Counter::new();
        counter.increment();
        let first = counter.count();
        let second = counter.count();
        assert_eq!(first, second);
    }

    #[test]
    fn test_hundred_up_hundred_down() {
        let mut counter = Counter::new();
        for _ in 0..100 {
            counter.increment();
        }
        for _ in 0..100 {
            counter.decrement();
        }
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_final_count_ignores_interleaving() {
        // Same totals (3 up, 2 down) in three different orders.
        let orders: [&[i64]; 3] = [
            &[1, 1, 1, -1, -1],
            &[-1, 1, -1, 1, 1],
            &[1, -1, 1, 1, -1],
        ];

        for order in orders {
            let mut counter = Counter::new();
            for step in order {
                if *step > 0 {
                    counter.increment();
                } else {
                    counter.decrement();
                }
            }
            assert_eq!(counter.count(), 1, "order {order:?}");
        }
    }

    #[test]
    fn test_shared_counter_starts_at_zero() {
        let counter = SharedCounter::new();
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_shared_counter_clones_share_state() {
        let counter = SharedCounter::new();
        let other = counter.clone();

        counter.increment();
        other.increment();
        other.decrement();

        assert_eq!(counter.count(), 1);
        assert_eq!(other.count(), 1);
    }

    #[test]
    fn test_shared_counter_across_threads() {
        let counter = SharedCounter::new();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let counter = counter.clone();
                std::thread::spawn(move || {
                    for _ in 0..1_000 {
                        counter.increment();
                    }
                    for _ in 0..250 {
                        counter.decrement();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(counter.count(), 4 * (1_000 - 250));
    }
}
