//! Memoized natural-log factorial table
//!
//! `n!` overflows `f64` past n = 170, so every probability in this crate is
//! assembled from `ln(n!)` terms instead. Values are computed once and kept
//! in an append-only table shared process-wide.

use std::sync::{Mutex, PoisonError};

/// Append-only table where index `i` holds `ln(i!)`.
///
/// Extension walks sequentially from the last known index, accumulating
/// `ln(i)`; lookups after that are O(1) and bit-identical across calls.
#[derive(Debug, Default)]
pub struct LogFactorialTable {
    values: Vec<f64>,
}

impl LogFactorialTable {
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// `ln(n!)`, extending the table on first use of an index
    pub fn ln_factorial(&mut self, n: usize) -> f64 {
        if self.values.is_empty() {
            self.values.push(0.0); // ln(0!) = 0
        }
        if n < self.values.len() {
            return self.values[n];
        }
        let mut acc = self.values[self.values.len() - 1];
        for i in self.values.len()..=n {
            acc += (i as f64).ln();
            self.values.push(acc);
        }
        self.values[n]
    }
}

static SHARED: Mutex<LogFactorialTable> = Mutex::new(LogFactorialTable::new());

/// `ln(n!)` from the shared process-wide table.
///
/// Extension is idempotent (re-deriving a range yields identical values), so
/// a lock poisoned by a panicking thread is still a valid table and is simply
/// reclaimed.
pub fn ln_factorial(n: usize) -> f64 {
    SHARED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .ln_factorial(n)
}
