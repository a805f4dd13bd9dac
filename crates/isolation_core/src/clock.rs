//! Turn clock and cooperative search cancellation.
//!
//! Search runs under a soft deadline: the harness supplies a "milliseconds
//! remaining" source, and every recursive search helper polls it before doing
//! anything else. When the reading drops below the abort threshold the helper
//! returns [`SearchTimeout`], which unwinds the whole recursion back to the
//! move-selection boundary via `?`.

use std::time::{Duration, Instant};

use thiserror::Error;

/// The one expected search failure: the turn clock fell below the abort
/// threshold. Carried as `Err` through every recursive return and consumed
/// only at the move-selection boundary, never mid-recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("search aborted: remaining turn time fell below the threshold")]
pub struct SearchTimeout;

/// Cooperative deadline for one `select_move` invocation.
///
/// The threshold must be large enough to absorb the cost of unwinding the
/// recursion after the signal fires, so the caller still returns before the
/// external deadline expires.
pub struct Clock<'a> {
    time_left: &'a dyn Fn() -> f64,
    threshold_ms: f64,
}

impl<'a> Clock<'a> {
    /// `time_left` reports milliseconds remaining in the current turn.
    pub fn new(time_left: &'a dyn Fn() -> f64, threshold_ms: f64) -> Self {
        Self {
            time_left,
            threshold_ms,
        }
    }

    /// Milliseconds remaining in the current turn.
    #[inline]
    pub fn remaining_ms(&self) -> f64 {
        (self.time_left)()
    }

    /// True once the remaining time is below the abort threshold.
    #[inline]
    pub fn expired(&self) -> bool {
        self.remaining_ms() < self.threshold_ms
    }

    /// Polled once per search node, as the node's first action.
    #[inline]
    pub fn check(&self) -> Result<(), SearchTimeout> {
        if self.expired() {
            Err(SearchTimeout)
        } else {
            Ok(())
        }
    }
}

/// Builds the standard wall-clock time source for a fixed turn budget.
pub fn countdown(budget: Duration) -> impl Fn() -> f64 {
    let budget_ms = budget.as_secs_f64() * 1000.0;
    let start = Instant::now();
    move || budget_ms - start.elapsed().as_secs_f64() * 1000.0
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod clock_tests;
