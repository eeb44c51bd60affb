//! Cooperative cancellation for long traces.
//!
//! The engine polls its hook once per candidate point. Parabola traces are
//! the main customer: each candidate runs a nested circle-growing search.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Polled between candidate points; returning `true` aborts the trace.
pub trait CancelHook {
    /// Whether the caller wants the trace to stop.
    fn is_cancelled(&self) -> bool;
}

/// Hook that never fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl CancelHook for Never {
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Fires once a wall-clock deadline has passed.
#[derive(Debug, Clone, Copy)]
pub struct Deadline(pub Instant);

impl Deadline {
    /// Deadline `budget` from now.
    #[must_use]
    pub fn after(budget: Duration) -> Self {
        Self(Instant::now() + budget)
    }
}

impl CancelHook for Deadline {
    fn is_cancelled(&self) -> bool {
        Instant::now() >= self.0
    }
}

impl CancelHook for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<F> CancelHook for F
where
    F: Fn() -> bool,
{
    fn is_cancelled(&self) -> bool {
        self()
    }
}
