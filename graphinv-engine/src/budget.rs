//! Wall-clock budgets for individual evaluations.

use std::time::{Duration, Instant};

/// Per-call resource budget. The default is unlimited, matching the
/// correctness-over-speed bias of the exact strategies; table builds over
/// untrusted corpora should set a time limit so a pathological graph
/// surfaces as a `Timeout` cell instead of blocking the whole build.
#[derive(Clone, Copy, Debug, Default)]
pub struct EvalBudget {
    time_limit: Option<Duration>,
}

impl EvalBudget {
    /// A budget with no limits.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self { time_limit: None }
    }

    /// A budget that interrupts any single evaluation after `limit`.
    #[must_use]
    pub const fn with_time_limit(limit: Duration) -> Self {
        Self {
            time_limit: Some(limit),
        }
    }

    /// The absolute deadline for an evaluation starting now.
    pub(crate) fn deadline(self) -> Option<Instant> {
        self.time_limit.map(|limit| Instant::now() + limit)
    }
}
