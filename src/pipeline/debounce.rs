//! Per-trigger debounce gate.
//!
//! Each trigger kind keeps the instant its last action completed. A trigger
//! arriving within the window of that instant is rejected, and the rejection
//! itself moves the instant forward: a burst of events keeps pushing the
//! window out, and only the first event after the input has been quiet for a
//! full window gets through.
//!
//! ```text
//! window = 1s      accepted        rejected (stamp moves)      accepted
//!                     │ complete      │         │                 │
//!  t ──────────────── 0 ─── 0.1 ──── 0.6 ────── 1.2 ───────────── 2.3 ──►
//!                          stamp=0.1  stamp=0.6  stamp=1.2
//! ```

use std::time::Duration;

use tokio::time::Instant;

use crate::types::TriggerKind;

/// Cool-down applied to each trigger kind.
pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct DebounceGate {
    window: Duration,
    last_refresh: Instant,
    last_submit: Instant,
}

impl DebounceGate {
    /// Create a gate whose timestamps both start at `now`.
    ///
    /// Session start-up counts as a completed refresh and submit, so
    /// triggers in the first window after start-up are suppressed.
    pub fn new(window: Duration, now: Instant) -> Self {
        Self {
            window,
            last_refresh: now,
            last_submit: now,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Instant the last `kind` action completed or was rejected.
    pub fn last(&self, kind: TriggerKind) -> Instant {
        match kind {
            TriggerKind::Refresh => self.last_refresh,
            TriggerKind::Submit => self.last_submit,
        }
    }

    fn slot(&mut self, kind: TriggerKind) -> &mut Instant {
        match kind {
            TriggerKind::Refresh => &mut self.last_refresh,
            TriggerKind::Submit => &mut self.last_submit,
        }
    }

    /// Whether a `kind` trigger at `now` may proceed.
    ///
    /// On rejection the stored instant moves to `now`. On acceptance it is
    /// left alone; the caller stamps it with [`complete`](Self::complete)
    /// once the action has run.
    pub fn should_proceed(&mut self, kind: TriggerKind, now: Instant) -> bool {
        let window = self.window;
        let last = self.slot(kind);
        if now.saturating_duration_since(*last) < window {
            *last = now;
            return false;
        }
        true
    }

    /// Record that a `kind` action finished at `now`.
    pub fn complete(&mut self, kind: TriggerKind, now: Instant) {
        *self.slot(kind) = now;
    }
}
