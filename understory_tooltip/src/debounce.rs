// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-edge debounce over host-supplied timestamps.
//!
//! ## Overview
//!
//! [`Debounce`] holds at most one pending invocation. Every
//! [`schedule`](Debounce::schedule) replaces the pending arguments and pushes the
//! deadline out to `now + delay`, so the wrapped action fires only once the caller
//! has been quiet for the whole delay. The host drives time: call
//! [`poll`](Debounce::poll) with the current timestamp and act on the arguments it
//! returns.
//!
//! ## Minimal example
//!
//! ```
//! use core::time::Duration;
//! use understory_tooltip::debounce::Debounce;
//!
//! let ms = Duration::from_millis;
//! let mut d = Debounce::new(ms(500));
//! d.schedule(ms(0), "first");
//! d.schedule(ms(300), "second");
//! assert_eq!(d.poll(ms(700)), None);
//! assert_eq!(d.poll(ms(800)), Some("second"));
//! assert!(!d.is_pending());
//! ```

use core::time::Duration;

/// Reveal delay used when none is configured.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// A trailing-edge debounce with cancellation.
///
/// Timestamps are host-relative [`Duration`]s from any fixed origin; they only
/// need to be monotonic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Debounce<A> {
    delay: Duration,
    pending: Option<(Duration, A)>,
}

impl<A> Debounce<A> {
    /// Create an idle debounce that fires `delay` after the last schedule.
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// The configured delay.
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// (Re)start the delay, replacing any pending arguments.
    pub fn schedule(&mut self, now: Duration, args: A) {
        self.pending = Some((now.saturating_add(self.delay), args));
    }

    /// Drop the pending invocation, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether an invocation is waiting for its deadline.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending invocation.
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|(at, _)| *at)
    }

    /// Whether the pending invocation is due at `now`.
    pub fn is_due(&self, now: Duration) -> bool {
        self.deadline().is_some_and(|at| now >= at)
    }

    /// Take the pending arguments if the deadline has been reached.
    ///
    /// Fires at most once per quiet period: the debounce is idle afterwards.
    pub fn poll(&mut self, now: Duration) -> Option<A> {
        if !self.is_due(now) {
            return None;
        }
        self.pending.take().map(|(_, args)| args)
    }
}

impl<A> Default for Debounce<A> {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn fires_after_delay() {
        let mut d = Debounce::new(ms(500));
        d.schedule(ms(0), 1);
        assert_eq!(d.poll(ms(499)), None);
        assert_eq!(d.poll(ms(500)), Some(1));
        assert_eq!(d.poll(ms(1000)), None, "fires only once");
    }

    // Each schedule pushes the deadline out and replaces the arguments.
    #[test]
    fn reschedule_restarts_and_keeps_last_args() {
        let mut d = Debounce::new(ms(500));
        d.schedule(ms(0), 'a');
        d.schedule(ms(200), 'b');
        d.schedule(ms(400), 'c');
        assert_eq!(d.deadline(), Some(ms(900)));
        assert_eq!(d.poll(ms(899)), None);
        assert_eq!(d.poll(ms(900)), Some('c'));
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut d: Debounce<()> = Debounce::default();
        d.cancel();
        assert!(!d.is_pending());
        d.schedule(ms(0), ());
        d.cancel();
        d.cancel();
        assert_eq!(d.poll(ms(10_000)), None);
        assert_eq!(d.delay(), DEFAULT_DELAY);
    }

    #[test]
    fn saturates_near_end_of_time() {
        let mut d = Debounce::new(ms(500));
        d.schedule(Duration::MAX, ());
        assert_eq!(d.deadline(), Some(Duration::MAX));
        assert_eq!(d.poll(Duration::MAX), Some(()));
    }
}
