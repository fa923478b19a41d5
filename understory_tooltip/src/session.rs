// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover sessions: one enter→leave lifecycle on one target.
//!
//! ## Overview
//!
//! A [`HoverSession`] owns a [`Scope`] (its listeners) and a [`Debounce`] (its
//! reveal timer). Pointer motion before the reveal keeps pushing the timer out;
//! motion after it repositions the overlay when cursor follow is on. A leave ends
//! the session unless keep-hover is on and the pointer went onto the overlay or
//! back onto the target.
//!
//! [`SessionTable`] maps targets to their live session. Membership in the table is
//! what "entered" means: a second enter on a target that already has a session is
//! ignored, and ending a session removes it in the same call.

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::time::Duration;

use kurbo::Point;

use crate::config::SessionPolicy;
use crate::debounce::Debounce;
use crate::scope::{AbortSignal, Listeners, Scope};

/// What a pointer move did.
#[derive(Copy, Clone, Debug, PartialEq)]
#[must_use]
pub enum MoveOutcome {
    /// The reveal timer was restarted.
    Rearmed,
    /// The visible overlay should move to this anchor.
    Reposition(Point),
    /// Nothing to do.
    Ignored,
}

/// What a pointer leave did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum LeaveOutcome {
    /// The session stays open (keep-hover).
    Retained,
    /// The session was torn down.
    Ended,
}

/// A reveal whose timer has expired but which has not run yet.
///
/// Carries the session's abort signal: if the session ends before the reveal is
/// fired, [`is_cancelled`](Self::is_cancelled) reports it and the reveal must be
/// dropped. Until it is fired or dropped the reveal counts as pending.
#[derive(Clone, Debug)]
pub struct PendingReveal<K, C> {
    /// The hovered target.
    pub target: K,
    /// Caller contexts the session began with.
    pub caller: Option<Rc<[C]>>,
    /// Cursor anchor for the first show, when following the cursor.
    pub anchor: Option<Point>,
    signal: AbortSignal,
    claim: Rc<()>,
}

impl<K, C> PendingReveal<K, C> {
    /// Whether the owning session has ended since the timer fired.
    pub fn is_cancelled(&self) -> bool {
        self.signal.is_aborted()
    }

    pub(crate) fn claim(&self) -> RevealClaim {
        RevealClaim {
            claim: Rc::downgrade(&self.claim),
            signal: self.signal.clone(),
        }
    }
}

/// Watches a taken [`PendingReveal`] without keeping it alive.
#[derive(Clone, Debug)]
pub(crate) struct RevealClaim {
    claim: Weak<()>,
    signal: AbortSignal,
}

impl RevealClaim {
    /// The reveal is still held by the host and its session is live.
    pub(crate) fn is_outstanding(&self) -> bool {
        self.claim.strong_count() > 0 && !self.signal.is_aborted()
    }
}

/// One hover lifecycle on one target.
#[derive(Debug)]
pub struct HoverSession<K, C> {
    target: K,
    policy: SessionPolicy,
    scope: Scope,
    reveal: Debounce<Option<Point>>,
    caller: Option<Rc<[C]>>,
}

impl<K: Copy + Eq, C> HoverSession<K, C> {
    /// Begin a session: bind listeners and arm the reveal timer.
    pub fn begin(
        target: K,
        policy: SessionPolicy,
        caller: Option<Rc<[C]>>,
        now: Duration,
    ) -> Self {
        let mut scope = Scope::new();
        scope.listen(Listeners::TARGET_LEAVE | Listeners::TARGET_MOVE);
        if policy.keep_hover {
            scope.listen(Listeners::OVERLAY_LEAVE);
        }
        let mut reveal = Debounce::new(policy.delay);
        reveal.schedule(now, None);
        Self {
            target,
            policy,
            scope,
            reveal,
            caller,
        }
    }

    /// The hovered target.
    pub fn target(&self) -> K {
        self.target
    }

    /// Options this session runs with.
    pub fn policy(&self) -> &SessionPolicy {
        &self.policy
    }

    /// Listeners currently bound.
    pub fn listeners(&self) -> Listeners {
        self.scope.listeners()
    }

    /// Caller contexts the session began with.
    pub fn caller(&self) -> Option<&Rc<[C]>> {
        self.caller.as_ref()
    }

    /// Whether the reveal timer is armed.
    pub fn is_pending(&self) -> bool {
        !self.scope.is_aborted() && self.reveal.is_pending()
    }

    /// Deadline of the armed reveal timer.
    pub fn deadline(&self) -> Option<Duration> {
        if self.scope.is_aborted() {
            return None;
        }
        self.reveal.deadline()
    }

    /// Whether the session has been torn down.
    pub fn is_ended(&self) -> bool {
        self.scope.is_aborted()
    }

    /// Pointer moved over the target.
    ///
    /// Before the overlay is visible every move restarts the timer. Once visible,
    /// moves only matter with cursor follow.
    pub fn on_move(&mut self, pointer: Point, now: Duration, overlay_visible: bool) -> MoveOutcome {
        if !self.scope.is_listening(Listeners::TARGET_MOVE) {
            return MoveOutcome::Ignored;
        }
        let anchor = self.policy.follower.anchor_for(pointer);
        if overlay_visible {
            if self.policy.follow_cursor {
                MoveOutcome::Reposition(anchor)
            } else {
                MoveOutcome::Ignored
            }
        } else {
            self.reveal.schedule(now, Some(anchor));
            MoveOutcome::Rearmed
        }
    }

    /// Pointer left the target for `related`.
    ///
    /// `related_in_overlay` tells whether `related` is the overlay or inside it.
    pub fn on_leave(&mut self, related: Option<K>, related_in_overlay: bool) -> LeaveOutcome {
        self.leave(Listeners::TARGET_LEAVE, related, related_in_overlay)
    }

    /// Pointer left the overlay for `related`. Only bound with keep-hover.
    pub fn on_overlay_leave(
        &mut self,
        related: Option<K>,
        related_in_overlay: bool,
    ) -> LeaveOutcome {
        self.leave(Listeners::OVERLAY_LEAVE, related, related_in_overlay)
    }

    fn leave(
        &mut self,
        listener: Listeners,
        related: Option<K>,
        related_in_overlay: bool,
    ) -> LeaveOutcome {
        if self.scope.is_aborted() {
            return LeaveOutcome::Ended;
        }
        if !self.scope.is_listening(listener) {
            return LeaveOutcome::Retained;
        }
        let stays = related_in_overlay || related == Some(self.target);
        if self.policy.keep_hover && stays {
            return LeaveOutcome::Retained;
        }
        self.end();
        LeaveOutcome::Ended
    }

    /// Take the reveal if its timer has expired.
    pub fn take_due(&mut self, now: Duration) -> Option<PendingReveal<K, C>> {
        if self.scope.is_aborted() {
            return None;
        }
        let anchor = self.reveal.poll(now)?;
        Some(PendingReveal {
            target: self.target,
            caller: self.caller.clone(),
            anchor: anchor.filter(|_| self.policy.follow_cursor),
            signal: self.scope.signal(),
            claim: Rc::new(()),
        })
    }

    /// Tear down listeners and the timer together.
    pub fn end(&mut self) {
        self.reveal.cancel();
        self.scope.abort();
    }
}

/// Live sessions keyed by target.
#[derive(Debug)]
pub struct SessionTable<K, C> {
    sessions: Vec<HoverSession<K, C>>,
}

impl<K, C> Default for SessionTable<K, C> {
    fn default() -> Self {
        Self {
            sessions: Vec::new(),
        }
    }
}

impl<K: Copy + Eq, C> SessionTable<K, C> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a session on `target` unless one is already live.
    ///
    /// Returns `false` for a repeated enter.
    pub fn begin(
        &mut self,
        target: K,
        policy: SessionPolicy,
        caller: Option<Rc<[C]>>,
        now: Duration,
    ) -> bool {
        if self.is_entered(target) {
            return false;
        }
        self.sessions.push(HoverSession::begin(target, policy, caller, now));
        true
    }

    /// Whether `target` has a live session.
    pub fn is_entered(&self, target: K) -> bool {
        self.get(target).is_some()
    }

    /// The live session on `target`.
    pub fn get(&self, target: K) -> Option<&HoverSession<K, C>> {
        self.sessions.iter().find(|s| s.target == target)
    }

    /// The live session on `target`, mutably.
    pub fn get_mut(&mut self, target: K) -> Option<&mut HoverSession<K, C>> {
        self.sessions.iter_mut().find(|s| s.target == target)
    }

    /// Live sessions.
    pub fn iter(&self) -> impl Iterator<Item = &HoverSession<K, C>> {
        self.sessions.iter()
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no session is live.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Route a target leave; an ended session leaves the table.
    pub fn leave(
        &mut self,
        target: K,
        related: Option<K>,
        related_in_overlay: bool,
    ) -> Option<LeaveOutcome> {
        let outcome = self.get_mut(target)?.on_leave(related, related_in_overlay);
        self.prune();
        Some(outcome)
    }

    /// Route an overlay leave to every session listening for it.
    ///
    /// Returns the number of sessions that ended.
    pub fn overlay_leave(&mut self, related: Option<K>, related_in_overlay: bool) -> usize {
        let mut ended = 0;
        for session in &mut self.sessions {
            if session.listeners().contains(Listeners::OVERLAY_LEAVE)
                && session.on_overlay_leave(related, related_in_overlay) == LeaveOutcome::Ended
            {
                ended += 1;
            }
        }
        self.prune();
        ended
    }

    /// Whether any session has its reveal timer armed.
    pub fn any_pending(&self) -> bool {
        self.sessions.iter().any(HoverSession::is_pending)
    }

    /// Earliest armed reveal deadline.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.sessions.iter().filter_map(HoverSession::deadline).min()
    }

    /// Take every reveal due at `now`, in session order.
    pub fn take_due(&mut self, now: Duration) -> Vec<PendingReveal<K, C>> {
        self.sessions
            .iter_mut()
            .filter_map(|s| s.take_due(now))
            .collect()
    }

    /// End and drop every session.
    pub fn clear(&mut self) {
        for session in &mut self.sessions {
            session.end();
        }
        self.sessions.clear();
    }

    fn prune(&mut self) {
        self.sessions.retain(|s| !s.is_ended());
    }
}
