// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tooltip controller: hover intent on top of a popover and a content root.
//!
//! ## States
//!
//! `Hidden → Pending → Visible → Hidden`, and `Pending → Hidden` when the pointer
//! leaves before the reveal timer fires. The state is not stored: it is read off
//! the popover (`Visible`), the sessions' timers and reveals taken but not yet
//! fired (`Pending`). See [`TooltipController::visibility`].
//!
//! ## Lifecycle
//!
//! A controller accepts hovers once [`attach`](TooltipController::attach) has
//! resolved a target. Controllers built with
//! [`with_template`](TooltipController::with_template) need no attach when they
//! are driven through [`hover_enter`](TooltipController::hover_enter) alone. An
//! attach that finds no target leaves the controller inert for good, and
//! [`detach`](TooltipController::detach) is final: neither comes back to life.
//!
//! ## Driving it
//!
//! 1) [`attach`](TooltipController::attach) once the host element is known.
//! 2) Forward pointer events: [`pointer_enter`](TooltipController::pointer_enter),
//!    [`pointer_move`](TooltipController::pointer_move),
//!    [`pointer_leave`](TooltipController::pointer_leave) and, with keep-hover,
//!    [`overlay_leave`](TooltipController::overlay_leave). Hosts that hit-test
//!    paths can use [`handle_transition`](TooltipController::handle_transition).
//! 3) Call [`poll`](TooltipController::poll) when
//!    [`next_deadline`](TooltipController::next_deadline) passes.
//!
//! ## Ordering
//!
//! Events and timer expiry are processed in the order the host delivers them. A
//! leave delivered before the poll that would have fired the reveal wins. Hosts
//! that split a poll into [`take_due`](TooltipController::take_due) and
//! [`fire`](TooltipController::fire) get the same guarantee across the gap: a
//! reveal whose session ended in between is dropped.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::time::Duration;

use kurbo::Point;

use crate::config::TooltipConfig;
use crate::content::{
    BindOutcome, ContentBinder, ContentRoot, ContentTemplate, TemplateResolver, resolve_template,
};
use crate::logging::{debug, trace};
use crate::popover::{Anchor, Popover};
use crate::scope::Listeners;
use crate::session::{LeaveOutcome, MoveOutcome, PendingReveal, RevealClaim, SessionTable};
use crate::transitions::HoverTransition;

/// Derived visibility of the overlay.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Not shown, no reveal armed.
    Hidden,
    /// A reveal timer is armed.
    Pending,
    /// Shown.
    Visible,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Lifecycle<K> {
    Unattached,
    /// Built with a fixed template; driven by `hover_enter` without an attach.
    Standalone,
    Attached(K),
    Inert,
    TornDown,
}

type Template<R> = ContentTemplate<<R as ContentRoot>::Template, <R as ContentRoot>::Context>;

/// Hover-intent tooltip controller.
///
/// `K` is the host's node handle, `P` the popover, and `R` the overlay's content
/// root.
pub struct TooltipController<K, P, R: ContentRoot> {
    config: TooltipConfig<K, R::Template>,
    popover: P,
    binder: ContentBinder<R>,
    template: Option<Template<R>>,
    lifecycle: Lifecycle<K>,
    sessions: SessionTable<K, R::Context>,
    taken: Vec<RevealClaim>,
}

impl<K: Copy + Eq + Debug, P, R: ContentRoot> Debug for TooltipController<K, P, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TooltipController")
            .field("lifecycle", &self.lifecycle)
            .field("sessions", &self.sessions.len())
            .field("binder", &self.binder)
            .finish_non_exhaustive()
    }
}

impl<K, P, R> TooltipController<K, P, R>
where
    K: Copy + Eq + Debug,
    P: Popover<K>,
    R: ContentRoot,
{
    /// Create a detached controller.
    pub fn new(config: TooltipConfig<K, R::Template>, popover: P, root: R) -> Self {
        Self {
            config,
            popover,
            binder: ContentBinder::new(root),
            template: None,
            lifecycle: Lifecycle::Unattached,
            sessions: SessionTable::new(),
            taken: Vec::new(),
        }
    }

    /// Create a controller with a fixed template; discovery is skipped on attach.
    ///
    /// Such a controller takes [`hover_enter`](Self::hover_enter) calls before (or
    /// without) an attach, which suits one tooltip shared by many targets.
    pub fn with_template(
        config: TooltipConfig<K, R::Template>,
        popover: P,
        root: R,
        template: Template<R>,
    ) -> Self {
        let mut controller = Self::new(config, popover, root);
        controller.template = Some(template);
        controller.lifecycle = Lifecycle::Standalone;
        controller
    }

    /// Resolve the target and template and start listening for enters.
    ///
    /// The target is the configured one or else `host`. Without either the
    /// controller becomes inert for good and this returns `false`, as it does for
    /// an inert or detached controller. The template is resolved once; later
    /// attaches keep it.
    pub fn attach(
        &mut self,
        host: Option<K>,
        resolver: &impl TemplateResolver<R::Template, R::Context>,
    ) -> bool
    where
        R::Template: Clone,
    {
        if matches!(self.lifecycle, Lifecycle::Inert | Lifecycle::TornDown) {
            trace!(lifecycle = ?self.lifecycle, "attach ignored");
            return false;
        }
        let Some(target) = self.config.target.or(host) else {
            debug!("tooltip has no target; staying inert");
            self.lifecycle = Lifecycle::Inert;
            return false;
        };
        if self.template.is_none() {
            let explicit = self.config.content_template.clone();
            self.template = Some(resolve_template(explicit, resolver));
        }
        self.popover.set_top_layer(self.config.top_layer);
        self.popover.set_pointer_events(self.config.pointer_events());
        self.lifecycle = Lifecycle::Attached(target);
        debug!(?target, "tooltip attached");
        true
    }

    /// Tear everything down: sessions, overlay, and bound content.
    ///
    /// The controller ignores every later enter and attach.
    pub fn detach(&mut self) {
        self.sessions.clear();
        self.taken.clear();
        if self.popover.is_visible() {
            self.retract();
        }
        self.binder.release();
        self.lifecycle = Lifecycle::TornDown;
    }

    /// The attached target.
    pub fn target(&self) -> Option<K> {
        match self.lifecycle {
            Lifecycle::Attached(target) => Some(target),
            _ => None,
        }
    }

    /// Whether [`detach`](Self::detach) has run.
    pub fn is_detached(&self) -> bool {
        self.lifecycle == Lifecycle::TornDown
    }

    /// Current configuration.
    pub fn config(&self) -> &TooltipConfig<K, R::Template> {
        &self.config
    }

    /// Replace the configuration. Live sessions keep the options they began with.
    pub fn set_config(&mut self, config: TooltipConfig<K, R::Template>) {
        self.config = config;
    }

    /// The popover.
    pub fn popover(&self) -> &P {
        &self.popover
    }

    /// The popover, mutably.
    pub fn popover_mut(&mut self) -> &mut P {
        &mut self.popover
    }

    /// The overlay's content root.
    pub fn content(&self) -> &R {
        self.binder.root()
    }

    /// The resolved template.
    pub fn template(&self) -> Option<&Template<R>> {
        self.template.as_ref()
    }

    /// Listeners bound for `node`.
    pub fn listeners(&self, node: K) -> Listeners {
        let mut listeners = self
            .sessions
            .get(node)
            .map_or(Listeners::empty(), |s| s.listeners());
        if self.target() == Some(node) {
            listeners |= Listeners::TARGET_ENTER;
        }
        listeners
    }

    /// Whether `target` has a live hover session.
    pub fn is_entered(&self, target: K) -> bool {
        self.sessions.is_entered(target)
    }

    /// Derived overlay state.
    ///
    /// A reveal taken with [`take_due`](Self::take_due) stays `Pending` until it
    /// is fired or dropped, or its session ends.
    pub fn visibility(&self) -> Visibility {
        if self.popover.is_visible() {
            Visibility::Visible
        } else if self.sessions.any_pending()
            || self.taken.iter().any(RevealClaim::is_outstanding)
        {
            Visibility::Pending
        } else {
            Visibility::Hidden
        }
    }

    /// When the host should next call [`poll`](Self::poll).
    pub fn next_deadline(&self) -> Option<Duration> {
        self.sessions.next_deadline()
    }

    /// Pointer entered the attached target.
    ///
    /// Ignored for nodes other than the attached target and for repeated enters.
    pub fn pointer_enter(&mut self, target: K, now: Duration) -> bool {
        if self.target() != Some(target) {
            return false;
        }
        self.hover_enter(target, None, now)
    }

    /// Begin hovering `target`, with contexts for the content bound on reveal.
    ///
    /// Works for any node, which lets one controller serve many targets from code.
    /// Ignored unless the controller is attached, or was built
    /// [`with_template`](Self::with_template) and not detached.
    pub fn hover_enter(
        &mut self,
        target: K,
        caller: Option<Rc<[R::Context]>>,
        now: Duration,
    ) -> bool {
        let accepts = match self.lifecycle {
            Lifecycle::Attached(_) | Lifecycle::Standalone => true,
            Lifecycle::Unattached | Lifecycle::Inert | Lifecycle::TornDown => false,
        };
        if !accepts {
            trace!(?target, lifecycle = ?self.lifecycle, "controller not live; ignoring enter");
            return false;
        }
        let policy = self.config.session_policy();
        if !self.sessions.begin(target, policy, caller, now) {
            trace!(?target, "already entered; ignoring enter");
            return false;
        }
        self.popover.set_top_layer(self.config.top_layer);
        self.popover.set_pointer_events(self.config.pointer_events());
        debug!(?target, "hover session begun");
        true
    }

    /// Pointer moved over `target`.
    pub fn pointer_move(&mut self, target: K, pointer: Point, now: Duration) -> MoveOutcome {
        let visible = self.popover.is_visible();
        let Some(session) = self.sessions.get_mut(target) else {
            return MoveOutcome::Ignored;
        };
        let outcome = session.on_move(pointer, now, visible);
        if let MoveOutcome::Reposition(anchor) = outcome {
            self.popover.re_fit(anchor);
        }
        outcome
    }

    /// Pointer left `target` for `related`.
    ///
    /// Returns `None` when `target` had no session.
    pub fn pointer_leave(&mut self, target: K, related: Option<K>) -> Option<LeaveOutcome> {
        let in_overlay = self.in_overlay(related);
        let outcome = self.sessions.leave(target, related, in_overlay)?;
        match outcome {
            LeaveOutcome::Ended => {
                debug!(?target, ?related, "hover session ended");
                self.retract();
            }
            LeaveOutcome::Retained => {
                trace!(?target, ?related, "pointer kept on tooltip");
            }
        }
        Some(outcome)
    }

    /// Pointer left the overlay for `related` (keep-hover sessions only).
    ///
    /// Returns `true` if a session ended.
    pub fn overlay_leave(&mut self, related: Option<K>) -> bool {
        let in_overlay = self.in_overlay(related);
        if self.sessions.overlay_leave(related, in_overlay) == 0 {
            return false;
        }
        debug!(?related, "pointer left tooltip overlay");
        self.retract();
        true
    }

    /// Route a path-derived transition.
    ///
    /// Enters reach the attached target; leaves reach an entered target or, for
    /// nodes inside the overlay, the overlay. Returns `true` if it was routed.
    pub fn handle_transition(&mut self, transition: HoverTransition<K>, now: Duration) -> bool {
        match transition {
            HoverTransition::Enter { node, .. } => self.pointer_enter(node, now),
            HoverTransition::Leave { node, to } => {
                if self.sessions.is_entered(node) {
                    self.pointer_leave(node, to).is_some()
                } else if self.popover.contains(&node) {
                    self.overlay_leave(to)
                } else {
                    false
                }
            }
        }
    }

    /// Fire every reveal due at `now`. Returns how many were shown.
    pub fn poll(&mut self, now: Duration) -> usize {
        let mut shown = 0;
        for pending in self.take_due(now) {
            if self.fire(pending) {
                shown += 1;
            }
        }
        shown
    }

    /// Take the reveals whose timers expired at `now` without running them.
    pub fn take_due(&mut self, now: Duration) -> Vec<PendingReveal<K, R::Context>> {
        self.taken.retain(RevealClaim::is_outstanding);
        let due = self.sessions.take_due(now);
        self.taken.extend(due.iter().map(PendingReveal::claim));
        due
    }

    /// Run a reveal taken by [`take_due`](Self::take_due).
    ///
    /// Dropped if its session ended in the meantime.
    pub fn fire(&mut self, pending: PendingReveal<K, R::Context>) -> bool {
        if pending.is_cancelled() {
            trace!(node = ?pending.target, "session ended before reveal; suppressed");
            return false;
        }
        let _ = self.reveal(pending.target, pending.caller.as_ref(), pending.anchor);
        true
    }

    /// Bind content and show the overlay.
    ///
    /// Anchored at `anchor` when given (cursor follow), else at `target`. With no
    /// template resolved yet the text template is used. A detached controller
    /// shows nothing and returns [`BindOutcome::Empty`].
    pub fn reveal(
        &mut self,
        target: K,
        caller: Option<&Rc<[R::Context]>>,
        anchor: Option<Point>,
    ) -> BindOutcome {
        if self.lifecycle == Lifecycle::TornDown {
            trace!(?target, "detached; reveal ignored");
            return BindOutcome::Empty;
        }
        let template = self.template.get_or_insert_with(ContentTemplate::text);
        let outcome = self
            .binder
            .ensure_bound(Some(template), self.config.text.as_deref(), caller);
        let anchor = match anchor {
            Some(point) => Anchor::Point(point),
            None => Anchor::Target(target),
        };
        debug!(?target, ?anchor, ?outcome, "tooltip revealed");
        self.popover.show(anchor);
        outcome
    }

    /// Hide the overlay. Bound content is kept for the next reveal.
    pub fn retract(&mut self) {
        self.popover.hide();
    }

    fn in_overlay(&self, related: Option<K>) -> bool {
        related.is_some_and(|node| self.popover.contains(&node))
    }
}
