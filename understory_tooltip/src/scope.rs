// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cancellation scopes: a shared abort signal plus the listener set bound under it.
//!
//! ## Overview
//!
//! A hover lifecycle registers a handful of pointer listeners and one timer. All of
//! them hang off a single [`Scope`] so that one [`abort`](Scope::abort) releases
//! everything together: the listener set becomes empty and every
//! [`AbortSignal`] handed out reports aborted, which is what a timer callback that
//! is already in flight checks before acting.
//!
//! ```
//! use understory_tooltip::scope::{Listeners, Scope};
//!
//! let mut scope = Scope::new();
//! scope.listen(Listeners::TARGET_LEAVE | Listeners::TARGET_MOVE);
//! let signal = scope.signal();
//!
//! scope.abort();
//! assert!(signal.is_aborted());
//! assert!(scope.listeners().is_empty());
//! ```

use alloc::rc::Rc;
use core::cell::Cell;

bitflags::bitflags! {
    /// Pointer listeners a tooltip can have bound for a target.
    ///
    /// Hosts that bind real event sources can mirror this set; the controller
    /// ignores events whose listener is not bound.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Listeners: u8 {
        /// Pointer entered the target (bound for the controller's lifetime).
        const TARGET_ENTER  = 0b0000_0001;
        /// Pointer left the target.
        const TARGET_LEAVE  = 0b0000_0010;
        /// Pointer moved over the target.
        const TARGET_MOVE   = 0b0000_0100;
        /// Pointer left the overlay (only with keep-hover).
        const OVERLAY_LEAVE = 0b0000_1000;
    }
}

impl Default for Listeners {
    fn default() -> Self {
        Self::empty()
    }
}

/// Read side of an abort flag.
///
/// Cheap to clone; all clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct AbortSignal(Rc<Cell<bool>>);

impl AbortSignal {
    /// Whether the owning controller has aborted.
    pub fn is_aborted(&self) -> bool {
        self.0.get()
    }
}

/// Write side of an abort flag.
#[derive(Debug, Default)]
pub struct AbortController {
    signal: AbortSignal,
}

impl AbortController {
    /// Create a controller whose signal is not aborted.
    pub fn new() -> Self {
        Self::default()
    }

    /// A signal observing this controller.
    pub fn signal(&self) -> AbortSignal {
        self.signal.clone()
    }

    /// Abort. Idempotent.
    pub fn abort(&self) {
        self.signal.0.set(true);
    }

    /// Whether [`abort`](Self::abort) has been called.
    pub fn is_aborted(&self) -> bool {
        self.signal.is_aborted()
    }
}

/// Listener set bound under one abort controller.
#[derive(Debug, Default)]
pub struct Scope {
    abort: AbortController,
    listeners: Listeners,
}

impl Scope {
    /// Create a live scope with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `listeners` under this scope. Ignored once aborted.
    pub fn listen(&mut self, listeners: Listeners) {
        if !self.abort.is_aborted() {
            self.listeners |= listeners;
        }
    }

    /// Currently bound listeners.
    pub fn listeners(&self) -> Listeners {
        self.listeners
    }

    /// Whether `listener` is bound.
    pub fn is_listening(&self, listener: Listeners) -> bool {
        self.listeners.contains(listener)
    }

    /// Signal for timers and other deferred work started under this scope.
    pub fn signal(&self) -> AbortSignal {
        self.abort.signal()
    }

    /// Whether the scope has been torn down.
    pub fn is_aborted(&self) -> bool {
        self.abort.is_aborted()
    }

    /// Tear down: unbind every listener and abort the signal.
    pub fn abort(&mut self) {
        self.listeners = Listeners::empty();
        self.abort.abort();
    }
}
