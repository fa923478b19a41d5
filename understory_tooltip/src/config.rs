// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip configuration.
//!
//! A [`TooltipConfig`] is read when a hover session begins. Changing it through
//! [`TooltipController::set_config`](crate::controller::TooltipController::set_config)
//! leaves sessions already in progress untouched.
//!
//! ```
//! use core::time::Duration;
//! use understory_tooltip::config::TooltipConfig;
//!
//! let config: TooltipConfig<u32, ()> = TooltipConfig::default()
//!     .with_text("Save the file")
//!     .follow_cursor(true)
//!     .with_delay(Duration::from_millis(300));
//! assert!(config.top_layer);
//! assert!(!config.keep_hover);
//! ```

use alloc::string::String;
use core::time::Duration;

use kurbo::Vec2;

use crate::debounce::DEFAULT_DELAY;
use crate::follow::{CURSOR_OFFSET, CursorFollower};
use crate::popover::PointerEvents;

/// Options recognized by a tooltip.
///
/// `K` is the host's node handle and `T` its template type.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipConfig<K, T> {
    /// Plain content used by the default template.
    pub text: Option<String>,
    /// Explicit target; when absent the host element passed to
    /// [`attach`](crate::controller::TooltipController::attach) is used.
    pub target: Option<K>,
    /// Anchor the overlay at the pointer and track it while visible.
    pub follow_cursor: bool,
    /// Let the pointer move from the target onto the overlay without hiding it.
    pub keep_hover: bool,
    /// Stack the overlay above normal content.
    pub top_layer: bool,
    /// Explicit content template; wins over discovered templates.
    pub content_template: Option<T>,
    /// Dwell time before the overlay is revealed.
    pub delay: Duration,
    /// Shift between the pointer and the anchor when following the cursor.
    pub cursor_offset: Vec2,
}

impl<K, T> Default for TooltipConfig<K, T> {
    fn default() -> Self {
        Self {
            text: None,
            target: None,
            follow_cursor: false,
            keep_hover: false,
            top_layer: true,
            content_template: None,
            delay: DEFAULT_DELAY,
            cursor_offset: CURSOR_OFFSET,
        }
    }
}

impl<K, T> TooltipConfig<K, T> {
    /// Text tooltip bound to an explicit target.
    pub fn for_target(target: K, text: impl Into<String>) -> Self {
        Self::default().with_target(target).with_text(text)
    }

    /// Set the plain text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set an explicit target.
    pub fn with_target(mut self, target: K) -> Self {
        self.target = Some(target);
        self
    }

    /// Set an explicit content template.
    pub fn with_content_template(mut self, template: T) -> Self {
        self.content_template = Some(template);
        self
    }

    /// Enable or disable cursor follow.
    pub fn follow_cursor(mut self, follow_cursor: bool) -> Self {
        self.follow_cursor = follow_cursor;
        self
    }

    /// Enable or disable keep-hover.
    pub fn keep_hover(mut self, keep_hover: bool) -> Self {
        self.keep_hover = keep_hover;
        self
    }

    /// Enable or disable top-layer stacking.
    pub fn top_layer(mut self, top_layer: bool) -> Self {
        self.top_layer = top_layer;
        self
    }

    /// Set the reveal delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the cursor-follow shift.
    pub fn with_cursor_offset(mut self, offset: Vec2) -> Self {
        self.cursor_offset = offset;
        self
    }

    /// Pointer transparency the overlay needs for this configuration.
    ///
    /// Without keep-hover the overlay must let the pointer through so that the
    /// target alone decides when the pointer has left.
    pub fn pointer_events(&self) -> PointerEvents {
        if self.keep_hover {
            PointerEvents::Auto
        } else {
            PointerEvents::None
        }
    }

    /// Snapshot of the options a hover session runs with.
    pub fn session_policy(&self) -> SessionPolicy {
        SessionPolicy {
            follow_cursor: self.follow_cursor,
            keep_hover: self.keep_hover,
            delay: self.delay,
            follower: CursorFollower::new(self.cursor_offset),
        }
    }
}

/// The options one hover session is pinned to for its whole lifetime.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SessionPolicy {
    /// See [`TooltipConfig::follow_cursor`].
    pub follow_cursor: bool,
    /// See [`TooltipConfig::keep_hover`].
    pub keep_hover: bool,
    /// See [`TooltipConfig::delay`].
    pub delay: Duration,
    /// Anchor computation for cursor follow.
    pub follower: CursorFollower,
}

impl Default for SessionPolicy {
    fn default() -> Self {
        TooltipConfig::<(), ()>::default().session_policy()
    }
}
