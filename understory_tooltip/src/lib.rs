// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tooltip --heading-base-level=0

//! Understory Tooltip: a deterministic, `no_std` hover-intent tooltip controller.
//!
//! ## Overview
//!
//! This crate decides *when* a tooltip appears and disappears and *what* content
//! it is bound to. It does not lay anything out or draw anything.
//! Positioning, clipping, and stacking belong to a [`Popover`](crate::popover::Popover)
//! you provide; stamping content belongs to a [`ContentRoot`](crate::content::ContentRoot)
//! you provide.
//!
//! ## Hover intent
//!
//! A pointer entering the target begins a hover session and arms a reveal timer
//! (500ms by default). Every pointer move before the reveal restarts the timer,
//! so the tooltip appears only once the pointer has rested on the target.
//! A leave tears the session down and hides the overlay.
//!
//! - `keep_hover`: a leave onto the overlay (or back onto the target) keeps the
//!   session open so the tooltip content can be hovered and clicked. The overlay
//!   accepts pointer events only in this mode.
//! - `follow_cursor`: the overlay is anchored 8×8 px from the pointer and tracks it
//!   while visible.
//!
//! ## Time
//!
//! The controller owns no clock. Every call that can arm a timer takes `now` (a
//! monotonic [`Duration`](core::time::Duration) from any origin), and
//! [`TooltipController::poll`](crate::controller::TooltipController::poll) fires
//! due reveals. [`next_deadline`](crate::controller::TooltipController::next_deadline)
//! tells the host when to poll.
//!
//! ## Content
//!
//! Content is bound lazily on the first reveal against a context chain:
//! the template's ambient contexts, the tooltip itself, then whatever contexts the
//! hover was begun with. The instance is reused while the chain stays the same
//! and rebuilt from scratch when it changes.
//!
//! ## Minimal example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::Point;
//! use understory_tooltip::config::TooltipConfig;
//! use understory_tooltip::content::{ContentRoot, ContextChain, NoDiscovery, TooltipContent};
//! use understory_tooltip::controller::{TooltipController, Visibility};
//! use understory_tooltip::popover::{Anchor, PointerEvents, Popover};
//!
//! #[derive(Default)]
//! struct Overlay { shown_at: Option<Anchor<u32>> }
//!
//! impl Popover<u32> for Overlay {
//!     fn show(&mut self, anchor: Anchor<u32>) { self.shown_at = Some(anchor); }
//!     fn hide(&mut self) { self.shown_at = None; }
//!     fn re_fit(&mut self, point: Point) { self.shown_at = Some(Anchor::Point(point)); }
//!     fn is_visible(&self) -> bool { self.shown_at.is_some() }
//!     fn set_top_layer(&mut self, _: bool) {}
//!     fn set_pointer_events(&mut self, _: PointerEvents) {}
//! }
//!
//! #[derive(Default)]
//! struct Text(String);
//!
//! impl ContentRoot for Text {
//!     type Template = ();
//!     type Context = ();
//!     type Instance = ();
//!     fn attach(&mut self, _: &TooltipContent<()>, chain: &ContextChain<()>) {
//!         self.0 = chain.tooltip().text.clone().unwrap_or_default();
//!     }
//!     fn refresh(&mut self, _: &mut (), chain: &ContextChain<()>) {
//!         self.0 = chain.tooltip().text.clone().unwrap_or_default();
//!     }
//!     fn detach(&mut self, _: ()) {}
//!     fn clear(&mut self) { self.0.clear(); }
//! }
//!
//! let ms = Duration::from_millis;
//! let config = TooltipConfig::default().with_text("Save");
//! let mut tip = TooltipController::new(config, Overlay::default(), Text::default());
//! assert!(tip.attach(Some(1), &NoDiscovery));
//!
//! assert!(tip.pointer_enter(1, ms(0)));
//! assert_eq!(tip.visibility(), Visibility::Pending);
//! assert_eq!(tip.poll(ms(499)), 0);
//! assert_eq!(tip.poll(ms(500)), 1);
//! assert_eq!(tip.popover().shown_at, Some(Anchor::Target(1)));
//! assert_eq!(tip.content().0, "Save");
//!
//! let _ = tip.pointer_leave(1, Some(2));
//! assert_eq!(tip.visibility(), Visibility::Hidden);
//! assert!(!tip.is_entered(1));
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `tracing`: log session and reveal decisions through `tracing`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod logging;

pub mod config;
pub mod content;
pub mod controller;
pub mod debounce;
pub mod follow;
pub mod popover;
pub mod scope;
pub mod session;
pub mod transitions;
