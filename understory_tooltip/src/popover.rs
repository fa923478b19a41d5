// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The positioning primitive the controller drives.
//!
//! The controller decides *when* to show, hide, and reposition. Geometry,
//! clipping, and stacking all belong to the [`Popover`] implementation.

use kurbo::Point;

/// Where the overlay should be anchored.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Anchor<K> {
    /// Anchor to a node's box.
    Target(K),
    /// Anchor to a point (cursor follow).
    Point(Point),
}

/// Whether the overlay intercepts pointer events.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PointerEvents {
    /// Pointer passes through the overlay to whatever is underneath.
    #[default]
    None,
    /// The overlay can be hovered and clicked.
    Auto,
}

/// A floating overlay anchored to a node or point.
pub trait Popover<K> {
    /// Show the overlay at `anchor`.
    fn show(&mut self, anchor: Anchor<K>);

    /// Hide the overlay.
    fn hide(&mut self);

    /// Reposition a visible overlay to `point`.
    fn re_fit(&mut self, point: Point);

    /// Whether the overlay is currently shown.
    fn is_visible(&self) -> bool;

    /// Stack the overlay above normal content.
    fn set_top_layer(&mut self, top_layer: bool);

    /// Set pointer transparency.
    fn set_pointer_events(&mut self, pointer_events: PointerEvents);

    /// Whether `node` is the overlay or lies inside it.
    ///
    /// Used to resolve where a pointer went when it left a target. Overlays that
    /// are not part of the host's node space can keep the default.
    fn contains(&self, node: &K) -> bool {
        let _ = node;
        false
    }
}
