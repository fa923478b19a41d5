// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cursor-follow anchoring.

use kurbo::{Point, Vec2};

/// Default shift between the pointer and the overlay anchor.
///
/// Keeps the overlay from sitting directly under the pointer, which would make the
/// target report a leave as soon as the overlay appears.
pub const CURSOR_OFFSET: Vec2 = Vec2::new(8.0, 8.0);

/// Maps pointer positions to overlay anchor points with a fixed shift.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CursorFollower {
    /// Shift added to the pointer position.
    pub offset: Vec2,
}

impl CursorFollower {
    /// Create a follower with the given shift.
    pub const fn new(offset: Vec2) -> Self {
        Self { offset }
    }

    /// Anchor point for a pointer at `pointer`.
    pub fn anchor_for(&self, pointer: Point) -> Point {
        pointer + self.offset
    }
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new(CURSOR_OFFSET)
    }
}
