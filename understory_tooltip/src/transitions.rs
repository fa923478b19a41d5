// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Enter/leave transitions, with related targets, from hover path changes.
//!
//! Hosts that hit-test into a tree (rather than receiving DOM-style
//! `pointerenter`/`pointerleave` events) can feed the root→target path under the
//! pointer to a [`HoverTracker`] each move. It reports the minimal set of
//! transitions, and every leave carries the node the pointer moved to, which the
//! controller needs to honor keep-hover.
//!
//! ```
//! use understory_tooltip::transitions::{HoverTracker, HoverTransition};
//!
//! let mut t: HoverTracker<u32> = HoverTracker::new();
//! assert_eq!(
//!     t.update_path(&[1, 2]),
//!     vec![
//!         HoverTransition::Enter { node: 1, from: None },
//!         HoverTransition::Enter { node: 2, from: None },
//!     ]
//! );
//! assert_eq!(
//!     t.update_path(&[1, 3]),
//!     vec![
//!         HoverTransition::Leave { node: 2, to: Some(3) },
//!         HoverTransition::Enter { node: 3, from: Some(2) },
//!     ]
//! );
//! ```

use alloc::vec::Vec;

/// A hover transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverTransition<K> {
    /// Pointer entered `node`, coming from `from` (the previously innermost node).
    Enter {
        /// Node entered.
        node: K,
        /// Innermost node under the pointer before the move.
        from: Option<K>,
    },
    /// Pointer left `node` for `to` (the newly innermost node).
    Leave {
        /// Node left.
        node: K,
        /// Innermost node under the pointer after the move.
        to: Option<K>,
    },
}

/// Tracks the hovered root→target path.
///
/// Leaves are reported inner→outer, then enters outer→inner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverTracker<K: Copy + Eq> {
    current: Vec<K>,
}

impl<K: Copy + Eq> HoverTracker<K> {
    /// Create a tracker with nothing hovered.
    pub fn new() -> Self {
        Self {
            current: Vec::new(),
        }
    }

    /// The hovered root→target path.
    pub fn current_path(&self) -> &[K] {
        &self.current
    }

    /// Pointer left everything (for example, the window).
    pub fn clear(&mut self) -> Vec<HoverTransition<K>> {
        self.update_path(&[])
    }

    /// Move to `new_path`, returning the transitions in dispatch order.
    pub fn update_path(&mut self, new_path: &[K]) -> Vec<HoverTransition<K>> {
        let shared = self
            .current
            .iter()
            .zip(new_path)
            .take_while(|(a, b)| a == b)
            .count();
        let from = self.current.last().copied();
        let to = new_path.last().copied();

        let mut out = Vec::new();
        for &node in self.current[shared..].iter().rev() {
            out.push(HoverTransition::Leave { node, to });
        }
        for &node in &new_path[shared..] {
            out.push(HoverTransition::Enter { node, from });
        }

        self.current.clear();
        self.current.extend_from_slice(new_path);
        out
    }
}
