// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keep-hover driven by hit-test paths.
//!
//! The scene is a root (0) holding a link (1) and the tooltip overlay (10), which
//! holds a "details" anchor (11). Paths under the pointer go through a
//! `HoverTracker`, and its transitions go to the controller. Moving from the link
//! into the overlay keeps the tooltip open; leaving the overlay closes it.
//!
//! Run:
//! - `cargo run -p understory_demos --example tooltip_keep_hover`

use std::time::Duration;

use kurbo::Point;
use understory_tooltip::config::TooltipConfig;
use understory_tooltip::content::{ContentRoot, ContextChain, NoDiscovery, TooltipContent};
use understory_tooltip::controller::{TooltipController, Visibility};
use understory_tooltip::popover::{Anchor, PointerEvents, Popover};
use understory_tooltip::transitions::HoverTracker;

const ROOT: u32 = 0;
const LINK: u32 = 1;
const OVERLAY: u32 = 10;
const DETAILS: u32 = 11;

#[derive(Default)]
struct Overlay {
    visible: bool,
}

impl Popover<u32> for Overlay {
    fn show(&mut self, anchor: Anchor<u32>) {
        println!("  overlay shown at {anchor:?}");
        self.visible = true;
    }

    fn hide(&mut self) {
        println!("  overlay hidden");
        self.visible = false;
    }

    fn re_fit(&mut self, _point: Point) {}

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_top_layer(&mut self, _top_layer: bool) {}

    fn set_pointer_events(&mut self, pointer_events: PointerEvents) {
        println!("  overlay pointer events: {pointer_events:?}");
    }

    fn contains(&self, node: &u32) -> bool {
        matches!(*node, OVERLAY | DETAILS)
    }
}

struct Markup;

impl ContentRoot for Markup {
    type Template = &'static str;
    type Context = ();
    type Instance = ();

    fn attach(&mut self, content: &TooltipContent<&'static str>, _chain: &ContextChain<()>) {
        println!("  stamped {content:?}");
    }

    // The markup does not show the tooltip text.
    fn refresh(&mut self, _instance: &mut (), _chain: &ContextChain<()>) {}

    fn detach(&mut self, _instance: ()) {}

    fn clear(&mut self) {}
}

fn main() {
    let ms = Duration::from_millis;
    let config = TooltipConfig::default()
        .keep_hover(true)
        .with_content_template("<a href=#details>details</a>");
    let mut tip = TooltipController::new(config, Overlay::default(), Markup);
    assert!(tip.attach(Some(LINK), &NoDiscovery));

    let mut tracker = HoverTracker::new();
    let steps: [(&str, &[u32], u64); 5] = [
        ("pointer on link", &[ROOT, LINK], 0),
        ("dwell", &[ROOT, LINK], 500),
        ("into overlay", &[ROOT, OVERLAY], 600),
        ("onto details", &[ROOT, OVERLAY, DETAILS], 700),
        ("away", &[ROOT], 900),
    ];
    for (label, path, t) in steps {
        println!("== {label} @ {t}ms: {path:?} ==");
        for transition in tracker.update_path(path) {
            println!("  {transition:?}");
            let _ = tip.handle_transition(transition, ms(t));
        }
        let _ = tip.poll(ms(t));
        println!("  -> {:?}", tip.visibility());
    }
    assert_eq!(tip.visibility(), Visibility::Hidden);
    assert!(!tip.is_entered(LINK));
}
