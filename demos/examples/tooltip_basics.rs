// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover intent end to end.
//!
//! Enters a target, wiggles the pointer (which keeps postponing the reveal),
//! rests, and leaves. A printing popover shows what the controller asks for.
//!
//! Run:
//! - `cargo run -p understory_demos --example tooltip_basics`

use std::time::Duration;

use kurbo::Point;
use understory_tooltip::config::TooltipConfig;
use understory_tooltip::content::{ContentRoot, ContextChain, NoDiscovery, TooltipContent};
use understory_tooltip::controller::{TooltipController, Visibility};
use understory_tooltip::popover::{Anchor, PointerEvents, Popover};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Node(u32);

#[derive(Default)]
struct PrintPopover {
    visible: bool,
}

impl Popover<Node> for PrintPopover {
    fn show(&mut self, anchor: Anchor<Node>) {
        println!("  popover: show at {anchor:?}");
        self.visible = true;
    }

    fn hide(&mut self) {
        println!("  popover: hide");
        self.visible = false;
    }

    fn re_fit(&mut self, point: Point) {
        println!("  popover: re-fit to {point:?}");
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_top_layer(&mut self, top_layer: bool) {
        println!("  popover: top layer = {top_layer}");
    }

    fn set_pointer_events(&mut self, pointer_events: PointerEvents) {
        println!("  popover: pointer events = {pointer_events:?}");
    }
}

#[derive(Default)]
struct TextRoot {
    text: String,
}

impl ContentRoot for TextRoot {
    type Template = ();
    type Context = ();
    type Instance = ();

    fn attach(&mut self, _content: &TooltipContent<()>, chain: &ContextChain<()>) {
        self.text = chain.tooltip().text.clone().unwrap_or_default();
        println!("  content: attached {:?}", self.text);
    }

    fn refresh(&mut self, _instance: &mut (), chain: &ContextChain<()>) {
        self.text = chain.tooltip().text.clone().unwrap_or_default();
        println!("  content: text now {:?}", self.text);
    }

    fn detach(&mut self, _instance: ()) {
        println!("  content: detached");
    }

    fn clear(&mut self) {
        self.text.clear();
    }
}

fn main() {
    let ms = Duration::from_millis;
    let button = Node(1);
    let config = TooltipConfig::default().with_text("Save the current file");
    let mut tip = TooltipController::new(config, PrintPopover::default(), TextRoot::default());

    println!("== Attach ==");
    assert!(tip.attach(Some(button), &NoDiscovery));

    println!("== Enter at 0ms ==");
    assert!(tip.pointer_enter(button, ms(0)));

    println!("== Wiggle until 300ms ==");
    for t in [100, 200, 300] {
        let _ = tip.pointer_move(button, Point::new(10.0 + t as f64 / 50.0, 10.0), ms(t));
        assert_eq!(tip.poll(ms(t)), 0);
    }
    println!("  next reveal at {:?}", tip.next_deadline());
    assert_eq!(tip.visibility(), Visibility::Pending);

    println!("== Rest until 800ms ==");
    assert_eq!(tip.poll(ms(799)), 0);
    assert_eq!(tip.poll(ms(800)), 1);
    assert_eq!(tip.visibility(), Visibility::Visible);

    println!("== Leave at 900ms ==");
    let _ = tip.pointer_leave(button, Some(Node(0)));
    assert_eq!(tip.visibility(), Visibility::Hidden);
    assert!(!tip.is_entered(button));
}
