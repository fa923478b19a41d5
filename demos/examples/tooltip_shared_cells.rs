// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One tooltip serving many cells.
//!
//! Each cell begins its hover with its own row as caller context. Hovering the
//! same row twice reuses the bound content; a different row rebinds it.
//!
//! Run:
//! - `cargo run -p understory_demos --example tooltip_shared_cells`

use std::rc::Rc;
use std::time::Duration;

use kurbo::Point;
use understory_tooltip::config::TooltipConfig;
use understory_tooltip::content::{
    BindOutcome, ContentRoot, ContentTemplate, ContextChain, ContextFrame, TooltipContent,
};
use understory_tooltip::controller::TooltipController;
use understory_tooltip::popover::{Anchor, PointerEvents, Popover};

#[derive(Debug)]
struct Row {
    name: &'static str,
    size: u64,
}

#[derive(Default)]
struct Overlay {
    visible: bool,
}

impl Popover<(u32, u32)> for Overlay {
    fn show(&mut self, anchor: Anchor<(u32, u32)>) {
        println!("  show at {anchor:?}");
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn re_fit(&mut self, point: Point) {
        println!("  follow to {point:?}");
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_top_layer(&mut self, _top_layer: bool) {}

    fn set_pointer_events(&mut self, _pointer_events: PointerEvents) {}
}

#[derive(Default)]
struct Rendered {
    line: String,
    stamps: usize,
}

impl ContentRoot for Rendered {
    type Template = fn(&Row) -> String;
    type Context = Row;
    type Instance = ();

    fn attach(&mut self, content: &TooltipContent<fn(&Row) -> String>, chain: &ContextChain<Row>) {
        let row = chain.frames().find_map(|f| match f {
            ContextFrame::Caller(row) => Some(row),
            _ => None,
        });
        self.line = match (content, row) {
            (TooltipContent::Template(render), Some(row)) => render(row),
            _ => String::new(),
        };
        self.stamps += 1;
        println!("  stamped {:?}", self.line);
    }

    // Rows render without the tooltip text.
    fn refresh(&mut self, _instance: &mut (), _chain: &ContextChain<Row>) {}

    fn detach(&mut self, _instance: ()) {
        println!("  detached");
    }

    fn clear(&mut self) {
        self.line.clear();
    }
}

fn describe(row: &Row) -> String {
    format!("{} ({} bytes)", row.name, row.size)
}

fn main() {
    let ms = Duration::from_millis;
    let rows: Vec<Rc<[Row]>> = vec![
        Rc::from(vec![Row { name: "notes.txt", size: 812 }]),
        Rc::from(vec![Row { name: "photo.png", size: 48_213 }]),
    ];
    let config = TooltipConfig::default().follow_cursor(true);
    let template = ContentTemplate::new(describe as fn(&Row) -> String);
    let mut tip =
        TooltipController::with_template(config, Overlay::default(), Rendered::default(), template);

    let hovers = [((0, 1), 0), ((0, 2), 0), ((1, 1), 1)];
    let mut now = 0;
    for (cell, row) in hovers {
        println!("== hover cell {cell:?} (row {row}) ==");
        let _ = tip.hover_enter(cell, Some(rows[row].clone()), ms(now));
        let _ = tip.pointer_move(cell, Point::new(40.0, 12.0), ms(now + 50));
        now += 550;
        for pending in tip.take_due(ms(now)) {
            let caller = pending.caller.clone();
            if tip.fire(pending) {
                println!("  row {:?}", caller.as_deref().and_then(|r| r.first()));
            }
        }
        let _ = tip.pointer_move(cell, Point::new(44.0, 12.0), ms(now + 10));
        let _ = tip.pointer_leave(cell, None);
        now += 100;
    }

    assert_eq!(tip.content().stamps, 2, "row 0 stamped once, row 1 once");
    assert_eq!(
        tip.reveal((9, 9), Some(&rows[1]), None),
        BindOutcome::Reused
    );
}
