// Example: a manually driven tracker over an in-memory "page".
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use inview::{Callbacks, Rect, TrackedElement, TrackerOptions, Viewport, ViewportTracker};

#[derive(Clone, Debug)]
struct Block {
    name: &'static str,
    // Position in document coordinates.
    top: f64,
    scroll: Rc<Cell<f64>>,
    classes: Rc<RefCell<Vec<String>>>,
}

impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.classes, &other.classes)
    }
}

impl TrackedElement for Block {
    fn bounding_rect(&self) -> Rect {
        Rect::from_origin_size(0.0, self.top - self.scroll.get(), 320.0, 200.0)
    }

    fn add_class(&self, class_name: &str) {
        let mut classes = self.classes.borrow_mut();
        if !classes.iter().any(|c| c == class_name) {
            classes.push(class_name.to_string());
        }
    }
}

fn main() {
    let scroll = Rc::new(Cell::new(0.0));
    let blocks: Vec<Block> = ["header", "intro", "gallery", "footer"]
        .into_iter()
        .enumerate()
        .map(|(i, name)| Block {
            name,
            top: 450.0 * i as f64,
            scroll: Rc::clone(&scroll),
            classes: Rc::default(),
        })
        .collect();

    let callbacks: Callbacks<Block, Viewport> = Callbacks::new()
        .with_on(|_, b: &Block, class: &str| println!("  on  {} ({class})", b.name))
        .with_off(|_, b: &Block, _: &str| println!("  off {}", b.name));
    let options = TrackerOptions::new().with_ignore_default_events(true);
    let mut tracker =
        ViewportTracker::new(blocks, callbacks, options, Viewport::from_size(320.0, 600.0))
            .expect("blocks are valid elements");

    for offset in [0.0, 500.0, 1100.0] {
        scroll.set(offset);
        println!("scroll={offset}");
        let visible: Vec<_> = tracker.pull().iter().map(|b| b.name).collect();
        println!("  visible={visible:?}");
    }
}
