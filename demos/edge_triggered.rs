// Example: turning the per-pass hooks into enter/leave notifications.
//
// `on`/`off` run on every pass. To react only to changes, keep the previous state in the closure.
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use inview::{
    Callbacks, Check, Rect, TrackedElement, TrackerOptions, TriggerEvent, Viewport,
    ViewportTracker,
};

#[derive(Clone, Debug)]
struct Row {
    id: usize,
    rect: Rc<Cell<Rect>>,
}

impl PartialEq for Row {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.rect, &other.rect)
    }
}

impl TrackedElement for Row {
    fn bounding_rect(&self) -> Rect {
        self.rect.get()
    }

    fn add_class(&self, _class_name: &str) {}
}

fn main() {
    let rows: Vec<Row> = (0..20)
        .map(|id| Row {
            id,
            rect: Rc::new(Cell::new(Rect::from_origin_size(0.0, 40.0 * id as f64, 300.0, 40.0))),
        })
        .collect();

    let shown: Rc<RefCell<HashSet<usize>>> = Rc::default();
    let on_shown = Rc::clone(&shown);
    let off_shown = Rc::clone(&shown);
    let callbacks: Callbacks<Row, Viewport> = Callbacks::new()
        .with_on(move |_, row: &Row, _: &str| {
            if on_shown.borrow_mut().insert(row.id) {
                println!("enter {}", row.id);
            }
        })
        .with_off(move |_, row: &Row, _: &str| {
            if off_shown.borrow_mut().remove(&row.id) {
                println!("leave {}", row.id);
            }
        });

    let options = TrackerOptions::new()
        .with_check(Check::Inside)
        .with_animation_frame(true);
    let mut tracker = ViewportTracker::new(
        rows.clone(),
        callbacks,
        options,
        Viewport::from_size(300.0, 200.0),
    )
    .expect("rows are valid elements");

    // Simulated frames, each scrolling the list up by 30.
    for frame in 1..=5 {
        for row in &rows {
            row.rect.set(row.rect.get().translate(0.0, -30.0));
        }
        // Scroll events are ignored in animation-frame mode.
        assert!(tracker.handle(TriggerEvent::Scroll).is_none());
        let in_view = tracker.handle(TriggerEvent::AnimationFrame).unwrap_or_default();
        println!("frame {frame}: {} rows inside", in_view.len());
    }
}
