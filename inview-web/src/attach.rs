//! Wires a tracker's trigger strategy to browser events.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use inview::{Callbacks, TrackerOptions, Trigger, TriggerEvent, ViewportTracker};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Event, Window};

use crate::{DomElement, Error, WindowViewport, element_source};

/// A tracker over DOM elements measured against the browser window.
pub type DomTracker = ViewportTracker<DomElement, WindowViewport>;

/// Hooks for a [`DomTracker`].
pub type DomCallbacks = Callbacks<DomElement, WindowViewport>;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

/// Builds a tracker from a JS value (an `HTMLElement`, a `NodeList` or an array of elements) and
/// wires its trigger strategy.
///
/// With the default options this adds one pass right away plus `scroll` and `resize` listeners on
/// `window`.
pub fn track(
    value: &JsValue,
    callbacks: DomCallbacks,
    options: TrackerOptions,
) -> Result<Attached, Error> {
    let tracker = ViewportTracker::new(element_source(value), callbacks, options, WindowViewport)?;
    Attached::attach(tracker)
}

/// A tracker with its browser triggers attached.
///
/// Dropping the handle removes the event listeners and stops the frame loop.
pub struct Attached {
    tracker: Rc<RefCell<DomTracker>>,
    window: Option<Window>,
    listeners: Vec<Listener>,
    frame_loop: Option<FrameLoop>,
}

struct Listener {
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Attached {
    /// Subscribes `tracker` to the events selected by [`DomTracker::trigger`].
    ///
    /// [`Trigger::Manual`] attaches nothing; drive the tracker with [`Attached::pull`].
    pub fn attach(tracker: DomTracker) -> Result<Self, Error> {
        let trigger = tracker.trigger();
        let mut attached = Self {
            tracker: Rc::new(RefCell::new(tracker)),
            window: None,
            listeners: Vec::new(),
            frame_loop: None,
        };

        match trigger {
            Trigger::Manual => {}
            Trigger::Events { scroll, resize } => {
                let window = web_sys::window().ok_or(Error::NoWindow)?;
                attached.window = Some(window);
                if scroll {
                    attached.listen("scroll", TriggerEvent::Scroll)?;
                }
                if resize {
                    attached.listen("resize", TriggerEvent::Resize)?;
                }
            }
            Trigger::AnimationFrame => {
                let frame_loop = FrameLoop::new(Rc::clone(&attached.tracker));
                frame_loop.start();
                attached.frame_loop = Some(frame_loop);
            }
        }
        vdebug!(?trigger, listeners = attached.listeners.len(), "Attached::attach");
        Ok(attached)
    }

    fn listen(&mut self, event: &'static str, trigger_event: TriggerEvent) -> Result<(), Error> {
        let Some(window) = &self.window else {
            return Err(Error::NoWindow);
        };
        let tracker = Rc::clone(&self.tracker);
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            dispatch(&tracker, trigger_event);
        }) as Box<dyn FnMut(Event)>);
        window
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|err| Error::Listen {
                event,
                message: format!("{err:?}"),
            })?;
        self.listeners.push(Listener { event, closure });
        Ok(())
    }

    /// Runs a pass now.
    ///
    /// Returns `None` when called from inside one of the tracker's own hooks, where a nested pass
    /// would alias the running one.
    pub fn pull(&self) -> Option<Vec<DomElement>> {
        dispatch(&self.tracker, TriggerEvent::Manual)
    }

    /// Runs `f` with the tracker, or returns `None` while a pass is running.
    pub fn with_tracker<R>(&self, f: impl FnOnce(&DomTracker) -> R) -> Option<R> {
        self.tracker.try_borrow().ok().map(|t| f(&t))
    }

    /// A copy of the current matches, or `None` while a pass is running.
    pub fn matches(&self) -> Option<Vec<DomElement>> {
        self.with_tracker(|t| t.matches().to_vec())
    }

    /// The `window` events this handle is subscribed to, in subscription order.
    pub fn listeners(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.listeners.iter().map(|l| l.event)
    }

    /// Whether the `requestAnimationFrame` loop is active.
    pub fn is_polling_frames(&self) -> bool {
        self.frame_loop.as_ref().is_some_and(FrameLoop::is_running)
    }
}

impl Drop for Attached {
    fn drop(&mut self) {
        if let Some(window) = &self.window {
            for listener in &self.listeners {
                let _ = window.remove_event_listener_with_callback(
                    listener.event,
                    listener.closure.as_ref().unchecked_ref(),
                );
            }
        }
        if let Some(frame_loop) = self.frame_loop.take() {
            frame_loop.stop();
        }
    }
}

impl core::fmt::Debug for Attached {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let events: Vec<&str> = self.listeners().collect();
        f.debug_struct("Attached")
            .field("listeners", &events)
            .field("polling_frames", &self.is_polling_frames())
            .finish_non_exhaustive()
    }
}

fn dispatch(tracker: &RefCell<DomTracker>, event: TriggerEvent) -> Option<Vec<DomElement>> {
    match tracker.try_borrow_mut() {
        Ok(mut t) => t.handle(event),
        Err(_) => {
            vwarn!(?event, "skipping pass requested while another pass is running");
            None
        }
    }
}

/// A self-rescheduling `requestAnimationFrame` loop that runs one pass per frame.
struct FrameLoop {
    inner: Rc<FrameInner>,
}

type FrameClosure = Closure<dyn FnMut(f64)>;

struct FrameInner {
    /// Kept separately so the closure can reschedule itself.
    closure: RefCell<Option<FrameClosure>>,
    tracker: Rc<RefCell<DomTracker>>,
    running: Cell<bool>,
    raf_id: Cell<i32>,
}

impl FrameLoop {
    fn new(tracker: Rc<RefCell<DomTracker>>) -> Self {
        Self {
            inner: Rc::new(FrameInner {
                closure: RefCell::new(None),
                tracker,
                running: Cell::new(false),
                raf_id: Cell::new(0),
            }),
        }
    }

    fn start(&self) {
        if self.inner.running.get() {
            return;
        }
        self.inner.running.set(true);

        let inner = Rc::clone(&self.inner);
        let closure = Closure::wrap(Box::new(move |_timestamp_ms: f64| {
            if !inner.running.get() {
                return;
            }
            dispatch(&inner.tracker, TriggerEvent::AnimationFrame);

            if !inner.running.get() {
                return;
            }
            if let Some(closure) = inner.closure.borrow().as_ref() {
                let id = request_animation_frame(closure.as_ref().unchecked_ref());
                inner.raf_id.set(id);
            }
        }) as Box<dyn FnMut(f64)>);

        let id = request_animation_frame(closure.as_ref().unchecked_ref());
        self.inner.raf_id.set(id);
        *self.inner.closure.borrow_mut() = Some(closure);
    }

    fn stop(&self) {
        if self.inner.running.replace(false) {
            cancel_animation_frame(self.inner.raf_id.get());
        }
        // Breaks the closure -> inner -> closure cycle.
        self.inner.closure.borrow_mut().take();
    }

    fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}
