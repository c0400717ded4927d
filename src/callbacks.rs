use alloc::rc::Rc;

use crate::ViewportTracker;

/// Invoked once after construction, before any pass.
pub type InitCallback<E, V> = Rc<dyn Fn(&ViewportTracker<E, V>)>;

/// Invoked per element during a pass, with the tracker, the element and the marker class.
pub type TransitionCallback<E, V> = Rc<dyn Fn(&ViewportTracker<E, V>, &E, &str)>;

/// Optional hooks invoked synchronously by the tracker.
///
/// An absent hook is a no-op. Hooks are reference counted so the record is cheap to clone and can
/// be shared between trackers.
///
/// `on`/`off` run on every pass for every element, not only when an element's state changes.
/// Track previous state inside the closure if you need edge-triggered behavior.
pub struct Callbacks<E, V> {
    pub init: Option<InitCallback<E, V>>,
    pub on: Option<TransitionCallback<E, V>>,
    pub off: Option<TransitionCallback<E, V>>,
}

impl<E, V> Callbacks<E, V> {
    pub fn new() -> Self {
        Self {
            init: None,
            on: None,
            off: None,
        }
    }

    pub fn with_init(mut self, init: impl Fn(&ViewportTracker<E, V>) + 'static) -> Self {
        self.init = Some(Rc::new(init));
        self
    }

    pub fn with_on(mut self, on: impl Fn(&ViewportTracker<E, V>, &E, &str) + 'static) -> Self {
        self.on = Some(Rc::new(on));
        self
    }

    pub fn with_off(mut self, off: impl Fn(&ViewportTracker<E, V>, &E, &str) + 'static) -> Self {
        self.off = Some(Rc::new(off));
        self
    }
}

impl<E, V> Default for Callbacks<E, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, V> Clone for Callbacks<E, V> {
    fn clone(&self) -> Self {
        Self {
            init: self.init.clone(),
            on: self.on.clone(),
            off: self.off.clone(),
        }
    }
}

impl<E, V> core::fmt::Debug for Callbacks<E, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Callbacks")
            .field("init", &self.init.is_some())
            .field("on", &self.on.is_some())
            .field("off", &self.off.is_some())
            .finish()
    }
}
