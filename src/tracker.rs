use alloc::vec::Vec;

use crate::{
    Callbacks, ElementSource, Error, Result, TrackedElement, TrackerOptions, Trigger, TriggerEvent,
    Viewport, ViewportProvider,
};

/// Tracks which of a fixed set of elements are in view.
///
/// The tracker is headless: element geometry comes from [`TrackedElement::bounding_rect`] and the
/// viewport from a [`ViewportProvider`]. It never subscribes to host events itself; adapters
/// consult [`ViewportTracker::trigger`] and forward events through [`ViewportTracker::handle`], or
/// call [`ViewportTracker::pull`] directly.
pub struct ViewportTracker<E, V> {
    elements: Vec<E>,
    options: TrackerOptions,
    matches: Vec<E>,
    callbacks: Callbacks<E, V>,
    viewport: V,
}

impl<E: TrackedElement, V: ViewportProvider> ViewportTracker<E, V> {
    /// Builds a tracker.
    ///
    /// Fails before touching any element if `options.class_name` is not a single class token.
    ///
    /// On success every element carries `options.class_name`, `init` has run, and, unless
    /// `ignore_default_events` is set, one pass has run when `autostart` is on.
    pub fn new(
        source: impl Into<ElementSource<E>>,
        callbacks: Callbacks<E, V>,
        options: TrackerOptions,
        viewport: V,
    ) -> Result<Self> {
        let class_name = options.class_name.as_str();
        if class_name.is_empty() || class_name.chars().any(|c| c.is_ascii_whitespace()) {
            return Err(Error::InvalidClassName(options.class_name));
        }
        let elements = source.into().into_elements()?;
        for element in &elements {
            element.add_class(&options.class_name);
        }
        vdebug!(
            elements = elements.len(),
            check = options.check.as_str(),
            class_name = options.class_name.as_str(),
            "ViewportTracker::new"
        );

        let mut tracker = Self {
            elements,
            options,
            matches: Vec::new(),
            callbacks,
            viewport,
        };

        if let Some(init) = &tracker.callbacks.init {
            init(&tracker);
        }
        if tracker.options.runs_on_start() {
            tracker.pull();
        }
        Ok(tracker)
    }

    /// Whether `element` is in view under the configured [`crate::Check`].
    ///
    /// Reads current geometry; has no side effects. `element` does not need to be tracked.
    pub fn in_view(&self, element: &E) -> bool {
        self.options
            .check
            .evaluate(element.bounding_rect(), self.viewport.viewport())
    }

    /// Runs one evaluation pass and returns the elements currently in view, in element order.
    ///
    /// `matches` is replaced as soon as each in-view element is found, before its `on` hook runs,
    /// so hooks observe a growing prefix of the final result. Elements out of view only get their
    /// `off` hook and leave `matches` alone, so an `off` hook that runs before the first match of
    /// a pass still sees the previous pass's matches. Once the pass completes, `matches` equals
    /// the returned vector.
    pub fn pull(&mut self) -> Vec<E> {
        let mut matches = Vec::new();
        for element in &self.elements {
            if self.in_view(element) {
                matches.push(element.clone());
                self.matches.clone_from(&matches);
                if let Some(on) = &self.callbacks.on {
                    on(self, element, &self.options.class_name);
                }
            } else if let Some(off) = &self.callbacks.off {
                off(self, element, &self.options.class_name);
            }
        }
        // A pass without matches never replaced `matches` above.
        if matches.is_empty() {
            self.matches.clear();
        }
        vtrace!(
            elements = self.elements.len(),
            matches = matches.len(),
            "ViewportTracker::pull"
        );
        matches
    }

    /// Runs a pass if the active trigger strategy accepts `event`.
    ///
    /// Returns `None` when the event is ignored.
    pub fn handle(&mut self, event: TriggerEvent) -> Option<Vec<E>> {
        let trigger = self.trigger();
        if !trigger.accepts(event) {
            vtrace!(?event, ?trigger, "ViewportTracker::handle: ignored");
            return None;
        }
        Some(self.pull())
    }
}

impl<E, V: ViewportProvider> ViewportTracker<E, V> {
    /// The current viewport as reported by the provider.
    pub fn viewport(&self) -> Viewport {
        self.viewport.viewport()
    }
}

impl<E, V> ViewportTracker<E, V> {
    /// The tracked elements, in construction order.
    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    pub fn options(&self) -> &TrackerOptions {
        &self.options
    }

    /// The elements found in view by the most recent pass.
    pub fn matches(&self) -> &[E] {
        &self.matches
    }

    pub fn callbacks(&self) -> &Callbacks<E, V> {
        &self.callbacks
    }

    pub fn viewport_provider(&self) -> &V {
        &self.viewport
    }

    /// The trigger strategy adapters should wire up for this tracker.
    pub fn trigger(&self) -> Trigger {
        self.options.trigger()
    }
}

impl<E: core::fmt::Debug, V> core::fmt::Debug for ViewportTracker<E, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViewportTracker")
            .field("elements", &self.elements)
            .field("options", &self.options)
            .field("matches", &self.matches)
            .field("callbacks", &self.callbacks)
            .finish_non_exhaustive()
    }
}
