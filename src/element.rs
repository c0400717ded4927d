use crate::{Rect, Viewport};

/// A handle to a visual node owned by the host.
///
/// The tracker clones handles but never the node behind them, so implementations are expected to
/// be cheap reference-like handles (a DOM element, an `Rc`, an id into a scene graph). Equality
/// should be identity.
///
/// Both methods take `&self`: hosts typically mutate node state through shared handles.
pub trait TrackedElement: Clone + PartialEq {
    /// The element's bounding rectangle relative to the viewport.
    fn bounding_rect(&self) -> Rect;

    /// Adds the marker class to the element. Adding a class that is already present is a no-op.
    fn add_class(&self, class_name: &str);
}

/// Supplies the current viewport bounds.
pub trait ViewportProvider {
    fn viewport(&self) -> Viewport;
}

impl ViewportProvider for Viewport {
    fn viewport(&self) -> Viewport {
        *self
    }
}

impl<F: Fn() -> Viewport> ViewportProvider for F {
    fn viewport(&self) -> Viewport {
        self()
    }
}
