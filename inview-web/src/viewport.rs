use inview::{Viewport, ViewportProvider};

/// Reads the viewport from the global `window` on every query.
///
/// Reports both `document.documentElement.clientWidth/Height` and
/// `window.innerWidth/innerHeight`; the tracker uses the larger of each pair. Measurements that
/// are unavailable (no window, no document element) read as zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowViewport;

impl ViewportProvider for WindowViewport {
    fn viewport(&self) -> Viewport {
        let Some(window) = web_sys::window() else {
            return Viewport::default();
        };
        let inner_width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let inner_height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let (client_width, client_height) = window
            .document()
            .and_then(|doc| doc.document_element())
            .map(|root| (f64::from(root.client_width()), f64::from(root.client_height())))
            .unwrap_or((0.0, 0.0));
        Viewport::new(client_width, client_height, inner_width, inner_height)
    }
}
