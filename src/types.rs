/// An axis-aligned bounding rectangle, relative to the viewport's top-left corner.
///
/// Values are in host units (CSS pixels for the browser) and may be negative when the element is
/// scrolled above or to the left of the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Creates a rect from an origin and a size.
    pub fn from_origin_size(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            bottom: top + height,
            right: left + width,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Returns the same rect moved by `(dx, dy)`.
    ///
    /// Handy for simulating scrolling: scrolling the document down by `n` moves every element up
    /// by `n`.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            top: self.top + dy,
            left: self.left + dx,
            bottom: self.bottom + dy,
            right: self.right + dx,
        }
    }
}

/// A snapshot of the viewport dimensions as reported by the host.
///
/// Hosts disagree on which measurement is authoritative (the document's client size excludes
/// scrollbars, the window's inner size does not, and some embedders report zero for one of them),
/// so both are kept and the effective size is the larger of the two.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub client_width: f64,
    pub client_height: f64,
    pub inner_width: f64,
    pub inner_height: f64,
}

impl Viewport {
    pub fn new(client_width: f64, client_height: f64, inner_width: f64, inner_height: f64) -> Self {
        Self {
            client_width,
            client_height,
            inner_width,
            inner_height,
        }
    }

    /// A viewport where both measurements agree.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(width, height, width, height)
    }

    pub fn width(&self) -> f64 {
        self.client_width.max(self.inner_width)
    }

    pub fn height(&self) -> f64 {
        self.client_height.max(self.inner_height)
    }
}
