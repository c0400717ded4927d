use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::{Error, Rect, Viewport};

/// The marker class applied to tracked elements unless overridden.
pub const DEFAULT_CLASS_NAME: &str = "dom-in-view";

/// Which geometry predicate decides whether an element is "in view".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Check {
    /// Every edge of the element lies within the viewport.
    Inside,
    /// Any part of the element overlaps the viewport.
    ///
    /// This is an overlap test, not the complement of [`Check::Inside`]: a partially scrolled-in
    /// element is visible but not inside.
    #[default]
    Visible,
}

impl Check {
    /// Evaluates the predicate for `rect` against `viewport`.
    ///
    /// Boundary contact counts as contained (`Inside`) and as overlapping (`Visible`).
    pub fn evaluate(self, rect: Rect, viewport: Viewport) -> bool {
        let height = viewport.height();
        let width = viewport.width();
        match self {
            Self::Inside => {
                rect.top >= 0.0 && rect.left >= 0.0 && rect.bottom <= height && rect.right <= width
            }
            Self::Visible => {
                !(rect.bottom < 0.0 || rect.top > height || rect.right < 0.0 || rect.left > width)
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inside => "inside",
            Self::Visible => "visible",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Check {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inside" => Ok(Self::Inside),
            "visible" => Ok(Self::Visible),
            other => Err(Error::UnknownCheck(other.to_string())),
        }
    }
}

/// The event that asks the tracker to re-evaluate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TriggerEvent {
    Scroll,
    Resize,
    /// A display-refresh tick.
    AnimationFrame,
    /// A direct caller request. Always honored.
    Manual,
}

/// The trigger strategy resolved from [`TrackerOptions`].
///
/// Exactly one strategy is active per tracker. Adapters subscribe to host events according to the
/// strategy; the tracker itself never touches global event state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trigger {
    /// The caller drives every pass.
    Manual,
    /// Scroll and/or resize events drive passes.
    Events { scroll: bool, resize: bool },
    /// The display-refresh loop drives a pass every frame.
    AnimationFrame,
}

impl Trigger {
    /// Whether `event` should cause a pass under this strategy.
    pub fn accepts(self, event: TriggerEvent) -> bool {
        match (self, event) {
            (_, TriggerEvent::Manual) => true,
            (Self::Events { scroll, .. }, TriggerEvent::Scroll) => scroll,
            (Self::Events { resize, .. }, TriggerEvent::Resize) => resize,
            (Self::AnimationFrame, TriggerEvent::AnimationFrame) => true,
            _ => false,
        }
    }

    pub fn is_manual(self) -> bool {
        matches!(self, Self::Manual)
    }
}

/// Configuration for [`crate::ViewportTracker`].
///
/// Immutable once the tracker is built. With `feature = "serde"`, missing fields deserialize to
/// their defaults, so a partial override document merges over [`TrackerOptions::default`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct TrackerOptions {
    pub check: Check,
    /// Marker class added to every tracked element and passed to `on`/`off`.
    ///
    /// Must be one class token: non-empty, no whitespace. Construction rejects anything else with
    /// [`Error::InvalidClassName`].
    pub class_name: String,
    /// Run one pass right after construction (unless events are ignored).
    pub autostart: bool,
    pub scroll: bool,
    pub resize: bool,
    /// Poll on every display refresh instead of on scroll/resize.
    pub animation_frame: bool,
    /// Suppress all automatic triggering; the caller invokes `pull` itself.
    pub ignore_default_events: bool,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            check: Check::Visible,
            class_name: DEFAULT_CLASS_NAME.to_string(),
            autostart: true,
            scroll: true,
            resize: true,
            animation_frame: false,
            ignore_default_events: false,
        }
    }
}

impl TrackerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_check(mut self, check: Check) -> Self {
        self.check = check;
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_autostart(mut self, autostart: bool) -> Self {
        self.autostart = autostart;
        self
    }

    pub fn with_scroll(mut self, scroll: bool) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn with_resize(mut self, resize: bool) -> Self {
        self.resize = resize;
        self
    }

    pub fn with_animation_frame(mut self, animation_frame: bool) -> Self {
        self.animation_frame = animation_frame;
        self
    }

    pub fn with_ignore_default_events(mut self, ignore_default_events: bool) -> Self {
        self.ignore_default_events = ignore_default_events;
        self
    }

    /// Resolves the active trigger strategy.
    ///
    /// `ignore_default_events` wins over everything; `animation_frame` disables scroll/resize.
    pub fn trigger(&self) -> Trigger {
        if self.ignore_default_events {
            Trigger::Manual
        } else if self.animation_frame {
            Trigger::AnimationFrame
        } else if self.scroll || self.resize {
            Trigger::Events {
                scroll: self.scroll,
                resize: self.resize,
            }
        } else {
            Trigger::Manual
        }
    }

    /// Whether construction should run an initial pass.
    ///
    /// Autostart belongs to the default wiring: it is skipped when `ignore_default_events` is set.
    pub fn runs_on_start(&self) -> bool {
        self.autostart && !self.ignore_default_events
    }
}
