//! A headless engine that tracks which elements are in view.
//!
//! Give it a fixed set of elements and it repeatedly classifies each one against the viewport,
//! calling an `on` hook for elements in view and an `off` hook for the rest, and keeping a list of
//! the current matches.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - element handles that report a bounding rectangle and accept a marker class
//!   ([`TrackedElement`])
//! - the viewport size ([`ViewportProvider`])
//! - the triggers (scroll, resize, display refresh) selected by [`TrackerOptions::trigger`]
//!
//! For the browser, see the `inview-web` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod callbacks;
mod element;
mod error;
mod options;
mod source;
mod tracker;
mod types;


pub use callbacks::{Callbacks, InitCallback, TransitionCallback};
pub use element::{TrackedElement, ViewportProvider};
pub use error::{Error, Result};
pub use options::{Check, DEFAULT_CLASS_NAME, TrackerOptions, Trigger, TriggerEvent};
pub use source::{Candidate, ElementSource};
pub use tracker::ViewportTracker;
pub use types::{Rect, Viewport};
