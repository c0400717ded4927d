//! Browser bindings for the `inview` crate.
//!
//! `inview` is host-agnostic. This crate provides the pieces a page needs:
//!
//! - [`DomElement`]: an `HTMLElement` handle measured with `getBoundingClientRect`
//! - [`WindowViewport`]: the window/document viewport size
//! - [`element_source`]: classifies a `JsValue` (element, `NodeList`, array) for construction
//! - [`track`] / [`Attached`]: builds a tracker and subscribes it to `scroll`/`resize` or a
//!   `requestAnimationFrame` loop, depending on the options
//!
//! ```no_run
//! use inview::{Callbacks, TrackerOptions};
//! use wasm_bindgen::JsValue;
//!
//! fn observe(cards: &JsValue) -> Result<inview_web::Attached, inview_web::Error> {
//!     let callbacks = Callbacks::new()
//!         .with_on(|_, el: &inview_web::DomElement, class: &str| {
//!             let _ = el.element().class_list().add_1(&format!("{class}--on"));
//!         })
//!         .with_off(|_, el: &inview_web::DomElement, class: &str| {
//!             let _ = el.element().class_list().remove_1(&format!("{class}--on"));
//!         });
//!     inview_web::track(cards, callbacks, TrackerOptions::new())
//! }
//! ```
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod attach;
mod element;
mod error;
mod source;
mod viewport;

#[cfg(all(test, target_arch = "wasm32"))]
mod tests;

pub use attach::{Attached, DomCallbacks, DomTracker, track};
pub use element::DomElement;
pub use error::Error;
pub use source::element_source;
pub use viewport::WindowViewport;
