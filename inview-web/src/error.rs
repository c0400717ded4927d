/// Errors raised while building and wiring a tracker in the browser.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The element source was rejected.
    #[error(transparent)]
    Tracker(#[from] inview::Error),

    /// Event wiring needs a global `window` and there is none (e.g. inside a worker).
    #[error("no global `window` object is available")]
    NoWindow,

    /// `addEventListener` threw.
    #[error("failed to subscribe to `{event}` events: {message}")]
    Listen {
        event: &'static str,
        message: String,
    },
}
