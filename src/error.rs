use alloc::string::String;

/// Errors raised while constructing a [`crate::ViewportTracker`].
///
/// Construction is all-or-nothing: when an error is returned no tracker exists and no element
/// has been annotated.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The element source is not a single element, a native collection or a sequence.
    #[error("a valid element, element collection or element sequence is required, got [{type_name}]")]
    InvalidInput { type_name: String },

    /// A member of a multi-element source is not a visual element.
    #[error("invalid element at index {index}: expecting a visual element, got [{type_name}]")]
    InvalidElement { index: usize, type_name: String },

    /// The marker class is empty or contains whitespace, so it is not a single class token.
    #[error("invalid marker class `{0}`: must be non-empty and contain no whitespace")]
    InvalidClassName(String),

    /// A check mode string is neither `inside` nor `visible`.
    #[error("unknown check mode `{0}` (expected `inside` or `visible`)")]
    UnknownCheck(String),
}

pub type Result<T> = core::result::Result<T, Error>;
