use alloc::string::String;
use alloc::vec::Vec;

use crate::{Error, TrackedElement};

/// A member of a multi-element source, as classified by the host.
#[derive(Clone, Debug, PartialEq)]
pub enum Candidate<E> {
    Element(E),
    /// A value that is not a visual element. `type_name` is the host's runtime type name.
    Foreign { type_name: String },
}

impl<E> From<E> for Candidate<E> {
    fn from(element: E) -> Self {
        Self::Element(element)
    }
}

/// The shapes accepted when building a [`crate::ViewportTracker`].
///
/// Host adapters translate their dynamic values into one of these; anything they cannot classify
/// becomes [`ElementSource::Unsupported`], which construction rejects.
#[derive(Clone, Debug, PartialEq)]
pub enum ElementSource<E> {
    /// A single element.
    Element(E),
    /// A host-native element collection (e.g. a `NodeList`).
    Collection(Vec<Candidate<E>>),
    /// An ordered, array-like sequence.
    Sequence(Vec<Candidate<E>>),
    Unsupported { type_name: String },
}

impl<E: TrackedElement> ElementSource<E> {
    /// Normalizes the source into an ordered element list.
    ///
    /// Fails on the first foreign member; nothing is returned partially.
    pub fn into_elements(self) -> Result<Vec<E>, Error> {
        match self {
            Self::Element(element) => Ok(alloc::vec![element]),
            Self::Collection(members) | Self::Sequence(members) => members
                .into_iter()
                .enumerate()
                .map(|(index, member)| match member {
                    Candidate::Element(element) => Ok(element),
                    Candidate::Foreign { type_name } => {
                        vwarn!(index, type_name = %type_name, "rejecting non-element member");
                        Err(Error::InvalidElement { index, type_name })
                    }
                })
                .collect(),
            Self::Unsupported { type_name } => Err(Error::InvalidInput { type_name }),
        }
    }
}

impl<E> From<E> for ElementSource<E>
where
    E: TrackedElement,
{
    fn from(element: E) -> Self {
        Self::Element(element)
    }
}

impl<E> From<Vec<E>> for ElementSource<E> {
    fn from(elements: Vec<E>) -> Self {
        Self::Sequence(elements.into_iter().map(Candidate::Element).collect())
    }
}

impl<E> FromIterator<Candidate<E>> for ElementSource<E> {
    fn from_iter<I: IntoIterator<Item = Candidate<E>>>(iter: I) -> Self {
        Self::Sequence(iter.into_iter().collect())
    }
}
