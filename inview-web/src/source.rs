use inview::{Candidate, ElementSource};
use js_sys::{Array, Object};
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{HtmlElement, NodeList};

use crate::DomElement;

/// Classifies a JS value as an element source.
///
/// - an `HTMLElement` becomes [`ElementSource::Element`]
/// - a `NodeList` becomes [`ElementSource::Collection`]
/// - an `Array` becomes [`ElementSource::Sequence`]
///
/// Anything else is [`ElementSource::Unsupported`]. Members of a list that are not
/// `HTMLElement`s are kept as [`Candidate::Foreign`] so that construction can report them.
pub fn element_source(value: &JsValue) -> ElementSource<DomElement> {
    if let Some(element) = value.dyn_ref::<HtmlElement>() {
        return ElementSource::Element(DomElement::new(element.clone()));
    }
    if let Some(list) = value.dyn_ref::<NodeList>() {
        let members = (0..list.length())
            .map(|i| match list.item(i) {
                Some(node) => candidate(node.as_ref()),
                None => Candidate::Foreign {
                    type_name: "null".into(),
                },
            })
            .collect();
        return ElementSource::Collection(members);
    }
    if Array::is_array(value) {
        let members = value
            .unchecked_ref::<Array>()
            .iter()
            .map(|member| candidate(&member))
            .collect();
        return ElementSource::Sequence(members);
    }
    ElementSource::Unsupported {
        type_name: type_name(value),
    }
}

fn candidate(value: &JsValue) -> Candidate<DomElement> {
    match value.dyn_ref::<HtmlElement>() {
        Some(element) => Candidate::Element(DomElement::new(element.clone())),
        None => Candidate::Foreign {
            type_name: type_name(value),
        },
    }
}

/// The constructor name of an object (`Text`, `Object`, `SVGElement`), or `typeof` for
/// primitives.
fn type_name(value: &JsValue) -> String {
    if value.is_null() {
        return "null".into();
    }
    match value.dyn_ref::<Object>() {
        Some(object) => String::from(object.constructor().name()),
        None => value.js_typeof().as_string().unwrap_or_default(),
    }
}
