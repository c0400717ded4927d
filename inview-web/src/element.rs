use inview::{Rect, TrackedElement};
use web_sys::HtmlElement;

/// A DOM element tracked by [`inview::ViewportTracker`].
///
/// Cloning clones the JS reference, not the node. Equality is JS identity.
#[derive(Clone, Debug, PartialEq)]
pub struct DomElement(HtmlElement);

impl DomElement {
    pub fn new(element: HtmlElement) -> Self {
        Self(element)
    }

    pub fn element(&self) -> &HtmlElement {
        &self.0
    }

    pub fn into_inner(self) -> HtmlElement {
        self.0
    }
}

impl From<HtmlElement> for DomElement {
    fn from(element: HtmlElement) -> Self {
        Self(element)
    }
}

impl AsRef<HtmlElement> for DomElement {
    fn as_ref(&self) -> &HtmlElement {
        &self.0
    }
}

impl TrackedElement for DomElement {
    fn bounding_rect(&self) -> Rect {
        let r = self.0.get_bounding_client_rect();
        Rect::new(r.top(), r.left(), r.bottom(), r.right())
    }

    fn add_class(&self, class_name: &str) {
        if let Err(_err) = self.0.class_list().add_1(class_name) {
            // Tokens are validated at construction, so only host-specific failures land here.
            vwarn!(err = ?_err, class_name, "classList.add failed");
        }
    }
}
