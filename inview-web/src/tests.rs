use std::cell::{Cell, RefCell};
use std::rc::Rc;

use inview::{Candidate, ElementSource, TrackerOptions};
use js_sys::{Array, Object, Promise};
use wasm_bindgen::{JsCast as _, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlElement};

use crate::*;

wasm_bindgen_test_configure!(run_in_browser);

/// Appends a `<div>` holding `html` to the body.
fn mount(html: &str) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    container.set_inner_html(html);
    document.body().unwrap().append_child(&container).unwrap();
    container
}

fn counting_callbacks(passes: &Rc<Cell<u32>>) -> DomCallbacks {
    let passes = Rc::clone(passes);
    DomCallbacks::new().with_on(move |_, _: &DomElement, _: &str| passes.set(passes.get() + 1))
}

async fn next_frame() {
    let promise = Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .request_animation_frame(&resolve)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn html_element_is_a_single_element() {
    let container = mount("");
    match element_source(&container) {
        ElementSource::Element(el) => assert_eq!(el.element(), &container),
        other => panic!("unexpected source {other:?}"),
    }
    container.remove();
}

#[wasm_bindgen_test]
fn plain_object_is_unsupported() {
    let value = JsValue::from(Object::new());
    assert_eq!(
        element_source(&value),
        ElementSource::Unsupported {
            type_name: "Object".to_string()
        }
    );
    let err = track(&value, DomCallbacks::new(), TrackerOptions::new()).unwrap_err();
    assert!(matches!(
        err,
        Error::Tracker(inview::Error::InvalidInput { ref type_name }) if type_name == "Object"
    ));
}

#[wasm_bindgen_test]
fn node_list_keeps_text_nodes_as_foreign_members() {
    let container = mount("<p>a</p>text");
    let nodes = container.child_nodes();

    let ElementSource::Collection(members) = element_source(&nodes) else {
        panic!("a NodeList is a collection");
    };
    assert_eq!(members.len(), 2);
    assert!(matches!(&members[0], Candidate::Element(el) if el.element().tag_name() == "P"));
    assert_eq!(
        members[1],
        Candidate::Foreign {
            type_name: "Text".to_string()
        }
    );

    let err = track(&nodes, DomCallbacks::new(), TrackerOptions::new()).unwrap_err();
    assert!(matches!(
        err,
        Error::Tracker(inview::Error::InvalidElement { index: 1, ref type_name }) if type_name == "Text"
    ));
    // Rejected sources leave the DOM untouched.
    let p: HtmlElement = container.first_element_child().unwrap().dyn_into().unwrap();
    assert!(!p.class_list().contains(inview::DEFAULT_CLASS_NAME));
    container.remove();
}

#[wasm_bindgen_test]
fn array_members_are_classified() {
    let numbers = Array::of1(&JsValue::from(3));
    assert_eq!(
        element_source(&numbers),
        ElementSource::Sequence(vec![Candidate::Foreign {
            type_name: "number".to_string()
        }])
    );
    let err = track(&numbers, DomCallbacks::new(), TrackerOptions::new()).unwrap_err();
    assert!(matches!(
        err,
        Error::Tracker(inview::Error::InvalidElement { index: 0, .. })
    ));

    let a = mount("a");
    let b = mount("b");
    let ElementSource::Sequence(members) = element_source(&Array::of2(&a, &b)) else {
        panic!("an Array is a sequence");
    };
    assert_eq!(
        members,
        vec![
            Candidate::Element(DomElement::new(a.clone())),
            Candidate::Element(DomElement::new(b.clone())),
        ]
    );
    a.remove();
    b.remove();
}

#[wasm_bindgen_test]
fn tracking_annotates_elements_and_runs_the_first_pass() {
    let container = mount("");
    let passes = Rc::new(Cell::new(0));
    let attached = track(
        &container,
        counting_callbacks(&passes),
        TrackerOptions::new().with_class_name("seen"),
    )
    .unwrap();

    assert!(container.class_list().contains("seen"));
    assert_eq!(passes.get(), 1);
    assert_eq!(attached.matches(), Some(vec![DomElement::new(container.clone())]));
    drop(attached);
    container.remove();
}

#[wasm_bindgen_test]
fn ignoring_default_events_attaches_nothing() {
    let container = mount("");
    let passes = Rc::new(Cell::new(0));
    let attached = track(
        &container,
        counting_callbacks(&passes),
        TrackerOptions::new().with_ignore_default_events(true),
    )
    .unwrap();

    assert_eq!(attached.listeners().count(), 0);
    assert!(!attached.is_polling_frames());
    assert_eq!(passes.get(), 0);

    web_sys::window()
        .unwrap()
        .dispatch_event(&Event::new("scroll").unwrap())
        .unwrap();
    assert_eq!(passes.get(), 0);

    assert_eq!(attached.pull().map(|m| m.len()), Some(1));
    assert_eq!(passes.get(), 1);
    drop(attached);
    container.remove();
}

#[wasm_bindgen_test]
fn window_events_drive_passes_until_dropped() {
    let container = mount("");
    let passes = Rc::new(Cell::new(0));
    let attached = track(
        &container,
        counting_callbacks(&passes),
        TrackerOptions::new().with_autostart(false),
    )
    .unwrap();
    assert_eq!(attached.listeners().collect::<Vec<_>>(), ["scroll", "resize"]);
    assert_eq!(passes.get(), 0);

    let window = web_sys::window().unwrap();
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    window.dispatch_event(&Event::new("resize").unwrap()).unwrap();
    assert_eq!(passes.get(), 2);

    drop(attached);
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    window.dispatch_event(&Event::new("resize").unwrap()).unwrap();
    assert_eq!(passes.get(), 2);
    container.remove();
}

#[wasm_bindgen_test]
fn scroll_only_listens_for_scroll() {
    let container = mount("");
    let attached = track(
        &container,
        DomCallbacks::new(),
        TrackerOptions::new().with_resize(false),
    )
    .unwrap();
    assert_eq!(attached.listeners().collect::<Vec<_>>(), ["scroll"]);
    drop(attached);
    container.remove();
}

#[wasm_bindgen_test]
fn nested_pull_from_a_hook_is_skipped() {
    let container = mount("");
    let slot: Rc<RefCell<Option<Attached>>> = Rc::default();
    let nested: Rc<RefCell<Vec<(bool, bool)>>> = Rc::default();

    let hook_slot = Rc::clone(&slot);
    let hook_nested = Rc::clone(&nested);
    let callbacks = DomCallbacks::new().with_on(move |_, _: &DomElement, _: &str| {
        if let Some(attached) = hook_slot.borrow().as_ref() {
            let pulled = attached.pull();
            let matches = attached.matches();
            hook_nested
                .borrow_mut()
                .push((pulled.is_none(), matches.is_none()));
        }
    });
    let attached = track(
        &container,
        callbacks,
        TrackerOptions::new().with_ignore_default_events(true),
    )
    .unwrap();
    *slot.borrow_mut() = Some(attached);

    let outer = slot.borrow().as_ref().unwrap().pull();
    assert_eq!(outer, Some(vec![DomElement::new(container.clone())]));
    assert_eq!(*nested.borrow(), [(true, true)]);

    slot.borrow_mut().take();
    container.remove();
}

#[wasm_bindgen_test]
async fn animation_frames_drive_passes_until_dropped() {
    let container = mount("");
    let passes = Rc::new(Cell::new(0));
    let attached = track(
        &container,
        counting_callbacks(&passes),
        TrackerOptions::new().with_animation_frame(true),
    )
    .unwrap();
    assert!(attached.is_polling_frames());
    assert_eq!(attached.listeners().count(), 0);
    // Autostart.
    assert_eq!(passes.get(), 1);

    next_frame().await;
    next_frame().await;
    assert!(passes.get() >= 3);

    drop(attached);
    let stopped_at = passes.get();
    next_frame().await;
    next_frame().await;
    assert_eq!(passes.get(), stopped_at);
    container.remove();
}
