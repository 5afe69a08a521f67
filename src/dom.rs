//! DOM Bindings
//!
//! Thin wrappers over web-sys for scrolling, global event listeners and
//! IntersectionObserver reveals. Every lookup may find nothing; each binding
//! degrades to a no-op when its target element is absent.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, HtmlImageElement};

/// Height of the fixed navbar, subtracted when scrolling to an anchor
pub const NAVBAR_OFFSET_PX: f64 = 70.0;

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn query(selector: &str) -> Option<Element> {
    document().and_then(|d| d.query_selector(selector).ok().flatten())
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(doc) = document() else {
        return Vec::new();
    };
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Current vertical scroll position
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn smooth_scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let opts = web_sys::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

pub fn scroll_to_top() {
    smooth_scroll_to(0.0);
}

/// Smooth-scroll to the element matching `selector`, leaving room for the
/// fixed navbar. Missing targets are ignored.
pub fn scroll_to_anchor(selector: &str) {
    let Some(target) = query(selector).and_then(|el| el.dyn_into::<HtmlElement>().ok()) else {
        return;
    };
    smooth_scroll_to(target.offset_top() as f64 - NAVBAR_OFFSET_PX);
}

/// Lock or unlock background scrolling while the modal is open
pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let value = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", value);
    }
}

/// Id of the `<section>` the viewport currently sits in (scroll-spy)
pub fn current_section() -> Option<String> {
    let y = scroll_y();
    let mut current = None;
    for section in query_all("section") {
        let Ok(el) = section.dyn_into::<HtmlElement>() else {
            continue;
        };
        let top = el.offset_top() as f64 - 100.0;
        let height = el.offset_height() as f64;
        if y > top && y <= top + height {
            if let Some(id) = el.get_attribute("id") {
                current = Some(id);
            }
        }
    }
    current
}

/// Install a window scroll listener for the lifetime of the page
pub fn bind_window_scroll<F>(handler: F)
where
    F: Fn() + 'static,
{
    let cb = Closure::<dyn FnMut()>::new(handler);
    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
    }
    cb.forget();
}

/// Install a document keydown listener for the lifetime of the page
pub fn bind_document_keydown<F>(handler: F)
where
    F: Fn(web_sys::KeyboardEvent) + 'static,
{
    let cb = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(handler);
    if let Some(doc) = document() {
        let _ = doc.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
    }
    cb.forget();
}

fn one_shot_observer<F>(on_enter: F) -> Option<web_sys::IntersectionObserver>
where
    F: Fn(&Element) + 'static,
{
    let cb = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    on_enter(&target);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");

    let observer = web_sys::IntersectionObserver::new_with_options(
        cb.as_ref().unchecked_ref(),
        &options,
    )
    .ok()?;
    cb.forget();
    Some(observer)
}

/// One-shot reveal: add `class` to each matching element the first time it
/// enters the viewport.
pub fn observe_reveal(selector: &str, class: &str) {
    let class = class.to_string();
    let Some(observer) = one_shot_observer(move |el| {
        let _ = el.class_list().add_1(&class);
    }) else {
        return;
    };
    for el in query_all(selector) {
        observer.observe(&el);
    }
}

/// Lazy image loading: matching `<img data-src="...">` elements get their
/// real source the first time they scroll into view.
pub fn observe_lazy_images(selector: &str) {
    let Some(observer) = one_shot_observer(|el| {
        let Some(img) = el.dyn_ref::<HtmlImageElement>() else {
            return;
        };
        if let Some(src) = img.get_attribute("data-src") {
            img.set_src(&src);
        }
        let _ = img.class_list().add_1("loaded");
    }) else {
        return;
    };
    for el in query_all(selector) {
        observer.observe(&el);
    }
}
