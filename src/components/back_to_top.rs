//! Back To Top Button
//!
//! Appears once the page has scrolled past a threshold; clicking it smooth
//! scrolls back to the top.

use leptos::prelude::*;

use crate::dom;

/// Scroll depth at which the button shows
const VISIBLE_AFTER_PX: f64 = 300.0;

#[component]
pub fn BackToTop() -> impl IntoView {
    let (visible, set_visible) = signal(false);

    dom::bind_window_scroll(move || {
        set_visible.set(dom::scroll_y() > VISIBLE_AFTER_PX);
    });

    view! {
        <button
            id="backToTop"
            class=move || if visible.get() { "back-to-top visible" } else { "back-to-top" }
            on:click=move |_| dom::scroll_to_top()
        >
            "↑"
        </button>
    }
}
