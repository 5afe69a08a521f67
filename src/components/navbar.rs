//! Navigation Bar Component
//!
//! Fixed navbar with smooth-scrolling section links, a mobile menu toggle and
//! a scroll-spy that highlights the section currently in view.

use leptos::prelude::*;

use crate::dom;

/// Section anchors, in page order
const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("portfolio", "Portfolio"),
    ("contact", "Contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (active_section, set_active_section) = signal(String::from("home"));

    // Scroll-spy: track which section the viewport is inside
    dom::bind_window_scroll(move || {
        if let Some(id) = dom::current_section() {
            set_active_section.set(id);
        }
    });

    view! {
        <nav class="navbar">
            <div class="nav-brand">
                <a href="#home">"Angger B. Sentiko"</a>
            </div>

            <button
                class=move || if menu_open.get() { "nav-toggle active" } else { "nav-toggle" }
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                <span class="nav-toggle-bar"></span>
                <span class="nav-toggle-bar"></span>
                <span class="nav-toggle-bar"></span>
            </button>

            <ul class=move || if menu_open.get() { "nav-menu active" } else { "nav-menu" }>
                {NAV_LINKS.iter().map(|(id, label)| {
                    let anchor = format!("#{}", id);
                    let target = anchor.clone();
                    let id = id.to_string();
                    view! {
                        <li>
                            <a
                                href=anchor
                                class=move || {
                                    if active_section.get() == id { "nav-link active" } else { "nav-link" }
                                }
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    dom::scroll_to_anchor(&target);
                                    set_menu_open.set(false);
                                }
                            >
                                {*label}
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
