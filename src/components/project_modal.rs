//! Project Modal
//!
//! Single shared lightbox over the project list. Opening locks background
//! scroll; navigation wraps around and fades only the image, with a
//! cancellable swap timer so rapid presses never show a stale frame.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::dom;
use crate::modal::ModalState;
use crate::models::Project;
use crate::store::{use_app_store, AppStateStoreFields};

/// Image fade length during navigation
const SWAP_MS: u32 = 300;

#[component]
pub fn ProjectModal() -> impl IntoView {
    let store = use_app_store();

    // The displayed image lags the index during navigation so the fade can
    // play; title and description react to the index directly.
    let (shown_image, set_shown_image) = signal(String::new());
    let (image_class, set_image_class) = signal(String::from("modal-image"));
    let swap_timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    let image_of = move |index: usize| {
        store
            .projects()
            .read_untracked()
            .get(index)
            .map(|p| p.image.clone())
            .unwrap_or_default()
    };

    Effect::new({
        let swap_timer = swap_timer.clone();
        move |prev: Option<ModalState>| {
            let state = store.modal().get();
            match (prev.unwrap_or_default(), state) {
                (ModalState::Closed, ModalState::Open { index }) => {
                    dom::set_body_scroll_locked(true);
                    swap_timer.borrow_mut().take();
                    set_shown_image.set(image_of(index));
                    set_image_class.set("modal-image".to_string());
                }
                (ModalState::Open { index: from }, ModalState::Open { index: to })
                    if from != to =>
                {
                    set_image_class.set("modal-image fade-out".to_string());
                    let image = image_of(to);
                    let handle = Timeout::new(SWAP_MS, move || {
                        set_shown_image.set(image);
                        set_image_class.set("modal-image fade-in".to_string());
                    });
                    *swap_timer.borrow_mut() = Some(handle);
                }
                (ModalState::Open { .. }, ModalState::Closed) => {
                    dom::set_body_scroll_locked(false);
                    swap_timer.borrow_mut().take();
                }
                _ => {}
            }
            state
        }
    });

    let close = move |_| {
        let state = store.modal().get_untracked();
        store.modal().set(state.close());
    };
    let navigate = move |forward: bool| {
        let state = store.modal().get_untracked();
        let len = store.projects().read_untracked().len();
        store.modal().set(if forward {
            state.next(len)
        } else {
            state.prev(len)
        });
    };

    // Escape closes, arrow keys navigate; only while open
    dom::bind_document_keydown(move |ev| {
        let state = store.modal().get_untracked();
        if !state.is_open() {
            return;
        }
        match ev.key().as_str() {
            "Escape" => store.modal().set(state.close()),
            "ArrowRight" => navigate(true),
            "ArrowLeft" => navigate(false),
            _ => {}
        }
    });

    let current = move || -> Option<Project> {
        let index = store.modal().get().index()?;
        store.projects().get().get(index).cloned()
    };

    view! {
        <Show when=move || store.modal().get().is_open()>
            <div class="portfolio-modal active">
                <div
                    class="modal-overlay"
                    on:click=move |ev| {
                        if ev.target() == ev.current_target() {
                            let state = store.modal().get_untracked();
                            store.modal().set(state.close());
                        }
                    }
                >
                    <div class="modal-content">
                        <button class="modal-close" on:click=close>"×"</button>
                        <button class="modal-nav prev" on:click=move |_| navigate(false)>"‹"</button>
                        <button class="modal-nav next" on:click=move |_| navigate(true)>"›"</button>
                        <div class="modal-body">
                            <img
                                class=move || image_class.get()
                                src=move || shown_image.get()
                                alt=move || current().map(|p| p.title).unwrap_or_default()
                            />
                            <div class="modal-info">
                                <h3 class="modal-title">
                                    {move || current().map(|p| p.title).unwrap_or_default()}
                                </h3>
                                <p class="modal-description">
                                    {move || current().map(|p| p.description).unwrap_or_default()}
                                </p>
                                <div class="modal-details">
                                    <h4>"Project Details"</h4>
                                    <div class="modal-tech-stack">
                                        {move || current().map(|p| p.tech).unwrap_or_default()
                                            .into_iter()
                                            .map(|tech| view! { <span class="tech-tag">{tech}</span> })
                                            .collect_view()}
                                    </div>
                                    <div class="modal-links">
                                        {move || current().and_then(|p| p.demo_url).map(|url| view! {
                                            <a href=url class="btn btn-primary modal-demo" target="_blank">
                                                "Live Demo"
                                            </a>
                                        })}
                                        {move || current().and_then(|p| p.code_url).map(|url| view! {
                                            <a href=url class="btn btn-secondary modal-github" target="_blank">
                                                "View Code"
                                            </a>
                                        })}
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
