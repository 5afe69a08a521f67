//! Toast Notifications
//!
//! Renders at most one toast at a time. The auto-dismiss and exit-transition
//! timers are owned handles; a newer toast cancels both, and manual dismissal
//! cancels the pending auto-dismiss so an already-detached toast is never
//! removed twice.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::context::{AppContext, ToastKind};

/// Exit transition length before the toast detaches
const EXIT_MS: u32 = 500;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Toast currently playing its exit transition
    let (leaving, set_leaving) = signal(false);

    let auto_timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let exit_timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    // Dismissal runs the exit transition, then detaches — unless a newer
    // toast took over in the meantime (the id guard in `ctx.dismiss`).
    let begin_dismiss = {
        let auto_timer = auto_timer.clone();
        let exit_timer = exit_timer.clone();
        move |id: u32| {
            auto_timer.borrow_mut().take();
            if ctx.toast.get_untracked().is_some_and(|t| t.id == id) {
                set_leaving.set(true);
                let handle = Timeout::new(EXIT_MS, move || {
                    ctx.dismiss(id);
                    set_leaving.set(false);
                });
                *exit_timer.borrow_mut() = Some(handle);
            }
        }
    };

    // Stored in the reactive arena because the view's render closure must be
    // `Send`, and the timer handles it captures are not.
    let begin_dismiss = StoredValue::new_local(begin_dismiss);

    // Each new toast supersedes the previous one: both pending timers are
    // cancelled (dropping a Timeout cancels it) and a fresh auto-dismiss
    // starts for the new id.
    Effect::new({
        let auto_timer = auto_timer.clone();
        let exit_timer = exit_timer.clone();
        move |_| {
            let Some(toast) = ctx.toast.get() else {
                return;
            };
            auto_timer.borrow_mut().take();
            exit_timer.borrow_mut().take();
            set_leaving.set(false);

            let id = toast.id;
            let handle =
                Timeout::new(toast.timeout_ms, move || begin_dismiss.with_value(|f| f(id)));
            *auto_timer.borrow_mut() = Some(handle);
        }
    });

    let close = move |id: u32| begin_dismiss.with_value(|f| f(id));
    let backdrop_close = move |id: u32| begin_dismiss.with_value(|f| f(id));

    view! {
        {move || ctx.toast.get().map(|toast| {
            let id = toast.id;
            let kind_class = match toast.kind {
                ToastKind::Success => "contact-message success",
                ToastKind::Error => "contact-message error",
            };
            let wrapper_class = move || {
                if leaving.get() {
                    format!("{} hide", kind_class)
                } else {
                    kind_class.to_string()
                }
            };
            let close = close.clone();
            let backdrop_close = backdrop_close.clone();
            view! {
                <div
                    class=wrapper_class
                    on:click=move |ev| {
                        // Only a click on the backdrop itself dismisses
                        if ev.target() == ev.current_target() {
                            backdrop_close(id);
                        }
                    }
                >
                    <div class="message-content">
                        <span>{toast.message.clone()}</span>
                        <button
                            class="message-close"
                            on:click=move |_| close(id)
                        >
                            "×"
                        </button>
                    </div>
                </div>
            }
        })}
    }
}
