//! Portfolio Filter Bar
//!
//! One button per category; exactly one is active at a time, enforced by the
//! store rather than the buttons. Switching filters moves newly hidden items
//! into a leaving phase and finalizes them once the exit transition has run.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::store::{store_apply_filter, store_finish_exits, use_app_store, AppStateStoreFields};

/// Filter categories shown above the grid
const FILTERS: &[(&str, &str)] = &[
    ("all", "All"),
    ("web", "Web"),
    ("app", "Applications"),
    ("design", "UI/UX Design"),
];

/// Exit transition length before hidden items drop out of layout
const EXIT_MS: u32 = 300;

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    // Pending exit finalizer; a superseding filter change cancels it so it
    // never acts on a stale leaving set.
    let exit_timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    let select = move |category: &'static str| {
        store_apply_filter(&store, category);
        let handle = Timeout::new(EXIT_MS, move || store_finish_exits(&store));
        *exit_timer.borrow_mut() = Some(handle);
    };

    view! {
        <div class="portfolio-filter">
            {FILTERS.iter().map(|(value, label)| {
                let category = *value;
                let select = select.clone();
                view! {
                    <button
                        class=move || {
                            if store.active_filter().get() == category {
                                "filter-btn active"
                            } else {
                                "filter-btn"
                            }
                        }
                        data-filter=category
                        on:click=move |_| select(category)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
