//! Portfolio Grid
//!
//! Ordered project cards with category-driven visibility and lazily loaded
//! images. A card's view control opens the shared modal at that index.

use leptos::prelude::*;

use crate::dom;
use crate::modal::ModalState;
use crate::store::{item_phase, phase_class, use_app_store, AppStateStoreFields};

#[component]
pub fn PortfolioGrid() -> impl IntoView {
    let store = use_app_store();

    // Grid is rendered by the time effects run; hook up lazy loading then.
    Effect::new(move |_| {
        dom::observe_lazy_images(".portfolio-img img");
    });

    let open_at = move |index: usize| {
        let len = store.projects().read_untracked().len();
        let next = store.modal().get_untracked().open(index, len);
        store.modal().set(next);
    };

    let projects = move || store.projects().get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <div class="portfolio-grid">
            <For
                each=projects
                key=|(index, _)| *index
                children=move |(index, project)| {
                    let category = project.category.clone();
                    let item_class = move || {
                        phase_class(item_phase(
                            &store.active_filter().get(),
                            &store.leaving().get(),
                            index,
                            &category,
                        ))
                    };
                    view! {
                        <div class=item_class data-category=project.category.clone()>
                            <div class="portfolio-img">
                                <img data-src=project.image.clone() alt=project.title.clone() />
                            </div>
                            <div class="portfolio-overlay">
                                <h3>{project.title.clone()}</h3>
                                <p>{project.description.clone()}</p>
                                <button
                                    class="portfolio-link"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        open_at(index);
                                    }
                                >
                                    "View Project"
                                </button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
