//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Owns the project
//! list, the filter state and the modal state; components mutate it through
//! the helpers below so the transition rules live in one place.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::modal::ModalState;
use crate::models::{sample_projects, Project};

/// Category value meaning "no filtering"
pub const ALL_CATEGORY: &str = "all";

/// How a grid item participates in layout under the current filter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemPhase {
    /// Matches the filter, shown with an entrance animation
    Visible,
    /// No longer matches, still in layout while its exit transition plays
    Leaving,
    /// Filtered out and removed from layout
    Hidden,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All portfolio projects, in display and navigation order
    pub projects: Vec<Project>,
    /// The single active filter category
    pub active_filter: String,
    /// Indices of items currently playing their exit transition
    pub leaving: Vec<usize>,
    /// Shared project modal
    pub modal: ModalState,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            projects: sample_projects(),
            active_filter: ALL_CATEGORY.to_string(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Does an item with `category` stay visible under `active`?
pub fn matches_filter(active: &str, category: &str) -> bool {
    active == ALL_CATEGORY || active == category
}

/// Phase of item `index` given the active filter and the leaving set
pub fn item_phase(active: &str, leaving: &[usize], index: usize, category: &str) -> ItemPhase {
    if matches_filter(active, category) {
        ItemPhase::Visible
    } else if leaving.contains(&index) {
        ItemPhase::Leaving
    } else {
        ItemPhase::Hidden
    }
}

/// Grid item class for a phase
pub fn phase_class(phase: ItemPhase) -> &'static str {
    match phase {
        ItemPhase::Visible => "portfolio-item",
        ItemPhase::Leaving => "portfolio-item leaving",
        ItemPhase::Hidden => "portfolio-item hidden",
    }
}

// ========================
// Store Helper Functions
// ========================

/// Switch the active filter. Items that were visible and no longer match move
/// to the leaving phase; the caller finalizes them once the exit transition
/// has run (see `FilterBar`).
pub fn store_apply_filter(store: &AppStore, category: &str) {
    let old = store.active_filter().get_untracked();
    let leaving: Vec<usize> = store
        .projects()
        .read_untracked()
        .iter()
        .enumerate()
        .filter(|(_, p)| {
            matches_filter(&old, &p.category) && !matches_filter(category, &p.category)
        })
        .map(|(i, _)| i)
        .collect();

    store.active_filter().set(category.to_string());
    store.leaving().set(leaving);
}

/// Drop all items out of the leaving phase (exit transitions finished)
pub fn store_finish_exits(store: &AppStore) {
    store.leaving().set(Vec::new());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_every_category() {
        assert!(matches_filter(ALL_CATEGORY, "web"));
        assert!(matches_filter(ALL_CATEGORY, "design"));
    }

    #[test]
    fn specific_filter_selects_exactly_its_items() {
        let categories = ["web", "web", "design"];
        let visible: Vec<bool> = categories
            .iter()
            .map(|c| matches_filter("web", c))
            .collect();
        assert_eq!(visible, vec![true, true, false]);

        let all_visible: Vec<bool> = categories
            .iter()
            .map(|c| matches_filter(ALL_CATEGORY, c))
            .collect();
        assert_eq!(all_visible, vec![true, true, true]);
    }

    #[test]
    fn non_matching_items_leave_before_hiding() {
        // Item 2 is mid-exit, item 1 already finished
        assert_eq!(item_phase("web", &[2], 0, "web"), ItemPhase::Visible);
        assert_eq!(item_phase("web", &[2], 2, "design"), ItemPhase::Leaving);
        assert_eq!(item_phase("web", &[2], 1, "design"), ItemPhase::Hidden);
    }

    #[test]
    fn phase_classes_keep_leaving_items_in_layout() {
        assert_eq!(phase_class(ItemPhase::Visible), "portfolio-item");
        assert_eq!(phase_class(ItemPhase::Leaving), "portfolio-item leaving");
        assert_eq!(phase_class(ItemPhase::Hidden), "portfolio-item hidden");
    }
}
