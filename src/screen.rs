//! Screen State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The board
//! paints into it through `BoardView`; components read from it.

use std::collections::{BTreeMap, BTreeSet};

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Category, TaskId};
use crate::render::{BoardView, CardView, Counts, QuickItem};

/// Everything the page shows
#[derive(Clone, Debug, Default, Store)]
pub struct ScreenState {
    /// Sidebar quick-list rows
    pub quick_list: Vec<QuickItem>,
    /// Cards per kanban column
    pub columns: BTreeMap<Category, Vec<CardView>>,
    /// Column badge counts
    pub counts: Counts,
    /// Columns with an inline card form open
    pub open_forms: BTreeSet<Category>,
    /// Card currently being dragged
    pub dragging: Option<TaskId>,
    /// Columns highlighted as drop targets
    pub drop_candidates: BTreeSet<Category>,
    /// Quick-task input text
    pub quick_input: String,
    /// Notes textarea text as loaded from the server
    pub note: String,
    /// Notes textarea accepts input once the initial load has resolved
    pub note_ready: bool,
}

/// Type alias for the store
pub type ScreenStore = Store<ScreenState>;

/// `BoardView` backed by the screen store
#[derive(Clone, Copy)]
pub struct ScreenView {
    store: ScreenStore,
}

impl ScreenView {
    pub fn new(store: ScreenStore) -> Self {
        Self { store }
    }
}

impl BoardView for ScreenView {
    fn render_quick_list(&self, items: Vec<QuickItem>) {
        *self.store.quick_list().write() = items;
    }

    fn render_column(&self, category: Category, cards: Vec<CardView>) {
        self.store.columns().write().insert(category, cards);
    }

    fn update_counts(&self, counts: Counts) {
        *self.store.counts().write() = counts;
    }

    fn clear_quick_input(&self) {
        self.store.quick_input().write().clear();
    }

    fn show_card_form(&self, category: Category, open: bool) {
        let open_forms = self.store.open_forms();
        let mut forms = open_forms.write();
        if open {
            forms.insert(category);
        } else {
            forms.remove(&category);
        }
    }

    fn mark_dragging(&self, card: Option<TaskId>) {
        *self.store.dragging().write() = card;
    }

    fn mark_drop_candidate(&self, category: Category, candidate: bool) {
        let drop_candidates = self.store.drop_candidates();
        let mut candidates = drop_candidates.write();
        if candidate {
            candidates.insert(category);
        } else {
            candidates.remove(&category);
        }
    }
}
