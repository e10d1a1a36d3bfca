//! Board Renderer
//!
//! Pure functions from the task store to what each screen region shows,
//! and the render-target trait the screen implements.

use crate::models::{Category, TaskId};
use crate::store::TaskStore;

// ========================
// View Models
// ========================

/// Sidebar quick-list row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickItem {
    pub id: TaskId,
    pub content: String,
}

/// Kanban card. `id` and `category` end up as `data-id` / `data-category`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub id: TaskId,
    pub content: String,
    pub category: Category,
    pub created_at: Option<String>,
}

/// Per-column badge counts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counts {
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
}

impl Counts {
    /// Badge value for a column; the quick list has no badge.
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Todo => self.todo,
            Category::InProgress => self.in_progress,
            Category::Done => self.done,
            Category::QuickList => 0,
        }
    }
}

// ========================
// Render Target
// ========================

/// Screen regions the board paints into.
pub trait BoardView {
    fn render_quick_list(&self, items: Vec<QuickItem>);
    fn render_column(&self, category: Category, cards: Vec<CardView>);
    fn update_counts(&self, counts: Counts);
    fn clear_quick_input(&self);
    fn show_card_form(&self, category: Category, open: bool);
    /// `None` removes the dragging mark
    fn mark_dragging(&self, card: Option<TaskId>);
    fn mark_drop_candidate(&self, category: Category, candidate: bool);
}

// ========================
// Builders
// ========================

pub fn quick_list(store: &TaskStore) -> Vec<QuickItem> {
    store
        .in_category(Category::QuickList)
        .map(|task| QuickItem {
            id: task.id,
            content: task.content.clone(),
        })
        .collect()
}

pub fn column(store: &TaskStore, category: Category) -> Vec<CardView> {
    store
        .in_category(category)
        .map(|task| CardView {
            id: task.id,
            content: task.content.clone(),
            category: task.category,
            created_at: task.created_at.clone(),
        })
        .collect()
}

pub fn counts(store: &TaskStore) -> Counts {
    Counts {
        todo: store.count_of(Category::Todo),
        in_progress: store.count_of(Category::InProgress),
        done: store.count_of(Category::Done),
    }
}

pub fn render_quick_list<V: BoardView + ?Sized>(store: &TaskStore, view: &V) {
    view.render_quick_list(quick_list(store));
}

pub fn render_kanban_columns<V: BoardView + ?Sized>(store: &TaskStore, view: &V) {
    for category in Category::BOARD {
        view.render_column(category, column(store, category));
    }
}

pub fn update_counts<V: BoardView + ?Sized>(store: &TaskStore, view: &V) {
    view.update_counts(counts(store));
}

/// Repaint everything: quick list, then columns, then counts, so the
/// badges always describe the board just drawn.
pub fn repaint<V: BoardView + ?Sized>(store: &TaskStore, view: &V) {
    render_quick_list(store, view);
    render_kanban_columns(store, view);
    update_counts(store, view);
}
