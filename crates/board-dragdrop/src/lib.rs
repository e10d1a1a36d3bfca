//! Board DragDrop Utilities
//!
//! HTML5 drag-and-drop for column boards.
//! Holds at most one dragged card at a time and tracks which columns
//! are currently hovered as drop candidates.

use std::collections::BTreeSet;

use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlElement};

// ========================
// Drag Session
// ========================

/// In-flight drag state: `Idle` or holding exactly one dragged card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragSession<T> {
    Idle,
    Dragging(T),
}

impl<T> Default for DragSession<T> {
    fn default() -> Self {
        DragSession::Idle
    }
}

impl<T> DragSession<T> {
    /// Begin dragging `card`. A drag already in flight is replaced and
    /// its reference returned (last start wins).
    pub fn start(&mut self, card: T) -> Option<T> {
        match std::mem::replace(self, DragSession::Dragging(card)) {
            DragSession::Dragging(previous) => Some(previous),
            DragSession::Idle => None,
        }
    }

    /// Take the dragged card for a drop, returning to `Idle`.
    pub fn take(&mut self) -> Option<T> {
        match std::mem::take(self) {
            DragSession::Dragging(card) => Some(card),
            DragSession::Idle => None,
        }
    }

    /// End the drag whether or not it was dropped.
    pub fn end(&mut self) -> Option<T> {
        self.take()
    }

    #[cfg(test)]
    pub fn current(&self) -> Option<&T> {
        match self {
            DragSession::Dragging(card) => Some(card),
            DragSession::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragSession::Dragging(_))
    }
}

// ========================
// Drop Candidates
// ========================

/// Columns currently marked as drop candidates (the `drag-over` highlight).
#[derive(Clone, Debug)]
pub struct DropCandidates<K: Ord> {
    marked: BTreeSet<K>,
}

impl<K: Ord> Default for DropCandidates<K> {
    fn default() -> Self {
        Self { marked: BTreeSet::new() }
    }
}

impl<K: Ord + Clone> DropCandidates<K> {
    /// Mark `key`; returns true if it was not marked before.
    pub fn mark(&mut self, key: K) -> bool {
        self.marked.insert(key)
    }

    /// Clear `key`; returns true if it was marked.
    pub fn clear(&mut self, key: &K) -> bool {
        self.marked.remove(key)
    }

    /// Clear every mark, returning the keys that were marked.
    pub fn clear_all(&mut self) -> Vec<K> {
        std::mem::take(&mut self.marked).into_iter().collect()
    }

    #[cfg(test)]
    pub fn contains(&self, key: &K) -> bool {
        self.marked.contains(key)
    }
}

// ========================
// DOM Helpers
// ========================

/// Read a `data-*` attribute from the element the handler is bound to.
/// `key` is the camelCase dataset name (`"id"` for `data-id`).
pub fn current_target_data(ev: &DragEvent, key: &str) -> Option<String> {
    let element = ev.current_target()?.dyn_into::<HtmlElement>().ok()?;
    element.dataset().get(key)
}

/// Configure a dragstart event as a move carrying `payload` as plain text.
pub fn begin_move(ev: &DragEvent, payload: &str) {
    if let Some(transfer) = ev.data_transfer() {
        transfer.set_effect_allowed("move");
        // Firefox will not start a drag without data
        let _ = transfer.set_data("text/plain", payload);
    }
}

/// Accept a dragover so the element becomes a valid move target.
pub fn accept_move(ev: &DragEvent) {
    ev.prevent_default();
    if let Some(transfer) = ev.data_transfer() {
        transfer.set_drop_effect("move");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let session: DragSession<u32> = DragSession::default();
        assert!(!session.is_dragging());
        assert_eq!(session.current(), None);
    }

    #[test]
    fn second_start_overwrites_reference() {
        let mut session = DragSession::default();
        assert_eq!(session.start(1), None);
        assert_eq!(session.start(2), Some(1));
        assert_eq!(session.current(), Some(&2));
    }

    #[test]
    fn take_returns_to_idle() {
        let mut session = DragSession::default();
        session.start("card");
        assert_eq!(session.take(), Some("card"));
        assert_eq!(session, DragSession::Idle);
        assert_eq!(session.take(), None);
    }

    #[test]
    fn end_without_drag_is_noop() {
        let mut session: DragSession<u32> = DragSession::Idle;
        assert_eq!(session.end(), None);
        assert!(!session.is_dragging());
    }

    #[test]
    fn candidates_mark_and_clear() {
        let mut candidates = DropCandidates::default();
        assert!(candidates.mark("todo"));
        assert!(!candidates.mark("todo"));
        assert!(candidates.mark("done"));
        assert!(candidates.clear(&"todo"));
        assert!(!candidates.contains(&"todo"));
        assert_eq!(candidates.clear_all(), vec!["done"]);
        assert!(candidates.clear_all().is_empty());
    }
}
