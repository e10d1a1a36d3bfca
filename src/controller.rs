//! Board Controller
//!
//! The page session. Owns the task store, the inline card forms and the
//! drag session. Every user action is mutate-then-reload: the mutation
//! completes, then the whole task list is fetched again and repainted.
//! Failures are logged and otherwise ignored.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use board_dragdrop::{DragSession, DropCandidates};
use tracing::{debug, error};

use crate::commands::BoardApi;
use crate::models::{Category, Task, TaskId, TaskPatch, UnknownCategory};
use crate::render::{self, BoardView};
use crate::store::TaskStore;

// ========================
// Drag Payload
// ========================

/// The card being dragged, as read from its `data-id` / `data-category`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DraggedCard {
    pub id: TaskId,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardAttributeError {
    #[error("card has no data-id")]
    MissingId,
    #[error("card data-id `{0}` is not a task id")]
    InvalidId(String),
    #[error("card has no data-category")]
    MissingCategory,
    #[error(transparent)]
    InvalidCategory(#[from] UnknownCategory),
}

impl DraggedCard {
    pub fn from_attributes(id: Option<&str>, category: Option<&str>) -> Result<Self, CardAttributeError> {
        let raw_id = id.ok_or(CardAttributeError::MissingId)?;
        let id = raw_id
            .trim()
            .parse::<TaskId>()
            .map_err(|_| CardAttributeError::InvalidId(raw_id.to_string()))?;
        let category = category.ok_or(CardAttributeError::MissingCategory)?.parse()?;
        Ok(Self { id, category })
    }
}

/// A drop that changes a card's column
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropMove {
    pub id: TaskId,
    pub from: Category,
    pub to: Category,
}

// ========================
// Card Form Keys
// ========================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKey {
    Submit,
    Cancel,
}

impl FormKey {
    /// Enter without Shift submits, Escape cancels; Shift+Enter is a newline.
    pub fn from_key(key: &str, shift: bool) -> Option<Self> {
        match key {
            "Enter" if !shift => Some(FormKey::Submit),
            "Escape" => Some(FormKey::Cancel),
            _ => None,
        }
    }
}

// ========================
// Inline Card Editor
// ========================

/// Text of a card's inline editor. Every open starts from the card's
/// current content, so a cancelled or failed edit leaves nothing behind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardEdit {
    draft: Option<String>,
}

impl CardEdit {
    pub fn open(&mut self, current: &str) {
        self.draft = Some(current.to_string());
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft(&self) -> &str {
        self.draft.as_deref().unwrap_or_default()
    }

    /// Ignored while closed
    pub fn set_draft(&mut self, text: String) {
        if let Some(draft) = self.draft.as_mut() {
            *draft = text;
        }
    }

    pub fn cancel(&mut self) {
        self.draft = None;
    }

    /// Close the editor, handing back the text to save
    pub fn commit(&mut self) -> Option<String> {
        self.draft.take()
    }
}

// ========================
// Board Session
// ========================

pub struct Board<A, V> {
    api: Rc<A>,
    view: V,
    store: RefCell<TaskStore>,
    open_forms: RefCell<BTreeSet<Category>>,
    drag: RefCell<DragSession<DraggedCard>>,
    drop_candidates: RefCell<DropCandidates<Category>>,
}

impl<A: BoardApi, V: BoardView> Board<A, V> {
    pub fn new(api: Rc<A>, view: V) -> Self {
        Self {
            api,
            view,
            store: RefCell::new(TaskStore::default()),
            open_forms: RefCell::new(BTreeSet::new()),
            drag: RefCell::new(DragSession::Idle),
            drop_candidates: RefCell::new(DropCandidates::default()),
        }
    }

    pub fn api(&self) -> Rc<A> {
        Rc::clone(&self.api)
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Snapshot of the store
    pub fn tasks(&self) -> Vec<Task> {
        self.store.borrow().tasks().to_vec()
    }

    pub fn count_of(&self, category: Category) -> usize {
        self.store.borrow().count_of(category)
    }

    /// Fetch the full list, replace the store, repaint. On failure the
    /// store and the screen keep showing the previous load.
    pub async fn refresh(&self) {
        match self.api.list_tasks().await {
            Ok(tasks) => {
                debug!(count = tasks.len(), "tasks loaded");
                self.store.borrow_mut().replace(tasks);
                let store = self.store.borrow();
                render::repaint(&store, &self.view);
            }
            Err(err) => error!(%err, "failed to load tasks"),
        }
    }

    // ========================
    // Quick List
    // ========================

    /// Blank input is ignored and left in the field.
    pub async fn add_quick_task(&self, input: &str) {
        let content = input.trim();
        if content.is_empty() {
            return;
        }
        match self.api.create_task(content, Category::QuickList).await {
            Ok(task) => {
                debug!(task_id = task.id, "quick task added");
                self.view.clear_quick_input();
                self.refresh().await;
            }
            Err(err) => error!(%err, "failed to add quick task"),
        }
    }

    pub async fn delete_task(&self, id: TaskId) {
        match self.api.delete_task(id).await {
            Ok(()) => self.refresh().await,
            Err(err) => error!(%err, task_id = id, "failed to delete task"),
        }
    }

    // ========================
    // Card Forms
    // ========================

    /// Open the inline form for `category`. Returns false if one is
    /// already open there.
    pub fn open_card_form(&self, category: Category) -> bool {
        if !self.open_forms.borrow_mut().insert(category) {
            return false;
        }
        self.view.show_card_form(category, true);
        true
    }

    #[cfg(test)]
    pub fn is_card_form_open(&self, category: Category) -> bool {
        self.open_forms.borrow().contains(&category)
    }

    pub fn cancel_card_form(&self, category: Category) {
        self.close_card_form(category);
    }

    /// Create a card from the form text, then close the form whatever
    /// the outcome.
    pub async fn submit_card_form(&self, category: Category, text: &str) {
        let content = text.trim();
        if !content.is_empty() {
            match self.api.create_task(content, category).await {
                Ok(task) => {
                    debug!(task_id = task.id, %category, "card created");
                    self.refresh().await;
                }
                Err(err) => error!(%err, %category, "failed to create card"),
            }
        }
        self.close_card_form(category);
    }

    fn close_card_form(&self, category: Category) {
        if self.open_forms.borrow_mut().remove(&category) {
            self.view.show_card_form(category, false);
        }
    }

    /// Inline edit of a card's text. Blank text is ignored.
    pub async fn rename_task(&self, id: TaskId, content: &str) {
        let content = content.trim();
        if content.is_empty() {
            return;
        }
        match self.api.update_task(id, &TaskPatch::content(content)).await {
            Ok(_) => self.refresh().await,
            Err(err) => error!(%err, task_id = id, "failed to rename task"),
        }
    }

    // ========================
    // Drag and Drop
    // ========================

    pub fn drag_start(&self, card: DraggedCard) {
        if let Some(previous) = self.drag.borrow_mut().start(card) {
            debug!(previous = previous.id, task_id = card.id, "drag restarted");
        }
        self.view.mark_dragging(Some(card.id));
    }

    #[cfg(test)]
    pub fn is_dragging(&self) -> bool {
        self.drag.borrow().is_dragging()
    }

    pub fn drag_over(&self, category: Category) {
        if self.drop_candidates.borrow_mut().mark(category) {
            self.view.mark_drop_candidate(category, true);
        }
    }

    pub fn drag_leave(&self, category: Category) {
        if self.drop_candidates.borrow_mut().clear(&category) {
            self.view.mark_drop_candidate(category, false);
        }
    }

    /// Resolve a drop on `target`. Takes the dragged card and returns the
    /// move to perform, or `None` when nothing was dragged or the card
    /// already lives in `target`.
    pub fn drop_on(&self, target: Category) -> Option<DropMove> {
        self.drag_leave(target);
        let dragged = self.drag.borrow_mut().take();
        let card = dragged?;
        if card.category == target {
            debug!(task_id = card.id, %target, "dropped on own column");
            return None;
        }
        Some(DropMove {
            id: card.id,
            from: card.category,
            to: target,
        })
    }

    pub async fn move_task(&self, id: TaskId, category: Category) {
        match self.api.update_task(id, &TaskPatch::category(category)).await {
            Ok(_) => self.refresh().await,
            Err(err) => error!(%err, task_id = id, %category, "failed to move card"),
        }
    }

    /// Runs after every drag, dropped or not.
    pub fn drag_end(&self) {
        self.drag.borrow_mut().end();
        self.view.mark_dragging(None);
        let cleared = self.drop_candidates.borrow_mut().clear_all();
        for category in cleared {
            self.view.mark_drop_candidate(category, false);
        }
    }
}
