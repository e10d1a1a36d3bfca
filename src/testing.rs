//! Test Doubles
//!
//! In-memory API, recording render target and log capture shared by the
//! unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashSet};
use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::commands::{task_path, BoardApi, NOTE_PATH, TASKS_PATH};
use crate::error::{FetchError, FetchResult};
use crate::models::{Category, Note, Task, TaskId, TaskPatch};
use crate::render::{BoardView, CardView, Counts, QuickItem};

pub fn task(id: TaskId, content: &str, category: Category) -> Task {
    Task {
        id,
        content: content.to_string(),
        category,
        created_at: None,
    }
}

// ========================
// Fake API
// ========================

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    List,
    Create(String, Category),
    Update(TaskId, TaskPatch),
    Delete(TaskId),
    GetNote,
    UpdateNote(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    List,
    Create,
    Update,
    Delete,
    GetNote,
    UpdateNote,
}

/// Server stand-in: keeps tasks in insertion order, records every call,
/// and answers 500 for operations marked with `fail_on`.
#[derive(Default)]
pub struct FakeApi {
    tasks: RefCell<Vec<Task>>,
    note: RefCell<String>,
    next_id: Cell<TaskId>,
    calls: RefCell<Vec<Call>>,
    failing: RefCell<HashSet<Op>>,
}

impl FakeApi {
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            tasks: RefCell::new(tasks),
            next_id: Cell::new(next_id),
            ..Default::default()
        }
    }

    pub fn with_note(content: &str) -> Self {
        let api = Self::default();
        *api.note.borrow_mut() = content.to_string();
        api
    }

    pub fn fail_on(&self, op: Op) {
        self.failing.borrow_mut().insert(op);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn note(&self) -> String {
        self.note.borrow().clone()
    }

    fn record(&self, call: Call, op: Op, method: &'static str, path: String) -> FetchResult<()> {
        self.calls.borrow_mut().push(call);
        if self.failing.borrow().contains(&op) {
            return Err(FetchError::Status {
                method,
                url: path,
                status: 500,
            });
        }
        Ok(())
    }

    fn not_found(method: &'static str, id: TaskId) -> FetchError {
        FetchError::Status {
            method,
            url: task_path(id),
            status: 404,
        }
    }
}

#[async_trait(?Send)]
impl BoardApi for FakeApi {
    async fn list_tasks(&self) -> FetchResult<Vec<Task>> {
        self.record(Call::List, Op::List, "GET", TASKS_PATH.to_string())?;
        Ok(self.tasks.borrow().clone())
    }

    async fn create_task(&self, content: &str, category: Category) -> FetchResult<Task> {
        self.record(
            Call::Create(content.to_string(), category),
            Op::Create,
            "POST",
            TASKS_PATH.to_string(),
        )?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let created = task(id, content, category);
        self.tasks.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> FetchResult<Task> {
        self.record(Call::Update(id, patch.clone()), Op::Update, "PUT", task_path(id))?;
        let mut tasks = self.tasks.borrow_mut();
        let existing = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Self::not_found("PUT", id))?;
        if let Some(content) = &patch.content {
            existing.content = content.clone();
        }
        if let Some(category) = patch.category {
            existing.category = category;
        }
        Ok(existing.clone())
    }

    async fn delete_task(&self, id: TaskId) -> FetchResult<()> {
        self.record(Call::Delete(id), Op::Delete, "DELETE", task_path(id))?;
        self.tasks.borrow_mut().retain(|t| t.id != id);
        Ok(())
    }

    async fn get_note(&self) -> FetchResult<Note> {
        self.record(Call::GetNote, Op::GetNote, "GET", NOTE_PATH.to_string())?;
        Ok(Note {
            content: self.note.borrow().clone(),
        })
    }

    async fn update_note(&self, content: &str) -> FetchResult<Note> {
        self.record(
            Call::UpdateNote(content.to_string()),
            Op::UpdateNote,
            "PUT",
            NOTE_PATH.to_string(),
        )?;
        *self.note.borrow_mut() = content.to_string();
        Ok(Note {
            content: content.to_string(),
        })
    }
}

// ========================
// Recording View
// ========================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    QuickList,
    Column(Category),
    Counts,
    ClearQuickInput,
    CardForm(Category, bool),
    Dragging(Option<TaskId>),
    DropCandidate(Category, bool),
}

/// Keeps what was last painted into each region plus the call sequence.
#[derive(Default)]
pub struct RecordingView {
    events: RefCell<Vec<ViewEvent>>,
    quick: RefCell<Vec<QuickItem>>,
    columns: RefCell<BTreeMap<Category, Vec<CardView>>>,
    counts: Cell<Counts>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    /// Only the repaint events
    pub fn paint_events(&self) -> Vec<ViewEvent> {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, ViewEvent::QuickList | ViewEvent::Column(_) | ViewEvent::Counts))
            .cloned()
            .collect()
    }

    pub fn clear_events(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn quick_ids(&self) -> Vec<TaskId> {
        self.quick.borrow().iter().map(|item| item.id).collect()
    }

    pub fn quick_contents(&self) -> Vec<String> {
        self.quick.borrow().iter().map(|item| item.content.clone()).collect()
    }

    pub fn column_ids(&self, category: Category) -> Vec<TaskId> {
        self.columns
            .borrow()
            .get(&category)
            .map(|cards| cards.iter().map(|card| card.id).collect())
            .unwrap_or_default()
    }

    pub fn counts(&self) -> Counts {
        self.counts.get()
    }
}

impl BoardView for RecordingView {
    fn render_quick_list(&self, items: Vec<QuickItem>) {
        self.events.borrow_mut().push(ViewEvent::QuickList);
        *self.quick.borrow_mut() = items;
    }

    fn render_column(&self, category: Category, cards: Vec<CardView>) {
        self.events.borrow_mut().push(ViewEvent::Column(category));
        self.columns.borrow_mut().insert(category, cards);
    }

    fn update_counts(&self, counts: Counts) {
        self.events.borrow_mut().push(ViewEvent::Counts);
        self.counts.set(counts);
    }

    fn clear_quick_input(&self) {
        self.events.borrow_mut().push(ViewEvent::ClearQuickInput);
    }

    fn show_card_form(&self, category: Category, open: bool) {
        self.events.borrow_mut().push(ViewEvent::CardForm(category, open));
    }

    fn mark_dragging(&self, card: Option<TaskId>) {
        self.events.borrow_mut().push(ViewEvent::Dragging(card));
    }

    fn mark_drop_candidate(&self, category: Category, candidate: bool) {
        self.events.borrow_mut().push(ViewEvent::DropCandidate(category, candidate));
    }
}

// ========================
// Log Capture
// ========================

#[derive(Clone)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Routes this thread's tracing output into a buffer until dropped.
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
    _guard: tracing::subscriber::DefaultGuard,
}

impl LogCapture {
    pub fn install() -> Self {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let writer = SharedBuffer(Arc::clone(&buffer));
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        Self { buffer, _guard: guard }
    }

    pub fn contents(&self) -> String {
        let bytes = self.buffer.lock().expect("log buffer poisoned").clone();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}
