//! Notes Synchronizer
//!
//! Debounced persistence of the free-text notes field. Each edit restarts
//! the timer; only the value present when it finally fires is saved.
//! The field is the source of truth for the session: it is never reverted
//! or re-fetched after a save. Edits are ignored until the initial load has
//! resolved.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use tracing::{debug, error};

use crate::commands::BoardApi;

/// One-shot timer source. Dropping a handle cancels its callback.
pub trait Timers {
    type Handle;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers (`setTimeout` / `clearTimeout`)
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTimers;

impl Timers for GlooTimers {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, callback)
    }
}

pub struct NotesSync<T: Timers> {
    timers: T,
    delay: Duration,
    content: Rc<RefCell<String>>,
    loaded: Cell<bool>,
    pending: RefCell<Option<T::Handle>>,
    save: Rc<dyn Fn(String)>,
}

impl<T: Timers> NotesSync<T> {
    /// `save` receives the field value each time the debounce timer fires.
    pub fn new(timers: T, delay: Duration, save: impl Fn(String) + 'static) -> Self {
        Self {
            timers,
            delay,
            content: Rc::new(RefCell::new(String::new())),
            loaded: Cell::new(false),
            pending: RefCell::new(None),
            save: Rc::new(save),
        }
    }

    pub fn content(&self) -> String {
        self.content.borrow().clone()
    }

    /// Record an edit and restart the debounce timer. Returns false, and
    /// schedules nothing, while the initial load is still outstanding.
    pub fn edit(&self, value: String) -> bool {
        if !self.loaded.get() {
            debug!("note edit before load ignored");
            return false;
        }
        *self.content.borrow_mut() = value;

        let content = Rc::clone(&self.content);
        let save = Rc::clone(&self.save);
        let handle = self.timers.schedule(
            self.delay,
            Box::new(move || {
                let value = content.borrow().clone();
                save(value);
            }),
        );
        // the replaced handle is dropped here, cancelling its timer
        self.pending.replace(Some(handle));
        true
    }

    /// Initial fetch of the note. Does not schedule a save. Edits are
    /// accepted afterwards whatever the outcome; a failed load leaves the
    /// field empty.
    pub async fn load<A: BoardApi + ?Sized>(&self, api: &A) -> Option<String> {
        let result = api.get_note().await;
        self.loaded.set(true);
        match result {
            Ok(note) => {
                *self.content.borrow_mut() = note.content.clone();
                Some(note.content)
            }
            Err(err) => {
                error!(%err, "failed to load note");
                None
            }
        }
    }
}

/// Persist the note; failures are only logged.
pub async fn save_note<A: BoardApi + ?Sized>(api: &A, content: String) {
    match api.update_note(&content).await {
        Ok(_) => debug!(len = content.len(), "note saved"),
        Err(err) => error!(%err, "failed to save note"),
    }
}
