//! Application Context
//!
//! The board session, notes synchronizer and screen store, provided to
//! every component via the Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;

use crate::commands::HttpApi;
use crate::controller::Board;
use crate::notes::{GlooTimers, NotesSync};
use crate::screen::{ScreenStore, ScreenView};

/// The page session as wired in the browser
pub type Session = Board<HttpApi, ScreenView>;

pub type Notes = NotesSync<GlooTimers>;

#[derive(Clone, Copy)]
pub struct BoardContext {
    board: StoredValue<Rc<Session>, LocalStorage>,
    notes: StoredValue<Rc<Notes>, LocalStorage>,
    /// Screen store - read by components
    pub screen: ScreenStore,
}

impl BoardContext {
    pub fn new(board: Rc<Session>, notes: Rc<Notes>, screen: ScreenStore) -> Self {
        Self {
            board: StoredValue::new_local(board),
            notes: StoredValue::new_local(notes),
            screen,
        }
    }

    pub fn board(&self) -> Rc<Session> {
        self.board.get_value()
    }

    pub fn notes(&self) -> Rc<Notes> {
        self.notes.get_value()
    }
}

/// Get the board context
pub fn use_board() -> BoardContext {
    expect_context::<BoardContext>()
}
