//! UI Components
//!
//! Leptos components for the sidebar, the board columns and the notes panel.

mod quick_list;
mod kanban_column;
mod kanban_card;
mod card_form;
mod notes_panel;

pub use quick_list::QuickList;
pub use kanban_column::KanbanColumn;
pub use kanban_card::KanbanCard;
pub use card_form::CardForm;
pub use notes_panel::NotesPanel;
