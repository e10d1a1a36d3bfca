//! Vibe Board Frontend App
//!
//! Quick list sidebar, three-column kanban board and notes panel.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands::HttpApi;
use crate::components::{KanbanColumn, NotesPanel, QuickList};
use crate::config::BoardConfig;
use crate::context::BoardContext;
use crate::controller::Board;
use crate::models::Category;
use crate::notes::{save_note, GlooTimers, NotesSync};
use crate::screen::{ScreenState, ScreenStateStoreFields, ScreenView};

#[component]
pub fn App() -> impl IntoView {
    let config = BoardConfig::from_document();
    tracing::info!(api_base = %config.api_base, "starting board");

    let screen = Store::new(ScreenState::default());
    let api = Rc::new(HttpApi::new(config.clone()));
    let board = Rc::new(Board::new(Rc::clone(&api), ScreenView::new(screen)));

    let save_api = Rc::clone(&api);
    let notes = Rc::new(NotesSync::new(GlooTimers, config.notes_debounce, move |content| {
        let api = Rc::clone(&save_api);
        spawn_local(async move {
            save_note(&*api, content).await;
        });
    }));

    provide_context(BoardContext::new(Rc::clone(&board), Rc::clone(&notes), screen));

    // Initial load: tasks first, then the note
    spawn_local(async move {
        board.refresh().await;
        if let Some(content) = notes.load(&*api).await {
            *screen.note().write() = content;
        }
        *screen.note_ready().write() = true;
    });

    view! {
        <div class="app-layout">
            <QuickList />

            <main class="board">
                {Category::BOARD
                    .into_iter()
                    .map(|category| view! { <KanbanColumn category=category /> })
                    .collect_view()}
            </main>

            <NotesPanel />
        </div>
    }
}
