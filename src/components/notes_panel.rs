//! Notes Panel Component
//!
//! Free-text notes saved after the user stops typing.

use leptos::prelude::*;

use crate::context::use_board;
use crate::screen::ScreenStateStoreFields;

#[component]
pub fn NotesPanel() -> impl IntoView {
    let ctx = use_board();
    let screen = ctx.screen;

    view! {
        <aside class="notes-panel">
            <h2>"notes"</h2>
            <textarea
                id="notesArea"
                placeholder="jot something down..."
                prop:disabled=move || !screen.note_ready().get()
                prop:value=move || screen.note().get()
                on:input=move |ev| {
                    ctx.notes().edit(event_target_value(&ev));
                }
            ></textarea>
        </aside>
    }
}
