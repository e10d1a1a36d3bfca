//! Kanban Card Component
//!
//! Draggable card. Double-click edits its text in place.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::DragEvent;

use board_dragdrop::{begin_move, current_target_data};

use crate::context::use_board;
use crate::controller::{CardEdit, DraggedCard, FormKey};
use crate::render::CardView;
use crate::screen::ScreenStateStoreFields;

#[component]
pub fn KanbanCard(card: CardView) -> impl IntoView {
    let ctx = use_board();
    let screen = ctx.screen;

    let id = card.id;
    let content = card.content.clone();
    let edit = RwSignal::new(CardEdit::default());
    // only flips on open/close, not on every keystroke
    let editing = Memo::new(move |_| edit.with(CardEdit::is_open));

    let card_class = move || {
        if screen.dragging().get() == Some(id) {
            "card dragging"
        } else {
            "card"
        }
    };

    // Payload comes from the element's data attributes, like any other drag source
    let on_dragstart = move |ev: DragEvent| {
        let data_id = current_target_data(&ev, "id");
        let data_category = current_target_data(&ev, "category");
        match DraggedCard::from_attributes(data_id.as_deref(), data_category.as_deref()) {
            Ok(dragged) => {
                begin_move(&ev, &dragged.id.to_string());
                ctx.board().drag_start(dragged);
            }
            Err(err) => tracing::warn!(%err, "ignoring drag of malformed card"),
        }
    };

    let save_edit = move || {
        let Some(text) = edit.try_update(CardEdit::commit).flatten() else {
            return;
        };
        let board = ctx.board();
        spawn_local(async move {
            board.rename_task(id, &text).await;
        });
    };

    view! {
        <div
            class=card_class
            draggable="true"
            data-id=id.to_string()
            data-category=card.category.as_str()
            title=card.created_at.clone().unwrap_or_default()
            on:dragstart=on_dragstart
            on:dragend=move |_| ctx.board().drag_end()
        >
            {move || if editing.get() {
                view! {
                    <textarea
                        class="card-edit"
                        prop:value=move || edit.with(|e| e.draft().to_string())
                        on:input=move |ev| edit.update(|e| e.set_draft(event_target_value(&ev)))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            match FormKey::from_key(&ev.key(), ev.shift_key()) {
                                Some(FormKey::Submit) => {
                                    ev.prevent_default();
                                    save_edit();
                                }
                                Some(FormKey::Cancel) => edit.update(CardEdit::cancel),
                                None => {}
                            }
                        }
                        on:blur=move |_| edit.update(CardEdit::cancel)
                    ></textarea>
                }.into_any()
            } else {
                let content = content.clone();
                let current = content.clone();
                view! {
                    <div class="card-content" on:dblclick=move |_| edit.update(|e| e.open(&current))>
                        {content}
                    </div>
                }.into_any()
            }}
            <button
                class="card-delete"
                on:click=move |ev| {
                    ev.stop_propagation();
                    let board = ctx.board();
                    spawn_local(async move {
                        board.delete_task(id).await;
                    });
                }
            >
                "×"
            </button>
        </div>
    }
}
