//! Kanban Column Component
//!
//! One board column: header with count badge and add button, the inline
//! card form, and the card list. The card container is the drop target.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::DragEvent;

use board_dragdrop::accept_move;

use crate::components::{CardForm, KanbanCard};
use crate::context::use_board;
use crate::models::Category;
use crate::screen::ScreenStateStoreFields;

#[component]
pub fn KanbanColumn(category: Category) -> impl IntoView {
    let ctx = use_board();
    let screen = ctx.screen;

    let cards = move || screen.columns().get().get(&category).cloned().unwrap_or_default();
    let count = move || screen.counts().get().get(category);
    let form_open = move || screen.open_forms().get().contains(&category);
    let container_class = move || {
        if screen.drop_candidates().get().contains(&category) {
            "cards-container drag-over"
        } else {
            "cards-container"
        }
    };

    let on_dragover = move |ev: DragEvent| {
        accept_move(&ev);
        ctx.board().drag_over(category);
    };

    let on_dragleave = move |_: DragEvent| {
        ctx.board().drag_leave(category);
    };

    // Resolve the drop before dragend clears the session; only the
    // server round trip is deferred.
    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let board = ctx.board();
        if let Some(planned) = board.drop_on(category) {
            tracing::debug!(task_id = planned.id, from = %planned.from, to = %planned.to, "moving card");
            spawn_local(async move {
                board.move_task(planned.id, planned.to).await;
            });
        }
    };

    view! {
        <section class="column" data-status=category.as_str()>
            <header class="column-header">
                <h2>{category.title()}</h2>
                <span class="count">{count}</span>
                <button
                    class="add-card-btn"
                    data-column=category.as_str()
                    on:click=move |_| {
                        ctx.board().open_card_form(category);
                    }
                >
                    "+"
                </button>
            </header>
            <div
                class=container_class
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                <Show when=form_open>
                    <CardForm category=category />
                </Show>
                <For
                    each=cards
                    key=|card| (card.id, card.content.clone())
                    children=move |card| view! { <KanbanCard card=card /> }
                />
            </div>
        </section>
    }
}
