//! Card Form Component
//!
//! Inline "new card" form at the top of a column.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_board;
use crate::controller::FormKey;
use crate::models::Category;

#[component]
pub fn CardForm(category: Category) -> impl IntoView {
    let ctx = use_board();
    let (text, set_text) = signal(String::new());
    let input_ref = NodeRef::<html::Textarea>::new();

    Effect::new(move |_| {
        if let Some(textarea) = input_ref.get() {
            let _ = textarea.focus();
        }
    });

    let submit = move || {
        let board = ctx.board();
        let content = text.get_untracked();
        spawn_local(async move {
            board.submit_card_form(category, &content).await;
        });
    };

    let cancel = move || ctx.board().cancel_card_form(category);

    view! {
        <div class="card-input-wrapper">
            <textarea
                node_ref=input_ref
                placeholder="enter card details..."
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    match FormKey::from_key(&ev.key(), ev.shift_key()) {
                        Some(FormKey::Submit) => {
                            ev.prevent_default();
                            submit();
                        }
                        Some(FormKey::Cancel) => cancel(),
                        None => {}
                    }
                }
            ></textarea>
            <div class="card-input-buttons">
                <button class="save" on:click=move |_| submit()>"add"</button>
                <button class="cancel" on:click=move |_| cancel()>"cancel"</button>
            </div>
        </div>
    }
}
