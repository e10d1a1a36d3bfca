//! Quick List Component
//!
//! Sidebar todo list with add input.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_board;
use crate::screen::ScreenStateStoreFields;

/// Sidebar quick-task list
#[component]
pub fn QuickList() -> impl IntoView {
    let ctx = use_board();
    let screen = ctx.screen;

    let add_task = move || {
        let board = ctx.board();
        let text = screen.quick_input().get_untracked();
        spawn_local(async move {
            board.add_quick_task(&text).await;
        });
    };

    view! {
        <aside class="sidebar">
            <h2>"quick list"</h2>
            <div class="todo-input-row">
                <input
                    id="todoInput"
                    type="text"
                    placeholder="add a task..."
                    prop:value=move || screen.quick_input().get()
                    on:input=move |ev| *screen.quick_input().write() = event_target_value(&ev)
                    on:keypress=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            add_task();
                        }
                    }
                />
                <button id="addTodoBtn" on:click=move |_| add_task()>"+"</button>
            </div>
            <ul id="todoList" class="todo-list">
                <For
                    each=move || screen.quick_list().get()
                    key=|item| (item.id, item.content.clone())
                    children=move |item| {
                        let id = item.id;
                        view! {
                            <li class="todo-item">
                                <span>{item.content}</span>
                                <button on:click=move |_| {
                                    let board = ctx.board();
                                    spawn_local(async move {
                                        board.delete_task(id).await;
                                    });
                                }>"×"</button>
                            </li>
                        }
                    }
                />
            </ul>
        </aside>
    }
}
