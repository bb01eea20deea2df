//! Task Panel Component
//!
//! Add form plus the checklist; clicking a row toggles it.

use leptos::prelude::*;

use crate::store::{store_add_task, store_toggle_task, use_app_store, AppStateStoreFields};

/// Task checklist panel
#[component]
pub fn TaskPanel() -> impl IntoView {
    let store = use_app_store();
    let (new_text, set_new_text) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match store_add_task(&store, &new_text.get()) {
            Ok(()) => set_new_text.set(String::new()),
            Err(err) => log::debug!("[TASKS] {}", err),
        }
    };

    view! {
        <section class="panel task-panel">
            <h2>"Tasks"</h2>
            <form class="task-add-form" on:submit=add_task>
                <input
                    type="text"
                    placeholder="Add a new task"
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </form>

            <ul class="task-list">
                {move || store.tasks().read().tasks().iter().enumerate().map(|(index, task)| {
                    let completed = task.completed;
                    view! {
                        <li
                            class=move || if completed { "task-row completed" } else { "task-row" }
                            on:click=move |_| store_toggle_task(&store, index)
                        >
                            <span class="task-check">{if completed { "●" } else { "○" }}</span>
                            <span class="task-text">{task.text.clone()}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>

            <p class="task-count">
                {move || {
                    let tasks = store.tasks().read();
                    if tasks.is_empty() {
                        "No tasks yet".to_string()
                    } else {
                        format!("{} of {} done", tasks.completed_count(), tasks.len())
                    }
                }}
            </p>
        </section>
    }
}
