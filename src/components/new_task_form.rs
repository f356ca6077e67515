//! New Task Form Component
//!
//! Form for creating a task with assignee, room, priority and due date.

use leptos::prelude::*;
use leptos::task::spawn_local;
use task_view::{actions, Priority, TaskForm};

use crate::context::use_app_context;
use crate::notify;
use crate::store::{store_replace_tasks, DashboardStateStoreFields};

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (form, set_form) = signal(TaskForm {
        priority: Priority::Low.as_str().to_string(),
        ..Default::default()
    });

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = form.get().to_payload();
        if payload.title.is_empty() { return; }

        spawn_local(async move {
            match actions::create_task(&ctx.api(), &payload).await {
                Ok(tasks) => {
                    store_replace_tasks(&store, tasks);
                    set_form.set(TaskForm {
                        priority: Priority::Low.as_str().to_string(),
                        ..Default::default()
                    });
                    notify::alert("Task created!");
                }
                Err(e) => log::error!("Error creating task: {}", e),
            }
        });
    };

    view! {
        <form class="add-task-form" on:submit=create_task>
            <h3>"New Task"</h3>
            <input
                type="text"
                required
                placeholder="Task title"
                prop:value=move || form.read().title.clone()
                on:input=move |ev| set_form.update(|f| f.title = event_target_value(&ev))
            />
            <textarea
                placeholder="Description"
                prop:value=move || form.read().description.clone()
                on:input=move |ev| set_form.update(|f| f.description = event_target_value(&ev))
            />

            <div class="form-row">
                <select
                    prop:value=move || form.read().roommate.clone()
                    on:change=move |ev| set_form.update(|f| f.roommate = event_target_value(&ev))
                >
                    <option value="">"Select a roommate"</option>
                    <For
                        each=move || store.roommates().get()
                        key=|r| (r.id, r.name.clone())
                        children=move |r| view! {
                            <option value=r.id.to_string()>{r.name}</option>
                        }
                    />
                </select>

                <select
                    prop:value=move || form.read().room.clone()
                    on:change=move |ev| set_form.update(|f| f.room = event_target_value(&ev))
                >
                    <option value="">"Select a room"</option>
                    <For
                        each=move || store.rooms().get()
                        key=|r| (r.id, r.name.clone())
                        children=move |r| view! {
                            <option value=r.id.to_string()>{r.name}</option>
                        }
                    />
                </select>
            </div>

            <div class="form-row">
                <select
                    prop:value=move || form.read().priority.clone()
                    on:change=move |ev| set_form.update(|f| f.priority = event_target_value(&ev))
                >
                    {Priority::ALL.into_iter().map(|p| view! {
                        <option value=p.as_str()>{p.as_str()}</option>
                    }).collect_view()}
                </select>

                <input
                    type="date"
                    required
                    prop:value=move || form.read().due_date.clone()
                    on:input=move |ev| set_form.update(|f| f.due_date = event_target_value(&ev))
                />
            </div>

            <button type="submit" class="btn-primary">"Add Task"</button>
        </form>
    }
}
