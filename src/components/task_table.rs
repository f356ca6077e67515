//! Task Table Component
//!
//! Renders the filtered, sorted projection of the task snapshot. Row actions
//! mutate on the backend and then replace the snapshot with a fresh fetch.

use leptos::prelude::*;
use leptos::task::spawn_local;
use task_view::{actions, project_rows, TaskRow};

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::store::{store_replace_tasks, DashboardStateStoreFields};

#[component]
pub fn TaskTable() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let rows = Memo::new(move |_| {
        project_rows(
            &store.tasks().read(),
            &store.roommates().read(),
            &store.rooms().read(),
            &store.filters().read(),
            &store.sort().get(),
        )
    });

    view! {
        <table class="task-table">
            <thead>
                <tr>
                    <th>"Status"</th>
                    <th>"Title"</th>
                    <th>"Room"</th>
                    <th>"Assignee"</th>
                    <th>"Priority"</th>
                    <th>"Due"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                // Key on everything displayed so a refetch re-renders changed rows
                <For
                    each=move || rows.get()
                    key=|row| (
                        row.id,
                        row.status,
                        row.title.clone(),
                        row.room_name.clone(),
                        row.roommate_name.clone(),
                        row.priority,
                        row.due_label.clone(),
                    )
                    children=move |row| view! { <TaskRowView row=row /> }
                />
            </tbody>
        </table>
        <Show when=move || rows.read().is_empty()>
            <p class="empty-state">"No tasks match the current filters."</p>
        </Show>
    }
}

#[component]
fn TaskRowView(row: TaskRow) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let id = row.id;

    let mark_done = move |_: web_sys::MouseEvent| {
        spawn_local(async move {
            match actions::mark_done(&ctx.api(), id).await {
                Ok(tasks) => store_replace_tasks(&store, tasks),
                Err(e) => log::error!("Error marking task {} done: {}", id, e),
            }
        });
    };

    let delete = move |_: ()| {
        spawn_local(async move {
            match actions::delete_task(&ctx.api(), id).await {
                Ok(tasks) => store_replace_tasks(&store, tasks),
                Err(e) => log::error!("Error deleting task {}: {}", id, e),
            }
        });
    };

    view! {
        <tr>
            <td><span class=row.status_class()>{row.status.as_str()}</span></td>
            <td title=row.description.clone().unwrap_or_default()>{row.title.clone()}</td>
            <td>{row.room_name.clone()}</td>
            <td>{row.roommate_name.clone()}</td>
            <td class=format!("priority-{}", row.priority)>{row.priority.as_str()}</td>
            <td>{row.due_label.clone()}</td>
            <td class="row-actions">
                {row.can_mark_done.then(|| view! {
                    <button class="btn-action btn-done" on:click=mark_done>"Done"</button>
                })}
                <DeleteConfirmButton
                    button_class="btn-action btn-delete"
                    label="Delete"
                    prompt="Delete this task?"
                    on_confirm=delete
                />
            </td>
        </tr>
    }
}
