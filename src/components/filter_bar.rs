//! Filter Bar Component
//!
//! Status buttons, priority/roommate selects, title search and the two sort
//! selects. Every change re-derives the table from the in-memory snapshot;
//! nothing here touches the network.

use leptos::prelude::*;
use task_view::{DueDateSort, Priority, PriorityFilter, PrioritySort, RoommateFilter, StatusFilter};

use crate::store::{use_app_store, DashboardStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="filter-bar">
            <div class="status-buttons">
                {StatusFilter::ALL.into_iter().map(|status| {
                    let is_active = move || store.filters().read().status == status;
                    view! {
                        <button
                            type="button"
                            class=move || if is_active() { "status-btn active" } else { "status-btn" }
                            on:click=move |_| store.filters().write().status = status
                        >
                            {status.label()}
                        </button>
                    }
                }).collect_view()}
            </div>

            <select
                class="filter-select"
                prop:value=move || store.filters().read().priority.value()
                on:change=move |ev| {
                    store.filters().write().priority = PriorityFilter::from_value(&event_target_value(&ev));
                }
            >
                <option value="all">"All priorities"</option>
                {Priority::ALL.into_iter().map(|p| view! {
                    <option value=p.as_str()>{p.as_str()}</option>
                }).collect_view()}
            </select>

            <select
                class="filter-select"
                prop:value=move || store.filters().read().roommate.value()
                on:change=move |ev| {
                    store.filters().write().roommate = RoommateFilter::from_value(&event_target_value(&ev));
                }
            >
                <option value="all">"All roommates"</option>
                <For
                    each=move || store.roommates().get()
                    key=|r| (r.id, r.name.clone())
                    children=move |r| view! {
                        <option value=r.id.to_string()>{r.name}</option>
                    }
                />
            </select>

            <input
                type="search"
                class="search-bar"
                placeholder="Search tasks..."
                prop:value=move || store.filters().read().search.clone()
                on:input=move |ev| store.filters().write().search = event_target_value(&ev)
            />

            <select
                class="sort-select"
                prop:value=move || store.sort().get().priority.value()
                on:change=move |ev| {
                    store.sort().write().priority = PrioritySort::from_value(&event_target_value(&ev));
                }
            >
                {PrioritySort::ALL.into_iter().map(|s| view! {
                    <option value=s.value()>{s.label()}</option>
                }).collect_view()}
            </select>

            <select
                class="sort-select"
                prop:value=move || store.sort().get().due_date.value()
                on:change=move |ev| {
                    store.sort().write().due_date = DueDateSort::from_value(&event_target_value(&ev));
                }
            >
                {DueDateSort::ALL.into_iter().map(|s| view! {
                    <option value=s.value()>{s.label()}</option>
                }).collect_view()}
            </select>
        </div>
    }
}
