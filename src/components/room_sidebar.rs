//! Room Sidebar Component
//!
//! Open tasks of the room selected on the map.

use leptos::prelude::*;
use task_view::room_details;

use crate::store::{use_app_store, DashboardStateStoreFields};

#[component]
pub fn RoomSidebar() -> impl IntoView {
    let store = use_app_store();

    let selected = Memo::new(move |_| {
        let id = store.selected_room().get()?;
        store.rooms().read().iter().find(|r| r.id == id).map(|r| (r.id, r.name.clone()))
    });

    let cards = Memo::new(move |_| match selected.get() {
        Some((id, _)) => room_details(id, &store.tasks().read(), &store.roommates().read()),
        None => Vec::new(),
    });

    view! {
        <aside class="map-sidebar">
            <Show
                when=move || selected.get().is_some()
                fallback=|| view! {
                    <div class="sidebar-placeholder">
                        <p>"Select a room on the map to see its tasks."</p>
                    </div>
                }
            >
                <div class="sidebar-details">
                    <div class="sidebar-header">
                        <h3>{move || selected.get().map(|(_, name)| name).unwrap_or_default()}</h3>
                        <button class="btn-close" on:click=move |_| store.selected_room().set(None)>"×"</button>
                    </div>
                    <Show
                        when=move || !cards.read().is_empty()
                        fallback=|| view! {
                            <p class="sidebar-empty">"No pending tasks here. Great job!"</p>
                        }
                    >
                        <For
                            each=move || cards.get()
                            key=|card| (card.id, card.title.clone(), card.assignee.clone(), card.due_label.clone())
                            children=move |card| view! {
                                <div class=card.class()>
                                    <h4>{card.title.clone()}</h4>
                                    <div class="mini-task-info">
                                        <span>"👤 " {card.assignee.clone()}</span>
                                        <span>"📅 " {card.due_label.clone()}</span>
                                    </div>
                                </div>
                            }
                        />
                    </Show>
                </div>
            </Show>
        </aside>
    }
}
