//! House Map Component
//!
//! Room widgets positioned at their layout coordinates. Clicking a widget
//! selects its room; clicking empty map space clears the selection.

use leptos::prelude::*;
use task_view::{project_widgets, RoomWidget};

use crate::components::RoomSidebar;
use crate::store::{use_app_store, DashboardStateStoreFields};

#[component]
pub fn HouseMap() -> impl IntoView {
    let store = use_app_store();

    let widgets = Memo::new(move |_| {
        project_widgets(&store.rooms().read(), &store.tasks().read(), store.selected_room().get())
    });

    view! {
        <div class="map-layout">
            <div class="house-map" on:click=move |_| store.selected_room().set(None)>
                <For
                    each=move || widgets.get()
                    key=|w| (w.id, w.pending_count, w.active, w.name.clone())
                    children=move |widget| view! { <RoomWidgetView widget=widget /> }
                />
            </div>
            <RoomSidebar />
        </div>
    }
}

#[component]
fn RoomWidgetView(widget: RoomWidget) -> impl IntoView {
    let store = use_app_store();
    let id = widget.id;
    let widget_class = if widget.active { "room-widget active" } else { "room-widget" };
    let pill_class = if widget.is_busy() { "task-pill urgent" } else { "task-pill" };

    view! {
        <div
            class=widget_class
            style=widget.style()
            on:click=move |ev: web_sys::MouseEvent| {
                ev.stop_propagation();
                store.selected_room().set(Some(id));
            }
        >
            <div class=widget.dot_class()></div>
            <div class="widget-header">
                <span class="widget-title">{widget.name.clone()}</span>
                <div class=format!("widget-icon {}", widget.theme_class)>{widget.icon.clone()}</div>
            </div>
            <div class="widget-body">
                <span class=pill_class>{widget.pill_label()}</span>
            </div>
        </div>
    }
}
