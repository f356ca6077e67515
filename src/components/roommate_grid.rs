//! Roommate Grid Component
//!
//! One card per roommate with an initials avatar and a delete action.

use leptos::prelude::*;
use leptos::task::spawn_local;
use task_view::{actions, project_cards, RoommateCard};

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::store::{store_replace_roommates, DashboardStateStoreFields};

#[component]
pub fn RoommateGrid() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let cards = Memo::new(move |_| project_cards(&store.roommates().read()));

    view! {
        <div class="section-header">
            <h2>"Roommates"</h2>
            <button class="btn-primary" on:click=move |_| store.roommate_modal_open().set(true)>
                "+ Add Roommate"
            </button>
        </div>
        <div class="roommates-grid">
            <For
                each=move || cards.get()
                key=|card| (card.id, card.name.clone(), card.email.clone())
                children=move |card| view! { <RoommateCardView card=card /> }
            />
        </div>
    }
}

#[component]
fn RoommateCardView(card: RoommateCard) -> impl IntoView {
    let ctx = use_app_context();
    let id = card.id;

    let remove = move |_: ()| {
        spawn_local(async move {
            match actions::delete_roommate(&ctx.api(), id).await {
                Ok(roommates) => store_replace_roommates(&ctx.store, roommates),
                Err(e) => log::error!("Error removing roommate {}: {}", id, e),
            }
        });
    };

    view! {
        <div class="roommate-card">
            <div class="card-avatar" style=format!("background-color: {}", card.color)>
                {card.initials.clone()}
            </div>
            <div class="card-info">
                <h4>{card.name.clone()}</h4>
                <span class="role">"Roommate"</span>
                <div class="email">"✉️ " {card.email.clone()}</div>
            </div>
            <DeleteConfirmButton
                button_class="btn-delete-card"
                label="×"
                prompt="Remove this roommate?"
                on_confirm=remove
            />
        </div>
    }
}
