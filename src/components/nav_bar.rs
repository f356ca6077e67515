//! Navigation Bar Component
//!
//! Switches the active page section; exactly one section is shown.

use leptos::prelude::*;

use crate::store::{use_app_store, DashboardStateStoreFields, Section};

#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <nav class="nav-bar">
            <span class="nav-brand">"Chore Board"</span>
            {Section::ALL.into_iter().map(|section| {
                let is_active = move || store.section().get() == section;
                view! {
                    <a
                        href="#"
                        class=move || if is_active() { "nav-link active" } else { "nav-link" }
                        on:click=move |ev| {
                            ev.prevent_default();
                            store.section().set(section);
                        }
                    >
                        {section.label()}
                    </a>
                }
            }).collect_view()}
        </nav>
    }
}
