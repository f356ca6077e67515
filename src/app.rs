//! Chore Board App
//!
//! Navigation bar over four sections: dashboard, tasks, roommates, map.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterBar, HouseMap, NavBar, NewTaskForm, RoommateGrid, RoommateModal, StatsCards, TaskTable};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{DashboardState, DashboardStateStoreFields, Section};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(DashboardState::default());
    let ctx = AppContext::new(store, &config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Initial fetch of all three collections
    Effect::new(move |_| ctx.load_all());

    let is_section = move |section: Section| store.section().get() == section;

    view! {
        <NavBar />
        <main class="main-content">
            <Show when=move || is_section(Section::Dashboard)>
                <section class="active-section">
                    <h1>"Dashboard"</h1>
                    <StatsCards />
                    <NewTaskForm />
                </section>
            </Show>
            <Show when=move || is_section(Section::Tasks)>
                <section class="active-section">
                    <h1>"Tasks"</h1>
                    <FilterBar />
                    <TaskTable />
                </section>
            </Show>
            <Show when=move || is_section(Section::Roommates)>
                <section class="active-section">
                    <RoommateGrid />
                </section>
            </Show>
            <Show when=move || is_section(Section::Map)>
                <section class="active-section">
                    <h1>"House Map"</h1>
                    <HouseMap />
                </section>
            </Show>
        </main>
        <RoommateModal />
    }
}
