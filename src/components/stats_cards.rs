//! Stats Cards Component
//!
//! Upcoming / overdue / completed counts over the full task snapshot.

use chrono::Utc;
use leptos::prelude::*;
use task_view::compute_stats;

use crate::store::{use_app_store, DashboardStateStoreFields};

#[component]
pub fn StatsCards() -> impl IntoView {
    let store = use_app_store();

    // Not the filtered view: stats always cover every task
    let stats = Memo::new(move |_| compute_stats(&store.tasks().read(), Utc::now()));

    view! {
        <div class="stats-row">
            <div class="stat-card upcoming">
                <span class="stat-label">"Upcoming"</span>
                <span class="stat-value">{move || stats.get().upcoming}</span>
            </div>
            <div class="stat-card overdue">
                <span class="stat-label">"Overdue"</span>
                <span class="stat-value">{move || stats.get().overdue}</span>
            </div>
            <div class="stat-card completed">
                <span class="stat-label">"Completed"</span>
                <span class="stat-value">{move || stats.get().completed}</span>
            </div>
        </div>
    }
}
