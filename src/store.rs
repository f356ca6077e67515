//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The three
//! collections are full snapshots of the last successful fetch and are only
//! ever replaced wholesale; filters and sort derive views from them.

use leptos::prelude::*;
use reactive_stores::Store;
use task_view::{Room, Roommate, Task, TaskFilters, TaskSort};

/// Top-level page sections
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Dashboard,
    Tasks,
    Roommates,
    Map,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Dashboard, Section::Tasks, Section::Roommates, Section::Map];

    pub fn label(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Tasks => "Tasks",
            Section::Roommates => "Roommates",
            Section::Map => "House Map",
        }
    }
}

#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    pub tasks: Vec<Task>,
    pub roommates: Vec<Roommate>,
    pub rooms: Vec<Room>,
    pub filters: TaskFilters,
    pub sort: TaskSort,
    /// Room highlighted on the map
    pub selected_room: Option<u32>,
    pub section: Section,
    /// Add-roommate modal visibility
    pub roommate_modal_open: bool,
}

/// Type alias for the store
pub type AppStore = Store<DashboardState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_replace_tasks(store: &AppStore, tasks: Vec<Task>) {
    *store.tasks().write() = tasks;
}

pub fn store_replace_roommates(store: &AppStore, roommates: Vec<Roommate>) {
    *store.roommates().write() = roommates;
}

/// Replace rooms, dropping a selection that no longer exists
pub fn store_replace_rooms(store: &AppStore, rooms: Vec<Room>) {
    let selected = store.selected_room().get_untracked();
    if let Some(id) = selected {
        if !rooms.iter().any(|r| r.id == id) {
            store.selected_room().set(None);
        }
    }
    *store.rooms().write() = rooms;
}
