//! Application Context
//!
//! Shared handle passed through Leptos context: the store plus the backend
//! client, with the fetch-and-replace helpers every component uses.

use leptos::prelude::*;
use leptos::task::spawn_local;
use task_view::ChoreApi;

use crate::commands::HttpApi;
use crate::config::AppConfig;
use crate::store::{store_replace_roommates, store_replace_rooms, store_replace_tasks, AppStore};

#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    api_url: &'static str,
}

impl AppContext {
    pub fn new(store: AppStore, config: &AppConfig) -> Self {
        Self {
            store,
            api_url: config.api_url,
        }
    }

    pub fn api(&self) -> HttpApi {
        HttpApi::new(self.api_url)
    }

    /// Initial load of rooms, roommates and tasks
    pub fn load_all(&self) {
        self.reload_rooms();
        self.reload_roommates();
        self.reload_tasks();
    }

    /// Refetch tasks; on failure the previous snapshot stays
    pub fn reload_tasks(&self) {
        let ctx = *self;
        spawn_local(async move {
            match ctx.api().list_tasks().await {
                Ok(tasks) => {
                    log::info!("loaded {} tasks", tasks.len());
                    store_replace_tasks(&ctx.store, tasks);
                }
                Err(e) => log::error!("Error fetching tasks: {}", e),
            }
        });
    }

    pub fn reload_roommates(&self) {
        let ctx = *self;
        spawn_local(async move {
            match ctx.api().list_roommates().await {
                Ok(roommates) => {
                    log::info!("loaded {} roommates", roommates.len());
                    store_replace_roommates(&ctx.store, roommates);
                }
                Err(e) => log::error!("Error fetching roommates: {}", e),
            }
        });
    }

    pub fn reload_rooms(&self) {
        let ctx = *self;
        spawn_local(async move {
            match ctx.api().list_rooms().await {
                Ok(rooms) => {
                    log::info!("loaded {} rooms", rooms.len());
                    store_replace_rooms(&ctx.store, rooms);
                }
                Err(e) => log::error!("Error fetching rooms: {}", e),
            }
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
