//! UI Components
//!
//! Leptos components for the dashboard sections.

mod nav_bar;
mod stats_cards;
mod new_task_form;
mod filter_bar;
mod task_table;
mod roommate_grid;
mod roommate_modal;
mod house_map;
mod room_sidebar;
mod delete_confirm_button;

pub use nav_bar::NavBar;
pub use stats_cards::StatsCards;
pub use new_task_form::NewTaskForm;
pub use filter_bar::FilterBar;
pub use task_table::TaskTable;
pub use roommate_grid::RoommateGrid;
pub use roommate_modal::RoommateModal;
pub use house_map::HouseMap;
pub use room_sidebar::RoomSidebar;
pub use delete_confirm_button::DeleteConfirmButton;
