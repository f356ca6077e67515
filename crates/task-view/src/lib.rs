//! Task View
//!
//! DOM-free core of the chore board: data model, filter and sort of the
//! task list, projection to view rows, dashboard stats, roommate cards,
//! the room map, and the backend contract with its refetching actions.

pub mod models;
pub mod wire;
pub mod filter;
pub mod sort;
pub mod rows;
pub mod stats;
pub mod roster;
pub mod map;
pub mod forms;
pub mod api;
pub mod actions;

pub use models::{Priority, Room, RoomColor, Roommate, Task, TaskStatus};
pub use filter::{PriorityFilter, RoommateFilter, StatusFilter, TaskFilters};
pub use sort::{DueDateSort, PrioritySort, TaskSort};
pub use rows::{project_rows, TaskRow, UNASSIGNED, UNKNOWN_ROOM};
pub use stats::{compute_stats, TaskStats};
pub use roster::{avatar_color, initials, project_cards, RoommateCard, AVATAR_COLORS};
pub use map::{pending_in_room, project_widgets, room_details, MiniTaskCard, RoomWidget};
pub use forms::{NewRoommate, NewTask, RoommateForm, StatusUpdate, TaskForm};
pub use api::{ApiError, ApiResult, ChoreApi};
