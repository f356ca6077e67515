//! Task Rows
//!
//! Projects (data, filters, sort) to the rows of the task table. Pure, so
//! the table binding only has to render what it is handed.

use std::collections::HashMap;

use crate::filter::TaskFilters;
use crate::models::{Priority, Room, Roommate, Task, TaskStatus};
use crate::sort::TaskSort;

pub const UNASSIGNED: &str = "Unassigned";
pub const UNKNOWN_ROOM: &str = "Unknown";

/// One rendered task row
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub id: u32,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub room_name: String,
    pub roommate_name: String,
    pub priority: Priority,
    pub due_label: String,
    /// Delete is always offered; mark-done only while not done
    pub can_mark_done: bool,
}

impl TaskRow {
    pub fn status_class(&self) -> String {
        format!("status-badge {}", self.status.as_str())
    }
}

/// Filter, sort, then resolve display names
pub fn project_rows(
    tasks: &[Task],
    roommates: &[Roommate],
    rooms: &[Room],
    filters: &TaskFilters,
    sort: &TaskSort,
) -> Vec<TaskRow> {
    let roommate_names: HashMap<u32, &str> = roommates.iter().map(|r| (r.id, r.name.as_str())).collect();
    let room_names: HashMap<u32, &str> = rooms.iter().map(|r| (r.id, r.name.as_str())).collect();

    let mut view = filters.apply(tasks);
    sort.apply(&mut view);

    view.into_iter()
        .map(|task| {
            let roommate_name = task
                .roommate_id
                .and_then(|id| roommate_names.get(&id).copied())
                .unwrap_or(UNASSIGNED);
            let room_name = task
                .room_name
                .as_deref()
                .filter(|name| !name.is_empty())
                .or_else(|| task.room_id.and_then(|id| room_names.get(&id).copied()))
                .unwrap_or(UNKNOWN_ROOM);

            TaskRow {
                id: task.id,
                title: task.title.clone(),
                description: task.description.clone(),
                status: task.status,
                room_name: room_name.to_string(),
                roommate_name: roommate_name.to_string(),
                priority: task.priority,
                due_label: due_label(task),
                can_mark_done: !task.is_done(),
            }
        })
        .collect()
}

pub fn due_label(task: &Task) -> String {
    task.due_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::StatusFilter;
    use crate::models::RoomColor;
    use chrono::NaiveDate;

    fn make_task(id: u32, roommate_id: Option<u32>, room_id: Option<u32>, status: TaskStatus, day: u32) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            description: None,
            roommate_id,
            room_id,
            room_name: None,
            priority: Priority::Medium,
            due_date: NaiveDate::from_ymd_opt(2024, 5, day),
            status,
        }
    }

    fn roommates() -> Vec<Roommate> {
        vec![Roommate { id: 1, name: "Taylor Brown".to_string(), email: "taylor@example.com".to_string() }]
    }

    fn rooms() -> Vec<Room> {
        vec![Room { id: 10, name: "Kitchen".to_string(), color: RoomColor::Blue, pos_x: 150.0, pos_y: 200.0 }]
    }

    #[test]
    fn test_names_resolved_with_fallbacks() {
        let tasks = vec![
            make_task(1, Some(1), Some(10), TaskStatus::Pending, 1),
            make_task(2, Some(99), Some(77), TaskStatus::Pending, 2),
            make_task(3, None, None, TaskStatus::Done, 3),
        ];
        let rows = project_rows(&tasks, &roommates(), &rooms(), &TaskFilters::default(), &TaskSort::default());

        assert_eq!(rows[0].roommate_name, "Taylor Brown");
        assert_eq!(rows[0].room_name, "Kitchen");
        assert_eq!(rows[1].roommate_name, UNASSIGNED);
        assert_eq!(rows[1].room_name, UNKNOWN_ROOM);
        assert_eq!(rows[2].roommate_name, UNASSIGNED);
        assert_eq!(rows[2].due_label, "2024-05-03");
    }

    #[test]
    fn test_joined_room_name_preferred() {
        let mut task = make_task(1, None, Some(10), TaskStatus::Pending, 1);
        task.room_name = Some("Pantry".to_string());
        let rows = project_rows(&[task], &[], &rooms(), &TaskFilters::default(), &TaskSort::default());
        assert_eq!(rows[0].room_name, "Pantry");
    }

    #[test]
    fn test_mark_done_only_for_open_tasks() {
        let tasks = vec![
            make_task(1, None, None, TaskStatus::Pending, 1),
            make_task(2, None, None, TaskStatus::Done, 2),
        ];
        let rows = project_rows(&tasks, &[], &[], &TaskFilters::default(), &TaskSort::default());
        assert!(rows[0].can_mark_done);
        assert!(!rows[1].can_mark_done);
        assert_eq!(rows[1].status_class(), "status-badge done");
    }

    #[test]
    fn test_projection_leaves_snapshot_untouched() {
        let tasks = vec![
            make_task(1, None, None, TaskStatus::Done, 9),
            make_task(2, None, None, TaskStatus::Pending, 1),
        ];
        let before = tasks.clone();
        let filters = TaskFilters { status: StatusFilter::Pending, ..Default::default() };
        let rows = project_rows(&tasks, &[], &[], &filters, &TaskSort::default());

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 2);
        assert_eq!(tasks, before);
    }
}
