//! House Map
//!
//! Room widgets placed at their layout coordinates, each showing how many
//! open tasks it holds, plus the detail list for the selected room.

use std::collections::HashMap;

use crate::models::{Priority, Room, Roommate, Task};
use crate::rows::{due_label, UNASSIGNED};

pub const ALL_CLEAN: &str = "All Clean";

#[derive(Debug, Clone, PartialEq)]
pub struct RoomWidget {
    pub id: u32,
    pub name: String,
    /// First character of the room name
    pub icon: String,
    pub theme_class: &'static str,
    pub left: f64,
    pub top: f64,
    pub pending_count: usize,
    pub active: bool,
}

impl RoomWidget {
    pub fn is_busy(&self) -> bool {
        self.pending_count > 0
    }

    pub fn dot_class(&self) -> &'static str {
        if self.is_busy() { "status-dot bg-red" } else { "status-dot bg-green" }
    }

    pub fn pill_label(&self) -> String {
        if self.is_busy() {
            format!("{} Tasks", self.pending_count)
        } else {
            ALL_CLEAN.to_string()
        }
    }

    pub fn style(&self) -> String {
        format!("left: {}px; top: {}px;", self.left, self.top)
    }
}

/// Open tasks located in a room
pub fn pending_in_room(tasks: &[Task], room_id: u32) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|t| t.room_id == Some(room_id) && !t.is_done())
        .collect()
}

pub fn project_widgets(rooms: &[Room], tasks: &[Task], selected: Option<u32>) -> Vec<RoomWidget> {
    rooms
        .iter()
        .map(|room| RoomWidget {
            id: room.id,
            name: room.name.clone(),
            icon: room.name.chars().next().map(String::from).unwrap_or_default(),
            theme_class: room.color.theme_class(),
            left: room.pos_x,
            top: room.pos_y,
            pending_count: pending_in_room(tasks, room.id).len(),
            active: selected == Some(room.id),
        })
        .collect()
}

/// Compact card in the room sidebar
#[derive(Debug, Clone, PartialEq)]
pub struct MiniTaskCard {
    pub id: u32,
    pub title: String,
    pub assignee: String,
    pub due_label: String,
    pub priority: Priority,
}

impl MiniTaskCard {
    pub fn class(&self) -> String {
        format!("mini-task-card priority-{}", self.priority)
    }
}

pub fn room_details(room_id: u32, tasks: &[Task], roommates: &[Roommate]) -> Vec<MiniTaskCard> {
    let names: HashMap<u32, &str> = roommates.iter().map(|r| (r.id, r.name.as_str())).collect();
    pending_in_room(tasks, room_id)
        .into_iter()
        .map(|task| MiniTaskCard {
            id: task.id,
            title: task.title.clone(),
            assignee: task
                .roommate_id
                .and_then(|id| names.get(&id).copied())
                .unwrap_or(UNASSIGNED)
                .to_string(),
            due_label: due_label(task),
            priority: task.priority,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RoomColor, TaskStatus};

    fn make_room(id: u32, name: &str, color: RoomColor) -> Room {
        Room { id, name: name.to_string(), color, pos_x: 10.0 * id as f64, pos_y: 20.0 }
    }

    fn make_task(id: u32, room_id: Option<u32>, roommate_id: Option<u32>, status: TaskStatus) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            description: None,
            roommate_id,
            room_id,
            room_name: None,
            priority: Priority::High,
            due_date: None,
            status,
        }
    }

    #[test]
    fn test_widgets_count_open_tasks_only() {
        let rooms = vec![make_room(1, "Kitchen", RoomColor::Blue), make_room(2, "Laundry", RoomColor::Purple)];
        let tasks = vec![
            make_task(1, Some(1), None, TaskStatus::Pending),
            make_task(2, Some(1), None, TaskStatus::Pending),
            make_task(3, Some(1), None, TaskStatus::Done),
            make_task(4, Some(2), None, TaskStatus::Done),
            make_task(5, None, None, TaskStatus::Pending),
        ];
        let widgets = project_widgets(&rooms, &tasks, Some(2));

        assert_eq!(widgets[0].pending_count, 2);
        assert!(widgets[0].is_busy());
        assert_eq!(widgets[0].pill_label(), "2 Tasks");
        assert_eq!(widgets[0].dot_class(), "status-dot bg-red");
        assert_eq!(widgets[0].icon, "K");
        assert!(!widgets[0].active);

        assert_eq!(widgets[1].pill_label(), ALL_CLEAN);
        assert_eq!(widgets[1].theme_class, "theme-purple");
        assert_eq!(widgets[1].style(), "left: 20px; top: 20px;");
        assert!(widgets[1].active);
    }

    #[test]
    fn test_room_details() {
        let roommates = vec![Roommate { id: 4, name: "Jo".to_string(), email: String::new() }];
        let tasks = vec![
            make_task(1, Some(1), Some(4), TaskStatus::Pending),
            make_task(2, Some(1), None, TaskStatus::Pending),
            make_task(3, Some(1), Some(4), TaskStatus::Done),
        ];
        let cards = room_details(1, &tasks, &roommates);

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].assignee, "Jo");
        assert_eq!(cards[1].assignee, UNASSIGNED);
        assert_eq!(cards[0].class(), "mini-task-card priority-High");
        assert!(room_details(9, &tasks, &roommates).is_empty());
    }
}
