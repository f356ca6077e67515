//! Form Payloads
//!
//! Raw `<input>`/`<select>` values and the JSON bodies built from them.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Priority, TaskStatus};
use crate::wire::{parse_date, parse_id};

/// Raw values of the add-task form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub roommate: String,
    pub room: String,
    pub priority: String,
    pub due_date: String,
}

/// Body of `POST /tasks`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub roommate_id: Option<u32>,
    pub room_id: Option<u32>,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
}

impl TaskForm {
    /// Empty selects become null; an unknown priority falls back to Low
    pub fn to_payload(&self) -> NewTask {
        NewTask {
            title: self.title.trim().to_string(),
            description: self.description.clone(),
            roommate_id: parse_id(&self.roommate).ok().flatten(),
            room_id: parse_id(&self.room).ok().flatten(),
            priority: Priority::parse(&self.priority).unwrap_or_default(),
            due_date: parse_date(&self.due_date),
        }
    }
}

/// Raw values of the add-roommate form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoommateForm {
    pub name: String,
    pub email: String,
}

/// Body of `POST /roommates`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRoommate {
    pub name: String,
    pub email: String,
}

impl RoommateForm {
    pub fn to_payload(&self) -> NewRoommate {
        NewRoommate {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }
}

/// Body of `PUT /tasks/:id`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusUpdate {
    pub status: TaskStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_payload_json() {
        let form = TaskForm {
            title: " Clean oven ".to_string(),
            description: "inside too".to_string(),
            roommate: "2".to_string(),
            room: String::new(),
            priority: "High".to_string(),
            due_date: "2024-02-01".to_string(),
        };
        let body = serde_json::to_value(form.to_payload()).unwrap();

        assert_eq!(
            body,
            json!({
                "title": "Clean oven",
                "description": "inside too",
                "roommate_id": 2,
                "room_id": null,
                "priority": "High",
                "due_date": "2024-02-01"
            })
        );
    }

    #[test]
    fn test_priority_defaults_to_low() {
        let form = TaskForm { title: "x".to_string(), ..Default::default() };
        assert_eq!(form.to_payload().priority, Priority::Low);
    }

    #[test]
    fn test_status_update_json() {
        let body = serde_json::to_value(StatusUpdate { status: TaskStatus::Done }).unwrap();
        assert_eq!(body, json!({ "status": "done" }));
    }
}
