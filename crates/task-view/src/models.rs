//! Data Model
//!
//! Entities served by the chore backend. Decoding is lenient where the
//! backend is loose (string ids, mixed-case enums, empty dates).

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::wire;

/// A chore assigned to a roommate and located in a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(deserialize_with = "wire::id")]
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "wire::optional_id")]
    pub roommate_id: Option<u32>,
    #[serde(default, deserialize_with = "wire::optional_id")]
    pub room_id: Option<u32>,
    /// Present when the backend joins the room table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
    #[serde(default, deserialize_with = "wire::priority")]
    pub priority: Priority,
    #[serde(default, deserialize_with = "wire::optional_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "wire::null_as_default")]
    pub status: TaskStatus,
}

impl Task {
    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }
}

/// A person tasks can be assigned to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roommate {
    #[serde(deserialize_with = "wire::id")]
    pub id: u32,
    pub name: String,
    #[serde(default, deserialize_with = "wire::null_as_default")]
    pub email: String,
}

/// A named location on the house map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(deserialize_with = "wire::id")]
    pub id: u32,
    pub name: String,
    #[serde(default, deserialize_with = "wire::null_as_default")]
    pub color: RoomColor,
    #[serde(default, deserialize_with = "wire::null_as_default")]
    pub pos_x: f64,
    #[serde(default, deserialize_with = "wire::null_as_default")]
    pub pos_y: f64,
}

// ========================
// Priority
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Sort rank: Low=1, Medium=2, High=3
    pub fn rank(self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Case-insensitive parse of a priority label
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl TryFrom<String> for Priority {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Priority::parse(&value).ok_or_else(|| format!("unknown priority `{}`", value))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ========================
// Status
// ========================

/// Completion status. Anything the backend sends other than `done` is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TaskStatus {
    #[default]
    Pending,
    Done,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Done => "done",
        }
    }
}

impl From<String> for TaskStatus {
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case("done") {
            TaskStatus::Done
        } else {
            TaskStatus::Pending
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ========================
// Room color
// ========================

/// Visual theme tag of a room; unknown tags render blue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum RoomColor {
    #[default]
    Blue,
    Purple,
    Orange,
    Green,
}

impl RoomColor {
    pub fn theme_class(self) -> &'static str {
        match self {
            RoomColor::Blue => "theme-blue",
            RoomColor::Purple => "theme-purple",
            RoomColor::Orange => "theme-orange",
            RoomColor::Green => "theme-green",
        }
    }
}

impl From<String> for RoomColor {
    fn from(value: String) -> Self {
        match value.as_str() {
            "purple" => RoomColor::Purple,
            "orange" => RoomColor::Orange,
            "green" => RoomColor::Green,
            _ => RoomColor::Blue,
        }
    }
}
