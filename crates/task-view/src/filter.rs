//! Task Filters
//!
//! Predicate configuration narrowing the displayed task set. Every
//! criterion set to `all` (or an empty search) passes unconditionally.

use crate::models::{Priority, Task, TaskStatus};
use crate::wire::parse_id;

/// Select value meaning "no criterion"
pub const ALL_VALUE: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Done,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Pending, StatusFilter::Done];

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Pending => "Pending",
            StatusFilter::Done => "Done",
        }
    }

    /// Done matches by equality, pending by inequality against `done`
    pub fn matches(self, status: TaskStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status != TaskStatus::Done,
            StatusFilter::Done => status == TaskStatus::Done,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    /// Read a `<select>` value; unknown labels clear the criterion
    pub fn from_value(value: &str) -> Self {
        Priority::parse(value).map_or(PriorityFilter::All, PriorityFilter::Only)
    }

    pub fn value(self) -> &'static str {
        match self {
            PriorityFilter::All => ALL_VALUE,
            PriorityFilter::Only(p) => p.as_str(),
        }
    }

    pub fn matches(self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(wanted) => wanted == priority,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoommateFilter {
    #[default]
    All,
    Only(u32),
}

impl RoommateFilter {
    /// Read a `<select>` value. Ids are normalized, so `"3"` and `3` agree.
    pub fn from_value(value: &str) -> Self {
        match parse_id(value) {
            Ok(Some(id)) => RoommateFilter::Only(id),
            _ => RoommateFilter::All,
        }
    }

    pub fn value(self) -> String {
        match self {
            RoommateFilter::All => ALL_VALUE.to_string(),
            RoommateFilter::Only(id) => id.to_string(),
        }
    }

    /// Unassigned tasks never match a specific roommate
    pub fn matches(self, roommate_id: Option<u32>) -> bool {
        match self {
            RoommateFilter::All => true,
            RoommateFilter::Only(wanted) => roommate_id == Some(wanted),
        }
    }
}

/// Active filter state of the task list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskFilters {
    pub status: StatusFilter,
    pub priority: PriorityFilter,
    pub roommate: RoommateFilter,
    pub search: String,
}

impl TaskFilters {
    /// A task passes when every active criterion matches
    pub fn matches(&self, task: &Task) -> bool {
        self.status.matches(task.status)
            && self.priority.matches(task.priority)
            && self.roommate.matches(task.roommate_id)
            && self.matches_search(&task.title)
    }

    fn matches_search(&self, title: &str) -> bool {
        if self.search.is_empty() {
            return true;
        }
        title.to_lowercase().contains(&self.search.to_lowercase())
    }

    /// Derive the filtered view; the snapshot itself is untouched
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|t| self.matches(t)).collect()
    }
}
