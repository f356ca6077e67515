//! Task Sort
//!
//! The list is ordered by due date; the priority setting only orders tasks
//! sharing a due date. This is what running a stable priority sort followed
//! by a stable due-date sort produces, folded into one comparator.

use std::cmp::Ordering;

use crate::models::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrioritySort {
    #[default]
    LowHigh,
    HighLow,
}

impl PrioritySort {
    pub const ALL: [PrioritySort; 2] = [PrioritySort::LowHigh, PrioritySort::HighLow];

    pub fn value(self) -> &'static str {
        match self {
            PrioritySort::LowHigh => "low-high",
            PrioritySort::HighLow => "high-low",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PrioritySort::LowHigh => "Priority: Low to High",
            PrioritySort::HighLow => "Priority: High to Low",
        }
    }

    pub fn from_value(value: &str) -> Self {
        if value == "high-low" { PrioritySort::HighLow } else { PrioritySort::LowHigh }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DueDateSort {
    #[default]
    NearFar,
    FarNear,
}

impl DueDateSort {
    pub const ALL: [DueDateSort; 2] = [DueDateSort::NearFar, DueDateSort::FarNear];

    pub fn value(self) -> &'static str {
        match self {
            DueDateSort::NearFar => "near-far",
            DueDateSort::FarNear => "far-near",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DueDateSort::NearFar => "Due: Soonest first",
            DueDateSort::FarNear => "Due: Latest first",
        }
    }

    pub fn from_value(value: &str) -> Self {
        if value == "far-near" { DueDateSort::FarNear } else { DueDateSort::NearFar }
    }
}

/// Active sort state of the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskSort {
    pub priority: PrioritySort,
    pub due_date: DueDateSort,
}

impl TaskSort {
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        self.compare_due(a, b).then_with(|| self.compare_priority(a, b))
    }

    // Undated tasks count as furthest away
    fn compare_due(&self, a: &Task, b: &Task) -> Ordering {
        let ord = match (a.due_date, b.due_date) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        match self.due_date {
            DueDateSort::NearFar => ord,
            DueDateSort::FarNear => ord.reverse(),
        }
    }

    fn compare_priority(&self, a: &Task, b: &Task) -> Ordering {
        let ord = a.priority.rank().cmp(&b.priority.rank());
        match self.priority {
            PrioritySort::LowHigh => ord,
            PrioritySort::HighLow => ord.reverse(),
        }
    }

    /// Stable in-place sort of a derived view
    pub fn apply(&self, tasks: &mut [&Task]) {
        tasks.sort_by(|a, b| self.compare(a, b));
    }
}
