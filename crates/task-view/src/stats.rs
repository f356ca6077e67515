//! Dashboard Stats
//!
//! Counts over the full snapshot, independent of the filtered view.

use chrono::{DateTime, NaiveTime, Utc};

use crate::models::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub upcoming: usize,
    pub overdue: usize,
    pub completed: usize,
}

impl TaskStats {
    pub fn total(&self) -> usize {
        self.upcoming + self.overdue + self.completed
    }
}

/// Due dates are read as UTC midnight and compared against `now`.
/// An open task without a due date is upcoming.
pub fn compute_stats(tasks: &[Task], now: DateTime<Utc>) -> TaskStats {
    tasks.iter().fold(TaskStats::default(), |mut stats, task| {
        if task.is_done() {
            stats.completed += 1;
        } else {
            match task.due_date {
                Some(date) if date.and_time(NaiveTime::MIN).and_utc() < now => stats.overdue += 1,
                _ => stats.upcoming += 1,
            }
        }
        stats
    })
}
