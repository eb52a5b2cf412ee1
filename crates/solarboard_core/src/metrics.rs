//! Per-record derived metrics. All functions are pure over one snapshot.
use chrono::{DateTime, Utc};
use std::fmt;

use crate::{ProjectRecord, ProjectStatus};

const SECONDS_PER_DAY: i64 = 86_400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
    Normal,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
            Priority::Normal => "Normal",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionMessage {
    Completed,
    Overdue,
    DueSoon { days: i64 },
    DueIn { days: i64 },
    PercentComplete(u8),
}

impl fmt::Display for CompletionMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionMessage::Completed => write!(f, "Completed"),
            CompletionMessage::Overdue => write!(f, "Overdue"),
            CompletionMessage::DueSoon { days: 1 } => write!(f, "Due soon (1 day)"),
            CompletionMessage::DueSoon { days } => write!(f, "Due soon ({days} days)"),
            CompletionMessage::DueIn { days } => write!(f, "Due in {days} days"),
            CompletionMessage::PercentComplete(progress) => write!(f, "{progress}% complete"),
        }
    }
}

/// Share of completed tasks as a whole percentage, rounded half-up.
///
/// Zero tasks means zero progress whatever the completed count says, and a
/// completed count above the task count is clamped to 100.
pub fn progress(record: &ProjectRecord) -> u8 {
    let total = u64::from(record.task_count);
    if total == 0 {
        return 0;
    }
    let done = u64::from(record.completed_task_count).min(total);
    ((done * 100 + total / 2) / total) as u8
}

pub fn priority(record: &ProjectRecord) -> Priority {
    match record.status {
        ProjectStatus::OnHold => Priority::High,
        ProjectStatus::InProgress if progress(record) < 30 => Priority::Medium,
        ProjectStatus::Planning => Priority::Low,
        _ => Priority::Normal,
    }
}

/// Whole days from `now` until the estimated end date, floored (so a deadline
/// two hours ago is day -1).
pub fn days_until_end(record: &ProjectRecord, now: DateTime<Utc>) -> Option<i64> {
    let end = record.estimated_end_date?;
    let seconds = (end - now).num_seconds();
    Some(seconds.div_euclid(SECONDS_PER_DAY))
}

pub fn completion_message(record: &ProjectRecord, now: DateTime<Utc>) -> CompletionMessage {
    let progress = progress(record);
    if progress == 100 {
        return CompletionMessage::Completed;
    }
    match days_until_end(record, now) {
        Some(days) if days < 0 => CompletionMessage::Overdue,
        Some(days) if days < 7 => CompletionMessage::DueSoon { days },
        Some(days) if days < 30 => CompletionMessage::DueIn { days },
        _ => CompletionMessage::PercentComplete(progress),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn record(task_count: u32, completed: u32) -> ProjectRecord {
        let mut record = ProjectRecord::new(1, "Roof array", ProjectStatus::InProgress);
        record.task_count = task_count;
        record.completed_task_count = completed;
        record
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn progress_rounds_half_up() {
        assert_eq!(progress(&record(3, 1)), 33);
        assert_eq!(progress(&record(3, 2)), 67);
        assert_eq!(progress(&record(8, 1)), 13);
    }

    #[test]
    fn days_until_end_floors_partial_days() {
        let mut rec = record(10, 1);
        rec.estimated_end_date = Some(now() - Duration::hours(2));
        assert_eq!(days_until_end(&rec, now()), Some(-1));

        rec.estimated_end_date = Some(now() + Duration::hours(47));
        assert_eq!(days_until_end(&rec, now()), Some(1));

        rec.estimated_end_date = None;
        assert_eq!(days_until_end(&rec, now()), None);
    }

    #[test]
    fn completion_message_display() {
        assert_eq!(CompletionMessage::DueSoon { days: 1 }.to_string(), "Due soon (1 day)");
        assert_eq!(CompletionMessage::DueSoon { days: 4 }.to_string(), "Due soon (4 days)");
        assert_eq!(CompletionMessage::DueIn { days: 12 }.to_string(), "Due in 12 days");
        assert_eq!(CompletionMessage::PercentComplete(40).to_string(), "40% complete");
    }
}
