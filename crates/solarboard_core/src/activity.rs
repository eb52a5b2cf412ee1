use chrono::{DateTime, Utc};

/// Number of reports shown in the recent-activity feed.
pub const ACTIVITY_FEED_LEN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
    #[default]
    Unknown,
}

impl ApprovalStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Pending" => ApprovalStatus::Pending,
            "Approved" => ApprovalStatus::Approved,
            "Rejected" => ApprovalStatus::Rejected,
            _ => ApprovalStatus::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "Pending",
            ApprovalStatus::Approved => "Approved",
            ApprovalStatus::Rejected => "Rejected",
            ApprovalStatus::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub author_name: String,
    pub project_name: String,
    pub submitted_at: DateTime<Utc>,
    pub approval: ApprovalStatus,
}

/// Newest reports first, capped at [`ACTIVITY_FEED_LEN`].
pub fn activity_feed(reports: &[ReportSummary]) -> Vec<&ReportSummary> {
    let mut feed: Vec<&ReportSummary> = reports.iter().collect();
    feed.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    feed.truncate(ACTIVITY_FEED_LEN);
    feed
}
