use chrono::{DateTime, Utc};
use std::fmt;

pub type ProjectId = u64;

/// Lifecycle status of an installation project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProjectStatus {
    Planning,
    InProgress,
    Completed,
    OnHold,
    Cancelled,
    #[default]
    Unknown,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 5] = [
        ProjectStatus::Planning,
        ProjectStatus::InProgress,
        ProjectStatus::Completed,
        ProjectStatus::OnHold,
        ProjectStatus::Cancelled,
    ];

    /// Maps a wire name onto a status. Matching is exact; anything else is `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Planning" => ProjectStatus::Planning,
            "InProgress" => ProjectStatus::InProgress,
            "Completed" => ProjectStatus::Completed,
            "OnHold" => ProjectStatus::OnHold,
            "Cancelled" => ProjectStatus::Cancelled,
            _ => ProjectStatus::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::InProgress => "InProgress",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::OnHold => "OnHold",
            ProjectStatus::Cancelled => "Cancelled",
            ProjectStatus::Unknown => "Unknown",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Cancelled => "Cancelled",
            ProjectStatus::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientInfo {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ManagerRef {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EquipmentInfo {
    pub panel_count: Option<u32>,
    pub panel_model: Option<String>,
    pub inverter_model: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FinancialInfo {
    pub budget: f64,
    pub spent: f64,
}

/// Read-only snapshot of one project as delivered by the data source.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub name: String,
    pub address: String,
    pub client: ClientInfo,
    pub status: ProjectStatus,
    pub capacity_kw: Option<f64>,
    pub start_date: DateTime<Utc>,
    pub estimated_end_date: Option<DateTime<Utc>>,
    pub task_count: u32,
    pub completed_task_count: u32,
    pub manager: ManagerRef,
    pub equipment: Option<EquipmentInfo>,
    pub financial: Option<FinancialInfo>,
}

impl ProjectRecord {
    /// Minimal record with everything optional left empty. Handy for adapters and tests.
    pub fn new(id: ProjectId, name: impl Into<String>, status: ProjectStatus) -> Self {
        Self {
            id,
            name: name.into(),
            address: String::new(),
            client: ClientInfo::default(),
            status,
            capacity_kw: None,
            start_date: DateTime::<Utc>::UNIX_EPOCH,
            estimated_end_date: None,
            task_count: 0,
            completed_task_count: 0,
            manager: ManagerRef::default(),
            equipment: None,
            financial: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_wire_names() {
        for status in ProjectStatus::ALL {
            assert_eq!(ProjectStatus::parse(status.as_str()), status);
        }
    }

    #[test]
    fn status_parse_is_case_sensitive() {
        assert_eq!(ProjectStatus::parse("inprogress"), ProjectStatus::Unknown);
        assert_eq!(ProjectStatus::parse(""), ProjectStatus::Unknown);
    }
}
