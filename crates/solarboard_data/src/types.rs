use serde::{Deserialize, Serialize};
use std::fmt;

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientDto {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManagerDto {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EquipmentDto {
    pub panel_count: Option<u32>,
    pub panel_model: Option<String>,
    pub inverter_model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialDto {
    pub budget: f64,
    pub spent: f64,
}

/// One project as the API sends it. Dates stay as RFC3339 strings here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub client: ClientDto,
    pub status: String,
    #[serde(default)]
    pub capacity: Option<f64>,
    pub start_date: String,
    #[serde(default)]
    pub estimated_end_date: Option<String>,
    #[serde(default)]
    pub task_count: u32,
    #[serde(default)]
    pub completed_task_count: u32,
    #[serde(default)]
    pub manager: ManagerDto,
    #[serde(default)]
    pub equipment: Option<EquipmentDto>,
    #[serde(default)]
    pub financial: Option<FinancialDto>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPageDto {
    #[serde(default)]
    pub items: Vec<ProjectDto>,
    pub total_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReportDto {
    #[serde(default)]
    pub id: u64,
    pub author_name: String,
    pub project_name: String,
    pub submitted_at: String,
    #[serde(default)]
    pub approval_status: String,
}

/// Query accepted by `getAllProjects`. `status` is a comma-joined list of wire names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectQuery {
    pub page_number: u32,
    pub page_size: u32,
    pub status: Option<String>,
}

impl ProjectQuery {
    pub fn page(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number,
            page_size,
            status: None,
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DataEvent {
    Projects {
        request: RequestId,
        result: Result<Vec<ProjectDto>, FetchError>,
    },
    ActiveCount {
        request: RequestId,
        result: Result<u64, FetchError>,
    },
    Reports {
        request: RequestId,
        result: Result<Vec<DailyReportDto>, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
    Io,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "malformed response"),
            FailureKind::Io => write!(f, "io error"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
