use std::cmp::Reverse;
use std::fs;
use std::path::Path;

use board_logging::board_info;
use serde::{Deserialize, Serialize};

use crate::source::ProjectSource;
use crate::timestamp::parse_timestamp;
use crate::{DailyReportDto, FailureKind, FetchError, ProjectDto, ProjectPageDto, ProjectQuery};

/// On-disk layout of a snapshot file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotFile {
    #[serde(default)]
    pub projects: Vec<ProjectDto>,
    #[serde(default)]
    pub reports: Vec<DailyReportDto>,
}

/// `ProjectSource` answering from a JSON snapshot held in memory, with the
/// same status filtering and paging rules as the HTTP API.
#[derive(Debug, Clone, Default)]
pub struct SnapshotProjectSource {
    snapshot: SnapshotFile,
}

impl SnapshotProjectSource {
    pub fn new(snapshot: SnapshotFile) -> Self {
        Self { snapshot }
    }

    pub fn from_path(path: &Path) -> Result<Self, FetchError> {
        let content = fs::read_to_string(path).map_err(|err| {
            FetchError::new(FailureKind::Io, format!("{}: {err}", path.display()))
        })?;
        let snapshot: SnapshotFile = serde_json::from_str(&content).map_err(|err| {
            FetchError::new(FailureKind::Decode, format!("{}: {err}", path.display()))
        })?;
        board_info!(
            "Loaded snapshot {:?}: {} projects, {} reports",
            path,
            snapshot.projects.len(),
            snapshot.reports.len()
        );
        Ok(Self::new(snapshot))
    }
}

#[async_trait::async_trait]
impl ProjectSource for SnapshotProjectSource {
    async fn get_all_projects(&self, query: &ProjectQuery) -> Result<ProjectPageDto, FetchError> {
        let wanted: Option<Vec<&str>> = query
            .status
            .as_deref()
            .map(|raw| raw.split(',').map(str::trim).collect());

        let matching: Vec<&ProjectDto> = self
            .snapshot
            .projects
            .iter()
            .filter(|project| {
                wanted
                    .as_ref()
                    .map_or(true, |statuses| statuses.contains(&project.status.as_str()))
            })
            .collect();

        let page_size = query.page_size.max(1) as usize;
        let skip = (query.page_number.max(1) as usize - 1) * page_size;
        Ok(ProjectPageDto {
            total_count: matching.len() as u64,
            items: matching
                .into_iter()
                .skip(skip)
                .take(page_size)
                .cloned()
                .collect(),
        })
    }

    async fn get_recent_reports(&self, limit: u32) -> Result<Vec<DailyReportDto>, FetchError> {
        let mut reports = self.snapshot.reports.clone();
        // Newest first by instant; unreadable timestamps go last.
        reports.sort_by_cached_key(|report| Reverse(parse_timestamp(&report.submitted_at)));
        reports.truncate(limit as usize);
        Ok(reports)
    }
}
