use crate::{ProjectId, ProjectStatus, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchProjects {
        request: RequestId,
    },
    FetchActiveCount {
        request: RequestId,
        statuses: Vec<ProjectStatus>,
    },
    FetchRecentReports {
        request: RequestId,
    },
    NavigateToProject {
        project_id: ProjectId,
    },
}
