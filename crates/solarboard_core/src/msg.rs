use crate::{
    ProjectId, ProjectRecord, ReportSummary, RequestId, Role, SortKey, StatusFilter, Tab, ViewMode,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Dashboard became visible; kicks off the initial fetches.
    Mounted,
    /// Dashboard is gone; any response still in flight must be ignored.
    Unmounted,
    /// Project list fetch finished.
    ProjectsLoaded {
        request: RequestId,
        result: Result<Vec<ProjectRecord>, String>,
    },
    /// Dedicated active-project count query finished.
    ActiveCountLoaded {
        request: RequestId,
        result: Result<u64, String>,
    },
    /// Recent daily reports fetch finished.
    ReportsLoaded {
        request: RequestId,
        result: Result<Vec<ReportSummary>, String>,
    },
    /// User clicked Retry on the project list error panel.
    RetryClicked,
    /// User asked to reload everything.
    RefreshClicked,
    /// User edited the search box.
    SearchChanged(String),
    StatusFilterChanged(StatusFilter),
    SortChanged(SortKey),
    ViewModeChanged(ViewMode),
    NextPage,
    PreviousPage,
    /// Direct page request; clamped to the available pages.
    PageSelected(usize),
    TabSelected(Tab),
    /// Signed-in user's role changed.
    RoleChanged(Role),
    /// User clicked a project card or row.
    ProjectClicked(ProjectId),
    /// User opened the details modal for a project.
    DetailsRequested(ProjectId),
    DetailsClosed,
}
