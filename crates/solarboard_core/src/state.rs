use chrono::{DateTime, Utc};

use crate::kpi::{self, ActiveCount};
use crate::navigation::{self, Action};
use crate::pipeline::{self, ViewState, PAGE_SIZE};
use crate::view_model::{
    ActivityRow, DashboardViewModel, KpiCards, ProjectCardView, ProjectDetailsView,
    ProjectListView, ProjectsPanel,
};
use crate::{activity, ProjectId, ProjectRecord, ReportSummary, Role, Tab};

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProjectsLoad {
    #[default]
    Loading,
    Loaded(Vec<ProjectRecord>),
    Failed(String),
}

/// Outstanding request per resource. A response is only applied when its id
/// matches the one recorded here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PendingRequests {
    pub projects: Option<RequestId>,
    pub active_count: Option<RequestId>,
    pub reports: Option<RequestId>,
}

impl PendingRequests {
    pub fn is_idle(&self) -> bool {
        self.projects.is_none() && self.active_count.is_none() && self.reports.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    role: Role,
    selected_tab: Tab,
    view: ViewState,
    projects: ProjectsLoad,
    active_count: Option<u64>,
    reports: Vec<ReportSummary>,
    pending: PendingRequests,
    last_request: RequestId,
    details: Option<ProjectId>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_role(role: Role) -> Self {
        Self {
            role,
            ..Self::default()
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn selected_tab(&self) -> Tab {
        self.selected_tab
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn projects(&self) -> &ProjectsLoad {
        &self.projects
    }

    pub fn pending(&self) -> PendingRequests {
        self.pending
    }

    /// Returns whether anything visible changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn next_request(&mut self) -> RequestId {
        self.last_request += 1;
        self.last_request
    }

    pub(crate) fn pending_mut(&mut self) -> &mut PendingRequests {
        &mut self.pending
    }

    pub(crate) fn view_state_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    pub(crate) fn set_projects(&mut self, projects: ProjectsLoad) {
        self.projects = projects;
        self.mark_dirty();
    }

    pub(crate) fn set_active_count(&mut self, count: Option<u64>) {
        self.active_count = count;
        self.mark_dirty();
    }

    pub(crate) fn set_reports(&mut self, reports: Vec<ReportSummary>) {
        self.reports = reports;
        self.mark_dirty();
    }

    pub(crate) fn set_role(&mut self, role: Role) {
        self.role = role;
        if !navigation::is_tab_visible(self.selected_tab, role) {
            self.selected_tab = navigation::visible_tabs(role)
                .first()
                .copied()
                .unwrap_or_default();
        }
        self.mark_dirty();
    }

    pub(crate) fn select_tab(&mut self, tab: Tab) -> bool {
        if self.selected_tab == tab || !navigation::is_tab_visible(tab, self.role) {
            return false;
        }
        self.selected_tab = tab;
        self.mark_dirty();
        true
    }

    pub(crate) fn set_details(&mut self, details: Option<ProjectId>) {
        if self.details != details {
            self.details = details;
            self.mark_dirty();
        }
    }

    pub(crate) fn loaded_records(&self) -> &[ProjectRecord] {
        match &self.projects {
            ProjectsLoad::Loaded(records) => records,
            ProjectsLoad::Loading | ProjectsLoad::Failed(_) => &[],
        }
    }

    pub(crate) fn contains_project(&self, project_id: ProjectId) -> bool {
        self.loaded_records().iter().any(|r| r.id == project_id)
    }

    /// Page count for the current search and status filter.
    pub fn total_pages(&self) -> usize {
        let matching = pipeline::filter(
            self.loaded_records(),
            self.view.search(),
            self.view.status_filter(),
        )
        .len();
        pipeline::total_pages(matching, PAGE_SIZE)
    }

    /// Keeps the page inside `[1, max(total_pages, 1)]` after the list or filters change.
    pub(crate) fn clamp_page(&mut self) {
        let total = self.total_pages();
        if self.view.clamp_page(total) {
            self.mark_dirty();
        }
    }

    /// Builds the complete view model. `now` feeds the deadline messages.
    pub fn view(&self, now: DateTime<Utc>) -> DashboardViewModel {
        let records = self.loaded_records();
        let kpis = KpiCards {
            summary: kpi::summarize(records),
            active: ActiveCount::resolve(self.active_count, records.len()),
        };

        let projects = match &self.projects {
            ProjectsLoad::Loading => ProjectsPanel::Loading,
            ProjectsLoad::Failed(message) => ProjectsPanel::Failed {
                message: message.clone(),
            },
            ProjectsLoad::Loaded(records) => {
                let derived = pipeline::derive(records, &self.view);
                let page = self.view.page();
                ProjectsPanel::Ready(ProjectListView {
                    cards: derived
                        .page_items
                        .iter()
                        .map(|record| ProjectCardView::from_record(record, now))
                        .collect(),
                    total_matching: derived.total_matching,
                    total_pages: derived.total_pages,
                    page,
                    has_previous: page > 1,
                    has_next: page < derived.total_pages,
                    search: self.view.search().to_string(),
                    status_filter: self.view.status_filter(),
                    sort_key: self.view.sort_key(),
                    view_mode: self.view.view_mode(),
                })
            }
        };

        let details = self.details.and_then(|id| {
            records
                .iter()
                .find(|record| record.id == id)
                .map(|record| ProjectDetailsView::from_record(record, now))
        });

        DashboardViewModel {
            role: self.role,
            tabs: navigation::visible_tabs(self.role),
            selected_tab: self.selected_tab,
            can_create_project: navigation::is_action_allowed(Action::CreateProject, self.role),
            can_edit_project: navigation::is_action_allowed(Action::EditProject, self.role),
            can_export_reports: navigation::is_action_allowed(Action::ExportReport, self.role),
            kpis,
            projects,
            activity: activity::activity_feed(&self.reports)
                .into_iter()
                .map(ActivityRow::from_report)
                .collect(),
            details,
            dirty: self.dirty,
        }
    }
}
