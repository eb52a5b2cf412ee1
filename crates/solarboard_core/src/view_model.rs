use chrono::{DateTime, Utc};

use crate::kpi::{ActiveCount, KpiSummary};
use crate::metrics::{self, CompletionMessage, Priority};
use crate::{
    ApprovalStatus, EquipmentInfo, FinancialInfo, ProjectId, ProjectRecord, ProjectStatus,
    ReportSummary, Role, SortKey, StatusFilter, Tab, ViewMode,
};

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardViewModel {
    pub role: Role,
    pub tabs: Vec<Tab>,
    pub selected_tab: Tab,
    pub can_create_project: bool,
    pub can_edit_project: bool,
    pub can_export_reports: bool,
    pub kpis: KpiCards,
    pub projects: ProjectsPanel,
    pub activity: Vec<ActivityRow>,
    pub details: Option<ProjectDetailsView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KpiCards {
    pub summary: KpiSummary,
    pub active: ActiveCount,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProjectsPanel {
    Loading,
    /// The list fetch failed; the shell offers a retry.
    Failed { message: String },
    Ready(ProjectListView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectListView {
    pub cards: Vec<ProjectCardView>,
    pub total_matching: usize,
    pub total_pages: usize,
    pub page: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub search: String,
    pub status_filter: StatusFilter,
    pub sort_key: SortKey,
    pub view_mode: ViewMode,
}

impl ProjectListView {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCardView {
    pub project_id: ProjectId,
    pub name: String,
    pub address: String,
    pub client_name: String,
    pub manager_name: String,
    pub status: ProjectStatus,
    pub capacity_kw: Option<f64>,
    pub progress: u8,
    pub priority: Priority,
    pub completion: CompletionMessage,
}

impl ProjectCardView {
    pub(crate) fn from_record(record: &ProjectRecord, now: DateTime<Utc>) -> Self {
        Self {
            project_id: record.id,
            name: record.name.clone(),
            address: record.address.clone(),
            client_name: record.client.name.clone(),
            manager_name: record.manager.name.clone(),
            status: record.status,
            capacity_kw: record.capacity_kw,
            progress: metrics::progress(record),
            priority: metrics::priority(record),
            completion: metrics::completion_message(record, now),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDetailsView {
    pub card: ProjectCardView,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub start_date: DateTime<Utc>,
    pub estimated_end_date: Option<DateTime<Utc>>,
    pub days_until_end: Option<i64>,
    pub task_count: u32,
    pub completed_task_count: u32,
    pub equipment: Option<EquipmentInfo>,
    pub financial: Option<FinancialInfo>,
}

impl ProjectDetailsView {
    pub(crate) fn from_record(record: &ProjectRecord, now: DateTime<Utc>) -> Self {
        Self {
            card: ProjectCardView::from_record(record, now),
            client_email: record.client.email.clone(),
            client_phone: record.client.phone.clone(),
            start_date: record.start_date,
            estimated_end_date: record.estimated_end_date,
            days_until_end: metrics::days_until_end(record, now),
            task_count: record.task_count,
            completed_task_count: record.completed_task_count,
            equipment: record.equipment.clone(),
            financial: record.financial,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRow {
    pub author_name: String,
    pub project_name: String,
    pub submitted_at: DateTime<Utc>,
    pub approval: ApprovalStatus,
}

impl ActivityRow {
    pub(crate) fn from_report(report: &ReportSummary) -> Self {
        Self {
            author_name: report.author_name.clone(),
            project_name: report.project_name.clone(),
            submitted_at: report.submitted_at,
            approval: report.approval,
        }
    }
}
