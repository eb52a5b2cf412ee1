//! Solarboard core: pure dashboard state machine, derivations and view-model helpers.
mod activity;
mod effect;
pub mod kpi;
pub mod metrics;
mod msg;
mod navigation;
pub mod pipeline;
mod project;
mod state;
mod update;
mod view_model;

pub use activity::{activity_feed, ApprovalStatus, ReportSummary, ACTIVITY_FEED_LEN};
pub use effect::Effect;
pub use kpi::{ActiveCount, KpiSummary};
pub use metrics::{CompletionMessage, Priority};
pub use msg::Msg;
pub use navigation::{
    is_action_allowed, is_tab_visible, visible_tabs, Action, Role, Tab, TabEntry, TAB_TABLE,
};
pub use pipeline::{DerivedPage, SortKey, StatusFilter, ViewMode, ViewState, PAGE_SIZE};
pub use project::{
    ClientInfo, EquipmentInfo, FinancialInfo, ManagerRef, ProjectId, ProjectRecord,
    ProjectStatus,
};
pub use state::{AppState, PendingRequests, ProjectsLoad, RequestId};
pub use update::update;
pub use view_model::{
    ActivityRow, DashboardViewModel, KpiCards, ProjectCardView, ProjectDetailsView,
    ProjectListView, ProjectsPanel,
};
