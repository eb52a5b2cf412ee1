//! Solarboard data: project API adapters and background fetch execution.
mod api;
mod engine;
mod snapshot;
mod source;
mod timestamp;
mod types;

pub use api::{ApiSettings, HttpProjectSource};
pub use engine::{DataHandle, LIST_PAGE_SIZE, RECENT_REPORTS_LIMIT};
pub use snapshot::{SnapshotFile, SnapshotProjectSource};
pub use source::{collect_all_projects, count_projects, ProjectSource};
pub use timestamp::parse_timestamp;
pub use types::{
    ClientDto, DailyReportDto, DataEvent, EquipmentDto, FailureKind, FetchError, FinancialDto,
    ManagerDto, ProjectDto, ProjectPageDto, ProjectQuery, RequestId,
};
