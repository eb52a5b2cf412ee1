//! Dashboard KPI reduction over the full, unfiltered project list.
use crate::metrics::progress;
use crate::{ProjectRecord, ProjectStatus};

/// Statuses counted as "active" by the dedicated count query.
pub const ACTIVE_STATUSES: [ProjectStatus; 2] =
    [ProjectStatus::Planning, ProjectStatus::InProgress];

/// Comma-joined wire names of [`ACTIVE_STATUSES`], as the data source expects them.
pub fn active_status_query() -> String {
    status_query(&ACTIVE_STATUSES)
}

pub fn status_query(statuses: &[ProjectStatus]) -> String {
    statuses
        .iter()
        .map(|status| status.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KpiSummary {
    pub total_projects: usize,
    pub completed_projects: usize,
    pub total_capacity_kw: f64,
    pub total_budget: f64,
    pub total_spent: f64,
    /// Spent as a percentage of budget, one decimal. The budget is floored at 1.
    pub budget_utilization: f64,
    pub average_progress: u8,
}

/// Where the "active projects" card got its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveCount {
    /// Answer of the dedicated status-list query.
    Fetched(u64),
    /// Length of the loaded list, used when the query failed or is pending.
    Approximated(usize),
}

impl ActiveCount {
    /// The dedicated query wins whenever it produced a value.
    pub fn resolve(fetched: Option<u64>, loaded_len: usize) -> Self {
        match fetched {
            Some(count) => ActiveCount::Fetched(count),
            None => ActiveCount::Approximated(loaded_len),
        }
    }

    pub fn value(self) -> u64 {
        match self {
            ActiveCount::Fetched(count) => count,
            ActiveCount::Approximated(len) => len as u64,
        }
    }

    pub fn is_approximate(self) -> bool {
        matches!(self, ActiveCount::Approximated(_))
    }
}

pub fn summarize(records: &[ProjectRecord]) -> KpiSummary {
    let mut summary = KpiSummary {
        total_projects: records.len(),
        ..KpiSummary::default()
    };
    let mut progress_sum: u64 = 0;

    for record in records {
        if record.status == ProjectStatus::Completed {
            summary.completed_projects += 1;
        }
        summary.total_capacity_kw += record.capacity_kw.unwrap_or(0.0);
        if let Some(financial) = record.financial {
            summary.total_budget += financial.budget;
            summary.total_spent += financial.spent;
        }
        progress_sum += u64::from(progress(record));
    }

    summary.budget_utilization = utilization(summary.total_spent, summary.total_budget);
    if !records.is_empty() {
        summary.average_progress = (progress_sum / records.len() as u64) as u8;
    }
    summary
}

fn utilization(spent: f64, budget: f64) -> f64 {
    let ratio = spent / budget.max(1.0) * 100.0;
    (ratio * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_query_joins_wire_names() {
        assert_eq!(active_status_query(), "Planning,InProgress");
    }

    #[test]
    fn utilization_floors_denominator() {
        assert_eq!(utilization(0.0, 0.0), 0.0);
        assert_eq!(utilization(0.5, 0.0), 50.0);
        assert_eq!(utilization(1.0, 3.0), 33.3);
    }

    #[test]
    fn active_count_prefers_fetched_value() {
        assert_eq!(ActiveCount::resolve(Some(12), 4), ActiveCount::Fetched(12));
        let fallback = ActiveCount::resolve(None, 4);
        assert!(fallback.is_approximate());
        assert_eq!(fallback.value(), 4);
    }
}
