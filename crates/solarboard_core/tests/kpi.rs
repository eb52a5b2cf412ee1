use pretty_assertions::assert_eq;
use solarboard_core::kpi::summarize;
use solarboard_core::{FinancialInfo, KpiSummary, ProjectRecord, ProjectStatus};

fn project(
    id: u64,
    status: ProjectStatus,
    capacity: Option<f64>,
    budget: Option<(f64, f64)>,
) -> ProjectRecord {
    let mut record = ProjectRecord::new(id, format!("Project {id}"), status);
    record.capacity_kw = capacity;
    record.financial = budget.map(|(budget, spent)| FinancialInfo { budget, spent });
    record
}

#[test]
fn empty_list_yields_zeroed_summary() {
    assert_eq!(summarize(&[]), KpiSummary::default());
    assert!(!summarize(&[]).budget_utilization.is_nan());
}

#[test]
fn sums_capacity_and_financials() {
    let mut done = project(3, ProjectStatus::Completed, None, None);
    done.task_count = 4;
    done.completed_task_count = 4;
    let records = vec![
        project(1, ProjectStatus::InProgress, Some(100.0), Some((50_000.0, 20_000.0))),
        project(2, ProjectStatus::Planning, Some(50.5), Some((30_000.0, 4_000.0))),
        done,
    ];

    let summary = summarize(&records);
    assert_eq!(summary.total_projects, 3);
    assert_eq!(summary.completed_projects, 1);
    assert_eq!(summary.total_capacity_kw, 150.5);
    assert_eq!(summary.total_budget, 80_000.0);
    assert_eq!(summary.total_spent, 24_000.0);
    assert_eq!(summary.budget_utilization, 30.0);
    assert_eq!(summary.average_progress, 33);
}

#[test]
fn spending_without_budget_uses_unit_denominator() {
    let records = vec![project(1, ProjectStatus::OnHold, None, Some((0.0, 0.25)))];
    assert_eq!(summarize(&records).budget_utilization, 25.0);
}
