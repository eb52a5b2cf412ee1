//! Wire DTO to core record mapping.
use solarboard_core::{
    ApprovalStatus, ClientInfo, EquipmentInfo, FinancialInfo, ManagerRef, ProjectRecord,
    ProjectStatus, ReportSummary,
};
use solarboard_data::{parse_timestamp, DailyReportDto, ProjectDto};

/// A project whose start date cannot be parsed is dropped.
pub fn project_from_dto(dto: ProjectDto) -> Option<ProjectRecord> {
    let start_date = parse_timestamp(&dto.start_date)?;
    Some(ProjectRecord {
        id: dto.id,
        name: dto.name,
        address: dto.address,
        client: ClientInfo {
            name: dto.client.name,
            email: dto.client.email,
            phone: dto.client.phone,
        },
        status: ProjectStatus::parse(&dto.status),
        capacity_kw: dto.capacity,
        start_date,
        estimated_end_date: dto.estimated_end_date.as_deref().and_then(parse_timestamp),
        task_count: dto.task_count,
        completed_task_count: dto.completed_task_count,
        manager: ManagerRef {
            id: dto.manager.id,
            name: dto.manager.name,
        },
        equipment: dto.equipment.map(|equipment| EquipmentInfo {
            panel_count: equipment.panel_count,
            panel_model: equipment.panel_model,
            inverter_model: equipment.inverter_model,
        }),
        financial: dto.financial.map(|financial| FinancialInfo {
            budget: financial.budget,
            spent: financial.spent,
        }),
    })
}

pub fn report_from_dto(dto: DailyReportDto) -> Option<ReportSummary> {
    Some(ReportSummary {
        submitted_at: parse_timestamp(&dto.submitted_at)?,
        author_name: dto.author_name,
        project_name: dto.project_name,
        approval: ApprovalStatus::parse(&dto.approval_status),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use solarboard_data::{ClientDto, FinancialDto, ManagerDto};

    fn dto(start_date: &str) -> ProjectDto {
        ProjectDto {
            id: 9,
            name: "Harbour Array".to_string(),
            address: "1 Quay St".to_string(),
            client: ClientDto {
                name: "Port Authority".to_string(),
                email: None,
                phone: Some("555-0100".to_string()),
            },
            status: "OnHold".to_string(),
            capacity: Some(250.0),
            start_date: start_date.to_string(),
            estimated_end_date: Some("2024-12-31".to_string()),
            task_count: 20,
            completed_task_count: 5,
            manager: ManagerDto {
                id: 3,
                name: "Dana Reyes".to_string(),
            },
            equipment: None,
            financial: Some(FinancialDto {
                budget: 100_000.0,
                spent: 12_500.0,
            }),
        }
    }

    #[test]
    fn project_dto_maps_onto_record() {
        let record = project_from_dto(dto("2024-01-10T08:00:00Z")).expect("valid record");
        assert_eq!(record.status, ProjectStatus::OnHold);
        assert_eq!(record.client.phone.as_deref(), Some("555-0100"));
        assert_eq!(record.manager.name, "Dana Reyes");
        assert_eq!(
            record.estimated_end_date,
            Some(Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap())
        );
        assert_eq!(record.financial.map(|f| f.spent), Some(12_500.0));
    }

    #[test]
    fn unparseable_start_date_drops_the_project() {
        assert!(project_from_dto(dto("soon")).is_none());
    }
}
