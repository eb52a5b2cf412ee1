use std::fs;
use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use solarboard_data::{
    DataEvent, DataHandle, FailureKind, ProjectQuery, ProjectSource, SnapshotProjectSource,
};
use tempfile::TempDir;

fn write_snapshot(dir: &TempDir) -> std::path::PathBuf {
    let projects: Vec<serde_json::Value> = (1..=12)
        .map(|id| {
            let status = match id % 3 {
                0 => "Completed",
                1 => "Planning",
                _ => "InProgress",
            };
            json!({
                "id": id,
                "name": format!("Site {id}"),
                "status": status,
                "startDate": "2024-01-01T00:00:00Z"
            })
        })
        .collect();
    let body = json!({
        "projects": projects,
        "reports": [
            { "authorName": "Ana", "projectName": "Site 1", "submittedAt": "2024-06-01T08:00:00Z" },
            { "authorName": "Ben", "projectName": "Site 2", "submittedAt": "2024-06-02T08:00:00Z" },
            { "authorName": "Cy", "projectName": "Site 3", "submittedAt": "2024-05-30T08:00:00Z" }
        ]
    });
    let path = dir.path().join("snapshot.json");
    fs::write(&path, body.to_string()).unwrap();
    path
}

#[tokio::test]
async fn snapshot_filters_by_status_and_pages() {
    let temp = TempDir::new().unwrap();
    let source = SnapshotProjectSource::from_path(&write_snapshot(&temp)).unwrap();

    let page = source
        .get_all_projects(&ProjectQuery::page(2, 5))
        .await
        .unwrap();
    assert_eq!(page.total_count, 12);
    let ids: Vec<u64> = page.items.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![6, 7, 8, 9, 10]);

    let active = source
        .get_all_projects(&ProjectQuery::page(1, 1).with_status("Planning, InProgress"))
        .await
        .unwrap();
    assert_eq!(active.total_count, 8);
    assert_eq!(active.items.len(), 1);
}

#[tokio::test]
async fn snapshot_reports_are_newest_first() {
    let temp = TempDir::new().unwrap();
    let source = SnapshotProjectSource::from_path(&write_snapshot(&temp)).unwrap();
    let reports = source.get_recent_reports(2).await.unwrap();
    let authors: Vec<&str> = reports.iter().map(|r| r.author_name.as_str()).collect();
    assert_eq!(authors, vec!["Ben", "Ana"]);
}

#[tokio::test]
async fn snapshot_reports_order_by_instant_across_offsets() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("offsets.json");
    let body = json!({ "reports": [
        // 2024-06-01T03:00Z, the oldest despite the largest local hour.
        { "authorName": "Ana", "projectName": "S1", "submittedAt": "2024-06-01T08:00:00+05:00" },
        { "authorName": "Ben", "projectName": "S2", "submittedAt": "2024-06-01T06:00:00Z" },
        { "authorName": "Cy", "projectName": "S3", "submittedAt": "2024-06-02" },
        { "authorName": "Dee", "projectName": "S4", "submittedAt": "yesterday" }
    ] });
    fs::write(&path, body.to_string()).unwrap();
    let source = SnapshotProjectSource::from_path(&path).unwrap();

    let reports = source.get_recent_reports(3).await.unwrap();
    let authors: Vec<&str> = reports.iter().map(|r| r.author_name.as_str()).collect();
    assert_eq!(authors, vec!["Cy", "Ben", "Ana"]);
}

#[test]
fn missing_or_malformed_snapshot_is_reported() {
    let temp = TempDir::new().unwrap();
    let err = SnapshotProjectSource::from_path(&temp.path().join("absent.json")).unwrap_err();
    assert_eq!(err.kind, FailureKind::Io);

    let bad = temp.path().join("bad.json");
    fs::write(&bad, "{ not json").unwrap();
    let err = SnapshotProjectSource::from_path(&bad).unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[test]
fn data_handle_tags_events_with_request_ids() {
    let temp = TempDir::new().unwrap();
    let source = SnapshotProjectSource::from_path(&write_snapshot(&temp)).unwrap();
    let handle = DataHandle::new(Arc::new(source));

    handle.request_projects(11);
    handle.request_active_count(12, "Planning,InProgress");
    handle.request_reports(13);

    let mut seen = Vec::new();
    while seen.len() < 3 {
        let event = handle
            .recv_timeout(Duration::from_secs(5))
            .expect("event before timeout");
        match event {
            DataEvent::Projects { request, result } => {
                assert_eq!(result.unwrap().len(), 12);
                seen.push(request);
            }
            DataEvent::ActiveCount { request, result } => {
                assert_eq!(result.unwrap(), 8);
                seen.push(request);
            }
            DataEvent::Reports { request, result } => {
                assert_eq!(result.unwrap().len(), 3);
                seen.push(request);
            }
        }
    }
    seen.sort_unstable();
    assert_eq!(seen, vec![11, 12, 13]);
}

#[tokio::test]
async fn bundled_demo_snapshot_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/snapshot.json");
    let source = SnapshotProjectSource::from_path(&path).unwrap();

    let all = solarboard_data::collect_all_projects(&source, 5).await.unwrap();
    assert_eq!(all.len(), 12);
    let active = solarboard_data::count_projects(&source, "Planning,InProgress")
        .await
        .unwrap();
    assert_eq!(active, 7);
    assert_eq!(source.get_recent_reports(10).await.unwrap().len(), 7);
}
