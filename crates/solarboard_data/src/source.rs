use crate::{DailyReportDto, FetchError, ProjectDto, ProjectPageDto, ProjectQuery};

/// Read side of the project API.
#[async_trait::async_trait]
pub trait ProjectSource: Send + Sync {
    async fn get_all_projects(&self, query: &ProjectQuery) -> Result<ProjectPageDto, FetchError>;

    async fn get_recent_reports(&self, limit: u32) -> Result<Vec<DailyReportDto>, FetchError>;
}

/// Walks the paged endpoint until `total_count` items are collected or a page comes back empty.
pub async fn collect_all_projects(
    source: &dyn ProjectSource,
    page_size: u32,
) -> Result<Vec<ProjectDto>, FetchError> {
    let page_size = page_size.max(1);
    let mut items = Vec::new();
    let mut page_number = 1;
    loop {
        let page = source
            .get_all_projects(&ProjectQuery::page(page_number, page_size))
            .await?;
        let received = page.items.len();
        items.extend(page.items);
        if received == 0 || items.len() as u64 >= page.total_count {
            return Ok(items);
        }
        page_number += 1;
    }
}

/// Runs a one-item status query and returns only `total_count`.
pub async fn count_projects(source: &dyn ProjectSource, status: &str) -> Result<u64, FetchError> {
    let query = ProjectQuery::page(1, 1).with_status(status);
    Ok(source.get_all_projects(&query).await?.total_count)
}
