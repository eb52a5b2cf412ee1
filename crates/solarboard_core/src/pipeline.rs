//! Filter, sort and paginate the project list for display.
use std::cmp::Ordering;

use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed};

use crate::metrics::progress;
use crate::{ProjectRecord, ProjectStatus};

/// Cards per page in both grid and list layouts.
pub const PAGE_SIZE: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Status,
    Capacity,
    StartDate,
    Progress,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Status => "status",
            SortKey::Capacity => "capacity",
            SortKey::StartDate => "start date",
            SortKey::Progress => "progress",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ProjectStatus),
}

impl StatusFilter {
    pub fn accepts(self, status: ProjectStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Presentation state of the project collection.
///
/// Changing the search term, status filter or view mode sends the user back to
/// page 1. Changing the sort key keeps the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    search: String,
    status_filter: StatusFilter,
    sort_key: SortKey,
    view_mode: ViewMode,
    page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            status_filter: StatusFilter::All,
            sort_key: SortKey::Name,
            view_mode: ViewMode::Grid,
            page: 1,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
        self.page = 1;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        self.page = 1;
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    /// Sets the page without any bounds check; `paginate` yields an empty
    /// slice for pages past the end. Zero is lifted to 1.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Pulls the page back into `[1, max(total_pages, 1)]`. Returns true if it moved.
    pub fn clamp_page(&mut self, total_pages: usize) -> bool {
        let clamped = self.page.clamp(1, total_pages.max(1));
        let moved = clamped != self.page;
        self.page = clamped;
        moved
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DerivedPage<'a> {
    pub page_items: Vec<&'a ProjectRecord>,
    pub total_pages: usize,
    pub total_matching: usize,
}

pub fn matches(record: &ProjectRecord, search: &str, status_filter: StatusFilter) -> bool {
    status_filter.accepts(record.status) && matches_search(record, search)
}

fn matches_search(record: &ProjectRecord, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    [
        record.name.as_str(),
        record.address.as_str(),
        record.client.name.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

pub fn filter<'a>(
    records: &'a [ProjectRecord],
    search: &str,
    status_filter: StatusFilter,
) -> Vec<&'a ProjectRecord> {
    records
        .iter()
        .filter(|record| matches(record, search, status_filter))
        .collect()
}

/// Stable sort by `key`, falling back to ascending id so equal keys have a
/// deterministic order.
pub fn sort(records: &mut [&ProjectRecord], key: SortKey) {
    let collator = text_collator();
    records.sort_by(|a, b| {
        compare(a, b, key, collator.as_ref()).then_with(|| a.id.cmp(&b.id))
    });
}

fn compare(
    a: &ProjectRecord,
    b: &ProjectRecord,
    key: SortKey,
    collator: Option<&CollatorBorrowed<'static>>,
) -> Ordering {
    match key {
        SortKey::Name => compare_text(&a.name, &b.name, collator),
        SortKey::Status => compare_text(a.status.as_str(), b.status.as_str(), collator),
        SortKey::Capacity => {
            let a = a.capacity_kw.unwrap_or(0.0);
            let b = b.capacity_kw.unwrap_or(0.0);
            b.total_cmp(&a)
        }
        SortKey::StartDate => a.start_date.cmp(&b.start_date),
        SortKey::Progress => progress(b).cmp(&progress(a)),
    }
}

/// Root-locale collation at secondary strength, so case is ignored but accents
/// are not.
fn text_collator() -> Option<CollatorBorrowed<'static>> {
    let mut options = CollatorOptions::default();
    options.strength = Some(Strength::Secondary);
    Collator::try_new(Default::default(), options).ok()
}

/// Collated order first, then exact so "Alpha" and "alpha" still have a fixed order.
fn compare_text(a: &str, b: &str, collator: Option<&CollatorBorrowed<'static>>) -> Ordering {
    let collated = match collator {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    };
    collated.then_with(|| a.cmp(b))
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Slice `[(page-1)*page_size, page*page_size)`. Page 0 is treated as page 1.
pub fn paginate<T: Copy>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let start = page.max(1).saturating_sub(1).saturating_mul(page_size);
    items.iter().skip(start).take(page_size).copied().collect()
}

pub fn derive<'a>(records: &'a [ProjectRecord], view: &ViewState) -> DerivedPage<'a> {
    let mut matching = filter(records, &view.search, view.status_filter);
    sort(&mut matching, view.sort_key);
    let total_matching = matching.len();
    DerivedPage {
        page_items: paginate(&matching, view.page, PAGE_SIZE),
        total_pages: total_pages(total_matching, PAGE_SIZE),
        total_matching,
    }
}
