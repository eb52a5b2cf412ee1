use chrono::{TimeZone, Utc};
use solarboard_core::{
    update, AppState, Effect, Msg, ProjectRecord, ProjectStatus, ProjectsPanel, Role, SortKey,
    StatusFilter, Tab, ViewMode,
};

fn init_logging() {
    board_logging::initialize_for_tests();
}

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
}

fn records(count: u64) -> Vec<ProjectRecord> {
    (1..=count)
        .map(|id| {
            let status = if id % 2 == 0 {
                ProjectStatus::InProgress
            } else {
                ProjectStatus::Planning
            };
            ProjectRecord::new(id, format!("Site {id:02}"), status)
        })
        .collect()
}

/// Mounts the dashboard and answers the project fetch with `count` records.
fn loaded(count: u64) -> AppState {
    let (state, effects) = update(AppState::new(), Msg::Mounted);
    let request = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchProjects { request } => Some(*request),
            _ => None,
        })
        .expect("project fetch effect");
    let (state, _) = update(
        state,
        Msg::ProjectsLoaded {
            request,
            result: Ok(records(count)),
        },
    );
    state
}

fn list(state: &AppState) -> solarboard_core::ProjectListView {
    match state.view(now()).projects {
        ProjectsPanel::Ready(list) => list,
        other => panic!("expected ready list, got {other:?}"),
    }
}

#[test]
fn next_and_previous_stop_at_boundaries() {
    init_logging();
    let state = loaded(10);
    assert_eq!(list(&state).page, 1);
    assert!(!list(&state).has_previous);

    let (mut state, _) = update(state, Msg::PreviousPage);
    assert_eq!(list(&state).page, 1);
    state.consume_dirty();
    let (mut state, _) = update(state, Msg::PreviousPage);
    assert!(!state.consume_dirty());

    let (state, _) = update(state, Msg::NextPage);
    let view = list(&state);
    assert_eq!(view.page, 2);
    assert_eq!(view.cards.len(), 1);
    assert!(!view.has_next);

    let (state, _) = update(state, Msg::NextPage);
    assert_eq!(list(&state).page, 2);

    let (state, _) = update(state, Msg::PreviousPage);
    assert_eq!(list(&state).page, 1);
}

#[test]
fn direct_page_requests_are_clamped() {
    init_logging();
    let (state, _) = update(loaded(10), Msg::PageSelected(40));
    assert_eq!(list(&state).page, 2);

    let (state, _) = update(state, Msg::PageSelected(0));
    assert_eq!(list(&state).page, 1);
}

#[test]
fn filter_changes_reset_page_but_sort_does_not() {
    init_logging();
    let (state, _) = update(loaded(30), Msg::PageSelected(3));
    let (state, _) = update(state, Msg::SortChanged(SortKey::Progress));
    assert_eq!(list(&state).page, 3);
    assert_eq!(list(&state).sort_key, SortKey::Progress);

    let (state, _) = update(state, Msg::SearchChanged("site".to_string()));
    assert_eq!(list(&state).page, 1);

    let (state, _) = update(state, Msg::PageSelected(2));
    let (state, _) = update(
        state,
        Msg::StatusFilterChanged(StatusFilter::Only(ProjectStatus::InProgress)),
    );
    let view = list(&state);
    assert_eq!(view.page, 1);
    assert_eq!(view.total_matching, 15);

    let (state, _) = update(state, Msg::PageSelected(2));
    let (state, _) = update(state, Msg::ViewModeChanged(ViewMode::List));
    assert_eq!(list(&state).page, 1);
    assert_eq!(list(&state).view_mode, ViewMode::List);
}

#[test]
fn reload_with_fewer_records_pulls_page_back_in_range() {
    init_logging();
    let (state, _) = update(loaded(30), Msg::PageSelected(4));
    assert_eq!(list(&state).page, 4);

    let (state, effects) = update(state, Msg::RefreshClicked);
    let request = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchProjects { request } => Some(*request),
            _ => None,
        })
        .expect("refresh refetches projects");
    let (state, _) = update(
        state,
        Msg::ProjectsLoaded {
            request,
            result: Ok(records(5)),
        },
    );
    assert_eq!(list(&state).page, 1);
    assert_eq!(list(&state).total_pages, 1);
}

#[test]
fn empty_list_renders_empty_state_with_zero_kpis() {
    init_logging();
    let state = loaded(0);
    let view = state.view(now());
    let ProjectsPanel::Ready(list) = &view.projects else {
        panic!("expected ready list");
    };
    assert!(list.is_empty());
    assert_eq!(list.page, 1);
    assert_eq!(view.kpis.summary.total_projects, 0);
    assert_eq!(view.kpis.summary.budget_utilization, 0.0);
    assert_eq!(view.kpis.active.value(), 0);
}

#[test]
fn hidden_tabs_cannot_be_selected() {
    init_logging();
    let state = AppState::with_role(Role::Viewer);
    let (mut state, _) = update(state, Msg::TabSelected(Tab::Analytics));
    assert_eq!(state.selected_tab(), Tab::Overview);
    assert!(!state.consume_dirty());

    let (state, _) = update(state, Msg::TabSelected(Tab::Projects));
    assert_eq!(state.selected_tab(), Tab::Projects);
}

#[test]
fn losing_a_role_falls_back_to_first_visible_tab() {
    init_logging();
    let state = AppState::with_role(Role::Admin);
    let (state, _) = update(state, Msg::TabSelected(Tab::Planning));
    assert_eq!(state.selected_tab(), Tab::Planning);

    let (state, _) = update(state, Msg::RoleChanged(Role::Technician));
    assert_eq!(state.selected_tab(), Tab::Overview);
    let view = state.view(now());
    assert_eq!(
        view.tabs,
        vec![Tab::Overview, Tab::Projects, Tab::Construction]
    );
    assert!(!view.can_create_project);
}

#[test]
fn project_click_navigates_only_for_known_projects() {
    init_logging();
    let state = loaded(3);
    let (state, effects) = update(state, Msg::ProjectClicked(2));
    assert_eq!(effects, vec![Effect::NavigateToProject { project_id: 2 }]);

    let (_state, effects) = update(state, Msg::ProjectClicked(99));
    assert!(effects.is_empty());
}

#[test]
fn details_modal_opens_and_closes() {
    init_logging();
    let (state, _) = update(loaded(3), Msg::DetailsRequested(3));
    let details = state.view(now()).details.expect("details open");
    assert_eq!(details.card.project_id, 3);
    assert_eq!(details.card.name, "Site 03");

    let (state, _) = update(state, Msg::DetailsClosed);
    assert!(state.view(now()).details.is_none());

    let (state, _) = update(state, Msg::DetailsRequested(42));
    assert!(state.view(now()).details.is_none());
}
