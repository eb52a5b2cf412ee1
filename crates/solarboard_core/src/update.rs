use crate::kpi::ACTIVE_STATUSES;
use crate::state::ProjectsLoad;
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted | Msg::RefreshClicked => {
            let mut effects = Vec::with_capacity(3);
            effects.push(request_projects(&mut state));
            effects.push(request_active_count(&mut state));
            effects.push(request_reports(&mut state));
            effects
        }
        Msg::Unmounted => {
            *state.pending_mut() = Default::default();
            state.set_details(None);
            Vec::new()
        }
        Msg::RetryClicked => {
            // Retry only exists on the error panel.
            if matches!(state.projects(), ProjectsLoad::Failed(_)) {
                state.set_projects(ProjectsLoad::Loading);
                vec![request_projects(&mut state)]
            } else {
                Vec::new()
            }
        }
        Msg::ProjectsLoaded { request, result } => {
            if state.pending().projects != Some(request) {
                return (state, Vec::new());
            }
            state.pending_mut().projects = None;
            match result {
                Ok(records) => {
                    state.set_projects(ProjectsLoad::Loaded(records));
                    state.clamp_page();
                }
                Err(message) => {
                    state.set_projects(ProjectsLoad::Failed(message));
                    state.set_details(None);
                }
            }
            Vec::new()
        }
        Msg::ActiveCountLoaded { request, result } => {
            if state.pending().active_count != Some(request) {
                return (state, Vec::new());
            }
            state.pending_mut().active_count = None;
            // A failed count degrades to the loaded list length in the view.
            state.set_active_count(result.ok());
            Vec::new()
        }
        Msg::ReportsLoaded { request, result } => {
            if state.pending().reports != Some(request) {
                return (state, Vec::new());
            }
            state.pending_mut().reports = None;
            state.set_reports(result.unwrap_or_default());
            Vec::new()
        }
        Msg::SearchChanged(search) => {
            if state.view_state().search() != search {
                state.view_state_mut().set_search(search);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::StatusFilterChanged(filter) => {
            if state.view_state().status_filter() != filter {
                state.view_state_mut().set_status_filter(filter);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SortChanged(key) => {
            if state.view_state().sort_key() != key {
                state.view_state_mut().set_sort_key(key);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ViewModeChanged(mode) => {
            if state.view_state().view_mode() != mode {
                state.view_state_mut().set_view_mode(mode);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NextPage => {
            let page = state.view_state().page();
            if page < state.total_pages() {
                state.view_state_mut().set_page(page + 1);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::PreviousPage => {
            let page = state.view_state().page();
            if page > 1 {
                state.view_state_mut().set_page(page - 1);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::PageSelected(page) => {
            let before = state.view_state().page();
            state.view_state_mut().set_page(page);
            state.clamp_page();
            if state.view_state().page() != before {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::TabSelected(tab) => {
            state.select_tab(tab);
            Vec::new()
        }
        Msg::RoleChanged(role) => {
            if state.role() != role {
                state.set_role(role);
            }
            Vec::new()
        }
        Msg::ProjectClicked(project_id) => {
            if state.contains_project(project_id) {
                vec![Effect::NavigateToProject { project_id }]
            } else {
                Vec::new()
            }
        }
        Msg::DetailsRequested(project_id) => {
            if state.contains_project(project_id) {
                state.set_details(Some(project_id));
            }
            Vec::new()
        }
        Msg::DetailsClosed => {
            state.set_details(None);
            Vec::new()
        }
    };

    (state, effects)
}

fn request_projects(state: &mut AppState) -> Effect {
    let request = state.next_request();
    state.pending_mut().projects = Some(request);
    Effect::FetchProjects { request }
}

fn request_active_count(state: &mut AppState) -> Effect {
    let request = state.next_request();
    state.pending_mut().active_count = Some(request);
    Effect::FetchActiveCount {
        request,
        statuses: ACTIVE_STATUSES.to_vec(),
    }
}

fn request_reports(state: &mut AppState) -> Effect {
    let request = state.next_request();
    state.pending_mut().reports = Some(request);
    Effect::FetchRecentReports { request }
}
