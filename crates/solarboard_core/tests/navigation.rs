use solarboard_core::{is_action_allowed, is_tab_visible, visible_tabs, Action, Role, Tab};

#[test]
fn every_role_sees_unrestricted_tabs() {
    for role in Role::ALL {
        let tabs = visible_tabs(role);
        assert_eq!(&tabs[..2], &[Tab::Overview, Tab::Projects], "{role:?}");
    }
}

#[test]
fn visibility_follows_the_role_table() {
    assert_eq!(
        visible_tabs(Role::Admin),
        vec![
            Tab::Overview,
            Tab::Projects,
            Tab::Construction,
            Tab::Planning,
            Tab::Reports,
            Tab::Analytics,
        ]
    );
    assert_eq!(
        visible_tabs(Role::Supervisor),
        vec![Tab::Overview, Tab::Projects, Tab::Construction, Tab::Reports]
    );
    assert_eq!(visible_tabs(Role::Viewer), vec![Tab::Overview, Tab::Projects]);
}

#[test]
fn visible_tabs_agree_with_single_tab_check() {
    for role in Role::ALL {
        let tabs = visible_tabs(role);
        for tab in [
            Tab::Overview,
            Tab::Projects,
            Tab::Construction,
            Tab::Planning,
            Tab::Reports,
            Tab::Analytics,
        ] {
            assert_eq!(tabs.contains(&tab), is_tab_visible(tab, role));
        }
    }
}

#[test]
fn actions_are_gated_by_role() {
    assert!(is_action_allowed(Action::CreateProject, Role::ProjectManager));
    assert!(!is_action_allowed(Action::CreateProject, Role::Supervisor));
    assert!(is_action_allowed(Action::EditProject, Role::Supervisor));
    assert!(!is_action_allowed(Action::EditProject, Role::Technician));
    assert!(is_action_allowed(Action::ExportReport, Role::Technician));
    assert!(!is_action_allowed(Action::ExportReport, Role::Viewer));
}

#[test]
fn roles_and_tabs_parse_from_text() {
    assert_eq!(Role::parse("Manager"), Some(Role::ProjectManager));
    assert_eq!(Role::parse(" tech "), Some(Role::Technician));
    assert_eq!(Role::parse("owner"), None);
    assert_eq!(Tab::parse("analytics"), Some(Tab::Analytics));
    assert_eq!(Tab::parse("gantt"), None);
}
