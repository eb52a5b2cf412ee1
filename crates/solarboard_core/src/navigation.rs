//! Role-gated tabs and actions.
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    Admin,
    ProjectManager,
    Supervisor,
    Technician,
    #[default]
    Viewer,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::ProjectManager,
        Role::Supervisor,
        Role::Technician,
        Role::Viewer,
    ];

    /// Accepts the canonical names case-insensitively, plus a few short forms.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" | "administrator" => Some(Role::Admin),
            "projectmanager" | "project_manager" | "manager" => Some(Role::ProjectManager),
            "supervisor" => Some(Role::Supervisor),
            "technician" | "tech" => Some(Role::Technician),
            "viewer" => Some(Role::Viewer),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::ProjectManager => "Project Manager",
            Role::Supervisor => "Supervisor",
            Role::Technician => "Technician",
            Role::Viewer => "Viewer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Overview,
    Projects,
    Construction,
    Planning,
    Reports,
    Analytics,
}

impl Tab {
    pub fn parse(raw: &str) -> Option<Self> {
        TAB_TABLE
            .iter()
            .map(|entry| entry.tab)
            .find(|tab| tab.label().eq_ignore_ascii_case(raw.trim()))
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Projects => "Projects",
            Tab::Construction => "Construction",
            Tab::Planning => "Planning",
            Tab::Reports => "Reports",
            Tab::Analytics => "Analytics",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TabEntry {
    pub tab: Tab,
    /// `None` means every role sees the tab.
    pub allowed_roles: Option<&'static [Role]>,
}

pub static TAB_TABLE: [TabEntry; 6] = [
    TabEntry {
        tab: Tab::Overview,
        allowed_roles: None,
    },
    TabEntry {
        tab: Tab::Projects,
        allowed_roles: None,
    },
    TabEntry {
        tab: Tab::Construction,
        allowed_roles: Some(&[
            Role::Admin,
            Role::ProjectManager,
            Role::Supervisor,
            Role::Technician,
        ]),
    },
    TabEntry {
        tab: Tab::Planning,
        allowed_roles: Some(&[Role::Admin, Role::ProjectManager]),
    },
    TabEntry {
        tab: Tab::Reports,
        allowed_roles: Some(&[Role::Admin, Role::ProjectManager, Role::Supervisor]),
    },
    TabEntry {
        tab: Tab::Analytics,
        allowed_roles: Some(&[Role::Admin, Role::ProjectManager]),
    },
];

impl TabEntry {
    fn visible_to(&self, role: Role) -> bool {
        self.allowed_roles.map_or(true, |roles| roles.contains(&role))
    }
}

/// Tabs the role may see, in table order.
pub fn visible_tabs(role: Role) -> Vec<Tab> {
    TAB_TABLE
        .iter()
        .filter(|entry| entry.visible_to(role))
        .map(|entry| entry.tab)
        .collect()
}

pub fn is_tab_visible(tab: Tab, role: Role) -> bool {
    TAB_TABLE
        .iter()
        .any(|entry| entry.tab == tab && entry.visible_to(role))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateProject,
    EditProject,
    ExportReport,
}

pub fn is_action_allowed(action: Action, role: Role) -> bool {
    match action {
        Action::CreateProject => matches!(role, Role::Admin | Role::ProjectManager),
        Action::EditProject => matches!(
            role,
            Role::Admin | Role::ProjectManager | Role::Supervisor
        ),
        Action::ExportReport => !matches!(role, Role::Viewer),
    }
}
