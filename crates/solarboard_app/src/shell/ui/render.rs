use solarboard_core::{
    ActivityRow, DashboardViewModel, KpiCards, ProjectCardView, ProjectDetailsView,
    ProjectListView, ProjectsPanel, StatusFilter, Tab, ViewMode,
};

const GRID_COLUMNS: usize = 3;
const CARD_WIDTH: usize = 30;
const RULE_WIDTH: usize = 96;

/// Draws one full frame of the dashboard as plain text.
pub fn render(view: &DashboardViewModel) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Solarboard | role: {}", view.role));
    lines.push(tab_bar(&view.tabs, view.selected_tab));
    lines.push(action_line(view));
    lines.push("=".repeat(RULE_WIDTH));

    match view.selected_tab {
        Tab::Overview => {
            lines.extend(kpi_lines(&view.kpis));
            lines.push(String::new());
            lines.extend(projects_lines(&view.projects));
            lines.push(String::new());
            lines.extend(activity_lines(&view.activity));
        }
        Tab::Projects => lines.extend(projects_lines(&view.projects)),
        other => lines.push(format!(
            "{}: this section is not available yet.",
            other.label()
        )),
    }

    if let Some(details) = &view.details {
        lines.push(String::new());
        lines.extend(details_lines(details));
    }

    lines.join("\n")
}

fn tab_bar(tabs: &[Tab], selected: Tab) -> String {
    tabs.iter()
        .map(|tab| {
            if *tab == selected {
                format!("[{}]", tab.label())
            } else {
                format!(" {} ", tab.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn action_line(view: &DashboardViewModel) -> String {
    let mut actions = Vec::new();
    if view.can_create_project {
        actions.push("create project");
    }
    if view.can_edit_project {
        actions.push("edit project");
    }
    if view.can_export_reports {
        actions.push("export reports");
    }
    if actions.is_empty() {
        "Actions: none (read only)".to_string()
    } else {
        format!("Actions: {}", actions.join(", "))
    }
}

fn kpi_lines(kpis: &KpiCards) -> Vec<String> {
    let summary = &kpis.summary;
    let marker = if kpis.active.is_approximate() { "~" } else { "" };
    vec![
        format!(
            "Total projects: {}   Active: {}{}   Completed: {}   Avg progress: {}%",
            format_with_commas(summary.total_projects as u64),
            marker,
            format_with_commas(kpis.active.value()),
            format_with_commas(summary.completed_projects as u64),
            summary.average_progress
        ),
        format!(
            "Capacity: {} kW   Budget: {}   Spent: {} ({:.1}%)",
            format_decimal(summary.total_capacity_kw),
            format_money(summary.total_budget),
            format_money(summary.total_spent),
            summary.budget_utilization
        ),
    ]
}

fn projects_lines(panel: &ProjectsPanel) -> Vec<String> {
    match panel {
        ProjectsPanel::Loading => vec!["Loading projects...".to_string()],
        ProjectsPanel::Failed { message } => vec![
            format!("! Could not load projects: {}", message),
            "  Type `retry` to try again.".to_string(),
        ],
        ProjectsPanel::Ready(list) => {
            let mut lines = vec![toolbar(list), "-".repeat(RULE_WIDTH)];
            if list.is_empty() {
                lines.push("No projects match the current filters.".to_string());
            } else {
                match list.view_mode {
                    ViewMode::Grid => lines.extend(grid_lines(&list.cards)),
                    ViewMode::List => lines.extend(list.cards.iter().map(list_row)),
                }
            }
            lines.push("-".repeat(RULE_WIDTH));
            lines.push(pagination_footer(list));
            lines
        }
    }
}

fn toolbar(list: &ProjectListView) -> String {
    let status = match list.status_filter {
        StatusFilter::All => "All",
        StatusFilter::Only(status) => status.label(),
    };
    let layout = match list.view_mode {
        ViewMode::Grid => "grid",
        ViewMode::List => "list",
    };
    format!(
        "Search: {:?} | Status: {} | Sort: {} | View: {}",
        list.search,
        status,
        list.sort_key.label(),
        layout
    )
}

fn grid_lines(cards: &[ProjectCardView]) -> Vec<String> {
    let mut lines = Vec::new();
    for row in cards.chunks(GRID_COLUMNS) {
        let cells: Vec<[String; 4]> = row.iter().map(card_cell).collect();
        for line in 0..4 {
            let joined = cells
                .iter()
                .map(|cell| fit(&cell[line], CARD_WIDTH))
                .collect::<Vec<_>>()
                .join(" | ");
            lines.push(joined.trim_end().to_string());
        }
        lines.push(String::new());
    }
    lines.pop();
    lines
}

fn card_cell(card: &ProjectCardView) -> [String; 4] {
    [
        format!("#{} {}", card.project_id, card.name),
        format!("{} | {} priority", card.status.label(), card.priority),
        format!("{} | {}%", format_capacity(card.capacity_kw), card.progress),
        card.completion.to_string(),
    ]
}

fn list_row(card: &ProjectCardView) -> String {
    format!(
        "#{:<5} {} {} {} {:>4}% {:<7} {}",
        card.project_id,
        fit(&card.name, 24),
        fit(card.status.label(), 12),
        fit(&format_capacity(card.capacity_kw), 12),
        card.progress,
        card.priority,
        card.completion
    )
}

fn pagination_footer(list: &ProjectListView) -> String {
    let mut footer = format!(
        "Page {} of {} ({} projects)",
        list.page,
        list.total_pages.max(1),
        format_with_commas(list.total_matching as u64)
    );
    if list.has_previous {
        footer.push_str("  < prev");
    }
    if list.has_next {
        footer.push_str("  next >");
    }
    footer
}

fn activity_lines(activity: &[ActivityRow]) -> Vec<String> {
    let mut lines = vec!["Recent activity".to_string()];
    if activity.is_empty() {
        lines.push("  No recent activity.".to_string());
    }
    lines.extend(activity.iter().map(|row| {
        format!(
            "  {}  {} reported on {} ({})",
            row.submitted_at.format("%Y-%m-%d %H:%M"),
            row.author_name,
            row.project_name,
            row.approval.label()
        )
    }));
    lines
}

fn details_lines(details: &ProjectDetailsView) -> Vec<String> {
    let card = &details.card;
    let mut lines = vec![format!("+-- Project #{}: {} ", card.project_id, card.name)];

    let mut contact = card.client_name.clone();
    if let Some(email) = &details.client_email {
        contact.push_str(&format!(" <{}>", email));
    }
    if let Some(phone) = &details.client_phone {
        contact.push_str(&format!(" {}", phone));
    }

    lines.push(format!("| Address:   {}", card.address));
    lines.push(format!("| Client:    {}", contact));
    lines.push(format!("| Manager:   {}", card.manager_name));
    lines.push(format!(
        "| Status:    {} ({} priority)",
        card.status.label(),
        card.priority
    ));
    lines.push(format!("| Capacity:  {}", format_capacity(card.capacity_kw)));

    let end = match details.estimated_end_date {
        Some(end) => end.format("%Y-%m-%d").to_string(),
        None => "open".to_string(),
    };
    lines.push(format!(
        "| Schedule:  {} -> {} ({})",
        details.start_date.format("%Y-%m-%d"),
        end,
        card.completion
    ));
    lines.push(format!(
        "| Tasks:     {}/{} ({}%)",
        details.completed_task_count, details.task_count, card.progress
    ));

    if let Some(equipment) = &details.equipment {
        let panels = equipment
            .panel_count
            .map(|count| format!("{} panels", count))
            .unwrap_or_else(|| "panels n/a".to_string());
        lines.push(format!(
            "| Equipment: {}, {}, inverter {}",
            panels,
            equipment.panel_model.as_deref().unwrap_or("model n/a"),
            equipment.inverter_model.as_deref().unwrap_or("n/a")
        ));
    }
    if let Some(financial) = details.financial {
        lines.push(format!(
            "| Budget:    {} (spent {})",
            format_money(financial.budget),
            format_money(financial.spent)
        ));
    }

    lines.push("+-- type `close` to dismiss".to_string());
    lines
}

fn format_capacity(capacity_kw: Option<f64>) -> String {
    match capacity_kw {
        Some(kw) => format!("{} kW", format_decimal(kw)),
        None => "n/a kW".to_string(),
    }
}

fn format_money(amount: f64) -> String {
    format!("${}", format_with_commas(amount.max(0.0).round() as u64))
}

/// One decimal place with thousands separators; negatives display as zero.
fn format_decimal(value: f64) -> String {
    let fixed = format!("{:.1}", value.max(0.0));
    match fixed.split_once('.') {
        Some((whole, fraction)) => match whole.parse::<u64>() {
            Ok(whole) => format!("{}.{}", format_with_commas(whole), fraction),
            Err(_) => fixed,
        },
        None => fixed,
    }
}

fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

/// Truncates to `width` characters and pads with spaces.
fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        format!("{:<width$}", text, width = width)
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(3)).collect();
        cut.push_str("...");
        cut
    }
}
