use solarboard_core::{Msg, ProjectStatus, Role, SortKey, StatusFilter, Tab, ViewMode};
use thiserror::Error;

pub const HELP_TEXT: &str = "\
Commands:
  search [text]        filter by name, address or client (no text clears)
  status <all|STATUS>  Planning, InProgress, Completed, OnHold, Cancelled, Unknown
  sort <KEY>           name, status, capacity, start, progress
  view <grid|list>     switch layout
  next | prev          move between pages
  page <n>             jump to a page
  tab <name>           overview, projects, construction, planning, reports, analytics
  role <name>          admin, manager, supervisor, technician, viewer
  open <id>            open the project detail view
  details <id>         show the project details panel
  close                close the details panel
  retry                retry a failed project list load
  refresh              reload everything
  help                 show this text
  quit                 exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("unknown command {0:?}; type `help` for the list")]
    UnknownCommand(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("`{command}` does not understand {value:?}")]
    InvalidArgument {
        command: &'static str,
        value: String,
    },
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, ParseCommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "search" => Command::Dispatch(Msg::SearchChanged(rest.to_string())),
        "status" => Command::Dispatch(Msg::StatusFilterChanged(parse_status_filter(rest)?)),
        "sort" => Command::Dispatch(Msg::SortChanged(parse_sort_key(rest)?)),
        "view" => Command::Dispatch(Msg::ViewModeChanged(parse_view_mode(rest)?)),
        "next" => Command::Dispatch(Msg::NextPage),
        "prev" | "previous" => Command::Dispatch(Msg::PreviousPage),
        "page" => Command::Dispatch(Msg::PageSelected(parse_number("page", rest)? as usize)),
        "tab" => {
            let tab = Tab::parse(required("tab", rest)?).ok_or_else(|| invalid("tab", rest))?;
            Command::Dispatch(Msg::TabSelected(tab))
        }
        "role" => {
            let role = Role::parse(required("role", rest)?).ok_or_else(|| invalid("role", rest))?;
            Command::Dispatch(Msg::RoleChanged(role))
        }
        "open" => Command::Dispatch(Msg::ProjectClicked(parse_number("open", rest)?)),
        "details" => Command::Dispatch(Msg::DetailsRequested(parse_number("details", rest)?)),
        "close" => Command::Dispatch(Msg::DetailsClosed),
        "retry" => Command::Dispatch(Msg::RetryClicked),
        "refresh" => Command::Dispatch(Msg::RefreshClicked),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return Err(ParseCommandError::UnknownCommand(word.to_string())),
    };
    Ok(Some(command))
}

fn required<'a>(command: &'static str, value: &'a str) -> Result<&'a str, ParseCommandError> {
    if value.is_empty() {
        Err(ParseCommandError::MissingArgument(command))
    } else {
        Ok(value)
    }
}

fn invalid(command: &'static str, value: &str) -> ParseCommandError {
    ParseCommandError::InvalidArgument {
        command,
        value: value.to_string(),
    }
}

fn parse_number(command: &'static str, value: &str) -> Result<u64, ParseCommandError> {
    required(command, value)?
        .parse()
        .map_err(|_| invalid(command, value))
}

fn parse_status_filter(value: &str) -> Result<StatusFilter, ParseCommandError> {
    let value = required("status", value)?;
    if value.eq_ignore_ascii_case("all") {
        return Ok(StatusFilter::All);
    }
    let squashed: String = value.split_whitespace().collect();
    ProjectStatus::ALL
        .into_iter()
        .chain([ProjectStatus::Unknown])
        .find(|status| status.as_str().eq_ignore_ascii_case(&squashed))
        .map(StatusFilter::Only)
        .ok_or_else(|| invalid("status", value))
}

fn parse_sort_key(value: &str) -> Result<SortKey, ParseCommandError> {
    match required("sort", value)?.to_ascii_lowercase().as_str() {
        "name" => Ok(SortKey::Name),
        "status" => Ok(SortKey::Status),
        "capacity" => Ok(SortKey::Capacity),
        "start" | "startdate" | "start-date" => Ok(SortKey::StartDate),
        "progress" => Ok(SortKey::Progress),
        _ => Err(invalid("sort", value)),
    }
}

fn parse_view_mode(value: &str) -> Result<ViewMode, ParseCommandError> {
    match required("view", value)?.to_ascii_lowercase().as_str() {
        "grid" => Ok(ViewMode::Grid),
        "list" => Ok(ViewMode::List),
        _ => Err(invalid("view", value)),
    }
}
