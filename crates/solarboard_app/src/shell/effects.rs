use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use board_logging::{board_error, board_info, board_warn};
use solarboard_core::kpi::status_query;
use solarboard_core::{Effect, Msg};
use solarboard_data::{DataEvent, DataHandle, ProjectSource};

use super::conversions::{project_from_dto, report_from_dto};
use super::ShellEvent;

pub struct EffectRunner {
    data: Arc<DataHandle>,
    events: mpsc::Sender<ShellEvent>,
}

impl EffectRunner {
    pub fn new(source: Arc<dyn ProjectSource>, events: mpsc::Sender<ShellEvent>) -> Self {
        let data = Arc::new(DataHandle::new(source));
        let runner = Self { data, events };
        runner.spawn_event_loop();
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchProjects { request } => {
                    self.data.request_projects(request);
                }
                Effect::FetchActiveCount { request, statuses } => {
                    self.data
                        .request_active_count(request, status_query(&statuses));
                }
                Effect::FetchRecentReports { request } => {
                    self.data.request_reports(request);
                }
                Effect::NavigateToProject { project_id } => {
                    board_info!("Navigate to /projects/{}", project_id);
                    let _ = self
                        .events
                        .send(ShellEvent::Msg(Msg::DetailsRequested(project_id)));
                }
            }
        }
    }

    fn spawn_event_loop(&self) {
        let data = self.data.clone();
        let events = self.events.clone();
        thread::spawn(move || loop {
            match data.recv_timeout(Duration::from_millis(250)) {
                Ok(event) => {
                    if events.send(ShellEvent::Msg(map_event(event))).is_err() {
                        break;
                    }
                }
                Err(mpsc::RecvTimeoutError::Timeout) => {}
                Err(mpsc::RecvTimeoutError::Disconnected) => {
                    board_error!("Data runtime stopped; no further fetch results");
                    break;
                }
            }
        });
    }
}

fn map_event(event: DataEvent) -> Msg {
    match event {
        DataEvent::Projects { request, result } => {
            let result = match result {
                Ok(items) => {
                    let received = items.len();
                    let records: Vec<_> = items.into_iter().filter_map(project_from_dto).collect();
                    if records.len() != received {
                        board_warn!(
                            "Dropped {} project(s) with unreadable dates",
                            received - records.len()
                        );
                    }
                    board_info!("Loaded {} project(s) request={}", records.len(), request);
                    Ok(records)
                }
                Err(err) => {
                    board_warn!("Project list fetch failed request={}: {}", request, err);
                    Err(err.to_string())
                }
            };
            Msg::ProjectsLoaded { request, result }
        }
        DataEvent::ActiveCount { request, result } => {
            if let Err(err) = &result {
                board_warn!(
                    "Active project count failed, using loaded list length: {}",
                    err
                );
            }
            Msg::ActiveCountLoaded {
                request,
                result: result.map_err(|err| err.to_string()),
            }
        }
        DataEvent::Reports { request, result } => {
            let result = match result {
                Ok(items) => Ok(items.into_iter().filter_map(report_from_dto).collect()),
                Err(err) => {
                    board_warn!("Recent reports fetch failed: {}", err);
                    Err(err.to_string())
                }
            };
            Msg::ReportsLoaded { request, result }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solarboard_data::{FailureKind, FetchError};

    #[test]
    fn failed_count_keeps_request_id() {
        let msg = map_event(DataEvent::ActiveCount {
            request: 4,
            result: Err(FetchError {
                kind: FailureKind::Timeout,
                message: "deadline".to_string(),
            }),
        });
        assert_eq!(
            msg,
            Msg::ActiveCountLoaded {
                request: 4,
                result: Err("timeout: deadline".to_string()),
            }
        );
    }
}
