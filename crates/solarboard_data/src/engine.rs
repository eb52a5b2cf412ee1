use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use board_logging::{board_debug, board_error};

use crate::source::{collect_all_projects, count_projects, ProjectSource};
use crate::{DataEvent, RequestId};

/// Page size used when walking the full project list.
pub const LIST_PAGE_SIZE: u32 = 100;
/// Reports requested for the activity feed.
pub const RECENT_REPORTS_LIMIT: u32 = 10;

enum DataCommand {
    Projects { request: RequestId },
    ActiveCount { request: RequestId, statuses: String },
    Reports { request: RequestId },
}

/// Runs fetches on a background tokio runtime and hands results back as
/// `DataEvent`s. Each command is independent; results arrive in completion order.
pub struct DataHandle {
    cmd_tx: mpsc::Sender<DataCommand>,
    event_rx: Mutex<mpsc::Receiver<DataEvent>>,
}

impl DataHandle {
    pub fn new(source: Arc<dyn ProjectSource>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    board_error!("Failed to start data runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let source = source.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = handle_command(source.as_ref(), command).await;
                    let _ = event_tx.send(event);
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Mutex::new(event_rx),
        }
    }

    pub fn request_projects(&self, request: RequestId) {
        let _ = self.cmd_tx.send(DataCommand::Projects { request });
    }

    /// `statuses` is the comma-joined list of wire names to count.
    pub fn request_active_count(&self, request: RequestId, statuses: impl Into<String>) {
        let _ = self.cmd_tx.send(DataCommand::ActiveCount {
            request,
            statuses: statuses.into(),
        });
    }

    pub fn request_reports(&self, request: RequestId) {
        let _ = self.cmd_tx.send(DataCommand::Reports { request });
    }

    /// Blocks for the next event. `Disconnected` means the runtime thread is gone.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<DataEvent, mpsc::RecvTimeoutError> {
        let rx = self
            .event_rx
            .lock()
            .map_err(|_| mpsc::RecvTimeoutError::Disconnected)?;
        rx.recv_timeout(timeout)
    }
}

async fn handle_command(source: &dyn ProjectSource, command: DataCommand) -> DataEvent {
    match command {
        DataCommand::Projects { request } => {
            board_debug!("Fetching project list request={}", request);
            DataEvent::Projects {
                request,
                result: collect_all_projects(source, LIST_PAGE_SIZE).await,
            }
        }
        DataCommand::ActiveCount { request, statuses } => {
            board_debug!("Counting projects request={} status={}", request, statuses);
            DataEvent::ActiveCount {
                request,
                result: count_projects(source, &statuses).await,
            }
        }
        DataCommand::Reports { request } => {
            board_debug!("Fetching recent reports request={}", request);
            DataEvent::Reports {
                request,
                result: source.get_recent_reports(RECENT_REPORTS_LIMIT).await,
            }
        }
    }
}
