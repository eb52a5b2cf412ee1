use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use board_logging::{board_debug, board_error, board_info, board_warn};
use chrono::Utc;
use solarboard_core::{update, AppState, Msg, Role};
use solarboard_data::ProjectSource;

use super::effects::EffectRunner;
use super::ui::commands::{parse_command, Command, HELP_TEXT};
use super::ui::render::render;
use super::ShellEvent;

pub struct RunOptions {
    pub role: Role,
    /// Print a single frame once the initial fetches settle, then exit.
    pub once: bool,
    /// Upper bound on the wait in `once` mode.
    pub once_timeout: Duration,
}

pub fn run(source: Arc<dyn ProjectSource>, options: RunOptions) -> anyhow::Result<()> {
    let (event_tx, event_rx) = mpsc::channel();
    let runner = EffectRunner::new(source, event_tx.clone());
    let mut shell = Shell {
        state: AppState::with_role(options.role),
        runner,
        quiet: options.once,
    };

    board_info!("Dashboard started role={}", options.role);
    shell.dispatch(Msg::Mounted)?;

    if options.once {
        return shell.run_once(&event_rx, options.once_timeout);
    }

    shell.draw()?;
    spawn_input_reader(event_tx);
    while let Ok(event) = event_rx.recv() {
        match event {
            ShellEvent::Msg(msg) => shell.dispatch(msg)?,
            ShellEvent::Help => shell.print(HELP_TEXT)?,
            ShellEvent::Invalid(message) => shell.print(&format!("error: {}", message))?,
            ShellEvent::Quit | ShellEvent::InputClosed => break,
        }
    }

    shell.quiet = true;
    shell.dispatch(Msg::Unmounted)?;
    board_info!("Dashboard stopped");
    Ok(())
}

struct Shell {
    state: AppState,
    runner: EffectRunner,
    quiet: bool,
}

impl Shell {
    fn dispatch(&mut self, msg: Msg) -> anyhow::Result<()> {
        board_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);

        if self.state.consume_dirty() && !self.quiet {
            self.draw()?;
        }
        Ok(())
    }

    fn draw(&self) -> anyhow::Result<()> {
        let frame = render(&self.state.view(Utc::now()));
        let mut out = io::stdout().lock();
        writeln!(out)?;
        writeln!(out, "{}", frame)?;
        if !self.quiet {
            write!(out, "> ")?;
        }
        out.flush().context("failed to write to stdout")
    }

    fn print(&self, text: &str) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", text)?;
        write!(out, "> ")?;
        out.flush().context("failed to write to stdout")
    }

    fn run_once(
        &mut self,
        events: &mpsc::Receiver<ShellEvent>,
        timeout: Duration,
    ) -> anyhow::Result<()> {
        let deadline = Instant::now() + timeout;
        while !self.state.pending().is_idle() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match events.recv_timeout(remaining) {
                Ok(ShellEvent::Msg(msg)) => self.dispatch(msg)?,
                Ok(_) => {}
                Err(mpsc::RecvTimeoutError::Timeout) => {
                    board_warn!("Gave up waiting for initial data after {:?}", timeout);
                    break;
                }
                Err(mpsc::RecvTimeoutError::Disconnected) => break,
            }
        }
        self.draw()?;
        self.dispatch(Msg::Unmounted)
    }
}

fn spawn_input_reader(events: mpsc::Sender<ShellEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    board_error!("Failed to read input: {}", err);
                    break;
                }
            };
            if let Some(event) = event_from_line(&line) {
                if events.send(event).is_err() {
                    return;
                }
            }
        }
        let _ = events.send(ShellEvent::InputClosed);
    });
}

fn event_from_line(line: &str) -> Option<ShellEvent> {
    match parse_command(line) {
        Ok(None) => None,
        Ok(Some(Command::Dispatch(msg))) => Some(ShellEvent::Msg(msg)),
        Ok(Some(Command::Help)) => Some(ShellEvent::Help),
        Ok(Some(Command::Quit)) => Some(ShellEvent::Quit),
        Err(err) => Some(ShellEvent::Invalid(err.to_string())),
    }
}
