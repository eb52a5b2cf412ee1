mod app;
pub mod config;
mod conversions;
mod effects;
pub mod logging;
mod ui;

use solarboard_core::Msg;

pub use app::{run, RunOptions};

/// Everything the event loop reacts to: parsed user input and translated
/// data results share one channel.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellEvent {
    Msg(Msg),
    Help,
    Quit,
    Invalid(String),
    InputClosed,
}
