//! UI layer: terminal session, event sources and guide screens.

mod chat_panel;
mod event_source;
pub mod shell;
mod styles;
mod terminal;
mod view;

pub(crate) use event_source::{ChannelReplySource, CrosstermEventSource};

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
