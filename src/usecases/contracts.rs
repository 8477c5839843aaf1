use anyhow::Result;

use crate::domain::{events::AppEvent, shell_state::ShellState};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

pub trait ShellOrchestrator {
    fn state(&self) -> &ShellState;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}

/// Starts a chat round trip without blocking the caller. The reply comes back
/// later as `AppEvent::AssistantReplied`.
pub trait ReplyDispatcher {
    fn dispatch(&self, prompt: String);
}
