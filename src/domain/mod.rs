//! Domain layer: catalog entities, chat session and navigation rules.

pub mod catalog;
pub mod chat;
pub mod chat_session;
pub mod events;
pub mod input_state;
pub mod navigation;
pub mod shell_state;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
