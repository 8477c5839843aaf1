use std::sync::Arc;

use super::{catalog::Catalog, chat_session::ChatSession, navigation::NavigationState};

#[derive(Debug, Clone)]
pub struct ShellState {
    running: bool,
    catalog: Arc<Catalog>,
    navigation: NavigationState,
    assistant_open: bool,
    chat: ChatSession,
}

impl ShellState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            running: true,
            catalog,
            navigation: NavigationState::default(),
            assistant_open: false,
            chat: ChatSession::default(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn navigation_mut(&mut self) -> &mut NavigationState {
        &mut self.navigation
    }

    pub fn is_assistant_open(&self) -> bool {
        self.assistant_open
    }

    pub fn open_assistant(&mut self) {
        self.assistant_open = true;
    }

    /// Hides the panel; the transcript and any pending reply are kept.
    pub fn close_assistant(&mut self) {
        self.assistant_open = false;
    }

    pub fn chat(&self) -> &ChatSession {
        &self.chat
    }

    pub fn chat_mut(&mut self) -> &mut ChatSession {
        &mut self.chat
    }
}
