use std::sync::Arc;

use anyhow::Result;

use crate::{
    domain::{
        catalog::{Catalog, Category},
        chat_session::SubmitRejected,
        events::{AppEvent, KeyInput},
        navigation::Screen,
        shell_state::ShellState,
    },
    infra::contracts::ExternalOpener,
};

use super::{
    browse,
    contracts::{ReplyDispatcher, ShellOrchestrator},
};

const SHELL_OPEN_FAILED: &str = "SHELL_EXTERNAL_OPEN_FAILED";
const SHELL_STRAY_REPLY: &str = "SHELL_STRAY_ASSISTANT_REPLY";

pub struct DefaultShellOrchestrator<D, O>
where
    D: ReplyDispatcher,
    O: ExternalOpener,
{
    state: ShellState,
    dispatcher: D,
    opener: O,
}

impl<D, O> DefaultShellOrchestrator<D, O>
where
    D: ReplyDispatcher,
    O: ExternalOpener,
{
    pub fn new(catalog: Arc<Catalog>, dispatcher: D, opener: O) -> Self {
        Self {
            state: ShellState::new(catalog),
            dispatcher,
            opener,
        }
    }

    fn handle_assistant_key(&mut self, key: KeyInput) {
        match key.key.as_str() {
            "esc" => return self.state.close_assistant(),
            "enter" => return self.submit_prompt(),
            _ => {}
        }

        let input = self.state.chat_mut().input_mut();
        match key.key.as_str() {
            "backspace" => input.backspace(),
            "delete" => input.delete(),
            "left" => input.move_left(),
            "right" => input.move_right(),
            "home" => input.move_home(),
            "end" => input.move_end(),
            _ => {
                if let Some(ch) = key.as_char() {
                    input.insert(ch);
                }
            }
        }
    }

    fn submit_prompt(&mut self) {
        match self.state.chat_mut().submit() {
            Ok(prompt) => {
                tracing::info!(
                    prompt_chars = prompt.chars().count(),
                    "dispatching assistant prompt"
                );
                self.dispatcher.dispatch(prompt);
            }
            Err(SubmitRejected::EmptyInput) => {}
            Err(SubmitRejected::ReplyPending) => {
                tracing::debug!("submit ignored while a reply is pending");
            }
        }
    }

    fn handle_browse_key(&mut self, key: KeyInput) {
        let screen = self.state.navigation().screen();
        match key.key.as_str() {
            "q" => self.state.stop(),
            "a" => self.state.open_assistant(),
            "g" => self.state.navigation_mut().go_home(),
            "j" | "down" => {
                let count = browse::visible_businesses(&self.state).len();
                self.state.navigation_mut().select_next(count);
            }
            "k" | "up" => self.state.navigation_mut().select_previous(),
            "enter" => {
                if let Some(id) = browse::highlighted_business(&self.state).map(|b| b.id.clone())
                {
                    self.state.navigation_mut().open_business(id);
                }
            }
            "esc" | "backspace" | "h" => self.state.navigation_mut().back(),
            "d" if screen == Screen::Details => {
                if let Some(target) =
                    browse::opened_business(&self.state).map(|b| browse::directions_url(&b.address))
                {
                    self.open_external(&target);
                }
            }
            "c" if screen == Screen::Details => {
                if let Some(target) =
                    browse::opened_business(&self.state).map(|b| browse::dial_uri(&b.phone))
                {
                    self.open_external(&target);
                }
            }
            other if screen == Screen::Home => {
                if let Some(category) = Category::from_shortcut(other) {
                    self.state.navigation_mut().open_category(category);
                }
            }
            _ => {}
        }
    }

    fn open_external(&self, target: &str) {
        if let Err(error) = self.opener.open(target) {
            tracing::warn!(
                code = SHELL_OPEN_FAILED,
                error = ?error,
                "failed to hand target to system opener"
            );
        }
    }
}

impl<D, O> ShellOrchestrator for DefaultShellOrchestrator<D, O>
where
    D: ReplyDispatcher,
    O: ExternalOpener,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::AssistantReplied(reply) => {
                if !self.state.chat_mut().complete(reply) {
                    tracing::warn!(
                        code = SHELL_STRAY_REPLY,
                        "assistant reply arrived while no request was pending"
                    );
                }
            }
            AppEvent::InputKey(key) => {
                if self.state.is_assistant_open() {
                    self.handle_assistant_key(key);
                } else {
                    self.handle_browse_key(key);
                }
            }
        }

        Ok(())
    }
}
