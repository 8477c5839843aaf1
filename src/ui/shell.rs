use anyhow::Result;

use crate::usecases::{
    context::AppContext,
    contracts::{AppEventSource, ShellOrchestrator},
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        model = %context.config.assistant.model,
        "starting city guide shell"
    );

    let mut terminal = TerminalSession::enter()?;
    drive(event_source, orchestrator, |state| {
        terminal.draw(|frame| view::render(frame, state))
    })?;

    tracing::info!("city guide shell stopped");
    Ok(())
}

/// Draw, wait for one event, apply it; repeat until the shell stops.
fn drive<F>(
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
    mut draw: F,
) -> Result<()>
where
    F: FnMut(&crate::domain::shell_state::ShellState) -> Result<()>,
{
    while orchestrator.state().is_running() {
        draw(orchestrator.state())?;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, sync::Arc};

    use super::*;
    use crate::{
        domain::{
            chat::ChatRole,
            events::{AppEvent, KeyInput},
            navigation::Screen,
        },
        infra::{catalog_seed, stubs::NoopOpener},
        ui::event_source::MockEventSource,
        usecases::{contracts::ReplyDispatcher, shell::DefaultShellOrchestrator},
    };

    #[derive(Default)]
    struct RecordingDispatcher {
        prompts: RefCell<Vec<String>>,
    }

    impl ReplyDispatcher for RecordingDispatcher {
        fn dispatch(&self, prompt: String) {
            self.prompts.borrow_mut().push(prompt);
        }
    }

    fn orchestrator() -> DefaultShellOrchestrator<RecordingDispatcher, NoopOpener> {
        DefaultShellOrchestrator::new(
            Arc::new(catalog_seed::builtin()),
            RecordingDispatcher::default(),
            NoopOpener,
        )
    }

    fn key(name: &str) -> AppEvent {
        AppEvent::InputKey(KeyInput::new(name, false))
    }

    #[test]
    fn mock_source_produces_quit_event() {
        let mut source = MockEventSource::from(vec![AppEvent::QuitRequested]);
        let event = source.next_event().expect("must read mock event");

        assert_eq!(event, Some(AppEvent::QuitRequested));
    }

    #[test]
    fn drive_draws_until_quit() {
        let mut source = MockEventSource::from(vec![AppEvent::Tick, key("2"), key("q")]);
        let mut orchestrator = orchestrator();
        let mut screens = Vec::new();

        drive(&mut source, &mut orchestrator, |state| {
            screens.push(state.navigation().screen());
            Ok(())
        })
        .expect("loop must finish");

        assert!(!orchestrator.state().is_running());
        assert_eq!(screens, vec![Screen::Home, Screen::Home, Screen::Category]);
    }

    #[test]
    fn drive_applies_assistant_reply_from_source() {
        let mut events = vec![key("a")];
        events.extend("selam".chars().map(|ch| key(&ch.to_string())));
        events.push(key("enter"));
        events.push(AppEvent::AssistantReplied("Merhaba!".to_owned()));
        events.push(AppEvent::QuitRequested);
        let mut source = MockEventSource::from(events);
        let mut orchestrator = orchestrator();

        drive(&mut source, &mut orchestrator, |_| Ok(())).expect("loop must finish");

        let transcript = orchestrator.state().chat().transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(
            transcript.last().map(|message| message.role()),
            Some(ChatRole::Assistant)
        );
    }

    #[test]
    fn drive_propagates_draw_errors() {
        let mut source = MockEventSource::from(vec![]);
        let mut orchestrator = orchestrator();

        let result = drive(&mut source, &mut orchestrator, |_| {
            anyhow::bail!("terminal gone")
        });

        assert!(result.is_err());
    }
}
