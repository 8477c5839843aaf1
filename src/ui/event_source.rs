use std::{sync::mpsc::Receiver, time::Duration};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    domain::events::{AppEvent, KeyInput},
    usecases::contracts::AppEventSource,
};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

#[derive(Default)]
pub struct CrosstermEventSource;

impl AppEventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if !event::poll(EVENT_POLL_TIMEOUT)? {
            return Ok(Some(AppEvent::Tick));
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key_event(key)),
            _ => Ok(None),
        }
    }
}

/// Only Ctrl+C quits here; plain `q` is left to the orchestrator so it can be
/// typed into the assistant prompt.
fn map_key_event(key: KeyEvent) -> Option<AppEvent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        return Some(AppEvent::QuitRequested);
    }

    let name = match key.code {
        KeyCode::Char(ch) => ch.to_string(),
        KeyCode::Enter => "enter".to_owned(),
        KeyCode::Esc => "esc".to_owned(),
        KeyCode::Backspace => "backspace".to_owned(),
        KeyCode::Delete => "delete".to_owned(),
        KeyCode::Left => "left".to_owned(),
        KeyCode::Right => "right".to_owned(),
        KeyCode::Up => "up".to_owned(),
        KeyCode::Down => "down".to_owned(),
        KeyCode::Home => "home".to_owned(),
        KeyCode::End => "end".to_owned(),
        _ => return None,
    };

    Some(AppEvent::InputKey(KeyInput::new(name, ctrl)))
}

/// Surfaces finished assistant replies ahead of terminal input.
pub struct ChannelReplySource<S> {
    inner: S,
    replies: Receiver<String>,
}

impl<S> ChannelReplySource<S>
where
    S: AppEventSource,
{
    pub fn new(inner: S, replies: Receiver<String>) -> Self {
        Self { inner, replies }
    }
}

impl<S> AppEventSource for ChannelReplySource<S>
where
    S: AppEventSource,
{
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if let Ok(reply) = self.replies.try_recv() {
            return Ok(Some(AppEvent::AssistantReplied(reply)));
        }

        self.inner.next_event()
    }
}

#[cfg(test)]
pub struct MockEventSource {
    queue: std::collections::VecDeque<AppEvent>,
}

#[cfg(test)]
impl MockEventSource {
    pub fn from(events: Vec<AppEvent>) -> Self {
        Self {
            queue: events.into(),
        }
    }
}

#[cfg(test)]
impl AppEventSource for MockEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        Ok(self.queue.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn ctrl_c_requests_quit() {
        let event = map_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL));

        assert_eq!(event, Some(AppEvent::QuitRequested));
    }

    #[test]
    fn plain_q_is_forwarded_as_input() {
        let event = map_key_event(key(KeyCode::Char('q'), KeyModifiers::NONE));

        assert_eq!(
            event,
            Some(AppEvent::InputKey(KeyInput::new("q", false)))
        );
    }

    #[test]
    fn named_keys_are_lowercase_names() {
        let cases = [
            (KeyCode::Enter, "enter"),
            (KeyCode::Esc, "esc"),
            (KeyCode::Backspace, "backspace"),
            (KeyCode::Down, "down"),
            (KeyCode::End, "end"),
        ];

        for (code, name) in cases {
            assert_eq!(
                map_key_event(key(code, KeyModifiers::NONE)),
                Some(AppEvent::InputKey(KeyInput::new(name, false)))
            );
        }
    }

    #[test]
    fn unmapped_keys_are_dropped() {
        assert_eq!(map_key_event(key(KeyCode::F(5), KeyModifiers::NONE)), None);
    }

    #[test]
    fn pending_reply_is_delivered_before_terminal_input() {
        let (tx, rx) = mpsc::channel();
        let inner = MockEventSource::from(vec![AppEvent::Tick]);
        let mut source = ChannelReplySource::new(inner, rx);
        tx.send("Merhaba!".to_owned()).expect("send reply");

        assert_eq!(
            source.next_event().expect("event"),
            Some(AppEvent::AssistantReplied("Merhaba!".to_owned()))
        );
        assert_eq!(source.next_event().expect("event"), Some(AppEvent::Tick));
        assert_eq!(source.next_event().expect("event"), None);
    }

    #[test]
    fn disconnected_reply_channel_falls_through_to_terminal() {
        let (tx, rx) = mpsc::channel::<String>();
        drop(tx);
        let inner = MockEventSource::from(vec![AppEvent::QuitRequested]);
        let mut source = ChannelReplySource::new(inner, rx);

        assert_eq!(
            source.next_event().expect("event"),
            Some(AppEvent::QuitRequested)
        );
    }
}
