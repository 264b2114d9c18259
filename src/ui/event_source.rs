use std::{sync::mpsc::Receiver, time::Duration};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::{
    domain::events::{AppEvent, KeyInput},
    usecases::contracts::AppEventSource,
};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Maps terminal input to app events; poll timeouts become `Tick`s that
/// drive the status auto-clear clock.
#[derive(Default)]
pub struct CrosstermEventSource;

impl AppEventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if !event::poll(EVENT_POLL_TIMEOUT)? {
            return Ok(Some(AppEvent::Tick));
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

            if key.code == KeyCode::Esc || (ctrl && key.code == KeyCode::Char('c')) {
                return Ok(Some(AppEvent::QuitRequested));
            }

            let named = match key.code {
                KeyCode::Enter => Some("enter"),
                KeyCode::Tab => Some("tab"),
                KeyCode::Backspace => Some("backspace"),
                KeyCode::Delete => Some("delete"),
                KeyCode::Left => Some("left"),
                KeyCode::Right => Some("right"),
                KeyCode::Home => Some("home"),
                KeyCode::End => Some("end"),
                _ => None,
            };

            if let Some(name) = named {
                return Ok(Some(AppEvent::InputKey(KeyInput::new(name, ctrl))));
            }

            if let KeyCode::Char(ch) = key.code {
                return Ok(Some(AppEvent::InputKey(KeyInput::new(ch.to_string(), ctrl))));
            }
        }

        Ok(None)
    }
}

/// Combines terminal input with completions arriving from the background
/// workers. Worker events drain first so a finished submission is never
/// starved by a chatty keyboard.
pub struct ShellEventSource {
    background: Receiver<AppEvent>,
    input: CrosstermEventSource,
}

impl ShellEventSource {
    pub fn new(background: Receiver<AppEvent>) -> Self {
        Self {
            background,
            input: CrosstermEventSource,
        }
    }
}

impl AppEventSource for ShellEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if let Ok(event) = self.background.try_recv() {
            return Ok(Some(event));
        }

        self.input.next_event()
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
    use crate::domain::events::ServiceHealth;

    #[test]
    fn shell_source_prefers_background_events() {
        let (tx, rx) = mpsc::channel();
        tx.send(AppEvent::HealthProbed(ServiceHealth::Available))
            .expect("send must succeed");
        let mut source = ShellEventSource::new(rx);

        let event = source.next_event().expect("must read background event");

        assert_eq!(event, Some(AppEvent::HealthProbed(ServiceHealth::Available)));
    }
}
