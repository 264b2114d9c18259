use anyhow::Result;

use crate::usecases::contracts::{AppEventSource, ShellOrchestrator};

use super::{terminal::TerminalSession, view};

pub fn start(
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!("starting TUI shell");

    let mut terminal = TerminalSession::new()?;

    while orchestrator.state().is_running() {
        let state = orchestrator.state();
        terminal.draw(|frame| view::render(frame, state))?;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    Ok(())
}
