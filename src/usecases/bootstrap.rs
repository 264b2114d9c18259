use std::{
    path::Path,
    sync::{mpsc, Arc},
    time::Duration,
};

use anyhow::Result;

use crate::{
    api::{
        client::AnswerServiceClient,
        worker::{AskWorker, HealthProbeTask},
    },
    infra::{self, error::AppError, logging::LogGuard, storage_layout::StorageLayout},
    ui::event_source::ShellEventSource,
    usecases::{
        context::AppContext, shell::DefaultShellOrchestrator, submit_question::SubmissionPolicy,
    },
};

pub fn bootstrap(config_path: Option<&Path>) -> Result<(AppContext, LogGuard), AppError> {
    let context = build_context(config_path)?;

    let layout = StorageLayout::resolve()?;
    layout.ensure_dirs()?;
    let log_guard = infra::logging::init(&context.config.logging, &layout)?;

    Ok((context, log_guard))
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config = infra::config::load(config_path)?;
    Ok(AppContext::new(config))
}

/// Everything the TUI loop needs, with the background workers kept alive
/// for as long as the shell runs.
pub struct ShellComposition {
    pub event_source: ShellEventSource,
    pub orchestrator: DefaultShellOrchestrator<AskWorker>,
    _health_probe: HealthProbeTask,
}

pub fn compose_shell(context: &AppContext) -> Result<ShellComposition> {
    let client = Arc::new(AnswerServiceClient::new(&context.config.service)?);
    let (events_tx, events_rx) = mpsc::channel();

    let worker = AskWorker::start(client.clone(), events_tx.clone())?;
    let health_probe = HealthProbeTask::start(
        client,
        Duration::from_millis(context.config.startup.health_probe_delay_ms),
        events_tx,
    )?;

    let policy = SubmissionPolicy {
        require_username: context.config.service.require_username,
    };

    Ok(ShellComposition {
        event_source: ShellEventSource::new(events_rx),
        orchestrator: DefaultShellOrchestrator::new(worker, policy),
        _health_probe: health_probe,
    })
}
