//! Background workers that keep the shell loop non-blocking.
//!
//! Both workers deliver their results as `AppEvent`s over the shared event
//! channel and join their threads on drop.

use std::{
    sync::{
        mpsc::{self, Receiver, RecvTimeoutError, Sender},
        Arc,
    },
    thread::{self, JoinHandle},
    time::Duration,
};

use anyhow::{anyhow, Result};
use thiserror::Error;

use crate::{
    domain::events::AppEvent,
    usecases::{
        probe_health::{probe_health, HealthSource},
        submit_question::{map_source_error, AnswerSource, AskRequest, SubmissionDispatcher},
    },
};

#[derive(Debug, Error)]
pub enum WorkerStartError {
    #[error("worker thread spawn failed: {0}")]
    Spawn(#[source] std::io::Error),
}

/// Long-lived submission worker. Requests arrive over a job channel, one
/// at a time; completions go back as events.
#[derive(Debug)]
pub struct AskWorker {
    job_tx: Option<Sender<AskRequest>>,
    worker: Option<JoinHandle<()>>,
}

impl AskWorker {
    pub fn start(
        source: Arc<dyn AnswerSource + Send + Sync>,
        events: Sender<AppEvent>,
    ) -> Result<Self, WorkerStartError> {
        let (job_tx, job_rx) = mpsc::channel::<AskRequest>();
        let worker = thread::Builder::new()
            .name("qna-ask-worker".to_owned())
            .spawn(move || run_ask_loop(source, job_rx, events))
            .map_err(WorkerStartError::Spawn)?;

        Ok(Self {
            job_tx: Some(job_tx),
            worker: Some(worker),
        })
    }
}

impl SubmissionDispatcher for AskWorker {
    fn dispatch(&self, request: AskRequest) -> Result<()> {
        self.job_tx
            .as_ref()
            .ok_or_else(|| anyhow!("submission worker already stopped"))?
            .send(request)
            .map_err(|_| anyhow!("submission worker is gone"))
    }
}

impl Drop for AskWorker {
    fn drop(&mut self) {
        drop(self.job_tx.take());

        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::warn!("submission worker panicked on shutdown");
            }
        }
    }
}

fn run_ask_loop(
    source: Arc<dyn AnswerSource + Send + Sync>,
    job_rx: Receiver<AskRequest>,
    events: Sender<AppEvent>,
) {
    while let Ok(request) = job_rx.recv() {
        tracing::debug!(question = %request.question, "submitting question");
        let result = source.ask(&request).map_err(map_source_error);
        if events.send(AppEvent::SubmissionCompleted(result)).is_err() {
            break;
        }
    }
}

/// One-shot health probe, delayed so it does not race the initial render.
#[derive(Debug)]
pub struct HealthProbeTask {
    stop_tx: Option<Sender<()>>,
    worker: Option<JoinHandle<()>>,
}

impl HealthProbeTask {
    pub fn start(
        source: Arc<dyn HealthSource + Send + Sync>,
        delay: Duration,
        events: Sender<AppEvent>,
    ) -> Result<Self, WorkerStartError> {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let worker = thread::Builder::new()
            .name("qna-health-probe".to_owned())
            .spawn(move || run_probe(source, stop_rx, delay, events))
            .map_err(WorkerStartError::Spawn)?;

        Ok(Self {
            stop_tx: Some(stop_tx),
            worker: Some(worker),
        })
    }
}

impl Drop for HealthProbeTask {
    fn drop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }

        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::warn!("health probe worker panicked on shutdown");
            }
        }
    }
}

fn run_probe(
    source: Arc<dyn HealthSource + Send + Sync>,
    stop_rx: Receiver<()>,
    delay: Duration,
    events: Sender<AppEvent>,
) {
    // A stop signal during the delay cancels the probe entirely.
    if let Err(RecvTimeoutError::Timeout) = stop_rx.recv_timeout(delay) {
        let health = probe_health(&*source);
        let _ = events.send(AppEvent::HealthProbed(health));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::events::{AnswerReceived, ServiceHealth, SubmissionFailure},
        usecases::{probe_health::HealthSourceError, submit_question::AskSourceError},
    };

    struct StubAnswers {
        result: Result<AnswerReceived, AskSourceError>,
    }

    impl AnswerSource for StubAnswers {
        fn ask(&self, _request: &AskRequest) -> Result<AnswerReceived, AskSourceError> {
            self.result.clone()
        }
    }

    struct StubHealth {
        result: Result<(), HealthSourceError>,
    }

    impl HealthSource for StubHealth {
        fn check_health(&self) -> Result<(), HealthSourceError> {
            self.result.clone()
        }
    }

    fn request() -> AskRequest {
        AskRequest {
            question: "What is 2+2?".to_owned(),
            username: Some("ada".to_owned()),
        }
    }

    #[test]
    fn worker_delivers_successful_completion_event() {
        let (events_tx, events_rx) = mpsc::channel();
        let source = Arc::new(StubAnswers {
            result: Ok(AnswerReceived {
                answer: "4".to_owned(),
                question: None,
                answered_at_unix_ms: None,
            }),
        });
        let worker = AskWorker::start(source, events_tx).expect("worker must start");

        worker.dispatch(request()).expect("dispatch must succeed");

        let event = events_rx
            .recv_timeout(Duration::from_secs(2))
            .expect("completion event must arrive");
        match event {
            AppEvent::SubmissionCompleted(Ok(answer)) => assert_eq!(answer.answer, "4"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn worker_maps_source_errors_to_failures() {
        let (events_tx, events_rx) = mpsc::channel();
        let source = Arc::new(StubAnswers {
            result: Err(AskSourceError::Http { status: 500 }),
        });
        let worker = AskWorker::start(source, events_tx).expect("worker must start");

        worker.dispatch(request()).expect("dispatch must succeed");

        let event = events_rx
            .recv_timeout(Duration::from_secs(2))
            .expect("completion event must arrive");
        assert_eq!(
            event,
            AppEvent::SubmissionCompleted(Err(SubmissionFailure::ServerRejected { status: 500 }))
        );
    }

    #[test]
    fn probe_fires_after_the_delay() {
        let (events_tx, events_rx) = mpsc::channel();
        let source = Arc::new(StubHealth { result: Ok(()) });
        let _task = HealthProbeTask::start(source, Duration::from_millis(0), events_tx)
            .expect("probe must start");

        let event = events_rx
            .recv_timeout(Duration::from_secs(2))
            .expect("probe event must arrive");
        assert_eq!(event, AppEvent::HealthProbed(ServiceHealth::Available));
    }

    #[test]
    fn dropping_the_task_during_the_delay_cancels_the_probe() {
        let (events_tx, events_rx) = mpsc::channel();
        let source = Arc::new(StubHealth { result: Ok(()) });
        let task = HealthProbeTask::start(source, Duration::from_secs(60), events_tx)
            .expect("probe must start");

        drop(task);

        assert!(events_rx.try_recv().is_err());
    }
}
