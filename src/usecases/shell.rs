//! The shell orchestrator: folds application events into domain state.

use anyhow::Result;

use crate::domain::{
    events::{AppEvent, KeyInput, ServiceHealth, SubmissionResult},
    interaction::now_unix_ms,
    shell_state::{ActiveField, ShellState},
};

use super::{
    contracts::ShellOrchestrator,
    submit_question::{build_request, SubmissionDispatcher, SubmissionPolicy},
};

const LOADING_MESSAGE: &str = "Waiting for an answer...";
const ANSWER_RECEIVED_MESSAGE: &str = "Answer received.";
const DISPATCH_FAILED_MESSAGE: &str = "Could not start the request. Please try again.";

pub struct DefaultShellOrchestrator<D>
where
    D: SubmissionDispatcher,
{
    state: ShellState,
    dispatcher: D,
    policy: SubmissionPolicy,
}

impl<D> DefaultShellOrchestrator<D>
where
    D: SubmissionDispatcher,
{
    pub fn new(dispatcher: D, policy: SubmissionPolicy) -> Self {
        Self {
            state: ShellState::default(),
            dispatcher,
            policy,
        }
    }

    fn handle_key(&mut self, key: KeyInput) {
        if key.ctrl && key.key == "r" {
            if !self.state.interaction().is_busy() {
                self.reset();
            }
            return;
        }

        // One submission in flight at a time: every control stays disabled
        // until the request completes.
        if self.state.interaction().is_busy() {
            return;
        }

        match key.key.as_str() {
            "tab" => self.state.cycle_focus(),
            "enter" => self.submit(),
            "backspace" => {
                self.state.active_field_mut().delete_char_before();
                self.state.interaction_mut().note_edit();
            }
            "delete" => {
                self.state.active_field_mut().delete_char_at();
                self.state.interaction_mut().note_edit();
            }
            "left" => self.state.active_field_mut().move_left(),
            "right" => self.state.active_field_mut().move_right(),
            "home" => self.state.active_field_mut().move_home(),
            "end" => self.state.active_field_mut().move_end(),
            _ => {
                if !key.ctrl {
                    if let Some(ch) = single_char(&key.key) {
                        self.state.active_field_mut().insert_char(ch);
                        self.state.interaction_mut().note_edit();
                    }
                }
            }
        }
    }

    fn submit(&mut self) {
        let request = match build_request(
            self.state.question().text(),
            self.state.username().text(),
            self.policy,
        ) {
            Ok(request) => request,
            Err(error) => {
                self.state.interaction_mut().fail(error.user_message());
                self.state.focus(error.field());
                return;
            }
        };

        let question = request.question.clone();
        let username = request.username.clone();

        if let Err(error) = self.dispatcher.dispatch(request) {
            tracing::error!(error = ?error, "failed to hand submission to the worker");
            self.state.interaction_mut().fail(DISPATCH_FAILED_MESSAGE);
            return;
        }

        self.state
            .transcript_mut()
            .append_question(question, username, now_unix_ms() as i64);
        self.state.question_mut().clear();
        self.state.interaction_mut().begin_loading(LOADING_MESSAGE);
        self.state.focus(ActiveField::Question);
    }

    fn on_submission_completed(&mut self, result: SubmissionResult) {
        match result {
            Ok(answer) => {
                tracing::info!(
                    answer = %answer.answer,
                    question = ?answer.question,
                    "answer received"
                );
                self.state
                    .transcript_mut()
                    .append_answer(answer.answer, answer.answered_at_unix_ms);
                self.state
                    .interaction_mut()
                    .succeed(ANSWER_RECEIVED_MESSAGE, now_unix_ms());
            }
            Err(failure) => {
                let message = failure.user_message();
                tracing::warn!(message = %message, "submission failed");
                self.state.transcript_mut().append_error(message.clone());
                self.state.interaction_mut().fail(message);
            }
        }

        self.state.focus(ActiveField::Question);
    }

    fn reset(&mut self) {
        self.state.question_mut().clear();
        self.state.transcript_mut().reset();
        self.state.interaction_mut().reset();
        self.state.focus(ActiveField::Question);
    }
}

impl<D> ShellOrchestrator for DefaultShellOrchestrator<D>
where
    D: SubmissionDispatcher,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShellState {
        &mut self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => self.state.interaction_mut().tick(now_unix_ms()),
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => self.handle_key(key),
            AppEvent::SubmissionCompleted(result) => self.on_submission_completed(result),
            AppEvent::HealthProbed(health) => {
                if health == ServiceHealth::Unavailable {
                    tracing::warn!("answer service appears unavailable");
                }
                self.state.set_service_health(health);
            }
        }

        Ok(())
    }
}

fn single_char(key: &str) -> Option<char> {
    let mut chars = key.chars();
    let first = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Some(first)
}
