//! Status lifecycle for one question/answer interaction.
//!
//! The transitions here are pure: the clock is always passed in as unix
//! milliseconds, so tests drive the auto-clear timer with virtual time.

use std::time::{SystemTime, UNIX_EPOCH};

/// How long a success status stays visible before clearing back to idle.
pub const STATUS_CLEAR_DELAY_MS: u128 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    status: InteractionStatus,
    message: Option<String>,
    clear_at_unix_ms: Option<u128>,
}

impl InteractionState {
    pub fn status(&self) -> InteractionStatus {
        self.status
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True while a submission is in flight; all editing controls are
    /// disabled for the duration.
    pub fn is_busy(&self) -> bool {
        self.status == InteractionStatus::Loading
    }

    pub fn begin_loading(&mut self, message: impl Into<String>) {
        self.status = InteractionStatus::Loading;
        self.message = Some(message.into());
        self.clear_at_unix_ms = None;
    }

    /// Success keeps its message until `tick` passes the clear deadline.
    pub fn succeed(&mut self, message: impl Into<String>, now_unix_ms: u128) {
        self.status = InteractionStatus::Success;
        self.message = Some(message.into());
        self.clear_at_unix_ms = Some(now_unix_ms + STATUS_CLEAR_DELAY_MS);
    }

    /// Errors have no deadline; they persist until the user edits or resets.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = InteractionStatus::Error;
        self.message = Some(message.into());
        self.clear_at_unix_ms = None;
    }

    /// The user typed again: any terminal status clears immediately.
    pub fn note_edit(&mut self) {
        if matches!(
            self.status,
            InteractionStatus::Error | InteractionStatus::Success
        ) {
            self.clear();
        }
    }

    /// Advances the auto-clear timer.
    pub fn tick(&mut self, now_unix_ms: u128) {
        if let Some(deadline) = self.clear_at_unix_ms {
            if now_unix_ms >= deadline {
                self.clear();
            }
        }
    }

    pub fn reset(&mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        self.status = InteractionStatus::Idle;
        self.message = None;
        self.clear_at_unix_ms = None;
    }
}

pub fn now_unix_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_with_no_message() {
        let state = InteractionState::default();

        assert_eq!(state.status(), InteractionStatus::Idle);
        assert_eq!(state.message(), None);
        assert!(!state.is_busy());
    }

    #[test]
    fn loading_marks_state_busy() {
        let mut state = InteractionState::default();

        state.begin_loading("Waiting for answer...");

        assert_eq!(state.status(), InteractionStatus::Loading);
        assert!(state.is_busy());
        assert_eq!(state.message(), Some("Waiting for answer..."));
    }

    #[test]
    fn success_clears_once_the_deadline_passes() {
        let mut state = InteractionState::default();
        state.begin_loading("...");
        state.succeed("Answer received.", 10_000);

        state.tick(10_000 + STATUS_CLEAR_DELAY_MS - 1);
        assert_eq!(state.status(), InteractionStatus::Success);

        state.tick(10_000 + STATUS_CLEAR_DELAY_MS);
        assert_eq!(state.status(), InteractionStatus::Idle);
        assert_eq!(state.message(), None);
    }

    #[test]
    fn error_does_not_clear_on_tick() {
        let mut state = InteractionState::default();
        state.begin_loading("...");
        state.fail("The answer service returned an error (HTTP 500).");

        state.tick(u128::MAX);

        assert_eq!(state.status(), InteractionStatus::Error);
    }

    #[test]
    fn editing_clears_error_immediately() {
        let mut state = InteractionState::default();
        state.fail("Question cannot be empty.");

        state.note_edit();

        assert_eq!(state.status(), InteractionStatus::Idle);
        assert_eq!(state.message(), None);
    }

    #[test]
    fn editing_clears_success_before_the_timer() {
        let mut state = InteractionState::default();
        state.succeed("Answer received.", 0);

        state.note_edit();

        assert_eq!(state.status(), InteractionStatus::Idle);
    }

    #[test]
    fn editing_does_not_interrupt_loading() {
        let mut state = InteractionState::default();
        state.begin_loading("...");

        state.note_edit();

        assert_eq!(state.status(), InteractionStatus::Loading);
    }

    #[test]
    fn reset_returns_to_idle_from_any_state() {
        let seeds: [fn(&mut InteractionState); 3] = [
            |s| s.begin_loading("..."),
            |s| s.succeed("ok", 0),
            |s| s.fail("bad"),
        ];

        for seed in seeds {
            let mut state = InteractionState::default();
            seed(&mut state);

            state.reset();

            assert_eq!(state.status(), InteractionStatus::Idle);
            assert_eq!(state.message(), None);
        }
    }

    #[test]
    fn now_unix_ms_is_monotonic_enough_for_deadlines() {
        let first = now_unix_ms();
        let second = now_unix_ms();

        assert!(second >= first);
    }
}
