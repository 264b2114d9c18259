use super::{
    events::ServiceHealth, interaction::InteractionState, text_field_state::TextFieldState,
    transcript::TranscriptState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveField {
    Username,
    #[default]
    Question,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShellState {
    stopped: bool,
    active_field: ActiveField,
    username: TextFieldState,
    question: TextFieldState,
    transcript: TranscriptState,
    interaction: InteractionState,
    service_health: ServiceHealth,
}

impl ShellState {
    pub fn is_running(&self) -> bool {
        !self.stopped
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn active_field(&self) -> ActiveField {
        self.active_field
    }

    pub fn focus(&mut self, field: ActiveField) {
        self.active_field = field;
    }

    pub fn cycle_focus(&mut self) {
        self.active_field = match self.active_field {
            ActiveField::Username => ActiveField::Question,
            ActiveField::Question => ActiveField::Username,
        };
    }

    pub fn username(&self) -> &TextFieldState {
        &self.username
    }

    pub fn question(&self) -> &TextFieldState {
        &self.question
    }

    pub fn question_mut(&mut self) -> &mut TextFieldState {
        &mut self.question
    }

    pub fn active_field_mut(&mut self) -> &mut TextFieldState {
        match self.active_field {
            ActiveField::Username => &mut self.username,
            ActiveField::Question => &mut self.question,
        }
    }

    pub fn transcript(&self) -> &TranscriptState {
        &self.transcript
    }

    pub fn transcript_mut(&mut self) -> &mut TranscriptState {
        &mut self.transcript
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn interaction_mut(&mut self) -> &mut InteractionState {
        &mut self.interaction
    }

    pub fn service_health(&self) -> ServiceHealth {
        self.service_health
    }

    pub fn set_service_health(&mut self, health: ServiceHealth) {
        self.service_health = health;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_runs_with_question_focused() {
        let state = ShellState::default();

        assert!(state.is_running());
        assert_eq!(state.active_field(), ActiveField::Question);
        assert_eq!(state.service_health(), ServiceHealth::Unknown);
    }

    #[test]
    fn stop_halts_the_shell() {
        let mut state = ShellState::default();

        state.stop();

        assert!(!state.is_running());
    }

    #[test]
    fn cycle_focus_alternates_between_fields() {
        let mut state = ShellState::default();

        state.cycle_focus();
        assert_eq!(state.active_field(), ActiveField::Username);

        state.cycle_focus();
        assert_eq!(state.active_field(), ActiveField::Question);
    }

    #[test]
    fn active_field_mut_follows_focus() {
        let mut state = ShellState::default();
        state.active_field_mut().insert_char('q');
        state.focus(ActiveField::Username);
        state.active_field_mut().insert_char('u');

        assert_eq!(state.question().text(), "q");
        assert_eq!(state.username().text(), "u");
    }
}
