use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListState, Paragraph},
    Frame,
};

use crate::domain::{
    events::ServiceHealth,
    interaction::InteractionStatus,
    shell_state::{ActiveField, ShellState},
};

use super::{input_field::render_input_field, styles, transcript_rendering};

const QUESTION_PLACEHOLDER: &str = "Type your question...";
const USERNAME_PLACEHOLDER: &str = "Who is asking?";
const KEY_HINTS: &str = "Enter: ask | Tab: field | Ctrl+R: reset | Ctrl+C: quit";

pub fn render(frame: &mut Frame<'_>, state: &ShellState) {
    let [transcript_area, username_area, question_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    render_transcript(frame, transcript_area, state);

    // While a submission is pending all inputs read as unfocused; the
    // cursor disappears along with the ability to edit.
    let editable = !state.interaction().is_busy();
    render_input_field(
        frame,
        username_area,
        "Username",
        state.username(),
        editable && state.active_field() == ActiveField::Username,
        USERNAME_PLACEHOLDER,
    );
    render_input_field(
        frame,
        question_area,
        "Question",
        state.question(),
        editable && state.active_field() == ActiveField::Question,
        QUESTION_PLACEHOLDER,
    );

    let status = Paragraph::new(status_line(state));
    frame.render_widget(status, status_area);
}

fn render_transcript(frame: &mut Frame<'_>, area: ratatui::layout::Rect, state: &ShellState) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let entries = state.transcript().entries();
    let items = transcript_rendering::build_transcript_items(entries, inner_width);
    let item_count = items.len();

    let list = List::new(items).block(Block::default().title("Conversation").borders(Borders::ALL));

    // Keep the tail visible: the newest entry is always selected.
    let mut list_state = ListState::default();
    list_state.select(item_count.checked_sub(1));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn status_line(state: &ShellState) -> Line<'static> {
    let interaction = state.interaction();
    let (text, style) = match interaction.status() {
        InteractionStatus::Idle => ("Ready.".to_owned(), styles::status_idle_style()),
        InteractionStatus::Loading => (
            interaction.message().unwrap_or("Working...").to_owned(),
            styles::status_loading_style(),
        ),
        InteractionStatus::Success => (
            interaction.message().unwrap_or("Done.").to_owned(),
            styles::status_success_style(),
        ),
        InteractionStatus::Error => (
            interaction.message().unwrap_or("Something went wrong.").to_owned(),
            styles::status_error_style(),
        ),
    };

    let mut spans = vec![Span::styled(text, style)];

    let health = state.service_health();
    let health_style = if health == ServiceHealth::Unavailable {
        styles::health_warning_style()
    } else {
        styles::status_hint_style()
    };
    spans.push(Span::styled(
        format!(" | service: {}", health.as_label()),
        health_style,
    ));

    spans.push(Span::styled(
        format!(" | {KEY_HINTS}"),
        styles::status_hint_style(),
    ));

    Line::from(spans)
}
