//! Single-line input field rendering.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::text_field_state::TextFieldState;

use super::styles;

const PROMPT_SYMBOL: &str = "> ";

pub fn render_input_field(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    field: &TextFieldState,
    focused: bool,
    placeholder: &str,
) {
    let border_style = if focused {
        styles::active_field_border_style()
    } else {
        styles::inactive_field_border_style()
    };

    let paragraph = Paragraph::new(build_field_line(field, focused, placeholder)).block(
        Block::default()
            .title(title.to_owned())
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(paragraph, area);

    if focused {
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(PROMPT_SYMBOL.len() as u16)
            .saturating_add(field.cursor().min(u16::MAX as usize) as u16);
        let cursor_y = area.y.saturating_add(1);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

fn build_field_line(field: &TextFieldState, focused: bool, placeholder: &str) -> Line<'static> {
    let prompt = Span::styled(PROMPT_SYMBOL.to_owned(), styles::input_placeholder_style());

    if field.is_empty() && !focused {
        return Line::from(vec![
            prompt,
            Span::styled(placeholder.to_owned(), styles::input_placeholder_style()),
        ]);
    }

    Line::from(vec![
        prompt,
        Span::styled(field.text().to_owned(), styles::input_text_style()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_to_string(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn empty_unfocused_field_shows_placeholder() {
        let field = TextFieldState::default();

        let line = build_field_line(&field, false, "Type your question...");

        assert!(line_to_string(&line).contains("Type your question..."));
    }

    #[test]
    fn focused_empty_field_hides_placeholder() {
        let field = TextFieldState::default();

        let line = build_field_line(&field, true, "Type your question...");

        assert_eq!(line_to_string(&line), PROMPT_SYMBOL);
    }

    #[test]
    fn field_contents_replace_placeholder() {
        let mut field = TextFieldState::default();
        field.insert_char('h');
        field.insert_char('i');

        let line = build_field_line(&field, false, "unused");

        let text = line_to_string(&line);
        assert!(text.contains("hi"));
        assert!(!text.contains("unused"));
    }
}
