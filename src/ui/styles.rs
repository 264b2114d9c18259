//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

// Transcript

/// Style for the asking user's name in the transcript.
pub fn user_name_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Style for the answer service's name in the transcript.
pub fn service_name_style() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}

pub fn entry_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn error_text_style() -> Style {
    Style::default().fg(Color::Red)
}

pub fn timestamp_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// Input fields

pub fn active_field_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn inactive_field_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn input_placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// Status line

pub fn status_loading_style() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn status_success_style() -> Style {
    Style::default().fg(Color::Green)
}

pub fn status_error_style() -> Style {
    Style::default().fg(Color::Red)
}

pub fn status_idle_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn health_warning_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

pub fn status_hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_name_style_is_bold_cyan() {
        let style = user_name_style();
        assert_eq!(style.fg, Some(Color::Cyan));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn error_text_style_is_red() {
        assert_eq!(error_text_style().fg, Some(Color::Red));
    }

    #[test]
    fn status_styles_use_distinct_colors() {
        assert_ne!(status_success_style().fg, status_error_style().fg);
        assert_ne!(status_loading_style().fg, status_error_style().fg);
    }
}
