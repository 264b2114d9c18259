//! Transcript rendering: one list item per entry, header line with time
//! and speaker, content wrapped to the panel width.

use chrono::{Local, TimeZone};
use ratatui::{
    text::{Line, Span},
    widgets::ListItem,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::transcript::TranscriptEntry;

use super::styles;

const CONTENT_INDENT: &str = "  ";
const SERVICE_NAME: &str = "service";
const FALLBACK_USER_NAME: &str = "you";

pub fn build_transcript_items(entries: &[TranscriptEntry], width: usize) -> Vec<ListItem<'static>> {
    entries
        .iter()
        .map(|entry| entry_to_list_item(entry, width))
        .collect()
}

fn entry_to_list_item(entry: &TranscriptEntry, width: usize) -> ListItem<'static> {
    let mut lines = vec![header_line(entry)];

    let text_style = if entry.is_error {
        styles::error_text_style()
    } else {
        styles::entry_text_style()
    };

    let wrap_width = width.saturating_sub(CONTENT_INDENT.len()).max(1);
    for text_line in wrap_text(&entry.text, wrap_width) {
        lines.push(Line::from(vec![
            Span::raw(CONTENT_INDENT.to_owned()),
            Span::styled(text_line, text_style),
        ]));
    }

    ListItem::new(lines)
}

fn header_line(entry: &TranscriptEntry) -> Line<'static> {
    let mut spans = Vec::new();

    if let Some(at_unix_ms) = entry.at_unix_ms {
        spans.push(Span::styled(
            format!("{} ", format_time(at_unix_ms)),
            styles::timestamp_style(),
        ));
    }

    let (name, name_style) = if entry.is_user {
        (
            entry
                .username
                .clone()
                .unwrap_or_else(|| FALLBACK_USER_NAME.to_owned()),
            styles::user_name_style(),
        )
    } else {
        (SERVICE_NAME.to_owned(), styles::service_name_style())
    };

    spans.push(Span::styled(format!("{name}:"), name_style));
    Line::from(spans)
}

fn format_time(timestamp_ms: i64) -> String {
    match Local.timestamp_millis_opt(timestamp_ms) {
        chrono::LocalResult::Single(stamped) => stamped.format("%H:%M").to_string(),
        chrono::LocalResult::Ambiguous(stamped, _) => stamped.format("%H:%M").to_string(),
        chrono::LocalResult::None => "??:??".to_owned(),
    }
}

/// Greedy word wrap by display width; words wider than the panel are split
/// on character boundaries.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for raw_line in text.lines() {
        let mut current = String::new();

        for word in raw_line.split_whitespace() {
            let current_width = current.width();
            let word_width = word.width();

            if !current.is_empty() && current_width + 1 + word_width <= width {
                current.push(' ');
                current.push_str(word);
                continue;
            }

            if current.is_empty() && word_width <= width {
                current.push_str(word);
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            if word_width <= width {
                current.push_str(word);
            } else {
                split_wide_word(word, width, &mut lines, &mut current);
            }
        }

        lines.push(std::mem::take(&mut current));
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

fn split_wide_word(word: &str, width: usize, lines: &mut Vec<String>, current: &mut String) {
    for ch in word.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if !current.is_empty() && current.width() + ch_width > width {
            lines.push(std::mem::take(current));
        }
        current.push(ch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_entry(text: &str, username: Option<&str>) -> TranscriptEntry {
        TranscriptEntry {
            text: text.to_owned(),
            is_user: true,
            username: username.map(ToOwned::to_owned),
            at_unix_ms: Some(1_704_067_200_000),
            is_error: false,
        }
    }

    fn service_entry(text: &str, is_error: bool) -> TranscriptEntry {
        TranscriptEntry {
            text: text.to_owned(),
            is_user: false,
            username: None,
            at_unix_ms: None,
            is_error,
        }
    }

    fn line_to_string(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn header_shows_username_for_user_entries() {
        let line = header_line(&user_entry("hi", Some("ada")));

        assert!(line_to_string(&line).contains("ada:"));
    }

    #[test]
    fn header_falls_back_when_username_is_absent() {
        let line = header_line(&user_entry("hi", None));

        assert!(line_to_string(&line).contains("you:"));
    }

    #[test]
    fn header_labels_service_entries() {
        let line = header_line(&service_entry("4", false));

        assert!(line_to_string(&line).contains("service:"));
    }

    #[test]
    fn header_omits_time_when_absent() {
        let line = header_line(&service_entry("4", false));

        assert_eq!(line_to_string(&line), "service:");
    }

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        assert_eq!(wrap_text("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        assert_eq!(
            wrap_text("the quick brown fox", 9),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn wrap_splits_words_wider_than_the_panel() {
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn wrap_preserves_blank_lines() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn wrap_of_empty_text_yields_one_empty_line() {
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn items_are_built_for_every_entry() {
        let entries = vec![user_entry("q", Some("ada")), service_entry("a", false)];

        let items = build_transcript_items(&entries, 40);

        assert_eq!(items.len(), 2);
    }
}
