//! Editing state for a single-line text field.

/// Upper bound on field length, matching the service's modest payloads.
const MAX_FIELD_LENGTH: usize = 512;

/// Cursor-aware contents of one input field. The cursor is a character
/// index; conversion to byte offsets happens only at mutation time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextFieldState {
    text: String,
    cursor: usize,
}

impl TextFieldState {
    pub fn text(&self) -> &str {
        &self.text
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Inserts at the cursor; rejects input past the length cap.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if self.char_count() >= MAX_FIELD_LENGTH {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
        true
    }

    pub fn delete_char_before(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let start = self.byte_index(self.cursor);
        let end = self.byte_index(self.cursor + 1);
        self.text.drain(start..end);
    }

    pub fn delete_char_at(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let start = self.byte_index(self.cursor);
        let end = self.byte_index(self.cursor + 1);
        self.text.drain(start..end);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(index, _)| index)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_with(text: &str) -> TextFieldState {
        let mut field = TextFieldState::default();
        for ch in text.chars() {
            field.insert_char(ch);
        }
        field
    }

    #[test]
    fn inserts_append_and_advance_cursor() {
        let field = field_with("hi");

        assert_eq!(field.text(), "hi");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn inserts_in_the_middle_at_cursor() {
        let mut field = field_with("ho");
        field.move_left();

        field.insert_char('l');

        assert_eq!(field.text(), "hlo");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn backspace_removes_char_before_cursor() {
        let mut field = field_with("ask");

        field.delete_char_before();

        assert_eq!(field.text(), "as");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn backspace_at_start_is_a_noop() {
        let mut field = field_with("q");
        field.move_home();

        field.delete_char_before();

        assert_eq!(field.text(), "q");
    }

    #[test]
    fn delete_removes_char_under_cursor() {
        let mut field = field_with("abc");
        field.move_home();
        field.move_right();

        field.delete_char_at();

        assert_eq!(field.text(), "ac");
        assert_eq!(field.cursor(), 1);
    }

    #[test]
    fn delete_at_end_is_a_noop() {
        let mut field = field_with("abc");

        field.delete_char_at();

        assert_eq!(field.text(), "abc");
    }

    #[test]
    fn cursor_stays_within_bounds() {
        let mut field = field_with("ab");

        field.move_right();
        assert_eq!(field.cursor(), 2);

        field.move_home();
        field.move_left();
        assert_eq!(field.cursor(), 0);

        field.move_end();
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn trimmed_strips_surrounding_whitespace() {
        let field = field_with("  what is 2+2?  ");

        assert_eq!(field.trimmed(), "what is 2+2?");
    }

    #[test]
    fn clear_empties_text_and_cursor() {
        let mut field = field_with("hello");

        field.clear();

        assert!(field.is_empty());
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn multibyte_input_edits_on_char_boundaries() {
        let mut field = field_with("héllo");

        field.move_home();
        field.move_right();
        field.delete_char_at();

        assert_eq!(field.text(), "hllo");
    }

    #[test]
    fn rejects_input_past_the_length_cap() {
        let mut field = TextFieldState::default();
        for _ in 0..MAX_FIELD_LENGTH {
            assert!(field.insert_char('x'));
        }

        assert!(!field.insert_char('y'));
        assert_eq!(field.text().chars().count(), MAX_FIELD_LENGTH);
    }
}
