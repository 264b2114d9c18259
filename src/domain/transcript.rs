//! The conversation transcript: an append-only message log.

/// Static entry shown before the first question and after a reset.
pub const WELCOME_TEXT: &str = "Welcome! Type a question below and press Enter.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub text: String,
    pub is_user: bool,
    pub username: Option<String>,
    pub at_unix_ms: Option<i64>,
    pub is_error: bool,
}

impl TranscriptEntry {
    fn welcome() -> Self {
        Self {
            text: WELCOME_TEXT.to_owned(),
            is_user: false,
            username: None,
            at_unix_ms: None,
            is_error: false,
        }
    }
}

/// Grows for the lifetime of the session; `reset` drops everything except
/// the welcome entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptState {
    entries: Vec<TranscriptEntry>,
}

impl Default for TranscriptState {
    fn default() -> Self {
        Self {
            entries: vec![TranscriptEntry::welcome()],
        }
    }
}

impl TranscriptState {
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn append_question(&mut self, text: String, username: Option<String>, at_unix_ms: i64) {
        self.entries.push(TranscriptEntry {
            text,
            is_user: true,
            username,
            at_unix_ms: Some(at_unix_ms),
            is_error: false,
        });
    }

    pub fn append_answer(&mut self, text: String, at_unix_ms: Option<i64>) {
        self.entries.push(TranscriptEntry {
            text,
            is_user: false,
            username: None,
            at_unix_ms,
            is_error: false,
        });
    }

    pub fn append_error(&mut self, text: String) {
        self.entries.push(TranscriptEntry {
            text,
            is_user: false,
            username: None,
            at_unix_ms: None,
            is_error: true,
        });
    }

    pub fn reset(&mut self) {
        self.entries.clear();
        self.entries.push(TranscriptEntry::welcome());
    }
}
