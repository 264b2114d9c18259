//! JSON wire types for the answer service contract.

use serde::{Deserialize, Serialize};

use crate::{domain::events::AnswerReceived, usecases::submit_question::AskRequest};

/// Body of `POST /ask`. The username key is omitted entirely when absent.
#[derive(Debug, Serialize)]
pub struct QuestionPayload<'a> {
    pub question: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<&'a str>,
}

impl<'a> From<&'a AskRequest> for QuestionPayload<'a> {
    fn from(request: &'a AskRequest) -> Self {
        Self {
            question: &request.question,
            username: request.username.as_deref(),
        }
    }
}

/// 2xx body of `POST /ask`. Only `answer` is mandatory; everything else is
/// echoed metadata.
#[derive(Debug, Deserialize)]
pub struct AnswerReply {
    pub answer: String,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl AnswerReply {
    pub fn into_domain(self) -> AnswerReceived {
        let answered_at_unix_ms = self.timestamp.as_deref().and_then(parse_timestamp);
        AnswerReceived {
            answer: self.answer,
            question: self.question,
            answered_at_unix_ms,
        }
    }
}

/// Accepts RFC 3339 as well as the zone-less ISO form some servers emit.
fn parse_timestamp(raw: &str) -> Option<i64> {
    if let Ok(stamped) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(stamped.timestamp_millis());
    }

    raw.parse::<chrono::NaiveDateTime>()
        .ok()
        .map(|naive| naive.and_utc().timestamp_millis())
}
