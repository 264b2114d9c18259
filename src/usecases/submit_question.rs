//! Use case for submitting a question to the answer service.
//!
//! Validation happens here, before anything touches the network: raw field
//! contents go in, a trimmed `AskRequest` comes out or a `ValidationError`
//! names the offending field.

use anyhow::Result;

use crate::domain::{
    events::{AnswerReceived, SubmissionFailure},
    shell_state::ActiveField,
};

/// A validated, trimmed request ready for the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskRequest {
    pub question: String,
    pub username: Option<String>,
}

/// Whether an empty username blocks submission. The chat-style client
/// requires one; the one-shot CLI may relax it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionPolicy {
    pub require_username: bool,
}

impl Default for SubmissionPolicy {
    fn default() -> Self {
        Self {
            require_username: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyQuestion,
    EmptyUsername,
}

impl ValidationError {
    pub fn user_message(self) -> &'static str {
        match self {
            Self::EmptyQuestion => "Question cannot be empty.",
            Self::EmptyUsername => "Username cannot be empty.",
        }
    }

    /// The field that should regain focus after the inline error.
    pub fn field(self) -> ActiveField {
        match self {
            Self::EmptyQuestion => ActiveField::Question,
            Self::EmptyUsername => ActiveField::Username,
        }
    }
}

/// Errors the answer service boundary can report for one `ask` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskSourceError {
    /// Reply carried a non-success status code.
    Http { status: u16 },
    /// No usable response: refused connection, timeout, broken transport.
    Transport { details: String },
    /// Success status but the body did not match the contract.
    Decode { details: String },
}

/// Synchronous boundary to the answer service, driven from a worker thread.
pub trait AnswerSource {
    fn ask(&self, request: &AskRequest) -> Result<AnswerReceived, AskSourceError>;
}

impl<T: AnswerSource + ?Sized> AnswerSource for &T {
    fn ask(&self, request: &AskRequest) -> Result<AnswerReceived, AskSourceError> {
        (*self).ask(request)
    }
}

/// Hands a validated request to the background submission worker.
pub trait SubmissionDispatcher {
    fn dispatch(&self, request: AskRequest) -> Result<()>;
}

/// Trims both fields and enforces the non-empty invariants.
pub fn build_request(
    question: &str,
    username: &str,
    policy: SubmissionPolicy,
) -> Result<AskRequest, ValidationError> {
    let question = question.trim();
    if question.is_empty() {
        return Err(ValidationError::EmptyQuestion);
    }

    let username = username.trim();
    if username.is_empty() {
        if policy.require_username {
            return Err(ValidationError::EmptyUsername);
        }
        return Ok(AskRequest {
            question: question.to_owned(),
            username: None,
        });
    }

    Ok(AskRequest {
        question: question.to_owned(),
        username: Some(username.to_owned()),
    })
}

pub fn map_source_error(error: AskSourceError) -> SubmissionFailure {
    match error {
        AskSourceError::Http { status } => SubmissionFailure::ServerRejected { status },
        AskSourceError::Transport { details } => SubmissionFailure::ServiceUnreachable { details },
        AskSourceError::Decode { details } => SubmissionFailure::MalformedReply { details },
    }
}
