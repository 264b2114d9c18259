//! Application events consumed by the shell orchestrator.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    InputKey(KeyInput),
    SubmissionCompleted(SubmissionResult),
    HealthProbed(ServiceHealth),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }
}

pub type SubmissionResult = Result<AnswerReceived, SubmissionFailure>;

/// Successful reply from the answer service, already mapped off the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerReceived {
    pub answer: String,
    pub question: Option<String>,
    pub answered_at_unix_ms: Option<i64>,
}

/// Terminal failure of one submission. Never fatal to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionFailure {
    /// Endpoint reachable but replied with a failure status.
    ServerRejected { status: u16 },
    /// No response at all (connection refused, timeout).
    ServiceUnreachable { details: String },
    /// 2xx reply whose body could not be decoded.
    MalformedReply { details: String },
}

impl SubmissionFailure {
    /// Status-line wording. The unreachable case must stay distinguishable
    /// from a plain server error.
    pub fn user_message(&self) -> String {
        match self {
            Self::ServerRejected { status } => {
                format!("The answer service returned an error (HTTP {status}).")
            }
            Self::ServiceUnreachable { .. } => {
                "No response from the answer service. It may not be running.".to_owned()
            }
            Self::MalformedReply { .. } => {
                "The answer service returned an unreadable reply.".to_owned()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceHealth {
    #[default]
    Unknown,
    Available,
    Unavailable,
}

impl ServiceHealth {
    pub fn as_label(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Available => "available",
            Self::Unavailable => "unavailable",
        }
    }
}
