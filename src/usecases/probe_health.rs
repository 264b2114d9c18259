//! Startup health probe against the answer service.
//!
//! The probe is informational: its outcome is surfaced in the status bar
//! and never gates submission.

use crate::domain::events::ServiceHealth;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthSourceError {
    Http { status: u16 },
    Transport { details: String },
}

pub trait HealthSource {
    fn check_health(&self) -> Result<(), HealthSourceError>;
}

impl<T: HealthSource + ?Sized> HealthSource for &T {
    fn check_health(&self) -> Result<(), HealthSourceError> {
        (*self).check_health()
    }
}

pub fn probe_health(source: &dyn HealthSource) -> ServiceHealth {
    match source.check_health() {
        Ok(()) => {
            tracing::info!("answer service health probe succeeded");
            ServiceHealth::Available
        }
        Err(HealthSourceError::Http { status }) => {
            tracing::warn!(status, "answer service health probe rejected");
            ServiceHealth::Unavailable
        }
        Err(HealthSourceError::Transport { details }) => {
            tracing::warn!(details = %details, "answer service unreachable during health probe");
            ServiceHealth::Unavailable
        }
    }
}
