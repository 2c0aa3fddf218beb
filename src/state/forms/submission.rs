//! Submission lifecycle types

use super::validation::ValidationErrors;
use super::FlowKind;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Lifecycle of a single submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// Succeeded and Failed wait for the caller to consume them
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }

    pub fn can_transition_to(&self, next: SubmissionState) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Validating)
                | (Self::Succeeded, Self::Validating)
                | (Self::Failed, Self::Validating)
                | (Self::Validating, Self::Submitting)
                | (Self::Validating, Self::Failed)
                | (Self::Submitting, Self::Succeeded)
                | (Self::Submitting, Self::Failed)
                | (Self::Submitting, Self::Idle)
                | (Self::Succeeded, Self::Idle)
                | (Self::Failed, Self::Idle)
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Validating => "Validating",
            Self::Submitting => "Submitting",
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
        }
    }
}

/// Why a submit attempt failed. Both kinds are recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Client-side rule failures, one message per field
    #[error("{} field(s) need attention", errors.len())]
    ValidationFailed { errors: ValidationErrors },
    /// Rejection reported by the (simulated) backend after the delay
    #[error("{message}")]
    RemoteRejected { message: String },
}

/// Payload of a successful attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitSuccess {
    pub flow: FlowKind,
    pub attempt: Uuid,
    pub message: String,
    pub completed_at: DateTime<Utc>,
}

pub type SubmitOutcome = Result<SubmitSuccess, SubmitError>;

/// What happened to a `submit` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAck {
    /// An attempt is already in flight; the call was dropped
    Ignored,
    /// Validation failed synchronously; the controller is in `Failed`
    Invalid,
    /// Validation passed and the request is pending
    Pending(Uuid),
}

/// Notifications delivered to a controller observer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerEvent {
    StateChanged {
        from: SubmissionState,
        to: SubmissionState,
    },
    /// Terminal notification, exactly one per accepted submit
    Finished(SubmitOutcome),
}
