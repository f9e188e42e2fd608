//! Error taxonomy for the plan-generation pipeline.
//!
//! Every failure is either a caller-input error (bad request data, detected
//! before any network call where possible) or a dependency error (the model
//! API, the store, or the model's own output let us down). `ServiceError`
//! carries that split so embedders can map errors onto a client-facing
//! rejection vs an upstream-failure signal without matching on strings.

use chrono::NaiveDate;
use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single call against the Gemini API.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("generation response carried no text part")]
    EmptyCompletion,
}

/// Failure of the candidate-fallback generation loop.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("all candidate models failed (tried: {})", attempted.join(", "))]
    Exhausted { attempted: Vec<String> },
}

/// Failure to turn raw model output into a valid plan.
#[derive(Error, Debug)]
pub enum PlanParseError {
    #[error("plan JSON did not match the expected shape: {0}")]
    Shape(#[from] serde_json::Error),

    #[error("task '{title}' has a non-positive duration")]
    NonPositiveDuration { title: String },

    #[error("task '{title}' is due {due_date}, outside {start}..={end}")]
    DueDateOutOfWindow {
        title: String,
        due_date: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
    },
}

/// Failure inside a [`GoalStore`](crate::store::GoalStore) implementation.
///
/// Display and source delegate to whatever the collaborator wrapped.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct StoreError(#[from] pub anyhow::Error);

/// Broad classification of a [`ServiceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request itself was unusable; a "bad request"-class signal.
    CallerInput,
    /// An external collaborator failed; an "upstream failure"-class signal.
    Dependency,
}

/// Terminal error of a plan-generation request.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("goal id in path does not match payload goalId")]
    GoalIdMismatch,

    #[error("target date must be in the future")]
    TargetDateNotFuture,

    #[error("{field} must be between 1 and 5, got {value}")]
    ScaleOutOfRange { field: &'static str, value: u8 },

    #[error("goal {goal_id} not found")]
    GoalNotFound { goal_id: String },

    #[error("plan generation failed: {0}")]
    Generation(#[from] GeneratorError),

    #[error("model output failed validation: {0}")]
    InvalidPlan(#[from] PlanParseError),

    #[error("plan store failed: {0}")]
    Store(#[from] StoreError),
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::GoalIdMismatch
            | ServiceError::TargetDateNotFuture
            | ServiceError::ScaleOutOfRange { .. }
            | ServiceError::GoalNotFound { .. } => ErrorKind::CallerInput,
            ServiceError::Generation(_)
            | ServiceError::InvalidPlan(_)
            | ServiceError::Store(_) => ErrorKind::Dependency,
        }
    }
}
