//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by the remote play service client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PlayError {
    #[error("no authentication token available")]
    Unauthenticated,
    #[error("session expired")]
    SessionExpired,
    #[error("play service request failed with status {0}")]
    Status(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by the attempt session and its workflow.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AttemptError {
    #[error("quiz entry data is missing")]
    MissingEntryData,
    #[error("no questions available for this quiz")]
    NoQuestions,
    #[error("submission is only allowed from the final question")]
    NotOnFinalQuestion,
    #[error("current question has no selected answer")]
    CurrentUnanswered,
    #[error("a submission is already in flight")]
    SubmissionInFlight,
    #[error("attempt already completed")]
    AlreadyCompleted,
    #[error(transparent)]
    Play(#[from] PlayError),
}
