#![forbid(unsafe_code)]

pub mod attempts;
pub mod auth;
pub mod error;
pub mod play;

pub use quiz_core::Clock;

pub use error::{AttemptError, PlayError};

pub use attempts::{
    AttemptEntry, AttemptFlowService, AttemptProgress, AttemptSession, ChoiceView,
    CompletedAttempt, QuestionView,
};
pub use auth::{EnvTokenProvider, StaticTokenProvider, TokenProvider};
pub use play::{AttemptId, PlayApi, PlayClient, PlayConfig, SubmissionOutcome};
