use async_trait::async_trait;

use quiz_core::model::{Participant, Question, QuizId, SubmissionEntry};

use crate::error::PlayError;

/// Remote identifier of a recorded attempt.
///
/// NOTE: This is currently `i64` to match the service's row IDs.
pub type AttemptId = i64;

/// What the play service reports back for a submitted attempt.
///
/// `total_questions` is optional on the wire; the workflow falls back to
/// the loaded question count before computing the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub correct: u32,
    pub total_questions: Option<u32>,
    pub attempt_id: Option<AttemptId>,
}

/// Remote question loader and answer submitter.
///
/// The production implementation is [`super::PlayClient`]; tests drive the
/// attempt workflow against in-memory fakes of this trait.
#[async_trait]
pub trait PlayApi: Send + Sync {
    /// Fetch the question set for a quiz.
    ///
    /// # Errors
    ///
    /// Returns `PlayError` when no token is available, the session has
    /// expired, or the request fails.
    async fn load_questions(&self, quiz_id: QuizId) -> Result<Vec<Question>, PlayError>;

    /// Submit normalized answers for a quiz.
    ///
    /// # Errors
    ///
    /// Returns `PlayError` when no token is available, the session has
    /// expired, or the request fails.
    async fn submit_answers(
        &self,
        quiz_id: QuizId,
        participant: &Participant,
        entries: &[SubmissionEntry],
    ) -> Result<SubmissionOutcome, PlayError>;
}
