use std::sync::Arc;

use quiz_core::model::{AnswerSheet, Participant, QuizInfo, ResultSummary, ScoringRules};

use super::session::AttemptSession;
use crate::Clock;
use crate::error::AttemptError;
use crate::play::{AttemptId, PlayApi};

/// Entry data handed over by the prior screen.
///
/// Both pieces are required before an attempt can start; the workflow
/// fails closed when the whole packet is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptEntry {
    pub quiz: QuizInfo,
    pub participant: Participant,
}

/// Everything the results screen needs after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedAttempt {
    pub quiz: QuizInfo,
    pub answers: AnswerSheet,
    pub summary: ResultSummary,
    pub attempt_id: Option<AttemptId>,
}

/// Orchestrates attempt start and submission against the play service.
///
/// Local transitions (select, advance, retreat) stay on
/// [`AttemptSession`]; this service owns the clock and the remote seams.
/// Both remote calls are plain awaited futures, so dropping the call —
/// e.g. when the caller navigates away — cancels the in-flight request.
#[derive(Clone)]
pub struct AttemptFlowService {
    clock: Clock,
    api: Arc<dyn PlayApi>,
}

impl AttemptFlowService {
    #[must_use]
    pub fn new(clock: Clock, api: Arc<dyn PlayApi>) -> Self {
        Self { clock, api }
    }

    /// Start an attempt from navigation entry data.
    ///
    /// # Errors
    ///
    /// Returns `AttemptError::MissingEntryData` when the entry packet is
    /// absent, `AttemptError::NoQuestions` when the quiz has none, and
    /// propagates remote failures via `AttemptError::Play`.
    pub async fn start_attempt(
        &self,
        entry: Option<AttemptEntry>,
    ) -> Result<AttemptSession, AttemptError> {
        let entry = entry.ok_or(AttemptError::MissingEntryData)?;
        let questions = self.api.load_questions(entry.quiz.id()).await?;
        AttemptSession::new(entry.quiz, entry.participant, questions, self.clock.now())
    }

    /// Submit the attempt from its final question.
    ///
    /// On success the session completes and the returned packet carries
    /// the computed result. On failure the session drops back to its
    /// pre-submission state so the student can retry; session expiry has
    /// already invalidated the identity session by the time the error
    /// surfaces.
    ///
    /// # Errors
    ///
    /// Returns the session's guard errors (`NotOnFinalQuestion`,
    /// `CurrentUnanswered`, `SubmissionInFlight`, `AlreadyCompleted`) or
    /// `AttemptError::Play` for remote failures.
    pub async fn submit_current(
        &self,
        session: &mut AttemptSession,
    ) -> Result<CompletedAttempt, AttemptError> {
        let entries = session.begin_submission()?;

        let outcome = match self
            .api
            .submit_answers(session.quiz().id(), session.participant(), &entries)
            .await
        {
            Ok(outcome) => outcome,
            Err(err) => {
                session.submission_failed();
                return Err(err.into());
            }
        };

        let loaded = u32::try_from(session.questions().len()).unwrap_or(u32::MAX);
        let total = outcome.total_questions.unwrap_or(loaded);
        let rules = ScoringRules::resolve(session.quiz().passing_score());
        let summary = ResultSummary::compute(outcome.correct, total, rules);

        session.complete(summary.clone(), outcome.attempt_id, self.clock.now())?;

        Ok(CompletedAttempt {
            quiz: session.quiz().clone(),
            answers: session.answers().clone(),
            summary,
            attempt_id: outcome.attempt_id,
        })
    }
}
