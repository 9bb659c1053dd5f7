use chrono::{DateTime, Utc};
use std::fmt;

use quiz_core::model::{
    AnswerSheet, ChoiceId, Participant, Question, QuizInfo, ResultSummary, SubmissionEntry,
};

use super::progress::AttemptProgress;
use crate::error::AttemptError;
use crate::play::AttemptId;

//
// ─── ATTEMPT SESSION ───────────────────────────────────────────────────────────
//

/// In-memory state of one student's pass through a quiz.
///
/// Owns the fetched questions (read-only for the session), the navigation
/// cursor, and the answer sheet. Constructed by the attempt workflow once
/// questions have loaded; local transitions (select, advance, retreat)
/// never do I/O.
pub struct AttemptSession {
    quiz: QuizInfo,
    participant: Participant,
    questions: Vec<Question>,
    current: usize,
    answers: AnswerSheet,
    started_at: DateTime<Utc>,
    submitting: bool,
    completed_at: Option<DateTime<Utc>>,
    summary: Option<ResultSummary>,
    attempt_id: Option<AttemptId>,
}

impl AttemptSession {
    /// Create a session over a loaded question set.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns `AttemptError::NoQuestions` if the question set is empty —
    /// an empty quiz is an error to surface, not a valid session.
    pub fn new(
        quiz: QuizInfo,
        participant: Participant,
        questions: Vec<Question>,
        started_at: DateTime<Utc>,
    ) -> Result<Self, AttemptError> {
        if questions.is_empty() {
            return Err(AttemptError::NoQuestions);
        }

        Ok(Self {
            quiz,
            participant,
            questions,
            current: 0,
            answers: AnswerSheet::new(),
            started_at,
            submitting: false,
            completed_at: None,
            summary: None,
            attempt_id: None,
        })
    }

    #[must_use]
    pub fn quiz(&self) -> &QuizInfo {
        &self.quiz
    }

    #[must_use]
    pub fn participant(&self) -> &Participant {
        &self.participant
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Result summary, present once the attempt has completed.
    #[must_use]
    pub fn summary(&self) -> Option<&ResultSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn attempt_id(&self) -> Option<AttemptId> {
        self.attempt_id
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    //
    // ─── NAVIGATION CURSOR ─────────────────────────────────────────────────
    //

    /// 0-based index of the question under the cursor.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question under the cursor.
    ///
    /// The cursor is clamped to the question list, which is non-empty by
    /// construction, so there is always a current question.
    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    /// Move the cursor forward one question, clamped at the last index.
    ///
    /// No-op while a submission is in flight or after completion. Returns
    /// whether the cursor moved.
    pub fn advance(&mut self) -> bool {
        if self.submitting || self.is_complete() || self.is_last_question() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Move the cursor back one question, clamped at index 0.
    ///
    /// No-op while a submission is in flight or after completion. Returns
    /// whether the cursor moved.
    pub fn retreat(&mut self) -> bool {
        if self.submitting || self.is_complete() || self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    //
    // ─── ANSWERING ─────────────────────────────────────────────────────────
    //

    /// Record a selection against the current question.
    ///
    /// Replacement vs. toggle semantics follow the question's multiplicity
    /// flag; see [`AnswerSheet::select`].
    ///
    /// # Errors
    ///
    /// Returns `AttemptError::AlreadyCompleted` after completion and
    /// `AttemptError::SubmissionInFlight` while submitting.
    pub fn select_current(&mut self, choice: ChoiceId) -> Result<(), AttemptError> {
        if self.is_complete() {
            return Err(AttemptError::AlreadyCompleted);
        }
        if self.submitting {
            return Err(AttemptError::SubmissionInFlight);
        }

        let question = &self.questions[self.current];
        self.answers.select(question, choice);
        Ok(())
    }

    /// Whether the current question has an answer — derived from the
    /// sheet, never stored.
    #[must_use]
    pub fn has_answered_current(&self) -> bool {
        self.answers.is_answered(self.current_question().id)
    }

    /// Returns a summary of the current attempt progress.
    #[must_use]
    pub fn progress(&self) -> AttemptProgress {
        AttemptProgress {
            total: self.questions.len(),
            position: self.current + 1,
            answered: self.answers.answered_count(),
            is_complete: self.is_complete(),
        }
    }

    //
    // ─── SUBMISSION ────────────────────────────────────────────────────────
    //

    /// Enter the submitting phase and hand back the normalized payload.
    ///
    /// Permitted only on the final question, only when it is answered, and
    /// only when no submission is already in flight. Earlier questions are
    /// not re-checked; a student who navigated back without answering can
    /// still submit.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyCompleted`, `SubmissionInFlight`,
    /// `NotOnFinalQuestion`, or `CurrentUnanswered` when the transition is
    /// not permitted.
    pub fn begin_submission(&mut self) -> Result<Vec<SubmissionEntry>, AttemptError> {
        if self.is_complete() {
            return Err(AttemptError::AlreadyCompleted);
        }
        if self.submitting {
            return Err(AttemptError::SubmissionInFlight);
        }
        if !self.is_last_question() {
            return Err(AttemptError::NotOnFinalQuestion);
        }
        if !self.has_answered_current() {
            return Err(AttemptError::CurrentUnanswered);
        }

        self.submitting = true;
        Ok(self.answers.normalize())
    }

    /// Leave the submitting phase after a failed remote call.
    ///
    /// Answers stay intact; the student may retry.
    pub fn submission_failed(&mut self) {
        self.submitting = false;
    }

    /// Record the outcome and complete the attempt.
    ///
    /// `completed_at` should come from the services layer clock.
    ///
    /// # Errors
    ///
    /// Returns `AttemptError::AlreadyCompleted` if the attempt is already
    /// finished.
    pub fn complete(
        &mut self,
        summary: ResultSummary,
        attempt_id: Option<AttemptId>,
        completed_at: DateTime<Utc>,
    ) -> Result<(), AttemptError> {
        if self.is_complete() {
            return Err(AttemptError::AlreadyCompleted);
        }

        self.submitting = false;
        self.completed_at = Some(completed_at);
        self.summary = Some(summary);
        self.attempt_id = attempt_id;
        Ok(())
    }
}

impl fmt::Debug for AttemptSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttemptSession")
            .field("quiz_id", &self.quiz.id())
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("answered", &self.answers.answered_count())
            .field("started_at", &self.started_at)
            .field("submitting", &self.submitting)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
