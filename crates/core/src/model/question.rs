use crate::model::ids::{ChoiceId, QuestionId};

//
// ─── CHOICE ────────────────────────────────────────────────────────────────────
//

/// One selectable choice of a question.
///
/// Belongs to exactly one question; the pairing is implied by the question
/// that carries it, not stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub id: ChoiceId,
    pub text: String,
}

impl Choice {
    #[must_use]
    pub fn new(id: ChoiceId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A quiz question as loaded for one attempt.
///
/// Immutable once loaded: the session never rewrites question data, it only
/// records selections against it. `is_multiple` decides the shape of the
/// stored answer (single replacement vs. toggled set) once and for all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub is_multiple: bool,
    pub choices: Vec<Choice>,
}

impl Question {
    #[must_use]
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        is_multiple: bool,
        choices: Vec<Choice>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            is_multiple,
            choices,
        }
    }

    /// Looks up a choice of this question by id.
    #[must_use]
    pub fn choice(&self, id: ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|choice| choice.id == id)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
