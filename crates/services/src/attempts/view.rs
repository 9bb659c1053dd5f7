use quiz_core::model::ChoiceId;

use super::session::AttemptSession;

/// Presentation-agnostic rendering of one choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceView {
    pub id: ChoiceId,
    pub text: String,
    pub selected: bool,
}

/// Presentation-agnostic rendering of the question under the cursor.
///
/// This is intentionally **not** a UI view-model:
/// - no pre-formatted strings
/// - no localization assumptions
///
/// The UI decides how to present multiplicity hints, progress bars and the
/// submit affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    /// 1-based position of this question.
    pub position: usize,
    pub total: usize,
    pub text: String,
    pub is_multiple: bool,
    pub choices: Vec<ChoiceView>,
    pub is_last: bool,
    /// Whether the next/submit affordance should be enabled.
    pub has_answer: bool,
}

impl QuestionView {
    #[must_use]
    pub fn from_session(session: &AttemptSession) -> Self {
        let question = session.current_question();
        let choices = question
            .choices
            .iter()
            .map(|choice| ChoiceView {
                id: choice.id,
                text: choice.text.clone(),
                selected: session.answers().is_selected(question.id, choice.id),
            })
            .collect();

        Self {
            position: session.current_index() + 1,
            total: session.questions().len(),
            text: question.text.clone(),
            is_multiple: question.is_multiple,
            choices,
            is_last: session.is_last_question(),
            has_answer: session.has_answered_current(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{Choice, Participant, Question, QuestionId, QuizId, QuizInfo};
    use quiz_core::time::fixed_now;

    #[test]
    fn view_marks_selected_choices() {
        let quiz = QuizInfo::new(QuizId::new(1), "Test quiz", None).unwrap();
        let participant = Participant::new("Jane", "Doe").unwrap();
        let question = Question::new(
            QuestionId::new(1),
            "Pick two",
            true,
            vec![
                Choice::new(ChoiceId::new(10), "a"),
                Choice::new(ChoiceId::new(11), "b"),
            ],
        );
        let mut session =
            AttemptSession::new(quiz, participant, vec![question], fixed_now()).unwrap();
        session.select_current(ChoiceId::new(11)).unwrap();

        let view = QuestionView::from_session(&session);

        assert_eq!(view.position, 1);
        assert_eq!(view.total, 1);
        assert!(view.is_last);
        assert!(view.has_answer);
        assert!(!view.choices[0].selected);
        assert!(view.choices[1].selected);
    }
}
