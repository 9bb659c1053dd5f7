use crate::model::answers::{AnswerSelection, AnswerSheet};
use crate::model::ids::{ChoiceId, QuestionId};

/// One (question, choice) pair of a flattened submission.
///
/// A multi-select question with two toggled choices contributes two entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionEntry {
    pub question_id: QuestionId,
    pub choice_id: ChoiceId,
}

impl AnswerSheet {
    /// Flattens the sheet into submission entries.
    ///
    /// Entries follow sheet insertion order; within a multi-selection the
    /// toggle order is kept. No completeness check happens here — the
    /// submit transition gates on the final question only.
    #[must_use]
    pub fn normalize(&self) -> Vec<SubmissionEntry> {
        let mut entries = Vec::new();
        for (question_id, selection) in self.iter() {
            match selection {
                AnswerSelection::Single(choice_id) => entries.push(SubmissionEntry {
                    question_id: *question_id,
                    choice_id: *choice_id,
                }),
                AnswerSelection::Multiple(selected) => {
                    for choice_id in selected {
                        entries.push(SubmissionEntry {
                            question_id: *question_id,
                            choice_id: *choice_id,
                        });
                    }
                }
            }
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::question::{Choice, Question};

    fn question(id: u64, multiple: bool, choices: &[u64]) -> Question {
        Question::new(
            QuestionId::new(id),
            format!("Q{id}"),
            multiple,
            choices
                .iter()
                .map(|c| Choice::new(ChoiceId::new(*c), format!("c{c}")))
                .collect(),
        )
    }

    #[test]
    fn multi_selection_emits_one_entry_per_choice() {
        let q = question(1, true, &[10, 11, 12]);
        let mut sheet = AnswerSheet::new();
        sheet.select(&q, ChoiceId::new(10));
        sheet.select(&q, ChoiceId::new(12));
        sheet.select(&q, ChoiceId::new(11));

        let entries = sheet.normalize();

        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| e.question_id == q.id));
        let choices: Vec<u64> = entries.iter().map(|e| e.choice_id.value()).collect();
        assert_eq!(choices, vec![10, 12, 11]);
    }

    #[test]
    fn entries_follow_sheet_insertion_order() {
        let q1 = question(1, false, &[5, 6]);
        let q2 = question(2, true, &[10, 11, 12]);
        let mut sheet = AnswerSheet::new();
        sheet.select(&q1, ChoiceId::new(5));
        sheet.select(&q2, ChoiceId::new(10));
        sheet.select(&q2, ChoiceId::new(12));

        let entries = sheet.normalize();

        assert_eq!(
            entries,
            vec![
                SubmissionEntry {
                    question_id: q1.id,
                    choice_id: ChoiceId::new(5),
                },
                SubmissionEntry {
                    question_id: q2.id,
                    choice_id: ChoiceId::new(10),
                },
                SubmissionEntry {
                    question_id: q2.id,
                    choice_id: ChoiceId::new(12),
                },
            ]
        );
    }

    #[test]
    fn empty_multiple_entries_emit_nothing() {
        let q = question(1, true, &[10]);
        let mut sheet = AnswerSheet::new();
        sheet.select(&q, ChoiceId::new(10));
        sheet.select(&q, ChoiceId::new(10));

        assert!(sheet.normalize().is_empty());
    }
}
