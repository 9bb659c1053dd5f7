mod answers;
mod ids;
mod participant;
mod question;
mod quiz;
mod scoring;
mod submission;

pub use ids::{ChoiceId, QuestionId, QuizId};

pub use answers::{AnswerSelection, AnswerSheet};
pub use participant::{Participant, ParticipantError};
pub use question::{Choice, Question};
pub use quiz::{QuizInfo, QuizInfoError};
pub use scoring::{DEFAULT_PASSING_THRESHOLD, ResultSummary, ScoringRules};
pub use submission::SubmissionEntry;
