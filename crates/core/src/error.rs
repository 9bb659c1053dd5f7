use thiserror::Error;

use crate::model::ParticipantError;
use crate::model::QuizInfoError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Participant(#[from] ParticipantError),
    #[error(transparent)]
    QuizInfo(#[from] QuizInfoError),
}
