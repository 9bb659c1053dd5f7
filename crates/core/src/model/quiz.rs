use thiserror::Error;

use crate::model::ids::QuizId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizInfoError {
    #[error("quiz title cannot be empty")]
    EmptyTitle,

    #[error("passing score must be a percentage (got {0})")]
    InvalidPassingScore(u32),
}

/// Quiz metadata handed in by the entry screen.
///
/// `passing_score` is optional; result computation falls back to the
/// default threshold when it is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizInfo {
    id: QuizId,
    title: String,
    passing_score: Option<u32>,
}

impl QuizInfo {
    /// Creates new quiz metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the title is empty or the passing score exceeds
    /// 100.
    pub fn new(
        id: QuizId,
        title: impl Into<String>,
        passing_score: Option<u32>,
    ) -> Result<Self, QuizInfoError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(QuizInfoError::EmptyTitle);
        }
        if let Some(score) = passing_score {
            if score > 100 {
                return Err(QuizInfoError::InvalidPassingScore(score));
            }
        }

        Ok(Self {
            id,
            title: title.trim().to_owned(),
            passing_score,
        })
    }

    #[must_use]
    pub fn id(&self) -> QuizId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn passing_score(&self) -> Option<u32> {
        self.passing_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_title() {
        let err = QuizInfo::new(QuizId::new(1), "  ", None).unwrap_err();
        assert_eq!(err, QuizInfoError::EmptyTitle);
    }

    #[test]
    fn rejects_out_of_range_passing_score() {
        let err = QuizInfo::new(QuizId::new(1), "Rust basics", Some(101)).unwrap_err();
        assert_eq!(err, QuizInfoError::InvalidPassingScore(101));
    }

    #[test]
    fn happy_path_trims_title() {
        let info = QuizInfo::new(QuizId::new(3), "  Rust basics ", Some(70)).unwrap();
        assert_eq!(info.id(), QuizId::new(3));
        assert_eq!(info.title(), "Rust basics");
        assert_eq!(info.passing_score(), Some(70));
    }
}
