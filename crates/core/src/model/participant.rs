use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParticipantError {
    #[error("participant first name cannot be empty")]
    EmptyFirstName,

    #[error("participant last name cannot be empty")]
    EmptyLastName,
}

/// The student taking an attempt, as supplied by the entry screen.
///
/// An attempt fails closed when this data is absent; once constructed the
/// names are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    first_name: String,
    last_name: String,
}

impl Participant {
    /// Creates a new Participant.
    ///
    /// # Errors
    ///
    /// Returns an error if either name is empty or whitespace-only.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self, ParticipantError> {
        let first_name = first_name.into();
        if first_name.trim().is_empty() {
            return Err(ParticipantError::EmptyFirstName);
        }
        let last_name = last_name.into();
        if last_name.trim().is_empty() {
            return Err(ParticipantError::EmptyLastName);
        }

        Ok(Self {
            first_name: first_name.trim().to_owned(),
            last_name: last_name.trim().to_owned(),
        })
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// "First Last", as shown in attempt headers.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
