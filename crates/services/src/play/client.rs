use std::env;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use url::Url;

use quiz_core::model::{
    Choice, ChoiceId, Participant, Question, QuestionId, QuizId, SubmissionEntry,
};

use super::api::{PlayApi, SubmissionOutcome};
use crate::auth::TokenProvider;
use crate::error::PlayError;

#[derive(Clone, Debug)]
pub struct PlayConfig {
    pub base_url: Url,
}

impl PlayConfig {
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// Reads the base URL from `QUIZ_API_BASE_URL`.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let raw = env::var("QUIZ_API_BASE_URL").ok()?;
        let base_url = Url::parse(raw.trim()).ok()?;
        Some(Self { base_url })
    }
}

/// HTTP client for the remote play service.
///
/// Every request carries the identity provider's bearer token; a missing
/// token fails closed before any I/O, and a 401 response invalidates the
/// session through the provider before the error surfaces.
#[derive(Clone)]
pub struct PlayClient {
    client: Client,
    config: PlayConfig,
    tokens: Arc<dyn TokenProvider>,
}

impl PlayClient {
    #[must_use]
    pub fn new(config: PlayConfig, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            client: Client::new(),
            config,
            tokens,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.as_str().trim_end_matches('/'),
            path
        )
    }

    async fn bearer(&self) -> Result<String, PlayError> {
        self.tokens.token().await.ok_or(PlayError::Unauthenticated)
    }

    async fn check(&self, response: Response) -> Result<Response, PlayError> {
        if response.status() == StatusCode::UNAUTHORIZED {
            log::warn!("play service rejected the token; invalidating session");
            self.tokens.logout().await;
            return Err(PlayError::SessionExpired);
        }
        if !response.status().is_success() {
            log::warn!("play service returned status {}", response.status());
            return Err(PlayError::Status(response.status()));
        }
        Ok(response)
    }
}

#[async_trait]
impl PlayApi for PlayClient {
    async fn load_questions(&self, quiz_id: QuizId) -> Result<Vec<Question>, PlayError> {
        let token = self.bearer().await?;
        let url = self.endpoint(&format!("api/quizzes/play/{quiz_id}"));

        let response = self.client.get(url).bearer_auth(token).send().await?;
        let body: QuestionsResponse = self.check(response).await?.json().await?;

        log::debug!(
            "loaded {} questions for quiz {quiz_id}",
            body.questions.len()
        );
        Ok(body.questions.into_iter().map(QuestionDto::into_question).collect())
    }

    async fn submit_answers(
        &self,
        quiz_id: QuizId,
        participant: &Participant,
        entries: &[SubmissionEntry],
    ) -> Result<SubmissionOutcome, PlayError> {
        let token = self.bearer().await?;
        let url = self.endpoint(&format!("api/quizzes/play/{quiz_id}/submit"));
        let payload = SubmitRequest::new(participant, entries);

        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await?;
        let body: SubmitResponse = self.check(response).await?.json().await?;

        log::debug!(
            "quiz {quiz_id} submitted: {} correct of {:?}",
            body.bonnes_reponses,
            body.total_questions
        );
        Ok(SubmissionOutcome {
            correct: body.bonnes_reponses,
            total_questions: body.total_questions,
            attempt_id: body.tentative_id,
        })
    }
}

//
// ─── WIRE TYPES ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct QuestionsResponse {
    #[serde(default)]
    questions: Vec<QuestionDto>,
}

#[derive(Debug, Deserialize)]
struct QuestionDto {
    id: u64,
    texte: String,
    #[serde(rename = "isMultipleChoice", default)]
    is_multiple_choice: bool,
    #[serde(default)]
    reponses: Vec<ChoiceDto>,
}

impl QuestionDto {
    fn into_question(self) -> Question {
        Question::new(
            QuestionId::new(self.id),
            self.texte,
            self.is_multiple_choice,
            self.reponses
                .into_iter()
                .map(|choice| Choice::new(ChoiceId::new(choice.id), choice.texte))
                .collect(),
        )
    }
}

#[derive(Debug, Deserialize)]
struct ChoiceDto {
    id: u64,
    texte: String,
}

#[derive(Debug, Serialize)]
struct SubmitRequest<'a> {
    #[serde(rename = "prenomParticipant")]
    prenom_participant: &'a str,
    #[serde(rename = "nomParticipant")]
    nom_participant: &'a str,
    reponses: Vec<AnswerDto>,
}

impl<'a> SubmitRequest<'a> {
    fn new(participant: &'a Participant, entries: &[SubmissionEntry]) -> Self {
        Self {
            prenom_participant: participant.first_name(),
            nom_participant: participant.last_name(),
            reponses: entries
                .iter()
                .map(|entry| AnswerDto {
                    question_id: entry.question_id.value(),
                    reponse_id: entry.choice_id.value(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct AnswerDto {
    #[serde(rename = "questionId")]
    question_id: u64,
    #[serde(rename = "reponseId")]
    reponse_id: u64,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    #[serde(rename = "bonnesReponses", default)]
    bonnes_reponses: u32,
    #[serde(rename = "totalQuestions")]
    total_questions: Option<u32>,
    #[serde(rename = "tentativeId")]
    tentative_id: Option<i64>,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn questions_response_parses_wire_format() {
        let raw = r#"{
            "questions": [
                {
                    "id": 1,
                    "texte": "Which keyword borrows?",
                    "isMultipleChoice": false,
                    "reponses": [
                        { "id": 10, "texte": "&" },
                        { "id": 11, "texte": "move" }
                    ]
                },
                {
                    "id": 2,
                    "texte": "Select all integer types",
                    "isMultipleChoice": true,
                    "reponses": [
                        { "id": 20, "texte": "u8" },
                        { "id": 21, "texte": "f32" }
                    ]
                }
            ]
        }"#;

        let body: QuestionsResponse = serde_json::from_str(raw).unwrap();
        let questions: Vec<Question> = body
            .questions
            .into_iter()
            .map(QuestionDto::into_question)
            .collect();

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id, QuestionId::new(1));
        assert!(!questions[0].is_multiple);
        assert_eq!(questions[0].choices.len(), 2);
        assert_eq!(questions[0].choices[0].text, "&");
        assert!(questions[1].is_multiple);
    }

    #[test]
    fn submit_request_uses_wire_field_names() {
        let participant = Participant::new("Jane", "Doe").unwrap();
        let entries = [
            SubmissionEntry {
                question_id: QuestionId::new(1),
                choice_id: ChoiceId::new(5),
            },
            SubmissionEntry {
                question_id: QuestionId::new(2),
                choice_id: ChoiceId::new(10),
            },
        ];

        let value = serde_json::to_value(SubmitRequest::new(&participant, &entries)).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "prenomParticipant": "Jane",
                "nomParticipant": "Doe",
                "reponses": [
                    { "questionId": 1, "reponseId": 5 },
                    { "questionId": 2, "reponseId": 10 }
                ]
            })
        );
    }

    #[test]
    fn submit_response_defaults_missing_fields() {
        let body: SubmitResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(body.bonnes_reponses, 0);
        assert_eq!(body.total_questions, None);
        assert_eq!(body.tentative_id, None);

        let body: SubmitResponse = serde_json::from_str(
            r#"{ "bonnesReponses": 7, "totalQuestions": 10, "tentativeId": 123 }"#,
        )
        .unwrap();
        assert_eq!(body.bonnes_reponses, 7);
        assert_eq!(body.total_questions, Some(10));
        assert_eq!(body.tentative_id, Some(123));
    }
}
