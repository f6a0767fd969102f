//! Answers resource. Listing passes parameters as a GET query string.

use std::sync::Arc;

use serde_json::Value;

use askboard_types::answer::{Answer, AnswerId, AnswersEnvelope};
use askboard_types::error::ApiError;
use askboard_types::query::QueryParams;

use super::segment;
use crate::client::ApiClient;

#[derive(Clone)]
pub struct AnswersClient {
    client: Arc<ApiClient>,
}

impl AnswersClient {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `GET /answers?<params>`
    pub async fn list(&self, params: &QueryParams) -> Result<AnswersEnvelope, ApiError> {
        self.client.get_with_query("/answers", params).await
    }

    /// `GET /answers/:id`
    pub async fn details(&self, id: &AnswerId) -> Result<Answer, ApiError> {
        self.client.get(&path(id)).await
    }

    /// `POST /answers`
    pub async fn create(&self, answer: &Answer) -> Result<Value, ApiError> {
        self.client.post("/answers", answer).await
    }

    /// `PUT /answers/:id`; the answer must carry its identifier.
    pub async fn update(&self, answer: &Answer) -> Result<Value, ApiError> {
        let id = answer
            .id
            .as_ref()
            .ok_or(ApiError::MissingIdentifier { resource: "answer" })?;
        self.client.put(&path(id), answer).await
    }

    /// `DELETE /answers/:id`
    pub async fn delete(&self, id: &AnswerId) -> Result<Value, ApiError> {
        self.client.delete(&path(id)).await
    }
}

fn path(id: &AnswerId) -> String {
    format!("/answers/{}", segment(id.as_str()))
}

#[cfg(test)]
mod tests {
    use askboard_types::http::{Method, RawResponse, RequestBody};
    use serde_json::json;

    use super::*;
    use crate::test_support::Harness;

    #[tokio::test]
    async fn list_sends_params_as_query() {
        let h = Harness::new();
        h.transport.respond(RawResponse::new(
            200,
            json!({"answers": [{"_id": "a1"}, {"_id": "a2"}], "answerCount": 2}),
        ));
        let params = QueryParams::new().with("questionId", "q1").with("limit", "10");

        let envelope = AnswersClient::new(h.client.clone()).list(&params).await.unwrap();

        assert_eq!(envelope.answer_count, 2);
        assert_eq!(envelope.answers.len(), 2);
        let sent = h.transport.last_request();
        assert_eq!((sent.method, sent.path.as_str()), (Method::Get, "/answers"));
        assert_eq!(sent.query, params);
        assert_eq!(sent.body, RequestBody::Empty);
    }

    #[tokio::test]
    async fn details_is_a_get() {
        let h = Harness::new();
        h.transport
            .respond(RawResponse::new(200, json!({"_id": "a1", "body": "yes"})));

        let answer = AnswersClient::new(h.client.clone())
            .details(&AnswerId::new("a1"))
            .await
            .unwrap();

        assert_eq!(answer.body(), Some("yes"));
        let sent = h.transport.last_request();
        assert_eq!((sent.method, sent.path.as_str()), (Method::Get, "/answers/a1"));
    }

    #[tokio::test]
    async fn crud_paths() {
        let h = Harness::new();
        let answers = AnswersClient::new(h.client.clone());
        let answer = Answer::new().with_id("a9").with("body", "text");

        answers.create(&answer).await.unwrap();
        answers.update(&answer).await.unwrap();
        answers.delete(&AnswerId::new("a9")).await.unwrap();

        let sent: Vec<(Method, String)> = h
            .transport
            .requests()
            .into_iter()
            .map(|r| (r.method, r.path))
            .collect();
        assert_eq!(
            sent,
            vec![
                (Method::Post, "/answers".to_string()),
                (Method::Put, "/answers/a9".to_string()),
                (Method::Delete, "/answers/a9".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn update_requires_id() {
        let h = Harness::new();

        let err = AnswersClient::new(h.client.clone())
            .update(&Answer::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::MissingIdentifier { resource: "answer" }));
        assert!(h.transport.requests().is_empty());
    }

    #[tokio::test]
    async fn missing_answer_navigates_to_not_found() {
        let h = Harness::new();
        h.transport.respond(RawResponse::new(
            400,
            json!({"errors": {"id": ["'nope' is not a valid id"]}}),
        ));

        let err = AnswersClient::new(h.client.clone())
            .details(&AnswerId::new("nope"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(400));
        assert_eq!(
            h.navigator.routes(),
            vec![askboard_types::ui::Route::NotFound]
        );
    }
}
