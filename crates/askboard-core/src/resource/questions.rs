//! Questions resource.
//!
//! Listing is a POST with the filter parameters wrapped in the JSON body
//! (`{"params": {...}}`), unlike answers which use a GET query string.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Value, json};

use askboard_types::error::ApiError;
use askboard_types::query::QueryParams;
use askboard_types::question::{Question, QuestionId, QuestionsEnvelope};

use super::segment;
use crate::client::ApiClient;

#[derive(Serialize)]
struct FilterBody<'a> {
    params: &'a QueryParams,
}

#[derive(Clone)]
pub struct QuestionsClient {
    client: Arc<ApiClient>,
}

impl QuestionsClient {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `POST /questions/filtered`
    pub async fn list(&self, params: &QueryParams) -> Result<QuestionsEnvelope, ApiError> {
        self.client
            .post("/questions/filtered", &FilterBody { params })
            .await
    }

    /// `POST /questions/:id`
    pub async fn details(&self, id: &QuestionId) -> Result<Question, ApiError> {
        self.client.post(&path(id), &json!({})).await
    }

    /// `POST /questions`
    pub async fn create(&self, question: &Question) -> Result<Value, ApiError> {
        self.client.post("/questions", question).await
    }

    /// `PUT /questions/:id`; the question must carry its identifier.
    pub async fn update(&self, question: &Question) -> Result<Value, ApiError> {
        let id = question
            .id
            .as_ref()
            .ok_or(ApiError::MissingIdentifier { resource: "question" })?;
        self.client.put(&path(id), question).await
    }

    /// `DELETE /questions/:id`
    pub async fn delete(&self, id: &QuestionId) -> Result<Value, ApiError> {
        self.client.delete(&path(id)).await
    }

    /// `POST /questions/:id/attend`
    pub async fn attend(&self, id: &QuestionId) -> Result<Value, ApiError> {
        self.client
            .post(&format!("{}/attend", path(id)), &json!({}))
            .await
    }

    /// `DELETE /questions/:id/attend`
    pub async fn unattend(&self, id: &QuestionId) -> Result<Value, ApiError> {
        self.client.delete(&format!("{}/attend", path(id))).await
    }
}

fn path(id: &QuestionId) -> String {
    format!("/questions/{}", segment(id.as_str()))
}
