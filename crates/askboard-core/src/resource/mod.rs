//! Resource clients grouped by domain, all sharing one [`ApiClient`].
//!
//! Each operation is exactly one HTTP round trip returning the decoded
//! response body. No retries, paging, or caching.

pub mod answers;
pub mod questions;
pub mod user;

use std::sync::Arc;

use crate::client::ApiClient;

pub use answers::AnswersClient;
pub use questions::QuestionsClient;
pub use user::UserClient;

/// The board's API surface: `api.questions`, `api.answers`, `api.user`.
#[derive(Clone)]
pub struct Api {
    pub questions: QuestionsClient,
    pub answers: AnswersClient,
    pub user: UserClient,
    client: Arc<ApiClient>,
}

impl Api {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            questions: QuestionsClient::new(client.clone()),
            answers: AnswersClient::new(client.clone()),
            user: UserClient::new(client.clone()),
            client,
        }
    }

    /// The shared client, for token management and ad-hoc requests.
    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }
}

/// Percent-encode an identifier for use as a single path segment.
pub(crate) fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}
