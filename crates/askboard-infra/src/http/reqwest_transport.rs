//! ReqwestTransport -- concrete [`HttpTransport`] over `reqwest`.
//!
//! Resolves request paths against the configured base URL, forwards query
//! parameters, headers, and bodies verbatim, and reports every status the
//! server answers with. Only requests that never got a response become
//! `ApiError::Network`.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::Url;
use reqwest::header::HeaderMap;
use tracing::debug;

use askboard_core::port::transport::HttpTransport;
use askboard_types::config::ClientConfig;
use askboard_types::error::ApiError;
use askboard_types::http::{ApiRequest, FilePart, Method, RawResponse, RequestBody};

/// Validate a base URL: absolute, http or https.
pub fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let url = Url::parse(raw).map_err(|e| ApiError::Config(format!("invalid base URL '{raw}': {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ApiError::Config(format!(
            "unsupported base URL scheme '{other}' in '{raw}'"
        ))),
    }
}

pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Build a transport from client settings. The base URL is fixed from
    /// here on.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let base_url = parse_base_url(&config.base_url)?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for a request path.
    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

/// Single-field multipart form. reqwest sets the multipart content type
/// (with its boundary) itself.
fn file_form(file: FilePart) -> Result<Form, ApiError> {
    let mut part = Part::bytes(file.bytes).file_name(file.file_name);
    if let Some(content_type) = file.content_type {
        part = part
            .mime_str(&content_type)
            .map_err(|e| ApiError::Encode(format!("invalid content type '{content_type}': {e}")))?;
    }
    Ok(Form::new().part(FilePart::FIELD_NAME, part))
}

/// Flatten response headers to lowercase names. Repeated headers are joined
/// with `", "`; values that are not visible ASCII are skipped.
fn collect_headers(map: &HeaderMap) -> BTreeMap<String, String> {
    let mut headers: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in map {
        let Ok(value) = value.to_str() else {
            continue;
        };
        headers
            .entry(name.as_str().to_string())
            .and_modify(|joined| {
                joined.push_str(", ");
                joined.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }
    headers
}

impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let url = self.url(&request.path);

        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), &url);
        if !request.query.is_empty() {
            builder = builder.query(request.query.pairs());
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(body) => builder.json(&body),
            RequestBody::Multipart(file) => builder.multipart(file_form(file)?),
        };

        let response = builder.send().await.map_err(|e| {
            debug!(url = %url, error = %e, "No response received");
            ApiError::network(e.to_string())
        })?;

        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::network(format!("failed to read response body: {e}")))?;

        Ok(RawResponse {
            status,
            headers,
            body: RawResponse::parse_body(&bytes),
        })
    }
}

#[cfg(test)]
mod tests {
    use askboard_types::error::EXPIRED_TOKEN_CHALLENGE;
    use askboard_types::query::QueryParams;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn transport_for(server: &MockServer) -> ReqwestTransport {
        let config = ClientConfig {
            base_url: format!("{}/api/", server.uri()),
            ..Default::default()
        };
        ReqwestTransport::new(&config).unwrap()
    }

    #[test]
    fn rejects_invalid_base_urls() {
        assert!(matches!(parse_base_url("not a url"), Err(ApiError::Config(_))));
        assert!(matches!(
            parse_base_url("ftp://example.com"),
            Err(ApiError::Config(_))
        ));
        assert!(parse_base_url("https://example.com/api").is_ok());
    }

    #[test]
    fn repeated_headers_are_joined() {
        let mut map = HeaderMap::new();
        map.append("www-authenticate", "Basic realm=\"askboard\"".parse().unwrap());
        map.append("WWW-Authenticate", EXPIRED_TOKEN_CHALLENGE.parse().unwrap());
        map.insert("content-type", "application/json".parse().unwrap());

        let headers = collect_headers(&map);

        assert_eq!(
            headers.get("www-authenticate").map(String::as_str),
            Some(format!("Basic realm=\"askboard\", {EXPIRED_TOKEN_CHALLENGE}").as_str())
        );
        assert_eq!(
            headers.get("content-type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn joins_paths_onto_base() {
        let config = ClientConfig {
            base_url: "http://localhost:5000/api/".to_string(),
            ..Default::default()
        };
        let transport = ReqwestTransport::new(&config).unwrap();
        assert_eq!(transport.base_url(), "http://localhost:5000/api");
        assert_eq!(transport.url("/answers"), "http://localhost:5000/api/answers");
        assert_eq!(transport.url("answers"), "http://localhost:5000/api/answers");
    }

    #[tokio::test]
    async fn forwards_query_headers_and_parses_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/answers"))
            .and(query_param("limit", "10"))
            .and(header("authorization", "Bearer tok"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"answers": [], "answerCount": 0})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut request = ApiRequest::new(Method::Get, "/answers")
            .with_query(QueryParams::new().with("limit", "10"));
        request.set_header("Authorization", "Bearer tok");

        let response = transport_for(&server).send(request).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, json!({"answers": [], "answerCount": 0}));
    }

    #[tokio::test]
    async fn error_statuses_are_returned_not_raised() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/questions/q1"))
            .respond_with(
                ResponseTemplate::new(401)
                    .insert_header("WWW-Authenticate", "Bearer")
                    .set_body_string("Unauthorized"),
            )
            .mount(&server)
            .await;

        let response = transport_for(&server)
            .send(ApiRequest::new(Method::Delete, "/questions/q1"))
            .await
            .unwrap();

        assert_eq!(response.status, 401);
        assert_eq!(response.header("www-authenticate"), Some("Bearer"));
        assert_eq!(response.body, json!("Unauthorized"));
    }

    #[tokio::test]
    async fn sends_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/answers/a1"))
            .and(body_json(json!({"_id": "a1", "body": "edited"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let response = transport_for(&server)
            .send(
                ApiRequest::new(Method::Put, "/answers/a1")
                    .with_json(json!({"_id": "a1", "body": "edited"})),
            )
            .await
            .unwrap();

        assert_eq!(response.status, 204);
        assert_eq!(response.body, serde_json::Value::Null);
    }

    #[tokio::test]
    async fn sends_multipart_file_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/photos"))
            .and(header_exists("content-type"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .mount(&server)
            .await;

        let response = transport_for(&server)
            .send(
                ApiRequest::new(Method::Post, "/photos").with_file(
                    FilePart::new("avatar.png", b"png-bytes".to_vec())
                        .with_content_type("image/png"),
                ),
            )
            .await
            .unwrap();
        assert_eq!(response.status, 200);

        let received = server.received_requests().await.unwrap();
        let request = &received[0];
        let content_type = request
            .headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("multipart/form-data; boundary="));
        let body = String::from_utf8_lossy(&request.body);
        assert!(body.contains(r#"name="File""#));
        assert!(body.contains(r#"filename="avatar.png""#));
        assert!(body.contains("png-bytes"));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        let config = ClientConfig {
            // Port 9 (discard) on localhost is not expected to be listening.
            base_url: "http://127.0.0.1:9/api".to_string(),
            timeout_secs: Some(5),
            ..Default::default()
        };
        let transport = ReqwestTransport::new(&config).unwrap();

        let err = transport
            .send(ApiRequest::new(Method::Get, "/answers"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Network { .. }));
    }

    #[tokio::test]
    async fn rejects_bad_upload_content_type() {
        let server = MockServer::start().await;
        let err = transport_for(&server)
            .send(
                ApiRequest::new(Method::Post, "/photos")
                    .with_file(FilePart::new("a", vec![]).with_content_type("not a mime")),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Encode(_)));
    }
}
