use crate::core::{CommentSource, ConfigProvider};
use crate::domain::model::Comment;
use crate::utils::error::FetchFailure;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;

/// Reads the comment collection with a single GET. No retries, no timeout.
pub struct HttpCommentSource<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> HttpCommentSource<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn build_headers(&self) -> Result<HeaderMap, FetchFailure> {
        let mut headers = HeaderMap::new();
        for (key, value) in self.config.headers() {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                FetchFailure::Transport(format!("invalid header name '{}': {}", key, e))
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                FetchFailure::Transport(format!("invalid value for header '{}': {}", key, e))
            })?;
            headers.insert(name, value);
        }
        Ok(headers)
    }
}

#[async_trait]
impl<C: ConfigProvider> CommentSource for HttpCommentSource<C> {
    async fn fetch_comments(&self) -> Result<Vec<Comment>, FetchFailure> {
        let headers = self.build_headers()?;

        tracing::debug!("Making API request to: {}", self.config.endpoint());
        let response = self
            .client
            .get(self.config.endpoint())
            .headers(headers)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(FetchFailure::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.text().await?;
        let comments: Vec<Comment> =
            serde_json::from_str(&body).map_err(|e| FetchFailure::Decode(e.to_string()))?;

        tracing::debug!("Decoded {} comments", comments.len());
        Ok(comments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::collections::BTreeMap;

    struct MockConfig {
        endpoint: String,
        headers: BTreeMap<String, String>,
    }

    impl MockConfig {
        fn new(endpoint: String) -> Self {
            Self {
                endpoint,
                headers: BTreeMap::new(),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn endpoint(&self) -> &str {
            &self.endpoint
        }

        fn headers(&self) -> &BTreeMap<String, String> {
            &self.headers
        }
    }

    #[tokio::test]
    async fn test_fetch_successful_api_response() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/comments");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"postId": 1, "id": 1, "name": "A", "email": "a@x.com", "body": "hello"},
                    {"postId": 1, "id": 2, "name": "B", "email": "b@y.com", "body": "world"}
                ]));
        });

        let source = HttpCommentSource::new(MockConfig::new(server.url("/comments")));
        let comments = source.fetch_comments().await.unwrap();

        api_mock.assert();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[1].email, "b@y.com");
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/comments");
            then.status(404);
        });

        let source = HttpCommentSource::new(MockConfig::new(server.url("/comments")));
        let failure = source.fetch_comments().await.unwrap_err();

        api_mock.assert();
        assert!(matches!(failure, FetchFailure::Status { status: 404, .. }));
        assert!(failure.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_fetch_rejects_non_array_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/comments");
            then.status(200).json_body(serde_json::json!({"id": 1}));
        });

        let source = HttpCommentSource::new(MockConfig::new(server.url("/comments")));
        let failure = source.fetch_comments().await.unwrap_err();

        assert!(matches!(failure, FetchFailure::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_sends_configured_headers() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/comments")
                .header("x-api-key", "secret");
            then.status(200).json_body(serde_json::json!([]));
        });

        let mut config = MockConfig::new(server.url("/comments"));
        config
            .headers
            .insert("X-Api-Key".to_string(), "secret".to_string());

        let comments = HttpCommentSource::new(config).fetch_comments().await.unwrap();

        api_mock.assert();
        assert!(comments.is_empty());
    }
}
