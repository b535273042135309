use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use super::interface::{TranslationUpstream, UpstreamError};
use crate::translate::TranslationRequest;

/// Client for a LibreTranslate-compatible HTTP API
#[derive(Debug, Clone)]
pub struct LibreTranslateClient {
    client: Client,
    base_url: String,
}

impl LibreTranslateClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl TranslationUpstream for LibreTranslateClient {
    async fn languages(&self) -> Result<Value, UpstreamError> {
        let url = format!("{}/languages", self.base_url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            // Any JSON body is still relayed, only transport and decode failures count
            warn!("Upstream /languages answered {}", status);
        }

        let languages: Value = response.json().await?;
        Ok(languages)
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<Value, UpstreamError> {
        let url = format!("{}/translate", self.base_url);
        debug!(
            "Forwarding translation: source={}, target={}, chars={}",
            request.source,
            request.target,
            request.q.chars().count()
        );

        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(UpstreamError::Status { status, body });
        }

        let result: Value = response.json().await?;
        Ok(result)
    }

    async fn health_check(&self) -> bool {
        let url = format!("{}/languages", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Upstream health check failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use reqwest::StatusCode;
    use serde_json::json;

    fn request(q: &str, target: &str) -> TranslationRequest {
        TranslationRequest {
            q: q.to_string(),
            source: "auto".to_string(),
            target: target.to_string(),
            format: "text".to_string(),
        }
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = LibreTranslateClient::new("https://libretranslate.de//");
        assert_eq!(client.base_url(), "https://libretranslate.de");
    }

    #[tokio::test]
    async fn languages_returns_upstream_json() {
        let mut server = Server::new_async().await;
        let body = json!([{"code": "en", "name": "English"}, {"code": "ja", "name": "Japanese"}]);
        let mock = server
            .mock("GET", "/languages")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let client = LibreTranslateClient::new(server.url());
        let languages = client.languages().await.unwrap();

        assert_eq!(languages, body);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn languages_relays_json_from_error_status() {
        let mut server = Server::new_async().await;
        let body = json!({"error": "Service temporarily unavailable"});
        let _mock = server
            .mock("GET", "/languages")
            .with_status(503)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let client = LibreTranslateClient::new(server.url());
        let languages = client.languages().await.unwrap();
        assert_eq!(languages, body);
    }

    #[tokio::test]
    async fn languages_rejects_non_json() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/languages")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let client = LibreTranslateClient::new(server.url());
        let err = client.languages().await.unwrap_err();
        assert!(matches!(err, UpstreamError::Transport(_)));
    }

    #[tokio::test]
    async fn translate_posts_full_payload() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/translate")
            .match_body(mockito::Matcher::Json(json!({
                "q": "Hello",
                "source": "auto",
                "target": "es",
                "format": "text"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"translatedText":"Hola"}"#)
            .create_async()
            .await;

        let client = LibreTranslateClient::new(server.url());
        let result = client.translate(&request("Hello", "es")).await.unwrap();

        assert_eq!(result, json!({"translatedText": "Hola"}));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn translate_surfaces_status_and_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/translate")
            .with_status(500)
            .with_body("rate limit exceeded")
            .create_async()
            .await;

        let client = LibreTranslateClient::new(server.url());
        match client.translate(&request("Hello", "es")).await {
            Err(UpstreamError::Status { status, body }) => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body, "rate limit exceeded");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn health_check_reflects_status() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/languages")
            .with_status(503)
            .create_async()
            .await;

        let client = LibreTranslateClient::new(server.url());
        assert!(!client.health_check().await);
    }
}
