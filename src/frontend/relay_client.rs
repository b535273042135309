use async_trait::async_trait;
use reqwest::Client;

use crate::translate::{LanguageDescriptor, TranslationRequest, TranslationResult};

/// Failures seen by the frontend when calling the relay
#[derive(Debug, thiserror::Error)]
pub enum RelayClientError {
    /// The relay answered with an error status; holds the message to show
    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// The relay endpoints the frontend depends on
#[async_trait]
pub trait RelayApi: Send + Sync {
    async fn fetch_languages(&self) -> Result<Vec<LanguageDescriptor>, RelayClientError>;

    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, RelayClientError>;
}

/// HTTP client for a running relay service
#[derive(Debug, Clone)]
pub struct HttpRelayClient {
    client: Client,
    base_url: String,
}

impl HttpRelayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RelayApi for HttpRelayClient {
    async fn fetch_languages(&self) -> Result<Vec<LanguageDescriptor>, RelayClientError> {
        let url = format!("{}/languages", self.base_url);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(RelayClientError::Rejected(
                "Failed to fetch languages".to_string(),
            ));
        }
        Ok(response.json().await?)
    }

    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, RelayClientError> {
        let url = format!("{}/translate", self.base_url);
        let response = self.client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            let text = response.text().await?;
            let message = if text.is_empty() {
                "Translation failed".to_string()
            } else {
                text
            };
            return Err(RelayClientError::Rejected(message));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn request() -> TranslationRequest {
        TranslationRequest {
            q: "Hello".into(),
            source: "auto".into(),
            target: "es".into(),
            format: "text".into(),
        }
    }

    #[tokio::test]
    async fn empty_error_body_uses_generic_message() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/translate")
            .with_status(502)
            .create_async()
            .await;

        let client = HttpRelayClient::new(server.url());
        let err = client.translate(&request()).await.unwrap_err();
        assert_eq!(err.to_string(), "Translation failed");
    }

    #[tokio::test]
    async fn error_body_is_passed_through() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/translate")
            .with_status(400)
            .with_body("Missing required fields")
            .create_async()
            .await;

        let client = HttpRelayClient::new(server.url());
        let err = client.translate(&request()).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing required fields");
    }

    #[tokio::test]
    async fn languages_failure_is_rejected() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/languages")
            .with_status(500)
            .with_body("Failed to fetch languages: timeout")
            .create_async()
            .await;

        let client = HttpRelayClient::new(server.url());
        assert!(matches!(
            client.fetch_languages().await,
            Err(RelayClientError::Rejected(_))
        ));
    }
}
