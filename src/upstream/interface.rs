use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use crate::translate::TranslationRequest;

/// Failures talking to the external translation API
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The request never produced a usable response (connect, read, or decode failure)
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("upstream returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// External translation service as seen by the relay
#[async_trait]
pub trait TranslationUpstream: Send + Sync {
    /// Fetch the supported language list, returned as the upstream JSON
    async fn languages(&self) -> Result<Value, UpstreamError>;

    /// Forward a translation request, returning the upstream JSON on success
    async fn translate(&self, request: &TranslationRequest) -> Result<Value, UpstreamError>;

    /// Whether the upstream currently answers
    async fn health_check(&self) -> bool;
}
