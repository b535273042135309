use std::sync::Arc;

use crate::config::Config;
use crate::upstream::{LibreTranslateClient, TranslationUpstream};

/// Shared, read-only relay state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub upstream: Arc<dyn TranslationUpstream>,
}

impl AppState {
    /// Build state with a LibreTranslate client for the configured upstream.
    pub fn new(config: Config) -> Self {
        let upstream = Arc::new(LibreTranslateClient::new(
            config.upstream_config.base_url.clone(),
        ));
        Self::with_upstream(config, upstream)
    }

    pub fn with_upstream(config: Config, upstream: Arc<dyn TranslationUpstream>) -> Self {
        Self {
            config: Arc::new(config),
            upstream,
        }
    }
}
