use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use anyhow::Result;
use regex::Regex;
use tracing::{debug, info};

pub const DEFAULT_UPSTREAM_URL: &str = "https://libretranslate.de";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub upstream_config: UpstreamConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_upstream_url")]
    pub base_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "frontend".to_string()
}

fn default_upstream_url() -> String {
    DEFAULT_UPSTREAM_URL.to_string()
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_upstream_url(),
        }
    }
}

impl Config {
    /// Load a JSON-LD/JSON or YAML config file, chosen by extension.
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            anyhow::bail!("Configuration file not found: {}", path);
        }

        let bytes = fs::read(path)?;
        // Strips a UTF-8 BOM and replaces invalid sequences
        let (content, _, _) = encoding_rs::UTF_8.decode(&bytes);
        let content = substitute_env_vars(&content)?;

        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".jsonld") || path_lower.ends_with(".json") {
            let mut json_value: serde_json::Value = serde_json::from_str(&content)?;
            // @context carries no settings
            if let Some(obj) = json_value.as_object_mut() {
                obj.remove("@context");
            }
            Ok(serde_json::from_value(json_value)?)
        } else {
            Ok(serde_yaml::from_str(&content)?)
        }
    }

    /// Try each candidate path in order, falling back to defaults when none loads.
    ///
    /// Returns the config and the path it came from, if any.
    pub fn discover(candidates: &[String]) -> (Self, Option<String>) {
        for path in candidates {
            match Config::load(path) {
                Ok(cfg) => return (cfg, Some(path.clone())),
                Err(e) => debug!("Failed to load config from {}: {}", path, e),
            }
        }
        (Config::default(), None)
    }

    /// Default search order: `CONFIG_PATH`, then `relay.jsonld` and `relay.yaml`.
    pub fn candidate_paths() -> Vec<String> {
        vec![
            std::env::var("CONFIG_PATH").ok(),
            Some("relay.jsonld".to_string()),
            Some("relay.yaml".to_string()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Apply `PORT` and `UPSTREAM_URL` overrides.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("UPSTREAM_URL").ok().as_deref(),
        )
    }

    fn apply_overrides(&mut self, port: Option<&str>, upstream_url: Option<&str>) -> Result<()> {
        if let Some(port) = port {
            self.system_config.port = port
                .parse()
                .map_err(|e| anyhow::anyhow!("PORT must be a valid number: {}", e))?;
            info!("Port overridden from environment: {}", self.system_config.port);
        }
        if let Some(url) = upstream_url.filter(|u| !u.is_empty()) {
            self.upstream_config.base_url = url.to_string();
            info!("Upstream overridden from environment: {}", url);
        }
        Ok(())
    }
}

/// Replace `${VAR_NAME}` with the variable's value, leaving unknown names untouched.
fn substitute_env_vars(content: &str) -> Result<String> {
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    let replaced = pattern.replace_all(content, |caps: &regex::Captures| {
        std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
    });
    Ok(replaced.into_owned())
}
