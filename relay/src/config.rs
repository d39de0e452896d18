use crate::error::ConfigError;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Runtime settings, read from the process environment.
///
/// An empty `api_key` is not a startup error: the server still answers
/// `/health`, and every `/chat` call fails with a fixed message instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
    pub bind_addr: SocketAddr,
    pub upload_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = lookup("OPENAI_API_KEY").unwrap_or_default().trim().to_string();
        let model = non_empty("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = non_empty("OPENAI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = match non_empty("OPENAI_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| ConfigError {
                key: "OPENAI_TIMEOUT_SECS",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let raw_addr = non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr.trim().parse::<SocketAddr>().map_err(|e| ConfigError {
            key: "BIND_ADDR",
            value: raw_addr.clone(),
            reason: e.to_string(),
        })?;

        let upload_dir = non_empty("PRICELIST_UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| env::temp_dir().join("pricelists"));

        Ok(Self {
            api_key,
            model,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            bind_addr,
            upload_dir,
        })
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}
