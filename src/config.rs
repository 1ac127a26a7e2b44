use std::env;
use std::time::Duration;

use reqwest::Url;

use crate::error::{AppError, Result};

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/summarize";

#[derive(Clone, Debug)]
pub struct Config {
    pub endpoint: Url,
    /// No client-side deadline when unset.
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `load` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup("SUMMARIZER_ENDPOINT")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let endpoint = parse_endpoint(&endpoint)?;

        let timeout = lookup("SUMMARIZER_TIMEOUT_SECS")
            .filter(|value| !value.trim().is_empty())
            .map(|value| parse_timeout(&value))
            .transpose()?;

        Ok(Config { endpoint, timeout })
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self> {
        self.endpoint = parse_endpoint(endpoint)?;
        Ok(self)
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Result<Self> {
        self.timeout = Some(timeout_from_secs(secs)?);
        Ok(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            timeout: None,
        }
    }
}

fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| AppError::Config(format!("Invalid endpoint {raw:?}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AppError::Config(format!(
            "Unsupported endpoint scheme {other:?}, expected http or https"
        ))),
    }
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .map_err(|e| AppError::Config(format!("Invalid timeout {raw:?}: {e}")))?;
    timeout_from_secs(secs)
}

fn timeout_from_secs(secs: u64) -> Result<Duration> {
    if secs == 0 {
        return Err(AppError::Config("Timeout must be at least one second".to_string()));
    }
    Ok(Duration::from_secs(secs))
}
