use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder, Url};
use tracing::{debug, info};

use crate::api::models::SummarizeRequest;
use crate::api::response::interpret;
use crate::config::Config;
use crate::error::{AppError, Result};

// Shared client so repeated submissions reuse connections. No timeout: a
// call completes, fails, or waits.
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to build HTTP client")
});

/// The remote service that condenses text.
#[async_trait]
pub trait SummarizationService: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String>;
}

pub struct HttpSummarizer {
    client: Client,
    endpoint: Url,
}

impl HttpSummarizer {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(CLIENT.clone(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        match config.timeout {
            None => Ok(Self::new(config.endpoint.clone())),
            Some(timeout) => {
                let client = ClientBuilder::new()
                    .timeout(timeout)
                    .pool_max_idle_per_host(10)
                    .build()
                    .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {e}")))?;
                Ok(Self::with_client(client, config.endpoint.clone()))
            }
        }
    }
}

#[async_trait]
impl SummarizationService for HttpSummarizer {
    async fn summarize(&self, text: &str) -> Result<String> {
        let body = SummarizeRequest {
            text: text.to_string(),
        };

        debug!(endpoint = %self.endpoint, chars = text.chars().count(), "posting text for summary");
        let res = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        let bytes = res.bytes().await?;
        info!(status = status.as_u16(), bytes = bytes.len(), "summarization service responded");

        interpret(status, &bytes)
    }
}
