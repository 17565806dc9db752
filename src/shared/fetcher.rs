use crate::model::configuration::Configuration;
use crate::model::errors::FetchError;
use axum::async_trait;
use std::time::Duration;

/// Retrieves the body of an upstream page.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(configuration: &Configuration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(configuration.request_timeout_secs))
            .user_agent(configuration.user_agent.as_str())
            .build()?;
        Ok(HttpFetcher { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Fetch failed ({}) for {}", status, url);
            return Err(FetchError::Status {
                code: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}
