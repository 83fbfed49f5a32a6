//! HTTP implementation of the dataset collaborator.
//!
//! Fetches the full country list from a configured URL, the same way
//! the original dashboard loaded its `olympic.json` asset over HTTP.

use crate::retry::RetryPolicy;
use crate::{Country, OlympicsError, OlympicsSource};
use async_trait::async_trait;
use metrics::counter;

/// Reqwest-based source for a remote Olympic dataset.
#[derive(Clone, Debug)]
pub struct HttpOlympicsSource {
    url: String,
    client: reqwest::Client,
    policy: RetryPolicy,
}

impl HttpOlympicsSource {
    pub fn new(url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("reqwest client build should not fail");
        Self {
            url: url.into(),
            client,
            policy: RetryPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    async fn fetch_once(&self) -> Result<Vec<Country>, OlympicsError> {
        let resp = self.client.get(&self.url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let snippet: String = body.chars().take(256).collect();
            return Err(match status.as_u16() {
                404 => OlympicsError::NotFound(self.url.clone()),
                code => OlympicsError::Upstream {
                    status: code,
                    body: snippet,
                },
            });
        }
        Ok(resp.json::<Vec<Country>>().await?)
    }

    /// Errors worth retrying: connection-level failures and 5xx from
    /// the upstream. Everything else (404, malformed payload) is final.
    fn is_transient(err: &OlympicsError) -> bool {
        match err {
            OlympicsError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            OlympicsError::Upstream { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[async_trait]
impl OlympicsSource for HttpOlympicsSource {
    async fn fetch_countries(&self) -> Result<Vec<Country>, OlympicsError> {
        let result = self
            .policy
            .run(|| self.fetch_once(), Self::is_transient)
            .await;
        match &result {
            Ok(countries) => {
                counter!("olympics_dataset_fetch_total", "outcome" => "ok").increment(1);
                tracing::debug!(countries = countries.len(), url = %self.url, "dataset fetched");
            }
            Err(e) => {
                counter!("olympics_dataset_fetch_total", "outcome" => "error").increment(1);
                tracing::warn!(error = %e, url = %self.url, "dataset fetch failed");
            }
        }
        result
    }
}
