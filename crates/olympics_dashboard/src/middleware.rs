//! Cross-cutting wrapper around the dataset collaborator.

use async_trait::async_trait;
use metrics::histogram;
use olympics_data::{Country, OlympicsError, OlympicsSource};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Adds timing, logging and metrics around any inner source, keeping
/// the sources themselves free of those concerns.
#[derive(Clone)]
pub struct LoggingSource<S: OlympicsSource> {
    inner: Arc<S>,
}

impl<S: OlympicsSource> LoggingSource<S> {
    pub fn new(source: S) -> Self {
        Self {
            inner: Arc::new(source),
        }
    }
}

#[async_trait]
impl<S: OlympicsSource> OlympicsSource for LoggingSource<S> {
    async fn fetch_countries(&self) -> Result<Vec<Country>, OlympicsError> {
        let start = Instant::now();
        debug!("fetching country dataset");
        let result = self.inner.fetch_countries().await;
        let elapsed = start.elapsed();
        histogram!("olympics_dataset_fetch_seconds").record(elapsed.as_secs_f64());
        match &result {
            Ok(countries) => {
                debug!(countries = countries.len(), ?elapsed, "dataset fetch finished");
            }
            Err(e) => debug!(error = %e, ?elapsed, "dataset fetch failed"),
        }
        result
    }
}
