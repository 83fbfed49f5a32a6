//! Local-file implementation of the dataset collaborator, for
//! deployments that bundle the dataset next to the binary.

use crate::{Country, OlympicsError, OlympicsSource};
use async_trait::async_trait;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct FileOlympicsSource {
    path: PathBuf,
}

impl FileOlympicsSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl OlympicsSource for FileOlympicsSource {
    async fn fetch_countries(&self) -> Result<Vec<Country>, OlympicsError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let countries: Vec<Country> = serde_json::from_slice(&bytes)?;
        tracing::debug!(countries = countries.len(), path = %self.path.display(), "dataset read");
        Ok(countries)
    }
}
