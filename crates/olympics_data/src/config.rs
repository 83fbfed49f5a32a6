use crate::OlympicsError;
use std::path::PathBuf;

/// Where the country dataset comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatasetLocation {
    Url(String),
    File(PathBuf),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub dataset: DatasetLocation,
}

impl Config {
    pub fn from_env() -> Result<Self, OlympicsError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function. This avoids mutating the global environment in tests and
    /// keeps `from_env()` small.
    ///
    /// `TELESPORT_DATA_URL` wins over `TELESPORT_DATA_FILE` when both are
    /// set; at least one of the two is required.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, OlympicsError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        if let Some(url) = get("TELESPORT_DATA_URL") {
            return Ok(Self {
                dataset: DatasetLocation::Url(url),
            });
        }
        if let Some(path) = get("TELESPORT_DATA_FILE") {
            return Ok(Self {
                dataset: DatasetLocation::File(PathBuf::from(path)),
            });
        }
        Err(OlympicsError::Config(
            "TELESPORT_DATA_URL or TELESPORT_DATA_FILE must be set".into(),
        ))
    }
}
