use chrono::{DateTime, Utc};
use serde::Serialize;

/// Readiness payload for the health endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct Health {
    pub ready: bool,
    pub countries: usize,
    pub loaded_at: Option<DateTime<Utc>>,
}

impl Health {
    pub fn for_snapshot(snapshot: Option<(usize, DateTime<Utc>)>) -> Self {
        match snapshot {
            Some((countries, loaded_at)) => Self {
                ready: true,
                countries,
                loaded_at: Some(loaded_at),
            },
            None => Self {
                ready: false,
                countries: 0,
                loaded_at: None,
            },
        }
    }
}
