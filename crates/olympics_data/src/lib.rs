//! Domain model and data-source collaborators for the Olympic Games
//! participation dashboard.
//!
//! The model mirrors the upstream dataset: a flat list of countries,
//! each carrying its full participation history. Everything here is
//! read-only for the session; the aggregation helpers are pure.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

pub mod config;
pub mod file_source;
pub mod http_source;
pub mod observability;
pub mod retry;
pub mod snapshot;

#[derive(Debug, Error)]
pub enum OlympicsError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("dataset not found at {0}")]
    NotFound(String),
    #[error("upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("configuration error: {0}")]
    Config(String),
}

/// One country's record of attending one Olympic edition.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, JsonSchema)]
pub struct Participation {
    pub id: u32,
    pub year: i32,
    pub city: String,
    #[serde(rename = "medalsCount")]
    pub medals_count: u32,
    #[serde(rename = "athleteCount")]
    pub athlete_count: u32,
}

/// A country with its full Olympic participation history.
///
/// The upstream dataset calls the display string `country`; the field
/// keeps that wire name so the JSON round-trips unchanged.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, JsonSchema)]
pub struct Country {
    pub id: u32,
    #[serde(rename = "country")]
    pub name: String,
    pub participations: Vec<Participation>,
}

impl Country {
    /// Total medals won across every attended edition.
    pub fn total_medals(&self) -> u64 {
        self.participations
            .iter()
            .map(|p| u64::from(p.medals_count))
            .sum()
    }

    /// Total athletes sent across every attended edition.
    pub fn total_athletes(&self) -> u64 {
        self.participations
            .iter()
            .map(|p| u64::from(p.athlete_count))
            .sum()
    }

    /// Number of editions this country attended.
    pub fn entry_count(&self) -> usize {
        self.participations.len()
    }
}

/// Number of countries in the loaded dataset.
pub fn country_count(countries: &[Country]) -> usize {
    countries.len()
}

/// Number of distinct Olympic editions across all participations.
/// Two countries attending the same year count that edition once.
pub fn edition_count(countries: &[Country]) -> usize {
    let years: HashSet<i32> = countries
        .iter()
        .flat_map(|c| c.participations.iter().map(|p| p.year))
        .collect();
    years.len()
}

/// First country whose identifier matches `id`.
///
/// Id `0` never names a country and is rejected before the list is
/// scanned.
pub fn find_country(countries: &[Country], id: u32) -> Option<&Country> {
    if id == 0 {
        return None;
    }
    countries.iter().find(|c| c.id == id)
}

/// Supplies the full country list, once per session.
#[async_trait]
pub trait OlympicsSource: Send + Sync + 'static {
    async fn fetch_countries(&self) -> Result<Vec<Country>, OlympicsError>;
}
