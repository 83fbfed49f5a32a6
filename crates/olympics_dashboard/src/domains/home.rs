//! Aggregate (home) view: one summary across every country.

use crate::charts::{self, MedalShare, PieChartOptions};
use olympics_data::{Country, country_count, edition_count};
use schemars::JsonSchema;
use serde::Serialize;

/// Everything the overview screen renders.
#[derive(Clone, Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub number_of_countries: usize,
    // the widget contract spells this one "JOs", not camelCase
    #[serde(rename = "numberOfJOs")]
    pub number_of_editions: usize,
    pub chart: Vec<MedalShare>,
    pub options: PieChartOptions,
}

impl HomeView {
    /// Compute the aggregate view from the loaded snapshot.
    pub fn from_countries(countries: &[Country]) -> Self {
        Self {
            number_of_countries: country_count(countries),
            number_of_editions: edition_count(countries),
            chart: charts::medal_shares(countries),
            options: PieChartOptions::default(),
        }
    }
}
