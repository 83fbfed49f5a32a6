//! Per-country drill-down view.

use crate::charts::{self, LineChartOptions, LineSeries};
use crate::error::DashboardError;
use olympics_data::{Country, find_country};
use schemars::JsonSchema;
use serde::Serialize;

/// Everything the drill-down screen renders for one country.
#[derive(Clone, Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DetailView {
    pub country_name: String,
    pub number_of_entries: usize,
    pub total_medals: u64,
    pub total_athletes: u64,
    pub line_chart: Vec<LineSeries>,
    pub options: LineChartOptions,
}

impl DetailView {
    pub fn from_country(country: &Country) -> Self {
        Self {
            country_name: country.name.clone(),
            number_of_entries: country.entry_count(),
            total_medals: country.total_medals(),
            total_athletes: country.total_athletes(),
            line_chart: vec![charts::medal_history(country)],
            options: LineChartOptions::default(),
        }
    }
}

/// Parse the detail route parameter. Zero and non-numeric ids never
/// name a country and are rejected before the snapshot is consulted.
pub fn parse_country_id(raw: &str) -> Result<u32, DashboardError> {
    match raw.parse::<u32>() {
        Ok(0) | Err(_) => Err(DashboardError::MissingCountryId),
        Ok(id) => Ok(id),
    }
}

/// Resolve the requested country, or signal the terminal not-found
/// condition for the caller to redirect on.
pub fn select_country(countries: &[Country], id: u32) -> Result<&Country, DashboardError> {
    find_country(countries, id).ok_or(DashboardError::CountryNotFound(id))
}
