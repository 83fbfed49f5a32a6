//! Chart-ready series shapes for the rendering widgets.
//!
//! The wire names (`name` / `value` / `extra`) are the chart widget's
//! expected props. `extra.id` rides along with each aggregate slice so
//! a click on the chart can navigate to that country's detail view.

use olympics_data::Country;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Five-color palette shared by both views.
pub const COLOR_SCHEME: [&str; 5] = ["#5AA454", "#A10A28", "#C7B42C", "#AAAAAA", "#7aa3e5"];

/// Navigation payload carried alongside a chart entry.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct CrossRef {
    pub id: u32,
}

/// One slice of the aggregate medal chart.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct MedalShare {
    pub name: String,
    pub value: u64,
    pub extra: CrossRef,
}

/// One point of a medals-over-time series.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct ChartPoint {
    pub name: String,
    pub value: u64,
}

/// A named line series; the detail view renders exactly one.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct LineSeries {
    pub name: String,
    pub series: Vec<ChartPoint>,
}

/// Map each country to its aggregate chart slice. Input order is
/// preserved; nothing is sorted.
pub fn medal_shares(countries: &[Country]) -> Vec<MedalShare> {
    countries
        .iter()
        .map(|country| MedalShare {
            name: country.name.clone(),
            value: country.total_medals(),
            extra: CrossRef { id: country.id },
        })
        .collect()
}

/// Build the medals-over-time series for one country, one point per
/// participation, in the participation list's existing order.
pub fn medal_history(country: &Country) -> LineSeries {
    LineSeries {
        name: country.name.clone(),
        series: country
            .participations
            .iter()
            .map(|p| ChartPoint {
                name: p.year.to_string(),
                value: u64::from(p.medals_count),
            })
            .collect(),
    }
}

/// Static display configuration for the aggregate pie chart. Never
/// derived from data.
#[derive(Clone, Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PieChartOptions {
    pub gradient: bool,
    pub show_legend: bool,
    pub show_labels: bool,
    pub is_doughnut: bool,
    pub color_scheme: Vec<String>,
}

impl Default for PieChartOptions {
    fn default() -> Self {
        Self {
            gradient: true,
            show_legend: false,
            show_labels: true,
            is_doughnut: false,
            color_scheme: COLOR_SCHEME.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Static display configuration for the detail line chart.
#[derive(Clone, Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LineChartOptions {
    pub show_x_axis: bool,
    pub show_y_axis: bool,
    pub gradient: bool,
    pub show_legend: bool,
    pub show_x_axis_label: bool,
    pub x_axis_label: String,
    pub show_y_axis_label: bool,
    pub y_axis_label: String,
    pub color_scheme: Vec<String>,
}

impl Default for LineChartOptions {
    fn default() -> Self {
        Self {
            show_x_axis: true,
            show_y_axis: true,
            gradient: false,
            show_legend: false,
            show_x_axis_label: true,
            x_axis_label: "Dates".into(),
            show_y_axis_label: false,
            y_axis_label: String::new(),
            color_scheme: COLOR_SCHEME.iter().map(|c| c.to_string()).collect(),
        }
    }
}
