//! Shared application state for the HTTP handlers.

use metrics_exporter_prometheus::PrometheusHandle;
use olympics_data::snapshot::CountryStore;

#[derive(Clone)]
pub struct AppState {
    pub store: CountryStore,
    pub metrics: PrometheusHandle,
}

impl AppState {
    pub fn new(store: CountryStore, metrics: PrometheusHandle) -> Self {
        Self { store, metrics }
    }
}
