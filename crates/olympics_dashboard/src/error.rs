//! Error types and their HTTP renderings.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Redirect, Response};
use thiserror::Error;

/// Dashboard-level errors. Navigation outcomes live here because a
/// detail request that cannot render terminates in a redirect.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("data source error: {0}")]
    Data(#[from] olympics_data::OlympicsError),

    #[error("missing or invalid country id")]
    MissingCountryId,

    #[error("no country with id {0}")]
    CountryNotFound(u32),

    #[error("country data not loaded yet")]
    NotLoaded,
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        match self {
            // Invalid route parameter: back to the home view.
            DashboardError::MissingCountryId => Redirect::to("/").into_response(),
            // Well-formed id, unknown country: the not-found view.
            DashboardError::CountryNotFound(_) => Redirect::to("/404").into_response(),
            // Data not emitted yet: the client keeps its prior state
            // and retries shortly.
            DashboardError::NotLoaded => (
                StatusCode::SERVICE_UNAVAILABLE,
                [(header::RETRY_AFTER, "1")],
                "country data not loaded yet",
            )
                .into_response(),
            DashboardError::Data(e) => (StatusCode::BAD_GATEWAY, e.to_string()).into_response(),
        }
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;
