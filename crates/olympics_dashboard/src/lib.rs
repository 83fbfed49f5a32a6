//! HTTP dashboard for historical Olympic Games participation.
//!
//! Serves the aggregate (home) view and the per-country detail view as
//! chart-ready JSON on top of the `olympics_data` domain crate. The
//! navigation rules live in [`error::DashboardError`]: an invalid route
//! parameter sends the caller back home, an unknown country goes to the
//! not-found view, and data that has not arrived yet answers 503 so the
//! client keeps whatever it already renders.

pub mod charts;
pub mod domains;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::{DashboardError, DashboardResult};
pub use routes::router;
pub use state::AppState;
