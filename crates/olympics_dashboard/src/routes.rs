//! HTTP surface of the dashboard.

use std::time::Duration;

use axum::debug_handler;
use axum::extract::{Path, Query, Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Json, Router};
use metrics::counter;
use serde::Deserialize;
use tower_http::timeout::TimeoutLayer;
use tracing::Instrument;
use uuid::Uuid;

use olympics_data::observability::Health;

use crate::domains::detail::{DetailView, parse_country_id, select_country};
use crate::domains::home::HomeView;
use crate::error::{DashboardError, DashboardResult};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/detail/{id}", get(detail))
        .route("/select", get(select))
        .route("/404", get(not_found))
        .route("/health", get(health))
        .route("/metrics", get(metrics_endpoint))
        .layer(axum::middleware::from_fn(request_span))
        .layer(TimeoutLayer::new(Duration::from_secs(10)))
        .with_state(state)
}

/// Wrap every request in a span carrying a fresh request id.
async fn request_span(req: Request, next: Next) -> Response {
    let span = tracing::info_span!(
        "request",
        id = %Uuid::new_v4(),
        method = %req.method(),
        path = %req.uri().path(),
    );
    next.run(req).instrument(span).await
}

#[debug_handler]
async fn home(State(state): State<AppState>) -> DashboardResult<Json<HomeView>> {
    let loaded = state.store.current().ok_or(DashboardError::NotLoaded)?;
    counter!("dashboard_views_total", "view" => "home").increment(1);
    Ok(Json(HomeView::from_countries(&loaded.countries)))
}

/// Detail route. The id arrives as text: anything that does not parse
/// as a positive integer sends the caller back to the home view before
/// the snapshot is consulted.
#[debug_handler]
async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> DashboardResult<Json<DetailView>> {
    let id = parse_country_id(&id)?;
    let loaded = state.store.current().ok_or(DashboardError::NotLoaded)?;
    let country = select_country(&loaded.countries, id)?;
    counter!("dashboard_views_total", "view" => "detail").increment(1);
    Ok(Json(DetailView::from_country(country)))
}

#[derive(Debug, Deserialize)]
struct SelectParams {
    id: Option<u32>,
}

/// Chart-segment selection. A selection carrying a navigable id goes
/// to that country's detail view; anything else is a no-op.
#[debug_handler]
async fn select(Query(params): Query<SelectParams>) -> Response {
    match params.id {
        Some(id) if id != 0 => Redirect::to(&format!("/detail/{id}")).into_response(),
        _ => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Terminal not-found view.
#[debug_handler]
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "country not found" })),
    )
}

#[debug_handler]
async fn health(State(state): State<AppState>) -> Json<Health> {
    let snapshot = state
        .store
        .current()
        .map(|loaded| (loaded.countries.len(), loaded.loaded_at));
    Json(Health::for_snapshot(snapshot))
}

#[debug_handler]
async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let body = state.metrics.render();
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    )
}
