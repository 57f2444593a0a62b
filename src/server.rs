//! Thin HTTP glue: axum routes translating requests into query-service calls
//! and serializing the results to JSON.
//!
//! Routes
//! -----------------
//! * `GET /epochs?offset&limit` – paginated state vector listing
//! * `GET /epochs/{epoch}` – one state vector by exact epoch
//! * `GET /epochs/{epoch}/speed` – speed at an exact epoch
//! * `GET /epochs/{epoch}/location` – geodetic subsatellite point
//! * `GET /now` – state vector closest to the wall clock, with speed

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::ephemeris::StateVector;
use crate::query::{LocationReport, NowReport, SpeedReport};
use crate::tracker::IssTracker;
use crate::tracker_errors::TrackerError;

/// Creates the axum router with all routes.
pub fn create_router(tracker: Arc<IssTracker>) -> Router {
    Router::new()
        .route("/epochs", get(list_epochs))
        .route("/epochs/{epoch}", get(get_epoch))
        .route("/epochs/{epoch}/speed", get(get_epoch_speed))
        .route("/epochs/{epoch}/location", get(get_epoch_location))
        .route("/now", get(get_now))
        .with_state(tracker)
}

/// Pagination query parameters; non-numeric values fall back to the
/// absent-value defaults (start of the list, full remainder).
#[derive(Debug, Default, Deserialize)]
struct Pagination {
    offset: Option<String>,
    limit: Option<String>,
}

impl Pagination {
    fn bounds(&self) -> (Option<usize>, Option<usize>) {
        let lenient = |raw: &Option<String>| raw.as_deref().and_then(|s| s.parse().ok());
        (lenient(&self.offset), lenient(&self.limit))
    }
}

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        let status = match self {
            TrackerError::EpochNotFound(_) => StatusCode::NOT_FOUND,
            TrackerError::EmptyEphemeris => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

async fn list_epochs(
    State(tracker): State<Arc<IssTracker>>,
    Query(pagination): Query<Pagination>,
) -> Json<Vec<StateVector>> {
    let (offset, limit) = pagination.bounds();
    Json(tracker.query().list(offset, limit).to_vec())
}

async fn get_epoch(
    State(tracker): State<Arc<IssTracker>>,
    Path(epoch): Path<String>,
) -> Result<Json<StateVector>, TrackerError> {
    let query = tracker.query();
    let vector = query.find_by_epoch(&epoch)?;
    Ok(Json(vector.clone()))
}

async fn get_epoch_speed(
    State(tracker): State<Arc<IssTracker>>,
    Path(epoch): Path<String>,
) -> Result<Json<SpeedReport>, TrackerError> {
    Ok(Json(tracker.query().speed(&epoch)?))
}

async fn get_epoch_location(
    State(tracker): State<Arc<IssTracker>>,
    Path(epoch): Path<String>,
) -> Result<Json<LocationReport>, TrackerError> {
    Ok(Json(tracker.query().location(&epoch)?))
}

async fn get_now(
    State(tracker): State<Arc<IssTracker>>,
) -> Result<Json<NowReport>, TrackerError> {
    Ok(Json(tracker.query().now()?))
}
