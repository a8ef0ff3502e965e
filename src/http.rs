use crate::backend::{Release, Reservation, TimeslotBackend};
use crate::error::ApiError;
use crate::types::Timeslot;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{extract::State, http::StatusCode, Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use validator::Validate;

#[derive(Clone)]
pub struct AppState<T: TimeslotBackend> {
    pub timeslot_manager: T,
}

/// Wire form of a timeslot, used both as JSON body and as query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TimeslotRequest {
    pub start_timestamp: i64,
    #[validate(range(min = 0))]
    pub duration: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub available: bool,
}

impl TimeslotRequest {
    fn timeslot(&self) -> Result<Timeslot, ApiError> {
        self.validate()?;
        Ok(Timeslot::from_unix(self.start_timestamp, self.duration)?)
    }

    // Bodies are parsed whatever the declared content type is; older clients send none.
    fn from_body(body: &Bytes) -> Result<Self, ApiError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Reads both fields as base-10 integers. A repeated parameter is not an
    /// error, its first value wins.
    fn from_query(params: &[(String, String)]) -> Result<Self, ApiError> {
        Ok(Self {
            start_timestamp: first_param(params, "start_timestamp")?,
            duration: first_param(params, "duration")?,
        })
    }
}

fn first_param(params: &[(String, String)], name: &str) -> Result<i64, ApiError> {
    let (_, value) = params.iter().find(|(key, _)| key == name).ok_or_else(|| {
        ApiError::InvalidRequest(format!("request is missing the '{name}' query parameter"))
    })?;
    value.parse().map_err(|err| {
        ApiError::InvalidRequest(format!("invalid query parameter '{name}={value}': {err}"))
    })
}

pub fn create_app<T: TimeslotBackend>(backend: T) -> Router {
    let state = AppState {
        timeslot_manager: backend,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/v1/timeslot",
            get(check_availability::<T>)
                .put(reserve_timeslot::<T>)
                .delete(free_timeslot::<T>),
        )
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn handle_panic(_err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    ApiError::Internal.into_response()
}

async fn check_availability<T: TimeslotBackend>(
    State(state): State<AppState<T>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<AvailabilityResponse>, ApiError> {
    let Query(params) = query?;
    let timeslot = TimeslotRequest::from_query(&params)?.timeslot()?;
    let available = state.timeslot_manager.is_available(&timeslot);
    Ok(Json(AvailabilityResponse { available }))
}

async fn reserve_timeslot<T: TimeslotBackend>(
    State(state): State<AppState<T>>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let timeslot = TimeslotRequest::from_body(&body)?.timeslot()?;
    match state.timeslot_manager.reserve(timeslot) {
        Reservation::Reserved => Ok(StatusCode::OK),
        Reservation::Unavailable => Err(ApiError::Unavailable),
    }
}

async fn free_timeslot<T: TimeslotBackend>(
    State(state): State<AppState<T>>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let timeslot = TimeslotRequest::from_body(&body)?.timeslot()?;
    match state.timeslot_manager.free(&timeslot) {
        Release::Freed => Ok(StatusCode::NO_CONTENT),
        Release::NotFound => Err(ApiError::NotFound),
    }
}
