//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::StoredRoute;
use crate::google::{DirectionsProvider, PlacesProvider};
use crate::ocm::RegistryProvider;
use crate::planner::{PlannerError, TripRequest};

use super::dto::*;
use super::state::AppState;

/// Cookie carrying the session id.
pub const SESSION_COOKIE: &str = "ev_session";

/// Header accepted in place of the cookie.
pub const SESSION_HEADER: &str = "x-session-id";

/// Note attached to a search that found a single route.
pub const SINGLE_ROUTE_MESSAGE: &str = "Only one route is available for this journey. \
     Alternative routes may be available for different locations or shorter distances.";

/// Create the application router.
pub fn create_router<D, P, R>(state: AppState<D, P, R>) -> Router
where
    D: DirectionsProvider + 'static,
    P: PlacesProvider + Clone + 'static,
    R: RegistryProvider + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/vehicles", get(vehicles::<D, P, R>))
        .route("/search", post(search::<D, P, R>))
        .route("/amenities", get(amenities::<D, P, R>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List supported vehicles.
async fn vehicles<D, P, R>(State(state): State<AppState<D, P, R>>) -> Json<VehiclesResponse>
where
    D: DirectionsProvider,
    P: PlacesProvider + Clone,
    R: RegistryProvider,
{
    Json(VehiclesResponse {
        vehicles: state.planner.vehicles().profiles().to_vec(),
    })
}

/// Search routes and stations, and remember them for this session.
async fn search<D, P, R>(
    State(state): State<AppState<D, P, R>>,
    headers: HeaderMap,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Response, AppError>
where
    D: DirectionsProvider,
    P: PlacesProvider + Clone,
    R: RegistryProvider,
{
    let Json(req) = body.map_err(|e| AppError::BadRequest {
        message: e.body_text(),
    })?;

    let battery_percent = u8::try_from(req.battery_level)
        .ok()
        .filter(|b| *b <= 100)
        .ok_or_else(|| AppError::BadRequest {
            message: format!(
                "battery level must be between 0 and 100, got {}",
                req.battery_level
            ),
        })?;

    let request = TripRequest::new(req.from, req.to, req.vehicle_model, battery_percent);
    let plan = state.planner.search(&request).await?;

    let session_id = session_id(&headers).unwrap_or_else(|| Uuid::new_v4().to_string());
    let stored: Vec<StoredRoute> = plan.routes.iter().map(StoredRoute::from).collect();
    state.sessions.put(&session_id, stored);
    info!(%session_id, routes = plan.routes.len(), "stored search");

    let message = (plan.routes.len() == 1).then(|| SINGLE_ROUTE_MESSAGE.to_string());

    let cookie = format!("{SESSION_COOKIE}={session_id}; Path=/; HttpOnly; SameSite=Lax");
    let body = SearchResponse {
        session_id,
        estimated_range_km: plan.estimated_range_km,
        routes: plan.routes,
        message,
    };

    Ok(([(header::SET_COOKIE, cookie)], Json(body)).into_response())
}

/// Amenities around one station from the session's last search.
async fn amenities<D, P, R>(
    State(state): State<AppState<D, P, R>>,
    headers: HeaderMap,
    query: Result<Query<AmenitiesQuery>, QueryRejection>,
) -> Result<Json<AmenitiesResponse>, AppError>
where
    D: DirectionsProvider,
    P: PlacesProvider + Clone,
    R: RegistryProvider,
{
    let Query(query) = query.map_err(|e| AppError::BadRequest {
        message: e.body_text(),
    })?;

    let routes = session_id(&headers)
        .and_then(|id| state.sessions.get(&id))
        .ok_or(PlannerError::SessionExpired)?;

    let result = state
        .planner
        .station_amenities(&routes, query.route_id, query.station_index)
        .await?;

    Ok(Json(AmenitiesResponse {
        station: result.station,
        amenities: result.amenities,
    }))
}

/// Session id from the cookie, falling back to the header.
///
/// Ids that are empty, overlong or contain anything but ASCII letters,
/// digits and `-` are ignored, so a bad cookie does not hide a good header.
fn session_id(headers: &HeaderMap) -> Option<String> {
    let from_cookie = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim())
        .filter(|id| is_valid_session_id(id));

    let from_header = || {
        headers
            .get(SESSION_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|id| is_valid_session_id(id))
    };

    from_cookie.or_else(from_header).map(str::to_string)
}

fn is_valid_session_id(id: &str) -> bool {
    !id.is_empty() && id.len() <= 64 && id.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    BadGateway { message: String },
}

impl From<PlannerError> for AppError {
    fn from(e: PlannerError) -> Self {
        match e {
            PlannerError::RouteUnavailable { reason } => {
                warn!(%reason, "route unavailable");
                AppError::BadGateway {
                    message: "Could not find a route between these locations. \
                              Check the addresses and try again."
                        .to_string(),
                }
            }
            PlannerError::MissingLocation(_) | PlannerError::Domain(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            PlannerError::SessionExpired
            | PlannerError::RouteNotFound { .. }
            | PlannerError::StationNotFound { .. } => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
        };

        if status.is_server_error() {
            error!(%status, error = %message, "request failed");
        } else {
            warn!(%status, error = %message, "request rejected");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
