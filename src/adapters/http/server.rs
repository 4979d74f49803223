//! Movies HTTP API.
//!
//! `GET /api/movies/` returns the aggregated film list. Every `/api` route
//! sits behind the shared-secret [`AccessGate`], which runs before any cache
//! or network work. `/health` is open.

use axum::{
    extract::{Query, Request, State},
    http::{HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Json, Response},
    routing::{delete, get},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::domain::errors::DomainError;
use crate::domain::models::ServerConfig;
use crate::services::{AccessGate, MovieService};

/// Shared state for the movies HTTP server.
pub struct AppState {
    pub movies: Arc<MovieService>,
    pub gate: AccessGate,
}

impl AppState {
    pub fn new(movies: Arc<MovieService>, gate: AccessGate) -> Self {
        Self { movies, gate }
    }
}

/// Build the router with all endpoints.
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/api/movies/", get(list_movies))
        .route("/api/movies", get(list_movies))
        .route("/api/movies/cache", delete(clear_movies_cache))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_api_key));

    Router::new()
        .merge(api)
        .route("/health", get(health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Movies HTTP server.
pub struct MoviesHttpServer {
    state: Arc<AppState>,
    config: ServerConfig,
}

impl MoviesHttpServer {
    pub fn new(state: AppState, config: ServerConfig) -> Self {
        Self {
            state: Arc::new(state),
            config,
        }
    }

    /// Start the server with a shutdown signal.
    pub async fn serve_with_shutdown<F>(
        self,
        shutdown: F,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let app = router(self.state);

        let listener = TcpListener::bind((self.config.host.as_str(), self.config.port)).await?;
        tracing::info!("Movies HTTP server listening on {}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}

/// Error body for rejected requests.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    detail: String,
}

/// Query parameters for the cache-clearing endpoint.
#[derive(Debug, Deserialize)]
struct ClearCacheQuery {
    #[serde(default)]
    all: bool,
}

/// Health check response.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
}

/// HTTP mapping of domain failures.
///
/// Authentication failures carry a short JSON body; anything else is an
/// unhandled failure and surfaces as a bare 500.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            DomainError::Unauthorized => (
                StatusCode::FORBIDDEN,
                Json(ErrorResponse {
                    detail: DomainError::Unauthorized.to_string(),
                }),
            )
                .into_response(),
            err => {
                tracing::error!(error = %err, upstream = err.is_upstream(), "request failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

async fn require_api_key(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let presented = request
        .headers()
        .get(state.gate.header())
        .map(HeaderValue::as_bytes);

    if let Err(err) = state.gate.verify(presented) {
        tracing::debug!(path = %request.uri().path(), "rejected request without valid API key");
        return ApiError(err).into_response();
    }

    next.run(request).await
}

async fn list_movies(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Value>>, ApiError> {
    let movies = state.movies.list_movies().await?;
    Ok(Json(movies))
}

async fn clear_movies_cache(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ClearCacheQuery>,
) -> Result<StatusCode, ApiError> {
    if query.all {
        state.movies.invalidate_all().await?;
    } else {
        state.movies.invalidate().await?;
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "ghibli-cast",
    })
}
