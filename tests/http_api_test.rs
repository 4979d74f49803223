//! Integration tests for the movies HTTP API.

mod common;

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use common::{actor, film, StubCatalog};
use ghibli_cast::adapters::http::{router, AppState, MoviesHttpServer};
use ghibli_cast::domain::models::ServerConfig;
use ghibli_cast::{AccessGate, MokaCacheStore, MovieService};
use serde_json::{json, Value};
use tower::ServiceExt;

const KEY: &str = "test-api-key";
const A: &str = "http://example.com/people/a";

fn app(catalog: Arc<StubCatalog>) -> axum::Router {
    let movies = Arc::new(MovieService::new(catalog, Arc::new(MokaCacheStore::new())));
    router(Arc::new(AppState::new(movies, AccessGate::new("Ghiblikey", KEY))))
}

fn catalog() -> Arc<StubCatalog> {
    Arc::new(StubCatalog::new(vec![film("1", &[A])]).with_actors(A, vec![actor("a1", "Pazu")]))
}

fn get_movies(key: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri("/api/movies/");
    if let Some(key) = key {
        builder = builder.header("Ghiblikey", key);
    }
    builder.body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_missing_key_is_forbidden_before_any_work() {
    let catalog = catalog();
    let response = app(catalog.clone()).oneshot(get_movies(None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        json_body(response).await,
        json!({ "detail": "No or invalid API key provided" })
    );
    assert_eq!(catalog.film_fetches(), 0);
}

#[tokio::test]
async fn test_wrong_key_is_forbidden() {
    let catalog = catalog();
    let response = app(catalog.clone())
        .oneshot(get_movies(Some("Random")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(catalog.film_fetches(), 0);
}

#[tokio::test]
async fn test_header_name_is_case_insensitive_value_is_not() {
    let catalog = catalog();
    let lower_name = Request::builder()
        .uri("/api/movies/")
        .header("ghiblikey", KEY)
        .body(Body::empty())
        .unwrap();
    let response = app(catalog.clone()).oneshot(lower_name).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let upper_value = get_movies(Some(&KEY.to_uppercase()));
    let response = app(catalog).oneshot(upper_value).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_movie_list_endpoint() {
    let catalog = catalog();
    let response = app(catalog.clone()).oneshot(get_movies(Some(KEY))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let films = body.as_array().expect("array body");
    assert_eq!(films.len(), 1);
    assert_eq!(films[0]["actors"][0]["id"], "a1");
    assert!(films[0].get("people").is_none());
    assert_eq!(catalog.film_fetches(), 1);
}

#[tokio::test]
async fn test_route_without_trailing_slash() {
    let request = Request::builder()
        .uri("/api/movies")
        .header("Ghiblikey", KEY)
        .body(Body::empty())
        .unwrap();
    let response = app(catalog()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_upstream_failure_is_500() {
    let catalog = Arc::new(StubCatalog::new(vec![]).failing_films());
    let response = app(catalog).oneshot(get_movies(Some(KEY))).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_repeat_requests_hit_cache_until_cleared() {
    let catalog = catalog();
    let app = app(catalog.clone());

    for _ in 0..3 {
        let response = app.clone().oneshot(get_movies(Some(KEY))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
    assert_eq!(catalog.film_fetches(), 1);

    let clear = Request::builder()
        .method("DELETE")
        .uri("/api/movies/cache")
        .header("Ghiblikey", KEY)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(clear).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    app.oneshot(get_movies(Some(KEY))).await.unwrap();
    assert_eq!(catalog.film_fetches(), 2);
    // The stub catalog keeps no cache of its own, so the rebuild asks it again.
    assert_eq!(catalog.lookups(), 2);
}

#[tokio::test]
async fn test_clear_cache_requires_key() {
    let clear = Request::builder()
        .method("DELETE")
        .uri("/api/movies/cache?all=true")
        .body(Body::empty())
        .unwrap();
    let response = app(catalog()).oneshot(clear).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_health_is_open() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app(catalog()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "status": "ok", "service": "ghibli-cast" })
    );
}

#[tokio::test]
async fn test_server_binds_to_host_name() {
    let movies = Arc::new(MovieService::new(catalog(), Arc::new(MokaCacheStore::new())));
    let server = MoviesHttpServer::new(
        AppState::new(movies, AccessGate::new("Ghiblikey", KEY)),
        ServerConfig {
            host: "localhost".to_string(),
            port: 0,
        },
    );

    let result = server.serve_with_shutdown(async {}).await;

    assert!(result.is_ok(), "bind failed: {result:?}");
}
