//! Common test utilities for integration tests
//!
//! Provides fixtures and a counting in-memory catalog shared across the
//! integration test files.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use ghibli_cast::{Actor, CatalogClient, DomainError, DomainResult, Film};
use serde_json::{json, Value};
use url::Url;

/// Raw upstream film object with the given people references.
pub fn raw_film(id: &str, people: &[&str]) -> Value {
    json!({
        "id": id,
        "title": format!("Film {id}"),
        "original_title": "Original Title",
        "original_title_romanised": "Original Title Romanised",
        "image": "http://example.com/image.jpg",
        "movie_banner": "http://example.com/banner.jpg",
        "description": "Description",
        "director": "Director",
        "producer": "Producer",
        "release_date": "2023",
        "running_time": "120",
        "rt_score": "90",
        "people": people,
        "species": [],
        "locations": [],
        "vehicles": [],
        "url": format!("http://example.com/films/{id}")
    })
}

/// Raw upstream people object.
pub fn raw_actor(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "gender": "NA",
        "species": "http://example.com/species/human",
        "url": format!("http://example.com/people/{id}")
    })
}

#[allow(dead_code)]
pub fn film(id: &str, people: &[&str]) -> Film {
    Film::from_raw(raw_film(id, people)).expect("fixture film should be valid")
}

#[allow(dead_code)]
pub fn actor(id: &str, name: &str) -> Actor {
    Actor::from_raw(raw_actor(id, name)).expect("fixture actor should be valid")
}

/// In-memory catalog that counts calls and tracks lookup concurrency.
#[allow(dead_code)]
#[derive(Default)]
pub struct StubCatalog {
    films: Vec<Film>,
    fail_films: bool,
    actors: HashMap<String, Vec<Actor>>,
    failing: HashSet<String>,
    delay: Duration,
    film_fetches: AtomicUsize,
    lookups: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    lookup_log: std::sync::Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl StubCatalog {
    pub fn new(films: Vec<Film>) -> Self {
        Self {
            films,
            ..Default::default()
        }
    }

    /// Answer `url` with the given actors.
    pub fn with_actors(mut self, url: &str, actors: Vec<Actor>) -> Self {
        self.actors.insert(url.to_string(), actors);
        self
    }

    /// Fail lookups of `url` with an upstream 500.
    pub fn failing_on(mut self, url: &str) -> Self {
        self.failing.insert(url.to_string());
        self
    }

    /// Fail the film-list fetch with an upstream 503.
    pub fn failing_films(mut self) -> Self {
        self.fail_films = true;
        self
    }

    /// Hold every lookup open for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn film_fetches(&self) -> usize {
        self.film_fetches.load(Ordering::SeqCst)
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn lookup_log(&self) -> Vec<String> {
        self.lookup_log.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogClient for StubCatalog {
    async fn fetch_films(&self) -> DomainResult<Vec<Film>> {
        self.film_fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_films {
            return Err(DomainError::UpstreamStatus {
                url: "http://example.com/films".to_string(),
                status: 503,
            });
        }
        Ok(self.films.clone())
    }

    async fn fetch_actor(&self, url: &Url) -> DomainResult<Vec<Actor>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.lookup_log.lock().unwrap().push(url.to_string());
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing.contains(url.as_str()) {
            return Err(DomainError::UpstreamStatus {
                url: url.to_string(),
                status: 500,
            });
        }
        Ok(self.actors.get(url.as_str()).cloned().unwrap_or_default())
    }
}
