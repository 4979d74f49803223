//! Ghibli catalog adapter.
//!
//! Implements the [`CatalogClient`](crate::domain::ports::CatalogClient)
//! port over the public REST API.

pub mod client;

pub use client::{GhibliClient, FILMS_URL};
