//! Query Endpoint — maps wire parameters to `SearchFilters` and returns the
//! matching cars as JSON.
//!
//! The endpoint itself is framework-agnostic (`CarsEndpoint::handle`); the
//! `http` feature adds an axum router exposing it.
//!
//! ## Routes
//!
//! - `GET /api/cars?brand=&minPrice=&maxPrice=&fuelType=` — always `200`,
//!   body is a JSON array of cars.
//! - `GET /health` — `{ "ok": true, "cars": <catalog size> }`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use car_catalog::{query, Catalog};
//!
//! let endpoint = Arc::new(query::CarsEndpoint::new(Catalog::builtin()));
//! query::serve(endpoint, "127.0.0.1:3000").await?;
//! ```

mod endpoint;
mod params;

pub use endpoint::{CarsEndpoint, QueryResponse};
pub use params::{parse_int_lenient, CarQuery};

#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::{router, serve, CARS_ROUTE, HEALTH_ROUTE};
