//! Filter Service — narrows a catalog by brand, price range, and fuel type.
//!
//! Filtering is a pure function of `(catalog, query)`. Constraints compose as
//! a logical AND and the result keeps the catalog's relative order.
//!
//! ```ignore
//! use car_catalog::{filter, Catalog, FuelType, SearchFilters};
//!
//! let query = SearchFilters::new()
//!     .fuel_type(FuelType::Diesel)
//!     .min_price(100_000)
//!     .max_price(700_000);
//! let cars = filter(Catalog::builtin().cars(), &query);
//! ```

mod filters;
mod service;

pub use filters::SearchFilters;
pub use service::{filter, FilterService};
