//! Catalog Store — the fixed, immutable set of cars available to query.
//!
//! A `Catalog` is built once at process start (from the built-in seed data or
//! a JSON file) and shared read-only afterwards. Cloning is cheap: the records
//! live behind an `Arc`.
//!
//! ```ignore
//! use car_catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//! assert_eq!(catalog.len(), 12);
//! let honda = catalog.get(2).unwrap();
//! ```

mod car;
mod seed;
mod store;

pub use car::{Car, FuelType, ParseFuelTypeError};
pub use store::{Catalog, CatalogError};
