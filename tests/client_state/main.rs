//! Client List State integration tests.
//!
//! Demonstrates the `StateStore` container:
//! - search flow with loading state, failures, and unsequenced responses
//! - wishlist toggle, sort, substring search, and pagination
//! - wishlist and theme mirrored to a key-value store
//! - snapshot subscribers

mod search;
mod subscribers;
mod wishlist;
#[cfg(all(feature = "http", feature = "client"))]
mod http_source;
