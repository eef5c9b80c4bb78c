use tracing::debug;

use super::SearchFilters;
use crate::catalog::{Car, Catalog};

/// Keep the cars satisfying every constraint of `query`, in catalog order.
///
/// No match is a normal outcome and yields an empty vector.
pub fn filter(catalog: &[Car], query: &SearchFilters) -> Vec<Car> {
    catalog
        .iter()
        .filter(|car| query.matches(car))
        .cloned()
        .collect()
}

/// Filter service bound to a catalog snapshot.
#[derive(Debug, Clone, Default)]
pub struct FilterService {
    catalog: Catalog,
}

impl FilterService {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn search(&self, query: &SearchFilters) -> Vec<Car> {
        let cars = filter(self.catalog.cars(), query);
        debug!(?query, matched = cars.len(), "catalog filtered");
        cars
    }
}
