use serde_json::Value;
use tracing::debug;

use super::CarQuery;
use crate::catalog::{Car, Catalog};
use crate::filter::FilterService;

/// The response of the cars endpoint. The status is always `200`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResponse {
    pub status: u16,
    pub cars: Vec<Car>,
}

impl QueryResponse {
    pub fn ok(cars: Vec<Car>) -> Self {
        Self { status: 200, cars }
    }

    /// The JSON body: an array of cars.
    pub fn body(&self) -> Value {
        Value::Array(
            self.cars
                .iter()
                .filter_map(|car| serde_json::to_value(car).ok())
                .collect(),
        )
    }
}

/// Request/response adapter over the filter service.
#[derive(Debug, Clone, Default)]
pub struct CarsEndpoint {
    service: FilterService,
}

impl CarsEndpoint {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            service: FilterService::new(catalog),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.service.catalog()
    }

    /// Parse the wire parameters and filter the catalog. A fuel type that
    /// names no variant matches nothing; the answer is still `200`.
    pub fn handle(&self, query: &CarQuery) -> QueryResponse {
        debug!(?query, "cars query");
        match query.to_filters() {
            Ok(filters) => QueryResponse::ok(self.service.search(&filters)),
            Err(e) => {
                debug!(error = %e, "query matches no car");
                QueryResponse::ok(Vec::new())
            }
        }
    }
}
