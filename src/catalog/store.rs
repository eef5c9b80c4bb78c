use std::collections::HashSet;
use std::io::Read;
use std::sync::Arc;

use thiserror::Error;

use super::seed::builtin_cars;
use super::Car;

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate car id {0}")]
    DuplicateId(u64),
    #[error("invalid car {id}: {reason}")]
    InvalidCar { id: u64, reason: &'static str },
    #[error("catalog decode failed: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("catalog read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Immutable list of cars, unique by `id`, in a fixed order.
#[derive(Debug, Clone)]
pub struct Catalog {
    cars: Arc<[Car]>,
}

impl Catalog {
    /// Validate and freeze a list of cars. Catalog order is the input order.
    pub fn new(cars: Vec<Car>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(cars.len());
        for car in &cars {
            validate(car)?;
            if !seen.insert(car.id) {
                return Err(CatalogError::DuplicateId(car.id));
            }
        }
        Ok(Self { cars: cars.into() })
    }

    /// The built-in 12-car inventory.
    pub fn builtin() -> Self {
        Self {
            cars: builtin_cars().into(),
        }
    }

    /// Load a catalog from a JSON array of cars.
    pub fn from_json<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let cars: Vec<Car> = serde_json::from_reader(reader)?;
        Self::new(cars)
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn get(&self, id: u64) -> Option<&Car> {
        self.cars.iter().find(|car| car.id == id)
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate(car: &Car) -> Result<(), CatalogError> {
    let reason = if car.id == 0 {
        "id must be positive"
    } else if car.brand.trim().is_empty() {
        "brand must not be empty"
    } else if car.seating_capacity == 0 {
        "seating capacity must be positive"
    } else {
        return Ok(());
    };
    Err(CatalogError::InvalidCar { id: car.id, reason })
}
