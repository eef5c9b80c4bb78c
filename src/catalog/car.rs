//! The `Car` record and its closed `FuelType` set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fuel type of a car. The wire form is the exact variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    Gasoline,
    Diesel,
    Electric,
}

impl FuelType {
    pub const ALL: [FuelType; 3] = [FuelType::Gasoline, FuelType::Diesel, FuelType::Electric];

    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Gasoline => "Gasoline",
            FuelType::Diesel => "Diesel",
            FuelType::Electric => "Electric",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fuel type: {0:?}")]
pub struct ParseFuelTypeError(pub String);

impl FromStr for FuelType {
    type Err = ParseFuelTypeError;

    /// Case-sensitive: `"diesel"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FuelType::ALL
            .into_iter()
            .find(|fuel| fuel.as_str() == s)
            .ok_or_else(|| ParseFuelTypeError(s.to_string()))
    }
}

/// A catalog entry. Identity is `id`; records never change once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: u64,
    pub brand: String,
    pub price: u64,
    pub fuel_type: FuelType,
    pub seating_capacity: u32,
    /// Path or URL of the display image.
    pub image: String,
}

impl Car {
    pub fn new(
        id: u64,
        brand: impl Into<String>,
        price: u64,
        fuel_type: FuelType,
        seating_capacity: u32,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            brand: brand.into(),
            price,
            fuel_type,
            seating_capacity,
            image: image.into(),
        }
    }
}
