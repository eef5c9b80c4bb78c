use serde::{Deserialize, Serialize};

use crate::catalog::{Car, FuelType};

/// Optional constraints over the catalog. `None` means "no constraint".
///
/// `min_price <= max_price` is the caller's responsibility; an inverted range
/// simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<FuelType>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn min_price(mut self, min: i64) -> Self {
        self.min_price = Some(min);
        self
    }

    pub fn max_price(mut self, max: i64) -> Self {
        self.max_price = Some(max);
        self
    }

    pub fn fuel_type(mut self, fuel_type: FuelType) -> Self {
        self.fuel_type = Some(fuel_type);
        self
    }

    /// True when no dimension is constrained.
    pub fn is_empty(&self) -> bool {
        self.brand.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.fuel_type.is_none()
    }

    /// Whether a single car satisfies every present constraint.
    pub fn matches(&self, car: &Car) -> bool {
        self.matches_brand(car) && self.matches_price(car) && self.matches_fuel(car)
    }

    fn matches_brand(&self, car: &Car) -> bool {
        match &self.brand {
            Some(brand) => car.brand.to_lowercase() == brand.to_lowercase(),
            None => true,
        }
    }

    fn matches_price(&self, car: &Car) -> bool {
        if self.min_price.is_none() && self.max_price.is_none() {
            return true;
        }
        let price = i128::from(car.price);
        let min = i128::from(self.min_price.unwrap_or(0));
        let max = self.max_price.map(i128::from).unwrap_or(i128::MAX);
        price >= min && price <= max
    }

    fn matches_fuel(&self, car: &Car) -> bool {
        self.fuel_type.map_or(true, |fuel| car.fuel_type == fuel)
    }
}
