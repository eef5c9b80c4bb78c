use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use deunicode::deunicode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Car;

/// Wishlist sort key. All orders are ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Insertion order.
    #[default]
    None,
    Price,
    Brand,
    SeatingCapacity,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::Price => "price",
            SortKey::Brand => "brand",
            SortKey::SeatingCapacity => "seatingCapacity",
        }
    }

    pub fn compare(&self, a: &Car, b: &Car) -> Ordering {
        match self {
            SortKey::None => Ordering::Equal,
            SortKey::Price => a.price.cmp(&b.price),
            SortKey::Brand => compare_brands(&a.brand, &b.brand),
            SortKey::SeatingCapacity => a.seating_capacity.cmp(&b.seating_capacity),
        }
    }

    /// Stable sort, so equal keys keep insertion order.
    pub fn sort(&self, cars: &mut [Car]) {
        if *self != SortKey::None {
            cars.sort_by(|a, b| self.compare(a, b));
        }
    }
}

/// Dictionary order in three levels: base letters with accents and case
/// folded away, then accents, then case (`"Seat" < "Skoda" < "Škoda" <
/// "Toyota"`, `"bmw" < "BMW"`).
fn compare_brands(a: &str, b: &str) -> Ordering {
    let base = deunicode(a).to_lowercase().cmp(&deunicode(b).to_lowercase());
    base.then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key: {0:?}")]
pub struct ParseSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    /// Accepts the empty string as `None`, matching an unselected dropdown.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "none" => Ok(SortKey::None),
            "price" => Ok(SortKey::Price),
            "brand" => Ok(SortKey::Brand),
            "seatingCapacity" => Ok(SortKey::SeatingCapacity),
            other => Err(ParseSortKeyError(other.to_string())),
        }
    }
}
