use serde::Serialize;

use crate::catalog::{FuelType, ParseFuelTypeError};
use crate::filter::SearchFilters;

/// Raw query-string parameters of `GET /api/cars`.
///
/// Every field is an optional string on the wire. Empty strings count as
/// absent and unparseable numbers drop their constraint. A fuel type is
/// matched exactly, so one that names no variant matches no car.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
}

impl CarQuery {
    /// Build from decoded `key=value` pairs. The first occurrence of a key
    /// wins; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = CarQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "brand" => &mut query.brand,
                "minPrice" => &mut query.min_price,
                "maxPrice" => &mut query.max_price,
                "fuelType" => &mut query.fuel_type,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }

    /// Convert to filters. Fails only when `fuelType` is non-empty and not
    /// exactly a variant name; such a query matches nothing.
    pub fn to_filters(&self) -> Result<SearchFilters, ParseFuelTypeError> {
        let fuel_type = non_empty(&self.fuel_type)
            .map(str::parse::<FuelType>)
            .transpose()?;
        Ok(SearchFilters {
            brand: non_empty(&self.brand).map(str::to_string),
            min_price: non_empty(&self.min_price).and_then(parse_int_lenient),
            max_price: non_empty(&self.max_price).and_then(parse_int_lenient),
            fuel_type,
        })
    }
}

impl From<&SearchFilters> for CarQuery {
    fn from(filters: &SearchFilters) -> Self {
        Self {
            brand: filters.brand.clone(),
            min_price: filters.min_price.map(|v| v.to_string()),
            max_price: filters.max_price.map(|v| v.to_string()),
            fuel_type: filters.fuel_type.map(|f| f.as_str().to_string()),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Lenient base-10 integer parse: leading whitespace, an optional sign, then
/// the longest run of ASCII digits. Trailing garbage is ignored (`"12abc"` is
/// 12, `"3.7"` is 3). Returns `None` when no digit is found. Values beyond the
/// `i64` range saturate.
pub fn parse_int_lenient(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut any = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        any = true;
        let digit = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    any.then_some(value)
}
