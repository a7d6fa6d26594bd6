//! Saved gym locations.

use super::parse_decimal;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A user's saved training location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub address: String,
    /// Decimal as text
    pub latitude: Option<String>,
    /// Decimal as text
    pub longitude: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl UserLocation {
    /// Parsed `(latitude, longitude)`, when both are set.
    pub fn coordinates(&self) -> Result<Option<(f64, f64)>> {
        let lat = parse_decimal("latitude", self.latitude.as_deref())?;
        let lon = parse_decimal("longitude", self.longitude.as_deref())?;
        Ok(lat.zip(lon))
    }
}

/// Body for creating or updating a location.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewUserLocation {
    pub name: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coordinates() {
        let mut location: UserLocation = serde_json::from_value(json!({
            "id": 1,
            "name": "Home gym",
            "address": "",
            "latitude": "37.389100",
            "longitude": "-122.081900",
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(location.coordinates().unwrap(), Some((37.3891, -122.0819)));

        location.longitude = None;
        assert_eq!(location.coordinates().unwrap(), None);
    }
}
