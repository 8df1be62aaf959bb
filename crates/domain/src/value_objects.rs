//! Value objects shared across aggregates.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, require_text};

const EARTH_RADIUS_KM: f64 = 6371.0;

fn validate_latitude(latitude: f64) -> Result<f64, DomainError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(DomainError::validation(
            "Latitude must be between -90 and 90",
        ));
    }
    Ok(latitude)
}

fn validate_longitude(longitude: f64) -> Result<f64, DomainError> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(DomainError::validation(
            "Longitude must be between -180 and 180",
        ));
    }
    Ok(longitude)
}

/// A postal address with geographic coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    street: String,
    city: String,
    postal_code: String,
    country: String,
    latitude: f64,
    longitude: f64,
    is_default: bool,
}

impl Address {
    /// Creates an address, trimming text fields and checking coordinates.
    pub fn new(
        street: &str,
        city: &str,
        postal_code: &str,
        country: &str,
        latitude: f64,
        longitude: f64,
        is_default: bool,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            street: require_text(street, "street")?,
            city: require_text(city, "city")?,
            postal_code: require_text(postal_code, "postal_code")?,
            country: require_text(country, "country")?,
            latitude: validate_latitude(latitude)?,
            longitude: validate_longitude(longitude)?,
            is_default,
        })
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }

    /// Marks this address as the default.
    pub fn set_as_default(&mut self) {
        self.is_default = true;
    }

    /// Clears the default flag.
    pub fn set_as_non_default(&mut self) {
        self.is_default = false;
    }
}

/// A geographic point, optionally labelled with a human-readable address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    latitude: f64,
    longitude: f64,
    address: Option<String>,
}

impl Location {
    /// Creates a location after checking coordinate ranges.
    pub fn new(latitude: f64, longitude: f64, address: Option<&str>) -> Result<Self, DomainError> {
        Ok(Self {
            latitude: validate_latitude(latitude)?,
            longitude: validate_longitude(longitude)?,
            address: address.map(|a| a.trim().to_string()),
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Returns the great-circle distance to another location in kilometers.
    pub fn distance_to_km(&self, other: &Location) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lon1 = self.longitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let lon2 = other.longitude.to_radians();

        let delta_lat = lat2 - lat1;
        let delta_lon = lon2 - lon1;

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

/// A timestamped rider position recorded while a delivery is in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationUpdate {
    latitude: f64,
    longitude: f64,
    address: Option<String>,
    recorded_at: DateTime<Utc>,
}

impl LocationUpdate {
    /// Creates a location update stamped with the current time.
    pub fn new(latitude: f64, longitude: f64, address: Option<&str>) -> Result<Self, DomainError> {
        Ok(Self {
            latitude: validate_latitude(latitude)?,
            longitude: validate_longitude(longitude)?,
            address: address.map(|a| a.trim().to_string()),
            recorded_at: Utc::now(),
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    /// Returns the position as a [`Location`].
    pub fn location(&self) -> Location {
        Location {
            latitude: self.latitude,
            longitude: self.longitude,
            address: self.address.clone(),
        }
    }
}

/// Daily opening hours within a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    opens: NaiveTime,
    closes: NaiveTime,
}

impl BusinessHours {
    /// Creates business hours, requiring the opening time to come first.
    pub fn new(opens: NaiveTime, closes: NaiveTime) -> Result<Self, DomainError> {
        if opens >= closes {
            return Err(DomainError::validation(
                "Opening time must be before closing time",
            ));
        }
        Ok(Self { opens, closes })
    }

    pub fn opens(&self) -> NaiveTime {
        self.opens
    }

    pub fn closes(&self) -> NaiveTime {
        self.closes
    }

    /// Returns true if the given time falls within the hours, inclusive at
    /// both ends.
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.opens <= time && time <= self.closes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address::new(
            "123 Main St",
            "Springfield",
            "12345",
            "USA",
            40.7128,
            -74.0060,
            false,
        )
        .unwrap()
    }

    mod address_tests {
        use super::*;

        #[test]
        fn test_new_trims_text_fields() {
            let address = Address::new(
                "  123 Main St  ",
                " Springfield ",
                " 12345 ",
                " USA ",
                40.0,
                -74.0,
                true,
            )
            .unwrap();

            assert_eq!(address.street(), "123 Main St");
            assert_eq!(address.city(), "Springfield");
            assert_eq!(address.postal_code(), "12345");
            assert_eq!(address.country(), "USA");
            assert!(address.is_default());
        }

        #[test]
        fn test_empty_fields_are_rejected() {
            let err = Address::new("", "City", "12345", "USA", 0.0, 0.0, false).unwrap_err();
            assert_eq!(err.to_string(), "street cannot be empty");

            let err = Address::new("St", "  ", "12345", "USA", 0.0, 0.0, false).unwrap_err();
            assert_eq!(err.to_string(), "city cannot be empty");

            let err = Address::new("St", "City", "", "USA", 0.0, 0.0, false).unwrap_err();
            assert_eq!(err.to_string(), "postal_code cannot be empty");

            let err = Address::new("St", "City", "12345", "", 0.0, 0.0, false).unwrap_err();
            assert_eq!(err.to_string(), "country cannot be empty");
        }

        #[test]
        fn test_coordinates_out_of_range_are_rejected() {
            let err = Address::new("St", "City", "12345", "USA", 91.0, 0.0, false).unwrap_err();
            assert!(err.is_validation());
            assert_eq!(err.to_string(), "Latitude must be between -90 and 90");

            let err = Address::new("St", "City", "12345", "USA", 0.0, -180.5, false).unwrap_err();
            assert_eq!(err.to_string(), "Longitude must be between -180 and 180");
        }

        #[test]
        fn test_boundary_coordinates_are_accepted() {
            assert!(Address::new("St", "City", "12345", "USA", 90.0, 180.0, false).is_ok());
            assert!(Address::new("St", "City", "12345", "USA", -90.0, -180.0, false).is_ok());
        }

        #[test]
        fn test_default_flag_toggles() {
            let mut address = address();
            assert!(!address.is_default());

            address.set_as_default();
            assert!(address.is_default());

            address.set_as_non_default();
            assert!(!address.is_default());
        }
    }

    mod location_tests {
        use super::*;

        #[test]
        fn test_distance_to_self_is_zero() {
            let here = Location::new(51.5074, -0.1278, None).unwrap();
            assert!(here.distance_to_km(&here).abs() < 1e-9);
        }

        #[test]
        fn test_distance_one_degree_of_longitude_at_equator() {
            let a = Location::new(0.0, 0.0, None).unwrap();
            let b = Location::new(0.0, 1.0, None).unwrap();
            // One degree of longitude at the equator is ~111.19 km.
            assert!((a.distance_to_km(&b) - 111.19).abs() < 0.01);
        }

        #[test]
        fn test_distance_is_symmetric() {
            let a = Location::new(40.7128, -74.0060, None).unwrap();
            let b = Location::new(34.0522, -118.2437, None).unwrap();
            assert!((a.distance_to_km(&b) - b.distance_to_km(&a)).abs() < 1e-9);
        }

        #[test]
        fn test_address_label_is_trimmed() {
            let here = Location::new(0.0, 0.0, Some("  Market Square  ")).unwrap();
            assert_eq!(here.address(), Some("Market Square"));
        }

        #[test]
        fn test_invalid_coordinates_are_rejected() {
            assert!(Location::new(-90.1, 0.0, None).is_err());
            assert!(Location::new(0.0, 180.1, None).is_err());
        }
    }

    mod location_update_tests {
        use super::*;

        #[test]
        fn test_new_stamps_current_time() {
            let before = Utc::now();
            let update = LocationUpdate::new(10.0, 20.0, None).unwrap();
            let after = Utc::now();

            assert!(update.recorded_at() >= before);
            assert!(update.recorded_at() <= after);
        }

        #[test]
        fn test_location_conversion_keeps_fields() {
            let update = LocationUpdate::new(10.0, 20.0, Some("Depot")).unwrap();
            let location = update.location();

            assert_eq!(location.latitude(), 10.0);
            assert_eq!(location.longitude(), 20.0);
            assert_eq!(location.address(), Some("Depot"));
        }
    }

    mod business_hours_tests {
        use super::*;

        fn time(h: u32, m: u32) -> NaiveTime {
            NaiveTime::from_hms_opt(h, m, 0).unwrap()
        }

        #[test]
        fn test_opening_must_precede_closing() {
            let err = BusinessHours::new(time(22, 0), time(9, 0)).unwrap_err();
            assert!(err.is_validation());
            assert_eq!(err.to_string(), "Opening time must be before closing time");

            let err = BusinessHours::new(time(9, 0), time(9, 0)).unwrap_err();
            assert_eq!(err.to_string(), "Opening time must be before closing time");
        }

        #[test]
        fn test_contains_is_inclusive_at_both_ends() {
            let hours = BusinessHours::new(time(9, 0), time(22, 0)).unwrap();

            assert!(hours.contains(time(9, 0)));
            assert!(hours.contains(time(15, 30)));
            assert!(hours.contains(time(22, 0)));
            assert!(!hours.contains(time(8, 59)));
            assert!(!hours.contains(time(22, 1)));
        }
    }
}
