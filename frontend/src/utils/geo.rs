//! Great-circle distance and the venue geofence.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mean earth radius used by the spherical approximation.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    #[error("coordinates must be finite numbers")]
    NotFinite,
    #[error("latitude {0} is outside -90..=90")]
    Latitude(f64),
    #[error("longitude {0} is outside -180..=180")]
    Longitude(f64),
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn validate(&self) -> Result<(), CoordinateError> {
        if !self.lat.is_finite() || !self.lng.is_finite() {
            return Err(CoordinateError::NotFinite);
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(CoordinateError::Latitude(self.lat));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(CoordinateError::Longitude(self.lng));
        }
        Ok(())
    }

    pub fn display(&self) -> String {
        format!("{:.6}, {:.6}", self.lat, self.lng)
    }
}

/// Haversine distance between two points, in meters.
pub fn haversine_distance_m(a: Coordinates, b: Coordinates) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let d_phi = (b.lat - a.lat).to_radians();
    let d_lambda = (b.lng - a.lng).to_radians();

    let h = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_M * c
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geofence {
    pub center: Coordinates,
    pub radius_m: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeofenceCheck {
    pub distance_m: f64,
    pub within: bool,
}

impl Geofence {
    pub const fn new(center: Coordinates, radius_m: f64) -> Self {
        Self { center, radius_m }
    }

    /// Boundary is inclusive: a position exactly `radius_m` away is inside.
    pub fn check(&self, position: Coordinates) -> GeofenceCheck {
        let distance_m = haversine_distance_m(position, self.center);
        GeofenceCheck {
            distance_m,
            within: distance_m <= self.radius_m,
        }
    }
}
