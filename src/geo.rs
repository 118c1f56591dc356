//! Geographic coordinates.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A latitude/longitude pair in signed degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
}

impl Point {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// True when both components are finite and inside the valid ranges.
    pub fn in_range(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// Planar squared distance on the raw (lat, lon) pair.
    ///
    /// Only used while clustering; route lengths are great-circle.
    pub fn planar_distance_sq(&self, other: &Point) -> f64 {
        let dlat = self.lat - other.lat;
        let dlon = self.lon - other.lon;
        dlat * dlat + dlon * dlon
    }
}

/// Check the depot and every point against the coordinate ranges.
pub fn validate(depot: &Point, points: &[Point]) -> Result<()> {
    if !depot.in_range() {
        return Err(Error::CoordinateRange {
            index: None,
            lat: depot.lat,
            lon: depot.lon,
        });
    }
    if let Some((index, point)) = points.iter().enumerate().find(|(_, p)| !p.in_range()) {
        return Err(Error::CoordinateRange {
            index: Some(index),
            lat: point.lat,
            lon: point.lon,
        });
    }
    Ok(())
}
