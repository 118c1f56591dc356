//! Great-circle distance model.
//!
//! Route lengths and balanced-assignment distances are measured with the
//! haversine formula on a spherical Earth.

use crate::geo::Point;
use crate::matrix::DistanceMatrix;
use crate::traits::DistanceMatrixProvider;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points in kilometers.
pub fn haversine_km(from: &Point, to: &Point) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lon = (to.lon - from.lon).to_radians();

    // Rounding can push `a` past 1 near antipodes.
    let a = ((delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Haversine-based distance matrix provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineMatrix;

impl DistanceMatrixProvider for HaversineMatrix {
    fn matrix_for(&self, locations: &[Point]) -> DistanceMatrix {
        DistanceMatrix::from_fn(locations, haversine_km)
    }

    fn distance(&self, from: &Point, to: &Point) -> f64 {
        haversine_km(from, to)
    }
}
