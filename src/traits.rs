//! Seams between the optimisation pipeline and its collaborators.

use crate::geo::Point;
use crate::matrix::DistanceMatrix;

/// Provides a distance matrix (km) for a set of locations.
///
/// The matrix is indexed by the provided location order and must be
/// symmetric with a zero diagonal.
pub trait DistanceMatrixProvider {
    fn matrix_for(&self, locations: &[Point]) -> DistanceMatrix;

    /// Distance between two individual locations.
    fn distance(&self, from: &Point, to: &Point) -> f64;
}
