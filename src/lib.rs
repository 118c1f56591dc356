//! cluster-router core
//!
//! Splits delivery points among vehicles leaving a single depot and orders
//! each vehicle's stops: k-means clustering, optional capacity-balanced
//! reassignment, nearest-neighbour tours and 2-opt improvement.

pub mod error;
pub mod geo;
pub mod traits;
pub mod matrix;
pub mod haversine;
pub mod kmeans;
pub mod balanced;
pub mod tour;
pub mod construction;
pub mod two_opt;
pub mod result;
pub mod solver;
pub mod request;

pub use error::{Error, Result};
pub use geo::Point;
pub use result::OptimizationResult;
pub use solver::{SolveOptions, solve, solve_with};
