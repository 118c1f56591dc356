//! Input contract between an external loader and the pipeline.
//!
//! A loader hands over raw rows that may be missing coordinates; rows with
//! a missing latitude or longitude are dropped here, everything else is
//! validated before it reaches the solver.

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::geo::{self, Point};
use crate::result::OptimizationResult;
use crate::solver::{SolveOptions, solve};

/// A coordinate row as produced by a loader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct RawCoordinate {
    #[serde(default, alias = "lat")]
    pub latitude: Option<f64>,
    #[serde(default, alias = "lon", alias = "lng")]
    pub longitude: Option<f64>,
}

impl RawCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    fn point(&self) -> Option<Point> {
        Some(Point::new(self.latitude?, self.longitude?))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OptimizeRequest {
    #[serde(default)]
    pub depot: Option<RawCoordinate>,
    #[serde(default)]
    pub points: Option<Vec<RawCoordinate>>,
    #[serde(default)]
    pub num_clusters: Option<usize>,
    #[serde(default)]
    pub max_cluster_size: Option<usize>,
}

/// A request whose depot and points are present, complete and in range.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub depot: Point,
    pub points: Vec<Point>,
    pub options: SolveOptions,
    /// Rows dropped for missing coordinates.
    pub dropped: usize,
}

impl OptimizeRequest {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the request and merge its parameters over `base`.
    pub fn validate(self, base: SolveOptions) -> Result<ValidatedRequest> {
        let depot = self
            .depot
            .ok_or_else(|| Error::invalid_input("depot coordinate is missing"))?
            .point()
            .ok_or_else(|| Error::invalid_input("depot needs both latitude and longitude"))?;
        let rows = self
            .points
            .ok_or_else(|| Error::invalid_input("point collection is missing"))?;

        if self.num_clusters == Some(0) {
            return Err(Error::invalid_input("num_clusters must be positive"));
        }
        if self.max_cluster_size == Some(0) {
            return Err(Error::invalid_input("max_cluster_size must be positive"));
        }

        let points: Vec<Point> = rows.iter().filter_map(RawCoordinate::point).collect();
        let dropped = rows.len() - points.len();
        if dropped > 0 {
            debug!(dropped, "dropped rows with missing coordinates");
        }
        if points.is_empty() {
            return Err(Error::EmptyDataset);
        }
        geo::validate(&depot, &points)?;

        let mut options = base;
        if let Some(num_clusters) = self.num_clusters {
            options.num_clusters = num_clusters;
        }
        if self.max_cluster_size.is_some() {
            options.max_cluster_size = self.max_cluster_size;
        }

        Ok(ValidatedRequest {
            depot,
            points,
            options,
            dropped,
        })
    }
}

impl ValidatedRequest {
    pub fn solve(&self) -> Result<OptimizationResult> {
        solve(self.depot, &self.points, &self.options)
    }
}
