//! Serialisable optimisation output.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geo::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopKind {
    Depot,
    House,
}

/// One visited location along a route. `seq` is the zero-based position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStop {
    pub seq: usize,
    #[serde(rename = "type")]
    pub kind: StopKind,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    pub cluster_id: usize,
    pub points: Vec<RouteStop>,
    pub num_houses: usize,
    /// Tour length in km, rounded to two decimals.
    pub distance_km: f64,
    /// Input point indices in visiting order.
    #[serde(skip)]
    pub point_indices: Vec<usize>,
}

impl RouteResult {
    pub fn summary(&self) -> ClusterSummary {
        ClusterSummary {
            cluster_id: self.cluster_id,
            num_houses: self.num_houses,
            distance_km: self.distance_km,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub cluster_id: usize,
    pub num_houses: usize,
    pub distance_km: f64,
}

/// A point placed over capacity because every cluster was already full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForcedAssignment {
    pub point_index: usize,
    pub cluster_id: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub depot: Point,
    pub routes: Vec<RouteResult>,
    pub summary: Vec<ClusterSummary>,
    /// Cluster count after clamping; empty clusters produce no route.
    pub num_clusters: usize,
    pub total_distance_km: f64,
    pub total_houses: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cluster_size: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forced_assignments: Vec<ForcedAssignment>,
}

impl OptimizationResult {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Round kilometers to two decimals for reporting.
pub fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}
