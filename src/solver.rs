//! Routing pipeline: cluster, optionally rebalance, then build and improve
//! one depot-anchored tour per cluster.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::balanced::assign_balanced;
use crate::construction::nearest_neighbor;
use crate::error::{Error, Result};
use crate::geo::{self, Point};
use crate::haversine::HaversineMatrix;
use crate::kmeans::Kmeans;
use crate::result::{OptimizationResult, RouteResult, RouteStop, StopKind, round_km};
use crate::tour::{DEPOT, Tour};
use crate::traits::DistanceMatrixProvider;
use crate::two_opt::{TwoOptOptions, TwoOptStats, two_opt};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveOptions {
    /// Requested number of vehicles when no capacity is set.
    pub num_clusters: usize,
    /// Maximum stops per vehicle. When set (and non-zero) the cluster count
    /// is derived from it and `num_clusters` is ignored.
    pub max_cluster_size: Option<usize>,
    /// Seed for k-means initialisation.
    pub seed: u64,
    pub kmeans_max_iterations: usize,
    pub two_opt: TwoOptOptions,
    /// Route clusters on the rayon pool.
    pub parallel: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            num_clusters: 20,
            max_cluster_size: None,
            seed: 42,
            kmeans_max_iterations: 300,
            two_opt: TwoOptOptions::default(),
            parallel: true,
        }
    }
}

impl SolveOptions {
    /// Capacity in effect, if any. A zero capacity counts as unset.
    pub fn capacity(&self) -> Option<usize> {
        self.max_cluster_size.filter(|&size| size > 0)
    }
}

/// Number of clusters for `n_points`, always within `[1, n_points]`
/// (0 only when there are no points).
pub fn cluster_count(n_points: usize, num_clusters: usize, capacity: Option<usize>) -> usize {
    if n_points == 0 {
        return 0;
    }
    let k = match capacity {
        Some(size) if size > 0 => n_points.div_ceil(size),
        _ => num_clusters,
    };
    k.clamp(1, n_points)
}

/// Optimise routes with great-circle distances.
pub fn solve(depot: Point, points: &[Point], options: &SolveOptions) -> Result<OptimizationResult> {
    solve_with(depot, points, options, &HaversineMatrix)
}

/// Optimise routes using `metric` for balanced assignment and route lengths.
pub fn solve_with<M>(depot: Point, points: &[Point], options: &SolveOptions, metric: &M) -> Result<OptimizationResult>
where
    M: DistanceMatrixProvider + Sync,
{
    if points.is_empty() {
        return Err(Error::EmptyDataset);
    }
    geo::validate(&depot, points)?;

    let capacity = options.capacity();
    let k = cluster_count(points.len(), options.num_clusters, capacity);
    info!(points = points.len(), k, ?capacity, "optimising routes");

    let clustering = Kmeans::new(k)
        .with_seed(options.seed)
        .with_max_iterations(options.kmeans_max_iterations)
        .fit(points);

    let (labels, forced) = match capacity {
        Some(size) => {
            let assignment = assign_balanced(points, &clustering.centroids, size, metric);
            let forced = assignment.forced_assignments();
            (assignment.labels, forced)
        }
        None => (clustering.labels, Vec::new()),
    };

    let mut groups: Vec<Vec<usize>> = vec![Vec::new(); k];
    for (point_index, &label) in labels.iter().enumerate() {
        groups[label].push(point_index);
    }

    let clusters: Vec<(usize, &[usize])> = groups
        .iter()
        .enumerate()
        .filter(|(_, members)| !members.is_empty())
        .map(|(cluster_id, members)| (cluster_id, members.as_slice()))
        .collect();

    let route = |&(cluster_id, members): &(usize, &[usize])| {
        route_cluster(cluster_id, depot, points, members, metric, &options.two_opt)
    };
    let routes: Vec<RouteResult> = if options.parallel {
        clusters.par_iter().map(route).collect()
    } else {
        clusters.iter().map(route).collect()
    };

    let summary: Vec<_> = routes.iter().map(RouteResult::summary).collect();
    let total_distance_km = round_km(summary.iter().map(|s| s.distance_km).sum());
    let total_houses = summary.iter().map(|s| s.num_houses).sum();

    info!(routes = routes.len(), total_distance_km, total_houses, "routes optimised");

    Ok(OptimizationResult {
        depot,
        routes,
        summary,
        num_clusters: k,
        total_distance_km,
        total_houses,
        max_cluster_size: capacity,
        forced_assignments: forced,
    })
}

/// Build and improve the tour over the depot plus `members`.
fn route_cluster<M>(
    cluster_id: usize,
    depot: Point,
    points: &[Point],
    members: &[usize],
    metric: &M,
    two_opt_options: &TwoOptOptions,
) -> RouteResult
where
    M: DistanceMatrixProvider,
{
    let locations: Vec<Point> = std::iter::once(depot)
        .chain(members.iter().map(|&i| points[i]))
        .collect();
    let matrix = metric.matrix_for(&locations);

    let mut tour: Tour = nearest_neighbor(&matrix);
    let initial = tour.length(&matrix);
    let TwoOptStats { passes, reversals, .. } = two_opt(&mut tour, &matrix, two_opt_options);
    let length = tour.length(&matrix);

    debug!(cluster_id, members = members.len(), initial, length, passes, reversals, "cluster routed");

    let stops = tour
        .nodes()
        .iter()
        .enumerate()
        .map(|(seq, &node)| {
            let location = locations[node];
            RouteStop {
                seq,
                kind: if node == DEPOT { StopKind::Depot } else { StopKind::House },
                lat: location.lat,
                lon: location.lon,
            }
        })
        .collect();

    RouteResult {
        cluster_id,
        points: stops,
        num_houses: members.len(),
        distance_km: round_km(length),
        point_indices: tour.stops().iter().map(|&node| members[node - 1]).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_count_capacity() {
        assert_eq!(cluster_count(10, 20, Some(3)), 4);
        assert_eq!(cluster_count(9, 20, Some(3)), 3);
        assert_eq!(cluster_count(5, 20, Some(1)), 5);
        assert_eq!(cluster_count(5, 20, Some(100)), 1);
    }

    #[test]
    fn test_cluster_count_plain() {
        assert_eq!(cluster_count(3, 20, None), 3);
        assert_eq!(cluster_count(30, 20, None), 20);
        assert_eq!(cluster_count(30, 0, None), 1);
        assert_eq!(cluster_count(30, 4, Some(0)), 4);
        assert_eq!(cluster_count(0, 4, None), 0);
    }

    #[test]
    fn test_zero_capacity_is_unset() {
        let options = SolveOptions {
            max_cluster_size: Some(0),
            ..SolveOptions::default()
        };
        assert_eq!(options.capacity(), None);
    }

    #[test]
    fn test_empty_points() {
        let err = solve(Point::new(0.0, 0.0), &[], &SolveOptions::default()).unwrap_err();
        assert_eq!(err, Error::EmptyDataset);
    }

    #[test]
    fn test_point_indices_map_back_to_input() {
        let points = vec![Point::new(0.0, 0.3), Point::new(0.0, 0.1), Point::new(0.0, 0.2)];
        let options = SolveOptions {
            num_clusters: 1,
            ..SolveOptions::default()
        };
        let result = solve(Point::new(0.0, 0.0), &points, &options).unwrap();
        let route = &result.routes[0];
        assert_eq!(route.point_indices.len(), 3);
        for (stop, &index) in route.points[1..route.points.len() - 1].iter().zip(&route.point_indices) {
            assert_eq!(stop.lat, points[index].lat);
            assert_eq!(stop.lon, points[index].lon);
        }
    }

    #[test]
    fn test_antipodal_stop_has_finite_distance() {
        let depot = Point::new(0.08, 0.0);
        let points = vec![Point::new(-0.08, -180.0)];
        let result = solve(depot, &points, &SolveOptions::default()).unwrap();
        assert!(result.routes[0].distance_km.is_finite());
        assert!(result.total_distance_km > 40_000.0);

        let value: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
        assert!(value["total_distance_km"].is_f64());
        assert!(value["routes"][0]["distance_km"].is_f64());
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: SolveOptions = serde_json::from_str(r#"{"max_cluster_size": 8, "two_opt": {"max_passes": 5}}"#).unwrap();
        assert_eq!(options.max_cluster_size, Some(8));
        assert_eq!(options.num_clusters, 20);
        assert_eq!(options.two_opt.max_passes, 5);
        assert_eq!(options.two_opt.epsilon, 1e-9);
    }
}
