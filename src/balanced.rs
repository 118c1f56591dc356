//! Capacity-constrained reassignment of points to fixed centroids.
//!
//! Every (point, centroid) pair is ranked by great-circle distance and the
//! list is scanned once, closest first: a point takes the first centroid it
//! meets that still has room. Points left over once every centroid is full
//! are pushed onto the least-loaded cluster and reported in
//! [`Assignment::forced`].
//!
//! This is a greedy approximation, not an optimal assignment. The candidate
//! sort costs O(nk log nk) time and O(nk) memory, which bounds how large
//! `n * k` can usefully get.

use tracing::warn;

use crate::geo::Point;
use crate::result::ForcedAssignment;
use crate::traits::DistanceMatrixProvider;

/// Labels produced by balanced assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Cluster id per input point.
    pub labels: Vec<usize>,
    /// Member count per cluster.
    pub counts: Vec<usize>,
    /// Points placed over capacity, in the order they were forced.
    pub forced: Vec<usize>,
}

impl Assignment {
    pub fn is_forced(&self, point: usize) -> bool {
        self.forced.contains(&point)
    }

    /// Forced points paired with the cluster they ended up in.
    pub fn forced_assignments(&self) -> Vec<ForcedAssignment> {
        self.forced
            .iter()
            .map(|&point_index| ForcedAssignment {
                point_index,
                cluster_id: self.labels[point_index],
            })
            .collect()
    }
}

pub fn assign_balanced<M>(points: &[Point], centroids: &[Point], capacity: usize, metric: &M) -> Assignment
where
    M: DistanceMatrixProvider,
{
    let k = centroids.len();
    let mut labels: Vec<Option<usize>> = vec![None; points.len()];
    let mut counts = vec![0usize; k];
    let mut forced = Vec::new();

    if k == 0 {
        return Assignment {
            labels: Vec::new(),
            counts,
            forced,
        };
    }

    let mut candidates: Vec<(f64, usize, usize)> = Vec::with_capacity(points.len() * k);
    for (p, point) in points.iter().enumerate() {
        for (c, centroid) in centroids.iter().enumerate() {
            candidates.push((metric.distance(point, centroid), p, c));
        }
    }
    candidates.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)).then(a.2.cmp(&b.2)));

    let mut assigned = 0;
    for (_, p, c) in candidates {
        if assigned == points.len() {
            break;
        }
        if labels[p].is_some() || counts[c] >= capacity {
            continue;
        }
        labels[p] = Some(c);
        counts[c] += 1;
        assigned += 1;
    }

    let labels = labels
        .into_iter()
        .enumerate()
        .map(|(p, label)| match label {
            Some(c) => c,
            None => {
                let least = least_loaded(&counts);
                counts[least] += 1;
                forced.push(p);
                least
            }
        })
        .collect();

    if !forced.is_empty() {
        warn!(
            forced = forced.len(),
            capacity,
            clusters = k,
            "capacity exhausted, points forced into least-loaded clusters"
        );
    }

    Assignment { labels, counts, forced }
}

/// Lowest-index cluster among those with the fewest members.
fn least_loaded(counts: &[usize]) -> usize {
    counts
        .iter()
        .enumerate()
        .min_by_key(|(i, count)| (**count, *i))
        .map(|(i, _)| i)
        .unwrap_or(0)
}
