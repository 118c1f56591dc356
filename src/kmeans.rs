//! K-means clustering of points in planar (lat, lon) space.
//!
//! Centroids are seeded with k-means++ from a caller-supplied seed, then
//! refined with Lloyd iterations until labels stop changing or the
//! iteration cap is reached. Distances here are plain Euclidean on the raw
//! coordinate pair.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::geo::Point;

/// Output of a clustering run.
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering {
    /// Cluster id per input point.
    pub labels: Vec<usize>,
    pub centroids: Vec<Point>,
    /// Lloyd iterations performed.
    pub iterations: usize,
}

impl Clustering {
    pub fn k(&self) -> usize {
        self.centroids.len()
    }
}

#[derive(Debug, Clone)]
pub struct Kmeans {
    k: usize,
    seed: u64,
    max_iterations: usize,
}

impl Kmeans {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            seed: 42,
            max_iterations: 300,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }

    /// Partition `points` into at most `k` groups. `k` is clamped to
    /// `[1, points.len()]`; an empty input yields an empty clustering.
    pub fn fit(&self, points: &[Point]) -> Clustering {
        if points.is_empty() {
            return Clustering {
                labels: Vec::new(),
                centroids: Vec::new(),
                iterations: 0,
            };
        }

        let k = self.k.clamp(1, points.len());
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut centroids = init_plus_plus(points, k, &mut rng);
        let mut labels = assign(points, &centroids);
        let mut iterations = 1;

        while iterations < self.max_iterations {
            centroids = update_centroids(points, &labels, &centroids);
            let next = assign(points, &centroids);
            iterations += 1;
            if next == labels {
                break;
            }
            labels = next;
        }

        debug!(k, iterations, "k-means finished");

        Clustering {
            labels,
            centroids,
            iterations,
        }
    }
}

/// k-means++ seeding: first centroid uniform, each following one drawn with
/// probability proportional to squared distance from the nearest chosen one.
fn init_plus_plus(points: &[Point], k: usize, rng: &mut StdRng) -> Vec<Point> {
    let n = points.len();
    let mut chosen = vec![false; n];
    let mut centroids = Vec::with_capacity(k);

    let first = rng.gen_range(0..n);
    chosen[first] = true;
    centroids.push(points[first]);

    let mut min_dist: Vec<f64> = points.iter().map(|p| p.planar_distance_sq(&points[first])).collect();

    while centroids.len() < k {
        let total: f64 = min_dist
            .iter()
            .zip(&chosen)
            .filter(|(_, taken)| !**taken)
            .map(|(d, _)| *d)
            .sum();

        let next = if total > 0.0 {
            let target = rng.gen_range(0.0..total);
            let mut acc = 0.0;
            let mut pick = None;
            for (i, d) in min_dist.iter().enumerate() {
                if chosen[i] || *d <= 0.0 {
                    continue;
                }
                acc += d;
                pick = Some(i);
                if acc > target {
                    break;
                }
            }
            pick
        } else {
            None
        };

        // Remaining points all coincide with chosen centroids.
        let Some(next) = next.or_else(|| chosen.iter().position(|taken| !taken)) else {
            break;
        };

        chosen[next] = true;
        centroids.push(points[next]);
        for (i, p) in points.iter().enumerate() {
            let d = p.planar_distance_sq(&points[next]);
            if d < min_dist[i] {
                min_dist[i] = d;
            }
        }
    }

    centroids
}

/// Nearest centroid per point; ties go to the lowest centroid index.
fn assign(points: &[Point], centroids: &[Point]) -> Vec<usize> {
    points
        .iter()
        .map(|p| {
            let mut best = 0;
            let mut best_dist = f64::INFINITY;
            for (c, centroid) in centroids.iter().enumerate() {
                let d = p.planar_distance_sq(centroid);
                if d < best_dist {
                    best_dist = d;
                    best = c;
                }
            }
            best
        })
        .collect()
}

/// Mean of members per cluster. An empty cluster is moved onto the point
/// farthest from its own centroid, provided that point does not leave its
/// cluster empty; otherwise it keeps its previous position.
fn update_centroids(points: &[Point], labels: &[usize], previous: &[Point]) -> Vec<Point> {
    let k = previous.len();
    let mut sums = vec![(0.0, 0.0); k];
    let mut counts = vec![0usize; k];

    for (point, &label) in points.iter().zip(labels) {
        sums[label].0 += point.lat;
        sums[label].1 += point.lon;
        counts[label] += 1;
    }

    let mut centroids: Vec<Point> = sums
        .iter()
        .zip(&counts)
        .zip(previous)
        .map(|((&(lat, lon), &count), prev)| {
            if count > 0 {
                Point::new(lat / count as f64, lon / count as f64)
            } else {
                *prev
            }
        })
        .collect();

    let mut moved = vec![false; points.len()];
    for cluster in 0..k {
        if counts[cluster] > 0 {
            continue;
        }
        let farthest = points
            .iter()
            .enumerate()
            .filter(|(i, _)| !moved[*i] && counts[labels[*i]] > 1)
            .map(|(i, p)| (i, p.planar_distance_sq(&centroids[labels[i]])))
            .filter(|(_, d)| *d > 0.0)
            .max_by(|a, b| a.1.total_cmp(&b.1).then(b.0.cmp(&a.0)));

        if let Some((i, _)) = farthest {
            moved[i] = true;
            counts[labels[i]] -= 1;
            counts[cluster] += 1;
            centroids[cluster] = points[i];
        }
    }

    centroids
}
