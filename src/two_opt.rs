//! 2-opt improvement of a closed tour.
//!
//! For interior positions `1 <= i < j <= len - 2`, reversing `tour[i..=j]`
//! replaces edges `(i-1, i)` and `(j, j+1)` with `(i-1, j)` and `(i, j+1)`.
//! Each improving reversal is applied as soon as it is found and the scan
//! continues; passes repeat until one makes no change. The depot positions
//! at both ends are never touched.
//!
//! Termination: a reversal must gain more than `epsilon`, and the number of
//! passes (and optionally wall-clock time) is capped.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::matrix::DistanceMatrix;
use crate::tour::Tour;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwoOptOptions {
    /// Maximum number of full scans.
    pub max_passes: usize,
    /// Minimum gain (km) for a reversal to count as an improvement.
    pub epsilon: f64,
    /// Optional wall-clock budget per tour, checked between passes.
    pub time_limit_ms: Option<u64>,
}

impl Default for TwoOptOptions {
    fn default() -> Self {
        Self {
            max_passes: 1000,
            epsilon: 1e-9,
            time_limit_ms: None,
        }
    }
}

/// How a 2-opt run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Converged,
    PassLimit,
    TimeLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoOptStats {
    pub passes: usize,
    pub reversals: usize,
    pub stop: StopReason,
}

/// Improve `tour` in place.
pub fn two_opt(tour: &mut Tour, matrix: &DistanceMatrix, options: &TwoOptOptions) -> TwoOptStats {
    let started = Instant::now();
    let budget = options.time_limit_ms.map(Duration::from_millis);
    let epsilon = options.epsilon.max(0.0);
    let nodes = tour.nodes_mut();
    let len = nodes.len();

    let mut passes = 0;
    let mut reversals = 0;
    let mut stop = StopReason::Converged;

    // Fewer than two interior stops: nothing to reverse.
    if len >= 4 {
        loop {
            if passes >= options.max_passes {
                stop = StopReason::PassLimit;
                break;
            }
            if budget.is_some_and(|b| started.elapsed() >= b) {
                stop = StopReason::TimeLimit;
                break;
            }

            passes += 1;
            let mut improved = false;
            for i in 1..len - 2 {
                for j in (i + 1)..len - 1 {
                    let before = matrix.get(nodes[i - 1], nodes[i]) + matrix.get(nodes[j], nodes[j + 1]);
                    let after = matrix.get(nodes[i - 1], nodes[j]) + matrix.get(nodes[i], nodes[j + 1]);
                    if before - after > epsilon {
                        nodes[i..=j].reverse();
                        reversals += 1;
                        improved = true;
                    }
                }
            }

            if !improved {
                break;
            }
        }
    }

    match stop {
        StopReason::Converged => debug!(passes, reversals, "2-opt converged"),
        _ => warn!(passes, reversals, ?stop, "2-opt stopped before converging"),
    }

    TwoOptStats { passes, reversals, stop }
}
