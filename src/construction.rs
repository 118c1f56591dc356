//! Nearest-neighbour tour construction.

use crate::matrix::DistanceMatrix;
use crate::tour::{DEPOT, Tour};

/// Build a closed tour from the depot by always moving to the closest
/// unvisited node. Ties go to the lowest node index.
///
/// O(n²) in the number of nodes.
pub fn nearest_neighbor(matrix: &DistanceMatrix) -> Tour {
    let n = matrix.size();
    let mut nodes = Vec::with_capacity(n + 1);
    nodes.push(DEPOT);

    if n > 1 {
        let mut visited = vec![false; n];
        visited[DEPOT] = true;
        let mut current = DEPOT;

        for _ in 1..n {
            let mut next = None;
            let mut best = f64::INFINITY;
            for candidate in 1..n {
                if visited[candidate] {
                    continue;
                }
                let d = matrix.get(current, candidate);
                if next.is_none() || d < best {
                    best = d;
                    next = Some(candidate);
                }
            }
            let Some(next) = next else { break };
            visited[next] = true;
            nodes.push(next);
            current = next;
        }
    }

    nodes.push(DEPOT);
    Tour::new_unchecked(nodes)
}
