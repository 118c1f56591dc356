//! Closed, depot-anchored tours.

use crate::matrix::DistanceMatrix;

/// Index of the depot in every per-cluster distance matrix.
pub const DEPOT: usize = 0;

/// Ordered node indices of a closed walk that starts and ends at [`DEPOT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    nodes: Vec<usize>,
}

impl Tour {
    /// Wrap a node sequence. Returns `None` unless it is a valid closed tour
    /// over `0..node_count`.
    pub fn from_nodes(nodes: Vec<usize>, node_count: usize) -> Option<Self> {
        let tour = Self { nodes };
        tour.is_valid(node_count).then_some(tour)
    }

    pub(crate) fn new_unchecked(nodes: Vec<usize>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [usize] {
        &mut self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Non-depot stops in visiting order.
    pub fn stops(&self) -> &[usize] {
        match self.nodes.len() {
            0..=2 => &[],
            n => &self.nodes[1..n - 1],
        }
    }

    pub fn length(&self, matrix: &DistanceMatrix) -> f64 {
        matrix.path_length(&self.nodes)
    }

    /// Depot at both ends only, every other node of `0..node_count` exactly once.
    pub fn is_valid(&self, node_count: usize) -> bool {
        if node_count == 0 || self.nodes.len() != node_count + 1 {
            return false;
        }
        if self.nodes.first() != Some(&DEPOT) || self.nodes.last() != Some(&DEPOT) {
            return false;
        }
        let mut seen = vec![false; node_count];
        for &node in self.stops() {
            if node == DEPOT || node >= node_count || seen[node] {
                return false;
            }
            seen[node] = true;
        }
        true
    }
}
