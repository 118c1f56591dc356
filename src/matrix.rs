//! Dense symmetric distance matrix.

/// Square, symmetric matrix of non-negative distances (km) stored row-major.
///
/// Built once per scope and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Build a matrix by evaluating `distance` on the upper triangle and
    /// mirroring it.
    pub fn from_fn<T, F>(items: &[T], distance: F) -> Self
    where
        F: Fn(&T, &T) -> f64,
    {
        let size = items.len();
        let mut data = vec![0.0; size * size];
        for i in 0..size {
            for j in (i + 1)..size {
                let d = distance(&items[i], &items[j]);
                data[i * size + j] = d;
                data[j * size + i] = d;
            }
        }
        Self { data, size }
    }

    /// Distance between nodes `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        debug_assert!(
            from < self.size && to < self.size,
            "node ({}, {}) outside {}x{} matrix",
            from,
            to,
            self.size,
            self.size
        );
        self.data[from * self.size + to]
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Sum of consecutive edge distances along `path`.
    pub fn path_length(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|edge| self.get(edge[0], edge[1])).sum()
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| {
            self.get(i, i) == 0.0 && ((i + 1)..self.size).all(|j| self.get(i, j) == self.get(j, i))
        })
    }
}
