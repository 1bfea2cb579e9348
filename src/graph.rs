//! Bipartite graph storage.
//!
//! A [`BipartiteGraph`] keeps one ordered edge list per left vertex. Right
//! vertices have no adjacency of their own; they are reached by scanning the
//! left edge lists. Edge order is preserved exactly as given, which is what
//! makes matchings computed on the graph reproducible.
//!
//! Every constructor checks that right indices lie in `[0, right_count)`.
//! Duplicate edges and unsorted lists are accepted unchanged.

use crate::error::{Error, Result};

/// Unweighted bipartite graph with left-side adjacency lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BipartiteGraph {
    adjacency: Vec<Vec<usize>>,
    right_count: usize,
}

impl BipartiteGraph {
    /// Build a graph from one edge list per left vertex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] for the first right index that is
    /// not below `right_count`.
    pub fn new(adjacency: Vec<Vec<usize>>, right_count: usize) -> Result<Self> {
        validate_adjacency(&adjacency, right_count)?;
        Ok(Self {
            adjacency,
            right_count,
        })
    }

    /// Build a graph from `(left, right)` edge pairs.
    ///
    /// Edges are appended to their left vertex's list in the order given.
    pub fn from_edges(
        left_count: usize,
        right_count: usize,
        edges: &[(usize, usize)],
    ) -> Result<Self> {
        let mut adjacency = vec![Vec::new(); left_count];
        for &(u, v) in edges {
            if u >= left_count {
                return Err(Error::out_of_bounds(u, left_count));
            }
            if v >= right_count {
                return Err(Error::out_of_bounds(v, right_count));
            }
            adjacency[u].push(v);
        }
        Ok(Self {
            adjacency,
            right_count,
        })
    }

    /// Build a graph from the sparsity structure of a CSC matrix.
    ///
    /// Columns become left vertices and rows become right vertices, so the
    /// edge list of column `j` is `row_indices[col_ptrs[j]..col_ptrs[j + 1]]`.
    ///
    /// # Arguments
    ///
    /// * `n_rows` - Number of rows (right vertices)
    /// * `n_cols` - Number of columns (left vertices)
    /// * `col_ptrs` - CSC column pointers (length n_cols + 1)
    /// * `row_indices` - CSC row indices
    pub fn from_csc(
        n_rows: usize,
        n_cols: usize,
        col_ptrs: &[i64],
        row_indices: &[i64],
    ) -> Result<Self> {
        if col_ptrs.len() != n_cols + 1 {
            return Err(Error::invalid_argument(
                "col_ptrs",
                format!(
                    "length {} does not match n_cols + 1 = {}",
                    col_ptrs.len(),
                    n_cols + 1
                ),
            ));
        }

        if col_ptrs[0] != 0 {
            return Err(Error::invalid_argument(
                "col_ptrs",
                format!("must start at 0, got {}", col_ptrs[0]),
            ));
        }

        if let Some(j) = col_ptrs.windows(2).position(|w| w[1] < w[0]) {
            return Err(Error::invalid_argument(
                "col_ptrs",
                format!(
                    "not monotonic at column {}: {} > {}",
                    j,
                    col_ptrs[j],
                    col_ptrs[j + 1]
                ),
            ));
        }

        let nnz = col_ptrs[n_cols] as usize;
        if row_indices.len() < nnz {
            return Err(Error::invalid_argument(
                "row_indices",
                format!("length {} is less than nnz = {}", row_indices.len(), nnz),
            ));
        }

        let mut adjacency = Vec::with_capacity(n_cols);
        for j in 0..n_cols {
            let start = col_ptrs[j] as usize;
            let end = col_ptrs[j + 1] as usize;
            let mut rows = Vec::with_capacity(end - start);
            for &i in &row_indices[start..end] {
                if i < 0 || i as usize >= n_rows {
                    return Err(Error::invalid_argument(
                        "row_indices",
                        format!("row {} in column {} outside 0..{}", i, j, n_rows),
                    ));
                }
                rows.push(i as usize);
            }
            adjacency.push(rows);
        }

        Ok(Self {
            adjacency,
            right_count: n_rows,
        })
    }

    /// Number of left vertices.
    pub fn left_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of right vertices.
    pub fn right_count(&self) -> usize {
        self.right_count
    }

    /// Total number of edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Right vertices adjacent to left vertex `u`, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `u >= self.left_count()`.
    pub fn neighbors(&self, u: usize) -> &[usize] {
        &self.adjacency[u]
    }

    /// All edge lists, indexed by left vertex.
    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    /// Whether the edge `u -> v` exists. Out-of-range vertices have no edges.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|edges| edges.contains(&v))
    }

    /// Consume the graph, returning its edge lists and right vertex count.
    pub fn into_parts(self) -> (Vec<Vec<usize>>, usize) {
        (self.adjacency, self.right_count)
    }
}

/// Check that every right index in `adjacency` is below `right_count`.
pub fn validate_adjacency<A: AsRef<[usize]>>(adjacency: &[A], right_count: usize) -> Result<()> {
    for edges in adjacency {
        if let Some(&v) = edges.as_ref().iter().find(|&&v| v >= right_count) {
            return Err(Error::out_of_bounds(v, right_count));
        }
    }
    Ok(())
}
