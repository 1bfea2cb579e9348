//! Traits for bipartite matching algorithms.

use crate::error::Result;
use crate::graph::BipartiteGraph;

use super::hopcroft_karp::MatchingResult;

/// Trait for maximum cardinality matching algorithms.
///
/// Implementors only provide [`maximum_matching`](Self::maximum_matching);
/// the sparse matrix entry points are derived from it by treating columns as
/// left vertices and rows as right vertices.
pub trait BipartiteMatching {
    /// Compute a maximum matching of `graph`.
    fn maximum_matching(&self, graph: &BipartiteGraph) -> Result<MatchingResult>;

    /// Compute maximum transversal of a CSC sparsity pattern.
    ///
    /// # Arguments
    ///
    /// * `n_rows` - Number of rows in the matrix
    /// * `n_cols` - Number of columns in the matrix
    /// * `col_ptrs` - CSC column pointers (length n_cols + 1)
    /// * `row_indices` - CSC row indices
    ///
    /// # Returns
    ///
    /// Tuple of (col_to_row, row_to_col) where:
    /// - `col_to_row[j]` = row matched to column j (or -1 if unmatched)
    /// - `row_to_col[i]` = column matched to row i (or -1 if unmatched)
    fn maximum_transversal(
        &self,
        n_rows: usize,
        n_cols: usize,
        col_ptrs: &[i64],
        row_indices: &[i64],
    ) -> Result<(Vec<i32>, Vec<i32>)> {
        let graph = BipartiteGraph::from_csc(n_rows, n_cols, col_ptrs, row_indices)?;
        let result = self.maximum_matching(&graph)?;
        Ok((result.left_to_right, result.right_to_left))
    }

    /// Compute structural rank of a CSC sparsity pattern.
    ///
    /// The structural rank is the maximum number of nonzeros that can be placed
    /// on the diagonal by row and column permutations. It equals the size of
    /// the maximum matching, from 0 to min(n_rows, n_cols).
    fn structural_rank(
        &self,
        n_rows: usize,
        n_cols: usize,
        col_ptrs: &[i64],
        row_indices: &[i64],
    ) -> Result<usize> {
        let graph = BipartiteGraph::from_csc(n_rows, n_cols, col_ptrs, row_indices)?;
        Ok(self.maximum_matching(&graph)?.matching_size)
    }
}
