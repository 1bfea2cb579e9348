//! Maximum transversal of sparse matrix patterns.
//!
//! The bipartite graph of a sparse matrix has one left vertex per column, one
//! right vertex per row, and an edge for every stored entry. A maximum matching
//! of that graph is a maximum transversal: the largest set of entries that a
//! row permutation can move onto the diagonal.

use crate::error::Result;

use super::hopcroft_karp::HopcroftKarp;
use super::traits::BipartiteMatching;

/// Compute maximum transversal (row permutation for diagonal nonzeros).
///
/// # Arguments
///
/// * `n_rows` - Number of rows in the matrix
/// * `n_cols` - Number of columns in the matrix
/// * `col_ptrs` - CSC column pointers
/// * `row_indices` - CSC row indices
///
/// # Returns
///
/// Tuple of (col_to_row, row_to_col, structural_rank) where:
/// - `col_to_row[j]` = row index matched to column j (-1 if unmatched)
/// - `row_to_col[i]` = column index matched to row i (-1 if unmatched)
/// - `structural_rank` = size of maximum matching
pub fn maximum_transversal(
    n_rows: usize,
    n_cols: usize,
    col_ptrs: &[i64],
    row_indices: &[i64],
) -> Result<(Vec<i32>, Vec<i32>, usize)> {
    let (col_to_row, row_to_col) =
        HopcroftKarp::default().maximum_transversal(n_rows, n_cols, col_ptrs, row_indices)?;
    let rank = col_to_row.iter().filter(|&&i| i >= 0).count();
    Ok((col_to_row, row_to_col, rank))
}

/// Compute structural rank of a sparse matrix pattern.
pub fn structural_rank(
    n_rows: usize,
    n_cols: usize,
    col_ptrs: &[i64],
    row_indices: &[i64],
) -> Result<usize> {
    HopcroftKarp::default().structural_rank(n_rows, n_cols, col_ptrs, row_indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_transversal_empty() {
        let (col_to_row, row_to_col, rank) = maximum_transversal(0, 0, &[0], &[]).unwrap();

        assert!(col_to_row.is_empty());
        assert!(row_to_col.is_empty());
        assert_eq!(rank, 0);
    }

    #[test]
    fn test_transversal_diagonal() {
        let col_ptrs = vec![0i64, 1, 2, 3];
        let row_indices = vec![0i64, 1, 2];

        let (col_to_row, row_to_col, rank) =
            maximum_transversal(3, 3, &col_ptrs, &row_indices).unwrap();

        assert_eq!(rank, 3);
        assert_eq!(col_to_row, vec![0, 1, 2]);
        assert_eq!(row_to_col, vec![0, 1, 2]);
    }

    #[test]
    fn test_transversal_permutation_needed() {
        // [. x]
        // [x x]
        // Column 0 can only match row 1, so column 1 must take row 0.
        let col_ptrs = vec![0i64, 1, 3];
        let row_indices = vec![1i64, 0, 1];

        let (col_to_row, row_to_col, rank) =
            maximum_transversal(2, 2, &col_ptrs, &row_indices).unwrap();

        assert_eq!(rank, 2);
        assert_eq!(col_to_row, vec![1, 0]);
        assert_eq!(row_to_col, vec![1, 0]);
    }

    #[test]
    fn test_transversal_rectangular_more_cols() {
        // Column 0: row 0
        // Column 1: row 1
        // Column 2: empty
        // Column 3: row 0
        let col_ptrs = vec![0i64, 1, 2, 2, 3];
        let row_indices = vec![0i64, 1, 0];

        let (col_to_row, _, rank) = maximum_transversal(2, 4, &col_ptrs, &row_indices).unwrap();

        assert_eq!(rank, 2);
        assert_eq!(col_to_row, vec![0, 1, -1, -1]);
    }

    #[test]
    fn test_structural_rank_singular() {
        // [x .]
        // [x .]
        let col_ptrs = vec![0i64, 2, 2];
        let row_indices = vec![0i64, 1];

        assert_eq!(structural_rank(2, 2, &col_ptrs, &row_indices).unwrap(), 1);
    }

    #[test]
    fn test_structural_rank_full() {
        // [x x]
        // [x x]
        let col_ptrs = vec![0i64, 2, 4];
        let row_indices = vec![0i64, 1, 0, 1];

        assert_eq!(structural_rank(2, 2, &col_ptrs, &row_indices).unwrap(), 2);
    }

    #[test]
    fn test_transversal_rejects_bad_pattern() {
        let err = maximum_transversal(2, 2, &[0, 1, 2], &[0, 7]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { arg: "row_indices", .. }));
    }
}
