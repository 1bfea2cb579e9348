//! Independent validity check for matchings.

use crate::error::{Error, Result};
use crate::graph::BipartiteGraph;

use super::hopcroft_karp::UNMATCHED;

/// Check that `left_to_right` is a matching of `graph`.
///
/// `left_to_right[u]` must be -1 or a right vertex adjacent to `u`, and no
/// right vertex may appear twice. Maximality is not checked; see
/// [`minimum_vertex_cover`](super::cover::minimum_vertex_cover) for a
/// certificate of that.
///
/// Returns the number of matched pairs.
pub fn verify_matching(graph: &BipartiteGraph, left_to_right: &[i32]) -> Result<usize> {
    if left_to_right.len() != graph.left_count() {
        return Err(Error::invalid_matching(format!(
            "length {} does not match left vertex count {}",
            left_to_right.len(),
            graph.left_count()
        )));
    }

    let mut owner = vec![None; graph.right_count()];
    let mut size = 0usize;

    for (u, &v) in left_to_right.iter().enumerate() {
        if v == UNMATCHED {
            continue;
        }
        if v < 0 || v as usize >= graph.right_count() {
            return Err(Error::invalid_matching(format!(
                "left vertex {} matched to {}, outside 0..{}",
                u,
                v,
                graph.right_count()
            )));
        }
        let v = v as usize;
        if !graph.has_edge(u, v) {
            return Err(Error::invalid_matching(format!(
                "left vertex {} matched to right vertex {} without an edge",
                u, v
            )));
        }
        if let Some(first) = owner[v].replace(u) {
            return Err(Error::invalid_matching(format!(
                "right vertex {} matched to both {} and {}",
                v, first, u
            )));
        }
        size += 1;
    }

    Ok(size)
}
