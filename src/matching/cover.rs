//! Minimum vertex cover from a maximum matching (König's theorem).
//!
//! In a bipartite graph the size of a maximum matching equals the size of a
//! minimum vertex cover. Given a maximum matching M, let Z be the set of
//! vertices reachable from the unmatched left vertices by alternating paths
//! (non-matching edges left to right, matching edges right to left). Then
//!
//! ```text
//! cover = (U \ Z) ∪ (V ∩ Z)
//! ```
//!
//! touches every edge and has exactly |M| vertices. A cover of that size is a
//! certificate that M is maximum.

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::graph::BipartiteGraph;

use super::hopcroft_karp::MatchingResult;
use super::verify::verify_matching;

/// A vertex cover split by side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexCover {
    /// Left vertices in the cover, ascending.
    pub left: Vec<usize>,
    /// Right vertices in the cover, ascending.
    pub right: Vec<usize>,
}

impl VertexCover {
    /// Total number of vertices in the cover.
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    /// Whether the cover is empty (the graph has no edges).
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// Whether every edge of `graph` has an endpoint in the cover.
    pub fn covers(&self, graph: &BipartiteGraph) -> bool {
        let mut left = vec![false; graph.left_count()];
        let mut right = vec![false; graph.right_count()];
        for &u in &self.left {
            match left.get_mut(u) {
                Some(slot) => *slot = true,
                None => return false,
            }
        }
        for &v in &self.right {
            match right.get_mut(v) {
                Some(slot) => *slot = true,
                None => return false,
            }
        }
        graph
            .adjacency()
            .iter()
            .enumerate()
            .all(|(u, edges)| left[u] || edges.iter().all(|&v| right[v]))
    }
}

/// Compute the König vertex cover for `matching` on `graph`.
///
/// When `matching` is maximum the cover is minimum and
/// `cover.len() == matching.matching_size`. For a non-maximum matching the
/// cover comes out larger than the matching.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the result's dimensions do not fit
/// the graph, and [`Error::InvalidMatching`] if it is not a matching of it.
pub fn minimum_vertex_cover(
    graph: &BipartiteGraph,
    matching: &MatchingResult,
) -> Result<VertexCover> {
    if matching.right_to_left.len() != graph.right_count() {
        return Err(Error::invalid_argument(
            "matching",
            format!(
                "right side length {} does not match right vertex count {}",
                matching.right_to_left.len(),
                graph.right_count()
            ),
        ));
    }
    if matching.left_to_right.len() != graph.left_count() {
        return Err(Error::invalid_argument(
            "matching",
            format!(
                "left side length {} does not match left vertex count {}",
                matching.left_to_right.len(),
                graph.left_count()
            ),
        ));
    }
    verify_matching(graph, &matching.left_to_right)?;

    let mut pair_v = vec![None; graph.right_count()];
    for (u, v) in matching.pairs() {
        pair_v[v] = Some(u);
    }

    let mut left_seen = vec![false; graph.left_count()];
    let mut right_seen = vec![false; graph.right_count()];
    let mut queue = VecDeque::new();

    for u in matching.unmatched_left() {
        left_seen[u] = true;
        queue.push_back(u);
    }

    while let Some(u) = queue.pop_front() {
        for &v in graph.neighbors(u) {
            if right_seen[v] {
                continue;
            }
            right_seen[v] = true;
            if let Some(w) = pair_v[v] {
                if !left_seen[w] {
                    left_seen[w] = true;
                    queue.push_back(w);
                }
            }
        }
    }

    Ok(VertexCover {
        left: (0..graph.left_count()).filter(|&u| !left_seen[u]).collect(),
        right: (0..graph.right_count()).filter(|&v| right_seen[v]).collect(),
    })
}
