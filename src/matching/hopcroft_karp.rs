//! Hopcroft-Karp algorithm for maximum bipartite matching.
//!
//! Finds a maximum cardinality matching in a bipartite graph in O(E√V) time.
//!
//! # Algorithm Overview
//!
//! The algorithm alternates between two phases:
//!
//! 1. **BFS phase**: Layer the left vertices by their distance from the set of
//!    unmatched left vertices, stopping at the first layer that reaches an
//!    unmatched right vertex (the NIL sentinel).
//!
//! 2. **DFS phase**: From every unmatched left vertex, follow only edges that
//!    advance exactly one layer and augment along the first path found. Dead
//!    ends are removed from the layering, so the paths found in one phase are
//!    vertex-disjoint.
//!
//! This is repeated until the BFS no longer reaches NIL.
//!
//! # Determinism
//!
//! BFS seeds left vertices in index order and both phases scan edge lists in
//! the order given, so identical inputs always produce the identical matching,
//! even when several maximum matchings exist.
//!
//! # Complexity
//!
//! - Time: O(E√V) where E = number of edges, V = |U| + |V|
//! - Space: O(V) for layer, matching, queue and stack buffers
//!
//! # References
//!
//! Hopcroft, J. E., & Karp, R. M. (1973). "An n^(5/2) algorithm for maximum
//! matchings in bipartite graphs." SIAM Journal on Computing, 2(4), 225-231.

use std::collections::VecDeque;

use log::{debug, trace};

use crate::error::Result;
use crate::graph::BipartiteGraph;

use super::traits::BipartiteMatching;
use super::verify::verify_matching;

/// Marker for an unmatched vertex in the signed output vectors.
pub const UNMATCHED: i32 = -1;

/// Out-of-band sentinel for "unmatched" in the internal pair arrays.
const NIL: usize = usize::MAX;
/// Layer of a vertex the current BFS did not reach.
const INF: u32 = u32::MAX;

/// Options for [`hopcroft_karp`].
#[derive(Debug, Clone, Default)]
pub struct HopcroftKarpOptions {
    /// Stop after this many augmenting phases.
    ///
    /// The result is still a valid matching, but it is only guaranteed to be
    /// maximum when the limit is not hit. After k phases the matching is at
    /// least k/(k+1) of the maximum.
    /// Default: None (run to completion)
    pub max_rounds: Option<usize>,

    /// Re-check the result with [`verify_matching`] before returning it.
    /// Default: false
    pub check_result: bool,
}

/// Result of maximum matching computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingResult {
    /// For each left vertex u, the right vertex matched to u, or -1 if unmatched.
    pub left_to_right: Vec<i32>,
    /// For each right vertex v, the left vertex matched to v, or -1 if unmatched.
    pub right_to_left: Vec<i32>,
    /// Size of the matching (number of matched pairs).
    pub matching_size: usize,
    /// Number of BFS/DFS phases that augmented the matching.
    pub rounds: usize,
}

impl MatchingResult {
    /// Matched `(left, right)` pairs in left vertex order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.left_to_right
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != UNMATCHED)
            .map(|(u, &v)| (u, v as usize))
    }

    /// Whether every vertex on both sides is matched.
    pub fn is_perfect(&self) -> bool {
        self.matching_size == self.left_to_right.len()
            && self.matching_size == self.right_to_left.len()
    }

    /// Left vertices left unmatched, in index order.
    pub fn unmatched_left(&self) -> Vec<usize> {
        unmatched(&self.left_to_right)
    }

    /// Right vertices left unmatched, in index order.
    pub fn unmatched_right(&self) -> Vec<usize> {
        unmatched(&self.right_to_left)
    }
}

fn unmatched(pairs: &[i32]) -> Vec<usize> {
    pairs
        .iter()
        .enumerate()
        .filter(|&(_, &p)| p == UNMATCHED)
        .map(|(i, _)| i)
        .collect()
}

fn to_signed(index: usize) -> i32 {
    if index == NIL { UNMATCHED } else { index as i32 }
}

/// DFS call frame: the left vertex and the position of the edge being tried.
#[derive(Debug, Clone, Copy)]
struct Frame {
    u: usize,
    cursor: usize,
}

/// Matching state for one Hopcroft-Karp computation.
///
/// Owns the pair arrays, the layering and the traversal buffers, and reuses
/// them across phases. Each computation needs its own `Matcher`; nothing is
/// shared between instances.
///
/// Right indices are not validated. An edge to a right vertex outside
/// `0..right_count` panics with an index out of bounds error when the edge is
/// first scanned. Use [`BipartiteGraph`] for a validated entry point.
#[derive(Debug)]
pub struct Matcher<'a, A> {
    adjacency: &'a [A],
    /// pair_u[u] = right vertex matched to u, NIL if unmatched
    pair_u: Vec<usize>,
    /// pair_v[v] = left vertex matched to v, NIL if unmatched
    pair_v: Vec<usize>,
    /// BFS layer of each left vertex
    dist: Vec<u32>,
    /// BFS layer of the NIL sentinel
    nil_dist: u32,
    queue: VecDeque<usize>,
    stack: Vec<Frame>,
    matching_size: usize,
    rounds: usize,
}

impl<'a, A: AsRef<[usize]>> Matcher<'a, A> {
    /// Create a matcher with an empty matching.
    pub fn new(adjacency: &'a [A], right_count: usize) -> Self {
        let n = adjacency.len();
        Self {
            adjacency,
            pair_u: vec![NIL; n],
            pair_v: vec![NIL; right_count],
            dist: vec![INF; n],
            nil_dist: INF,
            queue: VecDeque::with_capacity(n),
            stack: Vec::new(),
            matching_size: 0,
            rounds: 0,
        }
    }

    /// Number of matched pairs so far.
    pub fn matching_size(&self) -> usize {
        self.matching_size
    }

    /// Number of phases that augmented the matching so far.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Run phases until no augmenting path remains, or `max_rounds` phases
    /// have augmented the matching.
    pub fn run(&mut self, max_rounds: Option<usize>) {
        while max_rounds.is_none_or(|limit| self.rounds < limit) {
            if !self.run_round() {
                break;
            }
        }
    }

    /// Run one BFS/DFS phase.
    ///
    /// Returns false if no augmenting path exists, in which case the current
    /// matching is maximum and nothing was changed.
    pub fn run_round(&mut self) -> bool {
        if !self.bfs() {
            return false;
        }

        let mut augmented = 0usize;
        for u in 0..self.pair_u.len() {
            if self.pair_u[u] == NIL && self.dfs(u) {
                augmented += 1;
            }
        }

        self.matching_size += augmented;
        self.rounds += 1;
        trace!(
            "round {}: shortest augmenting path length {}, augmented {} (size {})",
            self.rounds,
            2 * self.nil_dist - 1,
            augmented,
            self.matching_size
        );
        true
    }

    /// Current matching, indexed by left vertex, with -1 for unmatched.
    pub fn left_to_right(&self) -> Vec<i32> {
        self.pair_u.iter().map(|&v| to_signed(v)).collect()
    }

    /// Current matching, indexed by right vertex, with -1 for unmatched.
    pub fn right_to_left(&self) -> Vec<i32> {
        self.pair_v.iter().map(|&u| to_signed(u)).collect()
    }

    /// Finish the computation and return the matching.
    pub fn into_result(self) -> MatchingResult {
        MatchingResult {
            left_to_right: self.left_to_right(),
            right_to_left: self.right_to_left(),
            matching_size: self.matching_size,
            rounds: self.rounds,
        }
    }

    fn layer(&self, u: usize) -> u32 {
        if u == NIL { self.nil_dist } else { self.dist[u] }
    }

    /// BFS phase: layer left vertices from the unmatched ones.
    ///
    /// Returns true if at least one augmenting path exists.
    fn bfs(&mut self) -> bool {
        let adjacency = self.adjacency;
        self.queue.clear();

        for u in 0..self.pair_u.len() {
            if self.pair_u[u] == NIL {
                self.dist[u] = 0;
                self.queue.push_back(u);
            } else {
                self.dist[u] = INF;
            }
        }
        self.nil_dist = INF;

        while let Some(u) = self.queue.pop_front() {
            // Nothing beyond the shortest path to NIL can be on a shortest path.
            if self.dist[u] >= self.nil_dist {
                continue;
            }
            let next_layer = self.dist[u] + 1;
            for &v in adjacency[u].as_ref() {
                let next = self.pair_v[v];
                if next == NIL {
                    if self.nil_dist == INF {
                        self.nil_dist = next_layer;
                    }
                } else if self.dist[next] == INF {
                    self.dist[next] = next_layer;
                    self.queue.push_back(next);
                }
            }
        }

        self.nil_dist != INF
    }

    /// DFS phase: find one shortest augmenting path from `root` and apply it.
    ///
    /// Only edges into the next layer are followed. A vertex whose edges are
    /// all exhausted gets layer INF so no later search in this phase enters it.
    fn dfs(&mut self, root: usize) -> bool {
        let adjacency = self.adjacency;
        self.stack.clear();
        self.stack.push(Frame { u: root, cursor: 0 });

        while let Some(&Frame { u, cursor }) = self.stack.last() {
            let edges = adjacency[u].as_ref();

            if cursor == edges.len() {
                self.dist[u] = INF;
                self.stack.pop();
                if let Some(parent) = self.stack.last_mut() {
                    parent.cursor += 1;
                }
                continue;
            }

            let next = self.pair_v[edges[cursor]];
            if self.layer(next) != self.dist[u] + 1 {
                if let Some(top) = self.stack.last_mut() {
                    top.cursor += 1;
                }
                continue;
            }

            if next != NIL {
                self.stack.push(Frame { u: next, cursor: 0 });
                continue;
            }

            // Reached NIL: flip every edge on the path, innermost first.
            while let Some(Frame { u, cursor }) = self.stack.pop() {
                let v = adjacency[u].as_ref()[cursor];
                self.pair_u[u] = v;
                self.pair_v[v] = u;
            }
            return true;
        }

        false
    }
}

/// Compute a maximum matching from raw adjacency lists.
///
/// `adjacency[u]` lists the right vertices adjacent to left vertex `u`. The
/// result has one entry per left vertex: the matched right vertex, or -1.
///
/// # Panics
///
/// Panics if any right index is not below `right_count`.
///
/// # Example
///
/// ```
/// use hkmatch::matching::get_matching;
///
/// let adjacency: Vec<Vec<usize>> = vec![vec![0, 2], vec![0, 3], vec![1, 2], vec![3], vec![2, 3]];
/// assert_eq!(get_matching(&adjacency, 5), vec![0, 3, 1, -1, 2]);
/// ```
pub fn get_matching<A: AsRef<[usize]>>(adjacency: &[A], right_count: usize) -> Vec<i32> {
    let mut matcher = Matcher::new(adjacency, right_count);
    matcher.run(None);
    debug!(
        "matched {} of {} left / {} right vertices in {} rounds",
        matcher.matching_size(),
        adjacency.len(),
        right_count,
        matcher.rounds()
    );
    matcher.left_to_right()
}

/// Compute a maximum matching of a validated graph.
///
/// # Errors
///
/// Only fails when `options.check_result` is set and the result does not pass
/// [`verify_matching`].
pub fn hopcroft_karp(
    graph: &BipartiteGraph,
    options: &HopcroftKarpOptions,
) -> Result<MatchingResult> {
    let mut matcher = Matcher::new(graph.adjacency(), graph.right_count());
    matcher.run(options.max_rounds);
    let result = matcher.into_result();

    if options.check_result {
        verify_matching(graph, &result.left_to_right)?;
    }

    debug!(
        "hopcroft-karp: {} left, {} right, {} edges -> size {} in {} rounds",
        graph.left_count(),
        graph.right_count(),
        graph.edge_count(),
        result.matching_size,
        result.rounds
    );
    Ok(result)
}

/// Hopcroft-Karp as a [`BipartiteMatching`] implementation.
#[derive(Debug, Clone, Default)]
pub struct HopcroftKarp {
    /// Options applied to every call
    pub options: HopcroftKarpOptions,
}

impl HopcroftKarp {
    /// Create a matcher with the given options.
    pub fn new(options: HopcroftKarpOptions) -> Self {
        Self { options }
    }
}

impl BipartiteMatching for HopcroftKarp {
    fn maximum_matching(&self, graph: &BipartiteGraph) -> Result<MatchingResult> {
        hopcroft_karp(graph, &self.options)
    }
}
