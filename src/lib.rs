//! # hkmatch
//!
//! **Maximum cardinality matching in unweighted bipartite graphs.**
//!
//! hkmatch implements the Hopcroft-Karp algorithm, which finds a maximum
//! matching in O(E√V) time by augmenting along a maximal set of vertex-disjoint
//! shortest augmenting paths per phase.
//!
//! ## Features
//!
//! - **Raw entry point**: [`matching::get_matching`] on plain adjacency lists
//! - **Validated graphs**: [`graph::BipartiteGraph`] built from edge lists,
//!   edge pairs, or a CSC sparsity pattern
//! - **Certificates**: matching verification and König vertex covers
//! - **Sparse matrices**: maximum transversal and structural rank
//! - **Batching**: many graphs at once, parallel with `rayon`
//!
//! ## Quick Start
//!
//! ```rust
//! use hkmatch::prelude::*;
//!
//! let adjacency: Vec<Vec<usize>> = vec![vec![0, 1], vec![0, 4], vec![2, 3], vec![0, 4], vec![1, 3]];
//! assert_eq!(get_matching(&adjacency, 5), vec![1, 4, 2, 0, 3]);
//!
//! let graph = BipartiteGraph::new(adjacency, 5)?;
//! let result = hopcroft_karp(&graph, &HopcroftKarpOptions::default())?;
//! assert!(result.is_perfect());
//! # Ok::<(), hkmatch::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): Parallel batch matching
//!
//! ## Logging
//!
//! Phase summaries go to the [`log`] facade at `trace` level and per-call
//! summaries at `debug` level. No logger is installed by the library.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod error;
pub mod graph;
pub mod matching;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::graph::BipartiteGraph;
    pub use crate::matching::{
        BipartiteMatching, HopcroftKarp, HopcroftKarpOptions, MatchingResult, UNMATCHED,
        VertexCover, get_matching, hopcroft_karp, match_all, minimum_vertex_cover,
        verify_matching,
    };
}
