//! Matching many independent graphs.
//!
//! Every graph gets its own [`Matcher`](super::hopcroft_karp::Matcher), so
//! jobs share no state. With the `rayon` feature the jobs run on the rayon
//! thread pool; results are identical to the sequential path and come back in
//! input order.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::error::Result;
use crate::graph::BipartiteGraph;

use super::hopcroft_karp::{HopcroftKarpOptions, MatchingResult, hopcroft_karp};

/// Compute a maximum matching for each graph in `graphs`.
///
/// Fails with the first error in input order.
pub fn match_all(
    graphs: &[BipartiteGraph],
    options: &HopcroftKarpOptions,
) -> Result<Vec<MatchingResult>> {
    #[cfg(feature = "rayon")]
    {
        if graphs.len() > 1 {
            return graphs
                .par_iter()
                .map(|graph| hopcroft_karp(graph, options))
                .collect();
        }
    }

    graphs
        .iter()
        .map(|graph| hopcroft_karp(graph, options))
        .collect()
}
