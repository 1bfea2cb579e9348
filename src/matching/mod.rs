//! Maximum cardinality bipartite matching.
//!
//! # Algorithms
//!
//! - **Hopcroft-Karp**: O(E√V) maximum cardinality matching
//!
//! # Companions
//!
//! - **Verification**: check that a vector of pairs is a matching of a graph
//! - **König cover**: minimum vertex cover, a certificate of maximality
//! - **Maximum transversal**: matching on the pattern of a CSC sparse matrix
//! - **Batch**: many independent graphs at once, parallel with `rayon`

pub mod batch;
pub mod cover;
pub mod hopcroft_karp;
pub mod traits;
pub mod transversal;
pub mod verify;

pub use batch::match_all;
pub use cover::{VertexCover, minimum_vertex_cover};
pub use hopcroft_karp::{
    HopcroftKarp, HopcroftKarpOptions, Matcher, MatchingResult, UNMATCHED, get_matching,
    hopcroft_karp,
};
pub use traits::BipartiteMatching;
pub use transversal::{maximum_transversal, structural_rank};
pub use verify::verify_matching;
