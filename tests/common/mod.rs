//! Common test utilities
#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Install the test logger once; honours `RUST_LOG`.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Seeded random generator so failures are reproducible
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random adjacency lists: each (u, v) pair is an edge with probability `density`.
///
/// Edge lists are shuffled and may contain a duplicate edge, matching what
/// callers are allowed to pass.
pub fn random_adjacency(
    rng: &mut StdRng,
    left_count: usize,
    right_count: usize,
    density: f64,
) -> Vec<Vec<usize>> {
    let mut adjacency = Vec::with_capacity(left_count);
    for _ in 0..left_count {
        let mut edges: Vec<usize> = (0..right_count)
            .filter(|_| rng.random_bool(density))
            .collect();
        if !edges.is_empty() && rng.random_bool(0.1) {
            let dup = edges[rng.random_range(0..edges.len())];
            edges.push(dup);
        }
        for i in (1..edges.len()).rev() {
            let j = rng.random_range(0..=i);
            edges.swap(i, j);
        }
        adjacency.push(edges);
    }
    adjacency
}

/// Maximum matching size by exhaustive search. Only for small graphs.
pub fn brute_force_matching_size(adjacency: &[Vec<usize>], right_count: usize) -> usize {
    fn search(u: usize, adjacency: &[Vec<usize>], used: &mut [bool]) -> usize {
        if u == adjacency.len() {
            return 0;
        }
        // Leave u unmatched.
        let mut best = search(u + 1, adjacency, used);
        for &v in &adjacency[u] {
            if !used[v] {
                used[v] = true;
                best = best.max(1 + search(u + 1, adjacency, used));
                used[v] = false;
            }
        }
        best
    }

    let mut used = vec![false; right_count];
    search(0, adjacency, &mut used)
}

/// Assert that `left_to_right` is a matching of `adjacency` and return its size
pub fn assert_valid_matching(
    adjacency: &[Vec<usize>],
    right_count: usize,
    left_to_right: &[i32],
) -> usize {
    assert_eq!(left_to_right.len(), adjacency.len(), "one entry per left vertex");
    let mut taken = vec![false; right_count];
    let mut size = 0;
    for (u, &v) in left_to_right.iter().enumerate() {
        if v == -1 {
            continue;
        }
        assert!(v >= 0 && (v as usize) < right_count, "left {} matched to {}", u, v);
        let v = v as usize;
        assert!(adjacency[u].contains(&v), "left {} matched to {} without an edge", u, v);
        assert!(!taken[v], "right vertex {} matched twice", v);
        taken[v] = true;
        size += 1;
    }
    size
}
