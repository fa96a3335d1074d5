//! Clique and independence invariants via Bron–Kerbosch with pivoting.

use crate::Graph;

fn bron_kerbosch(
    adjacency: &[Vec<bool>],
    clique_len: usize,
    candidates: &[usize],
    excluded: &[usize],
    best: &mut usize,
) {
    if candidates.is_empty() && excluded.is_empty() {
        *best = (*best).max(clique_len);
        return;
    }
    // Prune: even taking every candidate cannot beat the incumbent.
    if clique_len + candidates.len() <= *best {
        return;
    }
    let pivot = candidates
        .iter()
        .chain(excluded.iter())
        .copied()
        .max_by_key(|&u| candidates.iter().filter(|&&v| adjacency[u][v]).count());
    let Some(pivot) = pivot else {
        return;
    };
    let branches: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&v| !adjacency[pivot][v])
        .collect();
    let mut remaining: Vec<usize> = candidates.to_vec();
    let mut blocked: Vec<usize> = excluded.to_vec();
    for v in branches {
        let next_candidates: Vec<usize> = remaining
            .iter()
            .copied()
            .filter(|&u| adjacency[v][u])
            .collect();
        let next_excluded: Vec<usize> = blocked
            .iter()
            .copied()
            .filter(|&u| adjacency[v][u])
            .collect();
        bron_kerbosch(
            adjacency,
            clique_len + 1,
            &next_candidates,
            &next_excluded,
            best,
        );
        remaining.retain(|&u| u != v);
        blocked.push(v);
    }
}

/// The clique number: the order of a largest complete subgraph.
#[must_use]
pub fn clique_number(graph: &Graph) -> usize {
    let n = graph.order();
    if n == 0 {
        return 0;
    }
    let mut adjacency = vec![vec![false; n]; n];
    for (u, v) in graph.edges() {
        adjacency[u][v] = true;
        adjacency[v][u] = true;
    }
    let vertices: Vec<usize> = (0..n).collect();
    let mut best = 0;
    bron_kerbosch(&adjacency, 0, &vertices, &[], &mut best);
    best
}

/// The independence number: the clique number of the complement.
#[must_use]
pub fn independence_number(graph: &Graph) -> usize {
    clique_number(&graph.complement())
}

/// The vertex cover number `n - alpha(G)`.
#[must_use]
pub fn vertex_cover_number(graph: &Graph) -> usize {
    graph.order() - independence_number(graph)
}
