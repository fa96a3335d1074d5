//! Exact proper vertex colouring by backtracking.

use crate::Graph;

use super::independence::clique_number;

fn colorable(
    adjacency: &[Vec<usize>],
    order: &[usize],
    colors: &mut [Option<usize>],
    idx: usize,
    k: usize,
    used: usize,
) -> bool {
    let Some(&v) = order.get(idx) else {
        return true;
    };
    // Allowing at most one fresh colour per step breaks colour symmetry.
    for color in 0..k.min(used + 1) {
        let clash = adjacency[v].iter().any(|&u| colors[u] == Some(color));
        if clash {
            continue;
        }
        colors[v] = Some(color);
        let next_used = used.max(color + 1);
        if colorable(adjacency, order, colors, idx + 1, k, next_used) {
            return true;
        }
        colors[v] = None;
    }
    false
}

/// The chromatic number, computed by backtracking k-colouring upward from
/// the clique-number lower bound.
#[must_use]
pub fn chromatic_number(graph: &Graph) -> usize {
    let n = graph.order();
    if n == 0 {
        return 0;
    }
    let adjacency: Vec<Vec<usize>> = graph.vertices().map(|v| graph.neighbors(v)).collect();
    // Colouring high-degree vertices first fails fast.
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_unstable_by_key(|&v| std::cmp::Reverse(adjacency[v].len()));
    let lower = clique_number(graph).max(1);
    for k in lower..=n {
        let mut colors = vec![None; n];
        if colorable(&adjacency, &order, &mut colors, 0, k, 0) {
            return k;
        }
    }
    n
}
