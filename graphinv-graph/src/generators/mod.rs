//! Small named graph constructors used by tests and fixed catalogues.

use crate::Graph;

#[cfg(test)]
mod tests;

/// The edgeless graph on `n` vertices.
#[must_use]
pub fn empty(n: usize) -> Graph {
    Graph::new(n)
}

/// The path `P_n` with edges `0-1, 1-2, …`.
#[must_use]
pub fn path(n: usize) -> Graph {
    let mut graph = Graph::new(n);
    for v in 1..n {
        graph.add_edge(v - 1, v);
    }
    graph
}

/// The cycle `C_n` (requires `n >= 3` to be a proper cycle; smaller `n`
/// degenerates to a path).
#[must_use]
pub fn cycle(n: usize) -> Graph {
    let mut graph = path(n);
    if n >= 3 {
        graph.add_edge(n - 1, 0);
    }
    graph
}

/// The complete graph `K_n`.
#[must_use]
pub fn complete(n: usize) -> Graph {
    let mut graph = Graph::new(n);
    for u in 0..n {
        for v in (u + 1)..n {
            graph.add_edge(u, v);
        }
    }
    graph
}

/// The complete bipartite graph `K_{a,b}` with parts `0..a` and `a..a+b`.
#[must_use]
pub fn complete_bipartite(a: usize, b: usize) -> Graph {
    let mut graph = Graph::new(a + b);
    for u in 0..a {
        for v in a..(a + b) {
            graph.add_edge(u, v);
        }
    }
    graph
}

/// The star `K_{1,n}` with centre `0` and `n` leaves.
#[must_use]
pub fn star(n: usize) -> Graph {
    complete_bipartite(1, n)
}
