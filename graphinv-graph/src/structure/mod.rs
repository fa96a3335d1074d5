//! Structural predicates: connectivity classes, bipartiteness, chordality,
//! asteroidal-triple freeness, forbidden-subgraph freeness, and the
//! decomposition-based tests in [`blocks`] and [`planarity`].

use petgraph::algo::is_bipartite_undirected;
use petgraph::graph::NodeIndex;

use crate::{Graph, generators};

pub mod blocks;
pub mod planarity;

#[cfg(test)]
mod tests;

/// Returns `true` when every vertex pair is adjacent.
#[must_use]
pub fn is_complete(graph: &Graph) -> bool {
    let n = graph.order();
    graph.size() == n * n.saturating_sub(1) / 2
}

/// Returns `true` when the graph is connected and acyclic.
#[must_use]
pub fn is_tree(graph: &Graph) -> bool {
    graph.is_connected() && graph.size() + 1 == graph.order()
}

/// Returns `true` when the graph is connected and every degree is even.
#[must_use]
pub fn is_eulerian(graph: &Graph) -> bool {
    graph.is_connected() && graph.vertices().all(|v| graph.degree(v) % 2 == 0)
}

/// Returns `true` when the graph admits a proper 2-colouring. Checked per
/// connected component; the empty graph is bipartite.
#[must_use]
pub fn is_bipartite(graph: &Graph) -> bool {
    graph
        .components()
        .iter()
        .all(|component| is_bipartite_undirected(graph.inner(), NodeIndex::new(component[0])))
}

/// The number of triangles, each counted once.
#[must_use]
pub fn triangle_count(graph: &Graph) -> usize {
    let n = graph.order();
    let mut count = 0;
    for u in 0..n {
        for v in (u + 1)..n {
            if !graph.has_edge(u, v) {
                continue;
            }
            for w in (v + 1)..n {
                if graph.has_edge(u, w) && graph.has_edge(v, w) {
                    count += 1;
                }
            }
        }
    }
    count
}

/// Returns `true` when the graph has no triangle.
#[must_use]
pub fn is_triangle_free(graph: &Graph) -> bool {
    triangle_count(graph) == 0
}

/// Returns `true` when the graph has no induced claw (`K_{1,3}`).
#[must_use]
pub fn is_claw_free(graph: &Graph) -> bool {
    !graph.contains_induced(&generators::star(3))
}

/// Returns `true` when the graph has no induced bull (a triangle with two
/// pendant horns at distinct vertices).
#[must_use]
pub fn is_bull_free(graph: &Graph) -> bool {
    let bull = Graph::from_edges(5, &[(0, 1), (1, 2), (2, 0), (1, 3), (2, 4)]);
    !graph.contains_induced(&bull)
}

/// Returns `true` when the graph is chordal, via maximum cardinality
/// search followed by a perfect-elimination-ordering check.
#[must_use]
pub fn is_chordal(graph: &Graph) -> bool {
    let n = graph.order();
    if n == 0 {
        return true;
    }

    // Maximum cardinality search produces an ordering that is a perfect
    // elimination ordering iff the graph is chordal.
    let mut weight = vec![0usize; n];
    let mut numbered = vec![false; n];
    let mut order = Vec::with_capacity(n);
    for _ in 0..n {
        let Some(v) = (0..n)
            .filter(|&v| !numbered[v])
            .max_by_key(|&v| weight[v])
        else {
            break;
        };
        numbered[v] = true;
        order.push(v);
        for u in graph.neighbors(v) {
            if !numbered[u] {
                weight[u] += 1;
            }
        }
    }
    order.reverse();

    // order is now an elimination ordering; position[v] = elimination rank.
    let mut position = vec![0usize; n];
    for (i, &v) in order.iter().enumerate() {
        position[v] = i;
    }
    for &v in &order {
        let later: Vec<usize> = graph
            .neighbors(v)
            .into_iter()
            .filter(|&u| position[u] > position[v])
            .collect();
        let Some(&first) = later.iter().min_by_key(|&&u| position[u]) else {
            continue;
        };
        for &u in later.iter().filter(|&&u| u != first) {
            if !graph.has_edge(first, u) {
                return false;
            }
        }
    }
    true
}

/// Returns `true` when the graph has no asteroidal triple: three vertices
/// such that every pair is joined by a path avoiding the closed
/// neighbourhood of the third.
#[must_use]
pub fn is_at_free(graph: &Graph) -> bool {
    let n = graph.order();
    // reach[z][u][v]: u and v lie in one component of G - N[z].
    let mut same_component = vec![vec![vec![false; n]; n]; n];
    for z in 0..n {
        let mut keep = vec![true; n];
        for u in graph.closed_neighborhood(z) {
            keep[u] = false;
        }
        for component in graph.components_within(&keep) {
            for (i, &u) in component.iter().enumerate() {
                for &v in component.iter().skip(i + 1) {
                    same_component[z][u][v] = true;
                    same_component[z][v][u] = true;
                }
            }
        }
    }
    for u in 0..n {
        for v in (u + 1)..n {
            for w in (v + 1)..n {
                if same_component[w][u][v]
                    && same_component[v][u][w]
                    && same_component[u][v][w]
                {
                    return false;
                }
            }
        }
    }
    true
}
