//! Compact undirected simple graph backed by `petgraph`.
//!
//! Vertices are the contiguous ids `0..order`. Construction discards
//! self-loops and duplicate edges, so every stored graph is loopless and
//! simple; all invariant code relies on that normalisation.

use std::collections::HashMap;

use petgraph::algo::{connected_components, dijkstra, is_isomorphic};
use petgraph::graph::{NodeIndex, UnGraph};

use crate::subsets;


/// A finite undirected, loopless, simple graph with vertex ids `0..order`.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    inner: UnGraph<(), ()>,
}

impl Graph {
    /// Creates an edgeless graph on `order` vertices.
    #[must_use]
    pub fn new(order: usize) -> Self {
        let mut inner = UnGraph::with_capacity(order, 0);
        for _ in 0..order {
            inner.add_node(());
        }
        Self { inner }
    }

    /// Creates a graph on `order` vertices from an edge list.
    ///
    /// Self-loops and duplicate edges are discarded; endpoints must be
    /// `< order`.
    ///
    /// # Panics
    /// Panics if an endpoint is out of range. Edge lists are produced by
    /// construction code, not end users, so a bad endpoint is a logic error.
    #[must_use]
    pub fn from_edges(order: usize, edges: &[(usize, usize)]) -> Self {
        let mut graph = Self::new(order);
        for &(u, v) in edges {
            assert!(u < order && v < order, "edge ({u}, {v}) out of range");
            graph.add_edge(u, v);
        }
        graph
    }

    /// Inserts the undirected edge `{u, v}` if it is not a loop and not
    /// already present.
    pub(crate) fn add_edge(&mut self, u: usize, v: usize) {
        if u == v {
            return;
        }
        let (a, b) = (NodeIndex::new(u), NodeIndex::new(v));
        if self.inner.find_edge(a, b).is_none() {
            self.inner.add_edge(a, b, ());
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn order(&self) -> usize {
        self.inner.node_count()
    }

    /// Number of edges.
    #[must_use]
    pub fn size(&self) -> usize {
        self.inner.edge_count()
    }

    /// Iterator over vertex ids in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = usize> + use<> {
        0..self.order()
    }

    /// Returns `true` when `{u, v}` is an edge.
    #[must_use]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.inner
            .find_edge(NodeIndex::new(u), NodeIndex::new(v))
            .is_some()
    }

    /// Neighbours of `v` in ascending order.
    #[must_use]
    pub fn neighbors(&self, v: usize) -> Vec<usize> {
        let mut out: Vec<usize> = self
            .inner
            .neighbors(NodeIndex::new(v))
            .map(NodeIndex::index)
            .collect();
        out.sort_unstable();
        out
    }

    /// Degree of `v`.
    #[must_use]
    pub fn degree(&self, v: usize) -> usize {
        self.inner.neighbors(NodeIndex::new(v)).count()
    }

    /// The closed neighbourhood `N[v]` in ascending order.
    #[must_use]
    pub fn closed_neighborhood(&self, v: usize) -> Vec<usize> {
        let mut out = self.neighbors(v);
        out.push(v);
        out.sort_unstable();
        out
    }

    /// Edge list in canonical form: each edge as `(u, v)` with `u < v`,
    /// sorted ascending.
    #[must_use]
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut out: Vec<(usize, usize)> = self
            .inner
            .edge_indices()
            .filter_map(|e| self.inner.edge_endpoints(e))
            .map(|(a, b)| {
                let (u, v) = (a.index(), b.index());
                if u < v { (u, v) } else { (v, u) }
            })
            .collect();
        out.sort_unstable();
        out
    }

    /// The subgraph induced on `verts`, with vertex `i` of the result
    /// corresponding to `verts[i]`.
    #[must_use]
    pub fn induced(&self, verts: &[usize]) -> Self {
        let mut graph = Self::new(verts.len());
        for (i, &u) in verts.iter().enumerate() {
            for (j, &v) in verts.iter().enumerate().skip(i + 1) {
                if self.has_edge(u, v) {
                    graph.add_edge(i, j);
                }
            }
        }
        graph
    }

    /// The complement graph on the same vertex set.
    #[must_use]
    pub fn complement(&self) -> Self {
        let n = self.order();
        let mut graph = Self::new(n);
        for u in 0..n {
            for v in (u + 1)..n {
                if !self.has_edge(u, v) {
                    graph.add_edge(u, v);
                }
            }
        }
        graph
    }

    /// The line graph: one vertex per edge of `self`, adjacent when the
    /// underlying edges share an endpoint. Vertex `i` of the result
    /// corresponds to `self.edges()[i]`.
    #[must_use]
    pub fn line_graph(&self) -> Self {
        let edges = self.edges();
        let mut graph = Self::new(edges.len());
        for (i, &(a, b)) in edges.iter().enumerate() {
            for (j, &(c, d)) in edges.iter().enumerate().skip(i + 1) {
                if a == c || a == d || b == c || b == d {
                    graph.add_edge(i, j);
                }
            }
        }
        graph
    }

    /// BFS distances from `v`; `None` for unreachable vertices.
    #[must_use]
    pub fn distances_from(&self, v: usize) -> Vec<Option<usize>> {
        let reached: HashMap<NodeIndex, usize> =
            dijkstra(&self.inner, NodeIndex::new(v), None, |_| 1usize);
        (0..self.order())
            .map(|u| reached.get(&NodeIndex::new(u)).copied())
            .collect()
    }

    /// Returns `true` when the graph is connected. The empty graph is not
    /// considered connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.order() > 0 && connected_components(&self.inner) == 1
    }

    /// Connected components as sorted vertex lists, ordered by their
    /// smallest vertex.
    #[must_use]
    pub fn components(&self) -> Vec<Vec<usize>> {
        let keep = vec![true; self.order()];
        self.components_within(&keep)
    }

    /// Connected components of the subgraph induced on the vertices whose
    /// `keep` flag is set.
    ///
    /// # Panics
    /// Panics if `keep.len()` differs from the graph order; callers build
    /// the mask from `order()` so a mismatch is a logic error.
    #[must_use]
    pub fn components_within(&self, keep: &[bool]) -> Vec<Vec<usize>> {
        assert_eq!(keep.len(), self.order(), "mask length must equal order");
        let mut seen = vec![false; self.order()];
        let mut out = Vec::new();
        for start in 0..self.order() {
            if !keep[start] || seen[start] {
                continue;
            }
            let mut component = Vec::new();
            let mut queue = vec![start];
            seen[start] = true;
            while let Some(u) = queue.pop() {
                component.push(u);
                for w in self.neighbors(u) {
                    if keep[w] && !seen[w] {
                        seen[w] = true;
                        queue.push(w);
                    }
                }
            }
            component.sort_unstable();
            out.push(component);
        }
        out
    }

    /// Returns `true` when `self` and `other` are isomorphic.
    #[must_use]
    pub fn is_isomorphic_to(&self, other: &Self) -> bool {
        is_isomorphic(&self.inner, &other.inner)
    }

    /// Returns `true` when some induced subgraph of `self` is isomorphic
    /// to `pattern`. Scans every vertex subset of the pattern's order.
    #[must_use]
    pub fn contains_induced(&self, pattern: &Self) -> bool {
        let k = pattern.order();
        if k > self.order() {
            return false;
        }
        subsets::combinations(self.order(), k)
            .any(|subset| self.induced(&subset).is_isomorphic_to(pattern))
    }

    /// Borrow the underlying `petgraph` storage for algorithms that want
    /// the raw graph.
    #[must_use]
    pub const fn inner(&self) -> &UnGraph<(), ()> {
        &self.inner
    }
}
