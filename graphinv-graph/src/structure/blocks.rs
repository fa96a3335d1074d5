//! Biconnected components by the Hopcroft–Tarjan edge-stack DFS.

use crate::Graph;

struct BlockDfs<'a> {
    graph: &'a Graph,
    disc: Vec<Option<usize>>,
    low: Vec<usize>,
    time: usize,
    edge_stack: Vec<(usize, usize)>,
    blocks: Vec<Vec<usize>>,
}

impl BlockDfs<'_> {
    fn visit(&mut self, v: usize, parent: Option<usize>) {
        self.disc[v] = Some(self.time);
        self.low[v] = self.time;
        self.time += 1;

        for u in self.graph.neighbors(v) {
            // The graph is simple, so the parent edge has a single copy.
            if Some(u) == parent {
                continue;
            }
            match self.disc[u] {
                None => {
                    self.edge_stack.push((v, u));
                    self.visit(u, Some(v));
                    self.low[v] = self.low[v].min(self.low[u]);
                    if self.low[u] >= self.disc[v].unwrap_or(0) {
                        self.pop_block((v, u));
                    }
                }
                Some(d_u) => {
                    if d_u < self.disc[v].unwrap_or(0) {
                        self.edge_stack.push((v, u));
                        self.low[v] = self.low[v].min(d_u);
                    }
                }
            }
        }
    }

    fn pop_block(&mut self, boundary: (usize, usize)) {
        let mut vertices = Vec::new();
        while let Some(edge) = self.edge_stack.pop() {
            vertices.push(edge.0);
            vertices.push(edge.1);
            if edge == boundary {
                break;
            }
        }
        vertices.sort_unstable();
        vertices.dedup();
        if !vertices.is_empty() {
            self.blocks.push(vertices);
        }
    }
}

/// The biconnected components (blocks) as sorted vertex sets. Isolated
/// vertices form no block; a bridge forms a two-vertex block.
#[must_use]
pub fn biconnected_components(graph: &Graph) -> Vec<Vec<usize>> {
    let n = graph.order();
    let mut dfs = BlockDfs {
        graph,
        disc: vec![None; n],
        low: vec![0; n],
        time: 0,
        edge_stack: Vec::new(),
        blocks: Vec::new(),
    };
    for v in 0..n {
        if dfs.disc[v].is_none() {
            dfs.visit(v, None);
        }
    }
    dfs.blocks.sort();
    dfs.blocks
}
