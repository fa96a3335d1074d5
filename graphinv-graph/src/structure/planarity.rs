//! Exact planarity testing.
//!
//! A graph is planar iff each of its biconnected components is, so the
//! test decomposes into blocks and runs the Demoucron–Malgrange–Pertuiset
//! face-embedding algorithm per block: start from any cycle, then
//! repeatedly embed a connecting path of some fragment into a face that
//! admits all of the fragment's attachment vertices, preferring fragments
//! with the fewest admissible faces. A fragment with no admissible face
//! certifies non-planarity.

use std::collections::{HashSet, VecDeque};

use tracing::instrument;

use crate::Graph;

use super::blocks::biconnected_components;

/// Returns `true` when the graph embeds in the plane.
#[must_use]
#[instrument(
    level = "debug",
    skip(graph),
    fields(order = graph.order(), size = graph.size()),
    ret
)]
pub fn is_planar(graph: &Graph) -> bool {
    biconnected_components(graph)
        .iter()
        .all(|block| block_is_planar(&graph.induced(block)))
}

fn block_is_planar(block: &Graph) -> bool {
    let (n, m) = (block.order(), block.size());
    if n < 5 {
        return true;
    }
    if m > 3 * n - 6 {
        return false;
    }
    let Some(cycle) = find_cycle(block) else {
        return true;
    };
    Embedding::new(block, cycle).run()
}

fn find_cycle(graph: &Graph) -> Option<Vec<usize>> {
    let n = graph.order();
    let mut visited = vec![false; n];
    let mut on_path = vec![false; n];
    let mut path = Vec::new();
    for start in 0..n {
        if !visited[start] {
            if let Some(cycle) = cycle_dfs(graph, start, None, &mut path, &mut on_path, &mut visited)
            {
                return Some(cycle);
            }
        }
    }
    None
}

fn cycle_dfs(
    graph: &Graph,
    v: usize,
    parent: Option<usize>,
    path: &mut Vec<usize>,
    on_path: &mut [bool],
    visited: &mut [bool],
) -> Option<Vec<usize>> {
    visited[v] = true;
    on_path[v] = true;
    path.push(v);
    for u in graph.neighbors(v) {
        if Some(u) == parent {
            continue;
        }
        if on_path[u] {
            let pos = path.iter().position(|&x| x == u)?;
            return Some(path[pos..].to_vec());
        }
        if !visited[u] {
            if let Some(cycle) = cycle_dfs(graph, u, Some(v), path, on_path, visited) {
                return Some(cycle);
            }
        }
    }
    path.pop();
    on_path[v] = false;
    None
}

fn canonical(u: usize, v: usize) -> (usize, usize) {
    if u < v { (u, v) } else { (v, u) }
}

/// A connected piece of the graph not yet embedded: either a single chord
/// between two embedded vertices, or a component of the unembedded
/// vertices together with its attachment vertices.
struct Fragment {
    interior: Vec<usize>,
    attachments: Vec<usize>,
    chord: Option<(usize, usize)>,
}

struct Embedding<'a> {
    graph: &'a Graph,
    embedded_edges: HashSet<(usize, usize)>,
    embedded: Vec<bool>,
    // Faces as cyclic vertex sequences; the closing edge is implicit.
    faces: Vec<Vec<usize>>,
}

impl<'a> Embedding<'a> {
    fn new(graph: &'a Graph, cycle: Vec<usize>) -> Self {
        let mut embedded = vec![false; graph.order()];
        let mut embedded_edges = HashSet::new();
        for (i, &v) in cycle.iter().enumerate() {
            embedded[v] = true;
            let next = cycle[(i + 1) % cycle.len()];
            embedded_edges.insert(canonical(v, next));
        }
        Self {
            graph,
            embedded_edges,
            embedded,
            faces: vec![cycle.clone(), cycle],
        }
    }

    fn run(mut self) -> bool {
        loop {
            let fragments = self.fragments();
            if fragments.is_empty() {
                return true;
            }
            let admissible: Vec<Vec<usize>> = fragments
                .iter()
                .map(|fragment| self.admissible_faces(fragment))
                .collect();
            let Some((choice, faces)) = admissible
                .iter()
                .enumerate()
                .min_by_key(|(_, faces)| faces.len())
            else {
                return true;
            };
            let Some(&face) = faces.first() else {
                return false;
            };
            let Some(path) = self.alpha_path(&fragments[choice]) else {
                // Unreachable for biconnected input; refuse the embedding.
                return false;
            };
            self.embed_path(face, &path);
        }
    }

    fn fragments(&self) -> Vec<Fragment> {
        let mut fragments = Vec::new();
        for (u, v) in self.graph.edges() {
            if self.embedded[u]
                && self.embedded[v]
                && !self.embedded_edges.contains(&canonical(u, v))
            {
                fragments.push(Fragment {
                    interior: Vec::new(),
                    attachments: vec![u, v],
                    chord: Some((u, v)),
                });
            }
        }
        let keep: Vec<bool> = self.embedded.iter().map(|&e| !e).collect();
        for interior in self.graph.components_within(&keep) {
            let mut attachments: Vec<usize> = interior
                .iter()
                .flat_map(|&v| self.graph.neighbors(v))
                .filter(|&u| self.embedded[u])
                .collect();
            attachments.sort_unstable();
            attachments.dedup();
            fragments.push(Fragment {
                interior,
                attachments,
                chord: None,
            });
        }
        fragments
    }

    fn admissible_faces(&self, fragment: &Fragment) -> Vec<usize> {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, face)| fragment.attachments.iter().all(|a| face.contains(a)))
            .map(|(i, _)| i)
            .collect()
    }

    /// A path between two attachment vertices whose interior lies inside
    /// the fragment.
    fn alpha_path(&self, fragment: &Fragment) -> Option<Vec<usize>> {
        if let Some((u, v)) = fragment.chord {
            return Some(vec![u, v]);
        }
        let (&start, rest) = fragment.attachments.split_first()?;
        let targets: HashSet<usize> = rest.iter().copied().collect();
        let inside: HashSet<usize> = fragment.interior.iter().copied().collect();

        let mut prev = vec![None; self.graph.order()];
        let mut queue = VecDeque::new();
        for u in self.graph.neighbors(start) {
            if inside.contains(&u) && prev[u].is_none() {
                prev[u] = Some(start);
                queue.push_back(u);
            }
        }
        while let Some(x) = queue.pop_front() {
            for u in self.graph.neighbors(x) {
                if targets.contains(&u) {
                    let mut path = vec![u, x];
                    let mut cursor = x;
                    while let Some(p) = prev[cursor] {
                        path.push(p);
                        cursor = p;
                        if cursor == start {
                            break;
                        }
                    }
                    path.reverse();
                    return Some(path);
                }
                if inside.contains(&u) && prev[u].is_none() {
                    prev[u] = Some(x);
                    queue.push_back(u);
                }
            }
        }
        None
    }

    fn embed_path(&mut self, face_index: usize, path: &[usize]) {
        let face = self.faces.swap_remove(face_index);
        let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
            return;
        };
        let (Some(i1), Some(i2)) = (
            face.iter().position(|&v| v == first),
            face.iter().position(|&v| v == last),
        ) else {
            return;
        };

        let len = face.len();
        let walk = |from: usize, to: usize| {
            let mut arc = Vec::new();
            let mut i = from;
            loop {
                arc.push(face[i]);
                if i == to {
                    break;
                }
                i = (i + 1) % len;
            }
            arc
        };
        let interior = &path[1..path.len() - 1];

        let mut face_a = walk(i1, i2);
        face_a.extend(interior.iter().rev());
        let mut face_b = walk(i2, i1);
        face_b.extend(interior.iter());
        self.faces.push(face_a);
        self.faces.push(face_b);

        for pair in path.windows(2) {
            self.embedded_edges.insert(canonical(pair[0], pair[1]));
        }
        for &v in path {
            self.embedded[v] = true;
        }
    }
}
