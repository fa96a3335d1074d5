//! Boolean structural predicates phrased as requirement conjunctions.
//!
//! Each vocabulary entry maps to a list of requirements evaluated left
//! to right with short-circuiting, so later requirements may assume the
//! earlier ones hold (the diameter check, for instance, runs only on
//! connected graphs).

use std::collections::HashMap;
use std::sync::OnceLock;

use graphinv_graph::{
    Graph,
    invariants::{coloring, degree, distance, domination, independence},
    structure,
};

use crate::{error::Result, strategies::recognition};

/// One conjunct of a boolean property.
#[derive(Clone, Copy, Debug)]
pub(super) enum Requirement {
    Connected,
    Planar,
    Regular,
    Cubic,
    NotComplete,
    TriangleFree,
    ClawFree,
    Chordal,
    Tree,
    AtFree,
    Eulerian,
    Bipartite,
    DiamondFree,
    BullFree,
    BlockGraph,
    LineGraph,
    WellCovered,
    TotalEqualsDomination,
    Class1,
    Class2,
    MinDegreeAtLeast(usize),
    MaxDegreeAtMost(usize),
    DiameterAtMost(usize),
}

/// The requirement list for a predicate identifier, if recognised.
pub(super) fn lookup(property: &str) -> Option<&'static [Requirement]> {
    table().get(property).copied()
}

/// Evaluates the conjunction on `graph`.
pub(super) fn check(graph: &Graph, requirements: &[Requirement]) -> Result<bool> {
    for &requirement in requirements {
        if !holds(graph, requirement)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn holds(graph: &Graph, requirement: Requirement) -> Result<bool> {
    Ok(match requirement {
        Requirement::Connected => graph.is_connected(),
        Requirement::Planar => structure::planarity::is_planar(graph),
        Requirement::Regular => degree::min_degree(graph)? == degree::max_degree(graph)?,
        Requirement::Cubic => {
            degree::min_degree(graph)? == 3 && degree::max_degree(graph)? == 3
        }
        Requirement::NotComplete => !structure::is_complete(graph),
        Requirement::TriangleFree => structure::is_triangle_free(graph),
        Requirement::ClawFree => structure::is_claw_free(graph),
        Requirement::Chordal => structure::is_chordal(graph),
        Requirement::Tree => structure::is_tree(graph),
        Requirement::AtFree => structure::is_at_free(graph),
        Requirement::Eulerian => structure::is_eulerian(graph),
        Requirement::Bipartite => structure::is_bipartite(graph),
        Requirement::DiamondFree => recognition::is_diamond_free(graph),
        Requirement::BullFree => structure::is_bull_free(graph),
        Requirement::BlockGraph => recognition::is_block_graph(graph),
        Requirement::LineGraph => recognition::is_line_graph_modified(graph),
        Requirement::WellCovered => {
            independence::independence_number(graph)
                == domination::independent_domination_number(graph)?
        }
        Requirement::TotalEqualsDomination => {
            domination::total_domination_number(graph)? == domination::domination_number(graph)?
        }
        Requirement::Class1 => {
            coloring::chromatic_number(&graph.line_graph()) == degree::max_degree(graph)?
        }
        Requirement::Class2 => {
            coloring::chromatic_number(&graph.line_graph()) == degree::max_degree(graph)? + 1
        }
        Requirement::MinDegreeAtLeast(k) => degree::min_degree(graph)? >= k,
        Requirement::MaxDegreeAtMost(k) => degree::max_degree(graph)? <= k,
        Requirement::DiameterAtMost(k) => distance::diameter(graph)? <= k,
    })
}

/// Every recognised predicate identifier.
#[cfg(test)]
pub(super) fn vocabulary() -> impl Iterator<Item = &'static str> {
    PREDICATES.iter().map(|&(name, _)| name)
}

fn table() -> &'static HashMap<&'static str, &'static [Requirement]> {
    static TABLE: OnceLock<HashMap<&'static str, &'static [Requirement]>> = OnceLock::new();
    TABLE.get_or_init(|| PREDICATES.iter().copied().collect())
}

#[rustfmt::skip]
const PREDICATES: &[(&str, &[Requirement])] = {
    use Requirement::{
        AtFree, Bipartite, BlockGraph, BullFree, Chordal, Class1, Class2, ClawFree, Connected,
        Cubic, DiameterAtMost, DiamondFree, Eulerian, LineGraph, MaxDegreeAtMost,
        MinDegreeAtLeast, NotComplete, Planar, Regular, TotalEqualsDomination, TriangleFree,
        Tree, WellCovered,
    };
    &[
        ("a connected graph", &[Connected]),
        ("a connected and planar graph", &[Connected, Planar]),
        ("a connected and regular graph", &[Connected, Regular]),
        ("a connected and cubic graph", &[Connected, Cubic]),
        ("a connected graph which is not K_n", &[Connected, NotComplete]),
        ("a connected and triangle-free graph", &[Connected, TriangleFree]),
        ("a connected and claw-free graph", &[Connected, ClawFree]),
        ("a connected and chordal graph", &[Connected, Chordal]),
        ("a tree graph", &[Tree]),
        ("a connected and at-free graph", &[Connected, AtFree]),
        ("an eulerian graph", &[Eulerian]),
        ("a connected and bipartite graph", &[Connected, Bipartite]),
        ("a connected graph with maximum degree at most 3", &[Connected, MaxDegreeAtMost(3)]),
        ("a connected graph which is not K_n and has maximum degree at most 3", &[Connected, NotComplete, MaxDegreeAtMost(3)]),
        ("a connected and cubic graph which is not K_4", &[Connected, NotComplete, Cubic]),
        ("a connected, claw-free, and cubic graph", &[Connected, Cubic, ClawFree]),
        ("a connected, planar, and cubic graph", &[Connected, Cubic, Planar]),
        ("a connected graph with a total domination number equal to the domination number", &[Connected, TotalEqualsDomination]),
        ("a connected and well-covered graph", &[Connected, WellCovered]),
        ("a connected and Class-1 graph", &[Connected, Class1]),
        ("a connected and Class-2 graph", &[Connected, Class2]),
        ("a connected graph with diameter at most 3", &[Connected, DiameterAtMost(3)]),
        ("a connected and planar graph with diameter at most 3", &[Connected, Planar, DiameterAtMost(3)]),
        ("a connected_graph with min_degree at least 2", &[Connected, MinDegreeAtLeast(2)]),
        ("a connected_graph with min_degree at least 3", &[Connected, MinDegreeAtLeast(3)]),
        ("a connected_graph with min_degree at least 4", &[Connected, MinDegreeAtLeast(4)]),
        ("a connected and bipartite graph with min_degree at least 2", &[Connected, Bipartite, MinDegreeAtLeast(2)]),
        ("a connected and bipartite graph with min_degree at least 3", &[Connected, Bipartite, MinDegreeAtLeast(3)]),
        ("a connected and bipartite graph with min_degree at least 4", &[Connected, Bipartite, MinDegreeAtLeast(4)]),
        ("a connected and planar graph with min_degree at least 2", &[Connected, Planar, MinDegreeAtLeast(2)]),
        ("a connected and planar graph with min_degree at least 3", &[Connected, Planar, MinDegreeAtLeast(3)]),
        ("a connected and planar graph with min_degree at least 4", &[Connected, Planar, MinDegreeAtLeast(4)]),
        ("a connected graph which is not K_n with min_degree at least 2", &[Connected, NotComplete, MinDegreeAtLeast(2)]),
        ("a connected graph which is not K_n with min_degree at least 3", &[Connected, NotComplete, MinDegreeAtLeast(3)]),
        ("a connected graph which is not K_n with min_degree at least 4", &[Connected, NotComplete, MinDegreeAtLeast(4)]),
        ("a connected and triangle-free graph with min_degree at least 2", &[Connected, TriangleFree, MinDegreeAtLeast(2)]),
        ("a connected and triangle-free graph with min_degree at least 3", &[Connected, TriangleFree, MinDegreeAtLeast(3)]),
        ("a connected and triangle-free graph with min_degree at least 4", &[Connected, TriangleFree, MinDegreeAtLeast(4)]),
        ("a connected and at-free graph with min_degree at least 2", &[Connected, AtFree, MinDegreeAtLeast(2)]),
        ("a connected and at-free graph with min_degree at least 3", &[Connected, AtFree, MinDegreeAtLeast(3)]),
        ("a connected and at-free graph with min_degree at least 4", &[Connected, AtFree, MinDegreeAtLeast(4)]),
        ("a connected and claw-free graph with min_degree at least 2", &[Connected, ClawFree, MinDegreeAtLeast(2)]),
        ("a connected and claw-free graph with min_degree at least 3", &[Connected, ClawFree, MinDegreeAtLeast(3)]),
        ("a connected and claw-free graph with min_degree at least 4", &[Connected, ClawFree, MinDegreeAtLeast(4)]),
        ("a connected and chordal graph with min_degree at least 2", &[Connected, Chordal, MinDegreeAtLeast(2)]),
        ("a connected and chordal graph with min_degree at least 3", &[Connected, Chordal, MinDegreeAtLeast(3)]),
        ("a connected graph with min_degree at least 2 and maximum degree at most 3", &[Connected, MinDegreeAtLeast(2), MaxDegreeAtMost(3)]),
        ("a connected and diamond-free graph", &[Connected, DiamondFree]),
        ("a connected, cubic, and diamond-free graph", &[Connected, Cubic, DiamondFree]),
        ("a connected and bull-free graph", &[Connected, BullFree]),
        ("a block graph", &[BlockGraph]),
        ("a connected graph that is a line graph", &[LineGraph]),
    ]
};
