//! Identifier dispatch.
//!
//! Four tiers, tried in order: the direct table (dedicated strategies and
//! pass-through graph invariants), derived arithmetic expressions,
//! boolean structural predicates, and finally `PropertyNotFound`. The
//! tables are process-wide constants resolved once on first use; no
//! identifier is re-parsed per call except the derived expressions,
//! whose grammar is two operands and one operator.

use std::collections::HashMap;
use std::sync::OnceLock;

use graphinv_graph::{
    Graph,
    invariants::{coloring, degree, distance, domination, forcing, independence, matching, sequence},
};

use crate::{
    error::{EvalError, Result},
    eval::EvalCtx,
    strategies::{closure, ilp, indices, outer, spectral, threshold},
    value::Value,
};

mod expr;
mod predicates;


pub(crate) type EvalFn = fn(&Graph, &EvalCtx<'_>) -> Result<Value>;

/// Evaluates `property` on `graph` through the dispatch tiers.
pub(crate) fn dispatch(graph: &Graph, property: &str, ctx: &EvalCtx<'_>) -> Result<Value> {
    if let Some(eval) = direct().get(property) {
        return eval(graph, ctx);
    }
    if expr::is_derived(property) {
        return expr::evaluate(graph, property, ctx);
    }
    if let Some(requirements) = predicates::lookup(property) {
        return predicates::check(graph, requirements).map(Value::Bool);
    }
    Err(EvalError::PropertyNotFound {
        property: String::from(property),
    })
}

fn direct() -> &'static HashMap<&'static str, EvalFn> {
    static TABLE: OnceLock<HashMap<&'static str, EvalFn>> = OnceLock::new();
    TABLE.get_or_init(|| DIRECT.iter().copied().collect())
}

#[rustfmt::skip]
const DIRECT: &[(&str, EvalFn)] = &[
    // Pass-through graph invariants.
    ("order", order),
    ("size", size),
    ("min_degree", min_degree),
    ("max_degree", max_degree),
    ("average_degree", average_degree),
    ("domination_number", domination_number),
    ("total_domination_number", total_domination_number),
    ("connected_domination_number", connected_domination_number),
    ("independent_domination_number", independent_domination_number),
    ("power_domination_number", power_domination_number),
    ("zero_forcing_number", zero_forcing_number),
    ("diameter", diameter),
    ("radius", radius),
    ("triameter", triameter),
    ("wiener_index", wiener_index),
    ("independence_number", independence_number),
    ("clique_number", clique_number),
    ("chromatic_number", chromatic_number),
    ("vertex_cover_number", vertex_cover_number),
    ("matching_number", matching_number),
    ("min_maximal_matching_number", min_maximal_matching_number),
    ("edge_domination_number", edge_domination_number),
    ("min_edge_cover", min_edge_cover),
    ("residue", residue),
    ("annihilation_number", annihilation_number),
    ("sub_total_domination_number", sub_total_domination_number),
    ("slater", slater),
    // Dedicated strategies.
    ("k_slater_index", k_slater_index),
    ("k_residual_index", k_residual_index),
    ("roman_domination_number", roman_domination_number),
    ("double_roman_domination_number", double_roman_domination_number),
    ("two_rainbow_domination_number", two_rainbow_domination_number),
    ("three_rainbow_domination_number", three_rainbow_domination_number),
    ("restrained_domination_number", restrained_domination_number),
    ("semitotal_domination_number", semitotal_domination_number),
    ("outer_connected_domination_number", outer_connected_domination_number),
    ("positive_semidefinite_zero_forcing_number", psd_zero_forcing_number),
    ("graph_energy", graph_energy),
    ("square_positive_energy", square_positive_energy),
    ("square_negative_energy", square_negative_energy),
    ("second_largest_eigenvalue", second_largest_eigenvalue),
    // Degree-based indices.
    ("strong_harmonic_index", strong_harmonic_index),
    ("reciprocal_first_zagreb_index", reciprocal_first_zagreb_index),
    ("reciprocal_second_zagreb_index", reciprocal_second_zagreb_index),
    ("reciprocal_harary_index", reciprocal_harary_index),
    ("reciprocal_second_zagreb_variation", reciprocal_second_zagreb_variation),
    ("reciprocal_randic_index", reciprocal_randic_index),
    ("reciprocal_augmented_zagreb_index", reciprocal_augmented_zagreb_index),
    ("reciprocal_sum_connectivity_index", reciprocal_sum_connectivity_index),
    ("reciprocal_hyper_zagreb_index", reciprocal_hyper_zagreb_index),
    ("reciprocal_geometric_arithmetic_index", reciprocal_geometric_arithmetic_index),
    ("inverse_degree_plus_one_sum", inverse_degree_plus_one_sum),
    ("inverse_degree_plus_two_sum", inverse_degree_plus_two_sum),
    ("inverse_edge_degree_plus_one_sum", inverse_edge_degree_plus_one_sum),
    ("inverse_edge_degree_plus_two_sum", inverse_edge_degree_plus_two_sum),
    ("augmented_average_edge_degree", augmented_average_edge_degree),
    ("first_zagreb_index_2_degree", first_zagreb_index_2_degree),
    ("second_zagreb_index_2_degree", second_zagreb_index_2_degree),
    ("reciprocal_first_zagreb_index_2_degree", reciprocal_first_zagreb_index_2_degree),
    ("reciprocal_second_zagreb_index_2_degree", reciprocal_second_zagreb_index_2_degree),
    ("average_degree_2_degree", average_degree_2_degree),
    ("reciprocal_randic_index_2_degree", reciprocal_randic_index_2_degree),
    ("reciprocal_sum_connectivity_index_2_degree", reciprocal_sum_connectivity_index_2_degree),
    ("hyper_zagreb_index_2_degree", hyper_zagreb_index_2_degree),
    ("reciprocal_geometric_arithmetic_index_2_degree", reciprocal_geometric_arithmetic_index_2_degree),
];

fn order(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(graph.order()))
}

fn size(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(graph.size()))
}

fn min_degree(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(degree::min_degree(graph)?))
}

fn max_degree(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(degree::max_degree(graph)?))
}

fn average_degree(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Real(degree::average_degree(graph)?))
}

fn domination_number(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(domination::domination_number(graph)?))
}

fn total_domination_number(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(domination::total_domination_number(graph)?))
}

fn connected_domination_number(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(domination::connected_domination_number(graph)?))
}

fn independent_domination_number(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(domination::independent_domination_number(graph)?))
}

fn power_domination_number(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(domination::power_domination_number(graph)?))
}

fn zero_forcing_number(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(forcing::zero_forcing_number(graph)?))
}

fn diameter(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(distance::diameter(graph)?))
}

fn radius(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(distance::radius(graph)?))
}

fn triameter(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(distance::triameter(graph)?))
}

fn wiener_index(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(distance::wiener_index(graph)?))
}

fn independence_number(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(independence::independence_number(graph)))
}

fn clique_number(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(independence::clique_number(graph)))
}

fn chromatic_number(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(coloring::chromatic_number(graph)))
}

fn vertex_cover_number(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(independence::vertex_cover_number(graph)))
}

fn matching_number(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(matching::matching_number(graph)))
}

fn min_maximal_matching_number(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(matching::min_maximal_matching_number(graph)?))
}

fn edge_domination_number(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(matching::edge_domination_number(graph)?))
}

fn min_edge_cover(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(matching::min_edge_cover_number(graph)?))
}

fn residue(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(sequence::residue(graph)))
}

fn annihilation_number(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(sequence::annihilation_number(graph)))
}

fn sub_total_domination_number(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(sequence::sub_total_domination_number(graph)?))
}

fn slater(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(sequence::slater(graph)))
}

fn k_slater_index(graph: &Graph, ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(threshold::k_slater_index(graph, ctx)?))
}

fn k_residual_index(graph: &Graph, ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(threshold::k_residual_index(graph, ctx)?))
}

fn roman_domination_number(graph: &Graph, ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Int(ilp::roman_domination_number(graph, ctx)?))
}

fn double_roman_domination_number(graph: &Graph, ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Int(ilp::double_roman_domination_number(graph, ctx)?))
}

fn two_rainbow_domination_number(graph: &Graph, ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Int(ilp::two_rainbow_domination_number(graph, ctx)?))
}

fn three_rainbow_domination_number(graph: &Graph, ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Int(ilp::three_rainbow_domination_number(graph, ctx)?))
}

fn restrained_domination_number(graph: &Graph, ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Int(ilp::restrained_domination_number(graph, ctx)?))
}

fn semitotal_domination_number(graph: &Graph, ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Int(ilp::semitotal_domination_number(graph, ctx)?))
}

fn outer_connected_domination_number(graph: &Graph, ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(outer::outer_connected_domination_number(graph, ctx)?))
}

fn psd_zero_forcing_number(graph: &Graph, ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(closure::psd_zero_forcing_number(graph, ctx)?))
}

fn graph_energy(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Int(spectral::graph_energy(graph)))
}

fn square_positive_energy(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Int(spectral::square_positive_energy(graph)))
}

fn square_negative_energy(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Int(spectral::square_negative_energy(graph)))
}

fn second_largest_eigenvalue(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Int(spectral::second_largest_eigenvalue(graph)?))
}

fn strong_harmonic_index(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Real(indices::strong_harmonic_index(graph)))
}

fn reciprocal_first_zagreb_index(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Real(indices::reciprocal_first_zagreb_index(graph)?))
}

fn reciprocal_second_zagreb_index(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Real(indices::reciprocal_second_zagreb_index(graph)))
}

fn reciprocal_harary_index(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Real(indices::reciprocal_harary_index(graph)?))
}

fn reciprocal_second_zagreb_variation(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Real(indices::reciprocal_second_zagreb_variation(graph)))
}

fn reciprocal_randic_index(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Real(indices::reciprocal_randic_index(graph)))
}

fn reciprocal_augmented_zagreb_index(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Real(indices::reciprocal_augmented_zagreb_index(graph)))
}

fn reciprocal_sum_connectivity_index(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Real(indices::reciprocal_sum_connectivity_index(graph)))
}

fn reciprocal_hyper_zagreb_index(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Real(indices::reciprocal_hyper_zagreb_index(graph)?))
}

fn reciprocal_geometric_arithmetic_index(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Real(indices::reciprocal_geometric_arithmetic_index(graph)))
}

fn inverse_degree_plus_one_sum(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Real(indices::inverse_degree_plus_one_sum(graph)))
}

fn inverse_degree_plus_two_sum(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Real(indices::inverse_degree_plus_two_sum(graph)))
}

fn inverse_edge_degree_plus_one_sum(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Real(indices::inverse_edge_degree_plus_one_sum(graph)))
}

fn inverse_edge_degree_plus_two_sum(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Real(indices::inverse_edge_degree_plus_two_sum(graph)))
}

fn augmented_average_edge_degree(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Real(indices::augmented_average_edge_degree(graph)?))
}

fn first_zagreb_index_2_degree(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(indices::first_zagreb_index_2_degree(graph)))
}

fn second_zagreb_index_2_degree(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(indices::second_zagreb_index_2_degree(graph)))
}

fn reciprocal_first_zagreb_index_2_degree(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Real(indices::reciprocal_first_zagreb_index_2_degree(graph)?))
}

fn reciprocal_second_zagreb_index_2_degree(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Real(indices::reciprocal_second_zagreb_index_2_degree(graph)))
}

fn average_degree_2_degree(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Real(indices::average_degree_2_degree(graph)?))
}

fn reciprocal_randic_index_2_degree(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Real(indices::reciprocal_randic_index_2_degree(graph)))
}

fn reciprocal_sum_connectivity_index_2_degree(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Real(indices::reciprocal_sum_connectivity_index_2_degree(graph)))
}

fn hyper_zagreb_index_2_degree(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::from_count(indices::hyper_zagreb_index_2_degree(graph)))
}

fn reciprocal_geometric_arithmetic_index_2_degree(graph: &Graph, _ctx: &EvalCtx<'_>) -> Result<Value> {
    Ok(Value::Real(indices::reciprocal_geometric_arithmetic_index_2_degree(graph)))
}
