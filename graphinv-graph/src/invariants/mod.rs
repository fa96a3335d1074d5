//! Exact numeric graph invariants.
//!
//! Each submodule groups a family of invariants: degree statistics,
//! degree-sequence invariants, distance invariants, domination-type
//! minimum-set searches, independence and colouring, matching, and zero
//! forcing. All searches are exact and may take exponential time; the
//! intended inputs are small.

pub mod coloring;
pub mod degree;
pub mod distance;
pub mod domination;
pub mod forcing;
pub mod independence;
pub mod matching;
pub mod sequence;
