//! Computation strategies behind the non-pass-through identifiers.

pub mod closure;
pub mod ilp;
pub mod indices;
pub mod outer;
pub mod recognition;
pub mod spectral;
pub mod threshold;

#[cfg(test)]
mod tests;
