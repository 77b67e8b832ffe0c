//! A small library regarding quantitative analysis of dynamic properties of multi-valued
//! gene-regulatory networks through CTL model checking.
//! As of now, the library supports:
//!  - Computing a satisfaction degree in `[-1, +1]` for every state and every CTL
//!    sub-formula, based on weighted Hamming distances to the borders of atomic domains.
//!  - Formula pre-processing utilities, such as tokenizing, parsing, or the rewrite to
//!    positive normal form.
//!  - Manipulation with the two-strata syntax trees of quantitative CTL formulae.
//!  - Construction of total state-transition graphs from multi-valued GRN models.
//!  - Simultaneous evaluation of several formulae, sharing common sub-formulae via the
//!    labeling table.
//!

pub mod analysis;
pub mod errors;
pub mod evaluation;
pub mod load_inputs;
pub mod mc_utils;
pub mod model_checking;
pub mod network;
pub mod preprocessing;
pub mod result_print;

/// **(internal)** Several complex test scenarios for the model checking procedure.
#[cfg(test)]
mod _test_model_checking;
