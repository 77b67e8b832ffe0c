//! Components regarding the preprocessing of quantitative CTL formulae, e.g., tokenizing,
//! parsing, validating, or negation elimination.

pub mod ctl_tree;
pub mod operator_enums;
pub mod parser;
pub mod tokenizer;
pub mod utils;
