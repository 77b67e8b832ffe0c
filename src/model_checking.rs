//! High-level functionality regarding the whole model-checking process.

use crate::errors::ModelCheckError;
use crate::evaluation::algorithm::eval_tree;
use crate::evaluation::labeling::{QuantLabeling, StateLabels};
use crate::network::state_graph::StateTransitionGraph;
use crate::preprocessing::ctl_tree::CtlTreeNode;
use crate::preprocessing::parser::parse_ctl_formula;
use crate::preprocessing::utils::{eliminate_negations, validate_propositions};

/// Parse a formula, validate its propositions against the graph's network, and rewrite it
/// to positive normal form. The result is ready for evaluation.
pub fn parse_and_normalise_formula(
    formula: &str,
    stg: &StateTransitionGraph,
) -> Result<CtlTreeNode, ModelCheckError> {
    let tree = parse_ctl_formula(formula)?;
    validate_propositions(&tree, stg.variables())?;
    Ok(eliminate_negations(tree))
}

/// Perform the model checking for the list of formula syntax trees on GIVEN graph.
/// Return the shared labeling holding one finished column per unique sub-formula.
///
/// All trees are evaluated against the same labeling, so sub-formulae shared between
/// formulae are computed only once. The trees must be in positive normal form with
/// validated propositions (see [parse_and_normalise_formula]).
pub fn model_check_trees(
    trees: &[CtlTreeNode],
    stg: &StateTransitionGraph,
) -> Result<QuantLabeling, ModelCheckError> {
    let mut labeling = QuantLabeling::new();
    for tree in trees {
        eval_tree(tree, stg, &mut labeling)?;
    }
    Ok(labeling)
}

/// Perform the model checking for a single formula syntax tree on GIVEN graph.
pub fn model_check_tree(
    tree: &CtlTreeNode,
    stg: &StateTransitionGraph,
) -> Result<QuantLabeling, ModelCheckError> {
    model_check_trees(std::slice::from_ref(tree), stg)
}

/// Perform the model checking for the list of formulae on GIVEN graph and return their
/// per-state satisfaction degrees (in the same order as the input formulae).
pub fn model_check_multiple_formulae(
    formulae: &[&str],
    stg: &StateTransitionGraph,
) -> Result<Vec<StateLabels>, ModelCheckError> {
    let trees = formulae
        .iter()
        .map(|formula| parse_and_normalise_formula(formula, stg))
        .collect::<Result<Vec<_>, _>>()?;

    let labeling = model_check_trees(&trees, stg)?;
    trees
        .iter()
        .map(|tree| labeling.column(tree.as_str()).cloned())
        .collect()
}

/// Perform the model checking for a given formula on GIVEN graph and return the
/// per-state satisfaction degrees of the whole formula.
pub fn model_check_formula(
    formula: &str,
    stg: &StateTransitionGraph,
) -> Result<StateLabels, ModelCheckError> {
    let result = model_check_multiple_formulae(&[formula], stg)?;
    result.into_iter().next().ok_or_else(|| {
        ModelCheckError::InternalInvariant("missing model-checking result".to_string())
    })
}
