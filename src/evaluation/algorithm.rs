//! Contains the high-level evaluation algorithm: dispatch on the node variant and the
//! driver running over post-order sub-formulae.

use crate::errors::ModelCheckError;
use crate::evaluation::ctl_operators_eval::*;
use crate::evaluation::labeling::{QuantLabeling, StateLabels};
use crate::network::state_graph::StateTransitionGraph;
use crate::preprocessing::ctl_tree::{CtlTreeNode, NodeType};
use crate::preprocessing::operator_enums::{BinaryOp, UnaryOp};

/// Evaluate all sub-formulae of `tree` on the given graph, children before parents,
/// writing one labeling column per unique sub-formula.
///
/// Columns already present in `labeling` (duplicate sub-formulae, or sub-formulae shared
/// with previously evaluated trees) are reused without recomputation.
pub fn eval_tree(
    tree: &CtlTreeNode,
    stg: &StateTransitionGraph,
    labeling: &mut QuantLabeling,
) -> Result<(), ModelCheckError> {
    for sub_formula in tree.sub_formulae() {
        eval_node(sub_formula, stg, labeling)?;
    }
    Ok(())
}

/// Evaluate a single sub-formula into its labeling column.
///
/// Pre-condition: the columns of all direct sub-formulae are already computed (the driver
/// [eval_tree] guarantees this through the post-order); a missing child column surfaces
/// as [ModelCheckError::InternalInvariant].
pub fn eval_node(
    node: &CtlTreeNode,
    stg: &StateTransitionGraph,
    labeling: &mut QuantLabeling,
) -> Result<(), ModelCheckError> {
    if labeling.has_column(node.as_str()) {
        // duplicate sub-formulae share a single column
        return Ok(());
    }

    let labels = match &node.node_type {
        NodeType::Constant(value) => eval_constant(stg, *value),
        NodeType::Atomic(atomic) => eval_atomic(stg, atomic)?,
        NodeType::Unary(op, child) => {
            let child_key = child.as_str();
            match op {
                UnaryOp::AX => eval_ax(stg, labeling, child_key)?,
                UnaryOp::EX => eval_ex(stg, labeling, child_key)?,
                UnaryOp::AG => eval_ag(stg, labeling, child_key)?,
                UnaryOp::EG => eval_eg(stg, labeling, child_key)?,
                UnaryOp::AF => eval_af(stg, labeling, child_key)?,
                UnaryOp::EF => eval_ef(stg, labeling, child_key)?,
            }
        }
        NodeType::Binary(op, left, right) => match op {
            BinaryOp::And => eval_conjunction(stg, labeling, left.as_str(), right.as_str())?,
            BinaryOp::Or => eval_disjunction(stg, labeling, left.as_str(), right.as_str())?,
            BinaryOp::AU => eval_au(stg, labeling, left.as_str(), right.as_str())?,
            BinaryOp::EU => eval_eu(stg, labeling, left.as_str(), right.as_str())?,
            BinaryOp::AW => eval_weak_until(node, stg, labeling, UnaryOp::AG, BinaryOp::AU)?,
            BinaryOp::EW => eval_weak_until(node, stg, labeling, UnaryOp::EG, BinaryOp::EU)?,
        },
    };

    labeling.insert_column(node.as_str(), labels);
    Ok(())
}

/// Evaluate a weak until as the per-state maximum of the corresponding globally and until
/// columns.
///
/// The two fixed points must fully converge separately before they are combined: the
/// globally degree only reaches its final value at convergence, so overwriting the until
/// degree with an intermediate globally candidate would lose information.
fn eval_weak_until(
    node: &CtlTreeNode,
    stg: &StateTransitionGraph,
    labeling: &mut QuantLabeling,
    globally_op: UnaryOp,
    until_op: BinaryOp,
) -> Result<StateLabels, ModelCheckError> {
    let NodeType::Binary(_, left, right) = &node.node_type else {
        return Err(ModelCheckError::InternalInvariant(format!(
            "'{node}' is not a weak until formula"
        )));
    };

    let globally = CtlTreeNode::mk_unary((**left).clone(), globally_op);
    let until = CtlTreeNode::mk_binary((**left).clone(), (**right).clone(), until_op);
    eval_node(&globally, stg, labeling)?;
    eval_node(&until, stg, labeling)?;

    eval_disjunction(stg, labeling, globally.as_str(), until.as_str())
}
