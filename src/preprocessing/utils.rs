//! Contains functionality regarding proposition validation and the negation-elimination
//! rewrite that brings a formula into its positive normal form.

use crate::errors::ModelCheckError;
use crate::preprocessing::ctl_tree::*;
use crate::preprocessing::operator_enums::{AtomicBinaryOp, AtomicProposition, ComparisonOp};

use indexmap::IndexMap;

/// Check that every proposition in the formula references a declared network variable.
pub fn validate_propositions(
    tree: &CtlTreeNode,
    variables: &IndexMap<String, u32>,
) -> Result<(), ModelCheckError> {
    match &tree.node_type {
        NodeType::Constant(_) => Ok(()),
        NodeType::Atomic(atomic) => validate_atomic_propositions(atomic, variables),
        NodeType::Unary(_, child) => validate_propositions(child, variables),
        NodeType::Binary(_, left, right) => {
            validate_propositions(left, variables)?;
            validate_propositions(right, variables)
        }
    }
}

fn validate_atomic_propositions(
    tree: &AtomicTreeNode,
    variables: &IndexMap<String, u32>,
) -> Result<(), ModelCheckError> {
    match &tree.node_type {
        AtomicNodeType::Proposition(prop) => {
            if variables.contains_key(prop.variable.as_str()) {
                Ok(())
            } else {
                Err(ModelCheckError::MalformedFormula(format!(
                    "There is no network variable named '{}' (in '{tree}').",
                    prop.variable
                )))
            }
        }
        AtomicNodeType::Negation(child) => validate_atomic_propositions(child, variables),
        AtomicNodeType::Binary(_, left, right) => {
            validate_atomic_propositions(left, variables)?;
            validate_atomic_propositions(right, variables)
        }
    }
}

/// Rewrite the formula into its positive normal form, a semantically equivalent tree with
/// no negation nodes.
///
/// The rewrite is total: negations only exist in the atomic stratum, where they either
/// flip a comparison (`!(v >= k)` becomes `v <= k-1`), distribute through unions and
/// intersections by De Morgan, or cancel out. The rewrite is idempotent.
pub fn eliminate_negations(tree: CtlTreeNode) -> CtlTreeNode {
    match tree.node_type {
        NodeType::Constant(_) => tree,
        NodeType::Atomic(atomic) => CtlTreeNode::mk_atomic(eliminate_atomic_negations(atomic)),
        NodeType::Unary(op, child) => CtlTreeNode::mk_unary(eliminate_negations(*child), op),
        NodeType::Binary(op, left, right) => CtlTreeNode::mk_binary(
            eliminate_negations(*left),
            eliminate_negations(*right),
            op,
        ),
    }
}

/// Eliminate all negation nodes inside an atomic-stratum subtree.
pub fn eliminate_atomic_negations(tree: AtomicTreeNode) -> AtomicTreeNode {
    match tree.node_type {
        AtomicNodeType::Proposition(_) => tree,
        AtomicNodeType::Negation(child) => negate_atomic(*child),
        AtomicNodeType::Binary(op, left, right) => AtomicTreeNode::mk_binary(
            eliminate_atomic_negations(*left),
            eliminate_atomic_negations(*right),
            op,
        ),
    }
}

/// Push one negation into an atomic-stratum subtree, eliminating any nested negations on
/// the way down.
fn negate_atomic(tree: AtomicTreeNode) -> AtomicTreeNode {
    match tree.node_type {
        AtomicNodeType::Proposition(prop) => {
            let negated = match prop.op {
                ComparisonOp::Geq => {
                    AtomicProposition::new(&prop.variable, ComparisonOp::Leq, prop.threshold - 1)
                }
                ComparisonOp::Leq => {
                    AtomicProposition::new(&prop.variable, ComparisonOp::Geq, prop.threshold + 1)
                }
            };
            AtomicTreeNode::mk_proposition(negated)
        }
        // double negation cancels out
        AtomicNodeType::Negation(child) => eliminate_atomic_negations(*child),
        AtomicNodeType::Binary(op, left, right) => {
            let dual = match op {
                AtomicBinaryOp::Union => AtomicBinaryOp::Intersection,
                AtomicBinaryOp::Intersection => AtomicBinaryOp::Union,
            };
            AtomicTreeNode::mk_binary(negate_atomic(*left), negate_atomic(*right), dual)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::ModelCheckError;
    use crate::preprocessing::parser::parse_ctl_formula;
    use crate::preprocessing::utils::{eliminate_negations, validate_propositions};

    use indexmap::IndexMap;

    /// Parse a formula and return the canonical string of its positive normal form.
    fn pnf_str(formula: &str) -> String {
        eliminate_negations(parse_ctl_formula(formula).unwrap()).to_string()
    }

    #[test]
    /// Test the negation-elimination rewrite rules.
    fn negation_elimination() {
        // comparison flips
        assert_eq!(pnf_str("!x >= 2"), "x <= 1");
        assert_eq!(pnf_str("!x <= 2"), "x >= 3");
        // the threshold may leave the activity range, such propositions are just empty
        assert_eq!(pnf_str("!x >= 0"), "x <= -1");
        // double negation cancels
        assert_eq!(pnf_str("!!x >= 2"), "x >= 2");
        assert_eq!(pnf_str("!!!x >= 2"), "x <= 1");
        // De Morgan over both set operators
        assert_eq!(pnf_str("!(a >= 1 | b >= 1)"), "(a <= 0 & b <= 0)");
        assert_eq!(pnf_str("!(a >= 1 & b <= 2)"), "(a <= 0 | b >= 3)");
        // negation nested under temporal operators
        assert_eq!(
            pnf_str("AG !(a >= 1 | !b >= 1)"),
            "(AG (a <= 0 & b >= 1))"
        );
        // negation-free formulae are untouched
        assert_eq!(
            pnf_str("A x >= 1 U (EF y <= 0)"),
            "(A x >= 1 U (EF y <= 0))"
        );
    }

    #[test]
    /// Test that the rewrite is idempotent.
    fn negation_elimination_idempotent() {
        let formulae = vec![
            "!(a >= 1 | !(b >= 1 & a <= 2))",
            "AG EF !(a >= 1 & b >= 1)",
            "A !a >= 1 U (b >= 2 | !c <= 0)",
        ];
        for formula in formulae {
            let once = eliminate_negations(parse_ctl_formula(formula).unwrap());
            let twice = eliminate_negations(once.clone());
            assert_eq!(once, twice);
        }
    }

    #[test]
    /// Test validation of propositions against the declared variables.
    fn proposition_validation() {
        let variables = IndexMap::from([("a".to_string(), 2), ("b".to_string(), 1)]);

        let valid = parse_ctl_formula("AG (a >= 1 & b <= 0) && EF a <= 2").unwrap();
        assert!(validate_propositions(&valid, &variables).is_ok());

        let invalid = parse_ctl_formula("AG (a >= 1 & c <= 0)").unwrap();
        assert!(matches!(
            validate_propositions(&invalid, &variables),
            Err(ModelCheckError::MalformedFormula(_))
        ));
    }
}
