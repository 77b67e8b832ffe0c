//! The domain-of-validity algebra: for an atomic-stratum sub-formula, compute the subset
//! of the state space satisfying it.

use crate::errors::ModelCheckError;
use crate::network::state_graph::generate_all_states;
use crate::network::StateSet;
use crate::preprocessing::ctl_tree::{AtomicNodeType, AtomicTreeNode};
use crate::preprocessing::operator_enums::{AtomicBinaryOp, AtomicProposition, ComparisonOp};

use indexmap::IndexMap;
use itertools::Itertools;

/// Compute the domain of validity of an atomic-stratum sub-formula.
///
/// The sub-formula must be negation-free; reaching a negation node means the rewrite to
/// positive normal form was skipped, which is an internal invariant violation.
pub fn compute_dov(
    node: &AtomicTreeNode,
    variables: &IndexMap<String, u32>,
) -> Result<StateSet, ModelCheckError> {
    match &node.node_type {
        AtomicNodeType::Proposition(prop) => proposition_dov(prop, variables),
        AtomicNodeType::Binary(AtomicBinaryOp::Union, left, right) => {
            let mut dov = compute_dov(left, variables)?;
            dov.extend(compute_dov(right, variables)?);
            Ok(dov)
        }
        AtomicNodeType::Binary(AtomicBinaryOp::Intersection, left, right) => {
            let left_dov = compute_dov(left, variables)?;
            let right_dov = compute_dov(right, variables)?;
            Ok(left_dov
                .into_iter()
                .filter(|state| right_dov.contains(state))
                .collect())
        }
        AtomicNodeType::Negation(_) => Err(ModelCheckError::InternalInvariant(format!(
            "negation '{node}' must be eliminated before computing its domain of validity"
        ))),
    }
}

/// Compute the complement of a domain of validity within the declared state space.
pub fn complement_dov(dov: &StateSet, variables: &IndexMap<String, u32>) -> StateSet {
    generate_all_states(variables)
        .into_iter()
        .filter(|state| !dov.contains(state))
        .collect()
}

/// The domain of validity of a single comparison: the admissible range of the compared
/// variable (clamped to its activity range) times the full ranges of all other variables.
fn proposition_dov(
    prop: &AtomicProposition,
    variables: &IndexMap<String, u32>,
) -> Result<StateSet, ModelCheckError> {
    let Some(max_value) = variables.get(prop.variable.as_str()) else {
        return Err(ModelCheckError::InternalInvariant(format!(
            "proposition '{prop}' references an unvalidated variable"
        )));
    };

    let (low, high) = match prop.op {
        ComparisonOp::Geq => (prop.threshold.max(0) as u32, *max_value),
        ComparisonOp::Leq if prop.threshold < 0 => (1, 0), // empty
        ComparisonOp::Leq => (0, (prop.threshold as u32).min(*max_value)),
    };
    if low > high {
        return Ok(StateSet::new());
    }

    let domains = variables.iter().map(|(name, var_max)| {
        if *name == prop.variable {
            low..=high
        } else {
            0..=*var_max
        }
    });
    Ok(domains.multi_cartesian_product().collect())
}

#[cfg(test)]
mod tests {
    use crate::errors::ModelCheckError;
    use crate::evaluation::domain_of_validity::{complement_dov, compute_dov};
    use crate::network::StateSet;
    use crate::preprocessing::ctl_tree::{CtlTreeNode, NodeType};
    use crate::preprocessing::parser::parse_ctl_formula;
    use crate::preprocessing::utils::eliminate_negations;

    use indexmap::IndexMap;

    fn two_var_space() -> IndexMap<String, u32> {
        IndexMap::from([("a".to_string(), 2), ("b".to_string(), 1)])
    }

    /// Parse an atomic-stratum formula (without eliminating negations).
    fn atomic_tree(formula: &str) -> CtlTreeNode {
        parse_ctl_formula(formula).unwrap()
    }

    fn dov_of(tree: &CtlTreeNode, variables: &IndexMap<String, u32>) -> StateSet {
        let NodeType::Atomic(atomic) = &tree.node_type else {
            panic!("expected an atomic formula");
        };
        compute_dov(atomic, variables).unwrap()
    }

    fn set_of(states: &[&[u32]]) -> StateSet {
        states.iter().map(|s| s.to_vec()).collect()
    }

    #[test]
    fn dov_of_comparisons() {
        let variables = two_var_space();

        let dov = dov_of(&atomic_tree("a >= 2"), &variables);
        assert_eq!(dov, set_of(&[&[2, 0], &[2, 1]]));

        let dov = dov_of(&atomic_tree("b <= 0"), &variables);
        assert_eq!(dov, set_of(&[&[0, 0], &[1, 0], &[2, 0]]));

        // thresholds outside the activity range are clamped or give the empty set
        let dov = dov_of(&atomic_tree("a >= -5"), &variables);
        assert_eq!(dov.len(), 6);
        let dov = dov_of(&atomic_tree("a <= 7"), &variables);
        assert_eq!(dov.len(), 6);
        assert!(dov_of(&atomic_tree("a >= 3"), &variables).is_empty());
        assert!(dov_of(&atomic_tree("a <= -1"), &variables).is_empty());
    }

    #[test]
    fn dov_of_set_operators() {
        let variables = two_var_space();

        let dov = dov_of(&atomic_tree("a >= 2 | b <= 0"), &variables);
        assert_eq!(dov, set_of(&[&[2, 0], &[2, 1], &[0, 0], &[1, 0]]));

        let dov = dov_of(&atomic_tree("a >= 2 & b <= 0"), &variables);
        assert_eq!(dov, set_of(&[&[2, 0]]));

        let dov = dov_of(&atomic_tree("a >= 2 & a <= 0"), &variables);
        assert!(dov.is_empty());
    }

    #[test]
    /// Negations must be eliminated before the domain is computed.
    fn dov_of_negation_is_rejected() {
        let variables = two_var_space();
        let tree = atomic_tree("!a >= 2");
        let NodeType::Atomic(atomic) = &tree.node_type else {
            panic!("expected an atomic formula");
        };
        assert!(matches!(
            compute_dov(atomic, &variables),
            Err(ModelCheckError::InternalInvariant(_))
        ));
    }

    #[test]
    /// The domain of an eliminated negation is the complement of the original domain.
    fn negation_duality() {
        let variables = two_var_space();
        let formulae = vec!["a >= 2", "b <= 0", "a >= 1 & b >= 1", "a <= 0 | b <= 0"];

        for formula in formulae {
            let positive = dov_of(&atomic_tree(formula), &variables);
            let negated = eliminate_negations(atomic_tree(&format!("!({formula})")));
            let negated_dov = dov_of(&negated, &variables);
            assert_eq!(negated_dov, complement_dov(&positive, &variables));
        }
    }
}
