use crate::_test_model_checking::_test_util::build_stg;
use crate::_test_model_checking::{MODEL_CHAIN, MODEL_TOGGLE, MODEL_TWO_GENE};
use crate::model_checking::{
    model_check_formula, model_check_multiple_formulae, model_check_tree,
    parse_and_normalise_formula,
};

#[test]
/// The weak until is the per-state maximum of the globally and until degrees, for both
/// path quantifiers.
fn weak_until_identity() {
    let stg = build_stg(MODEL_TOGGLE);
    let cases = [
        ("A a <= 1 W b >= 2", "AG a <= 1", "A a <= 1 U b >= 2"),
        ("E a <= 1 W b >= 2", "EG a <= 1", "E a <= 1 U b >= 2"),
    ];

    for (weak, globally, until) in cases {
        let weak_labels = model_check_formula(weak, &stg).unwrap();
        let globally_labels = model_check_formula(globally, &stg).unwrap();
        let until_labels = model_check_formula(until, &stg).unwrap();

        for state in stg.states() {
            assert_eq!(
                weak_labels[state],
                globally_labels[state].max(until_labels[state]),
                "weak until identity broken in state {state:?}"
            );
        }
    }
}

#[test]
/// A weak until with an unsatisfiable right operand equals the globally operator.
fn weak_until_with_false_right_operand() {
    let stg = build_stg(MODEL_TOGGLE);
    let weak_labels = model_check_formula("A a >= 1 W false", &stg).unwrap();
    let globally_labels = model_check_formula("AG a >= 1", &stg).unwrap();
    assert_eq!(weak_labels, globally_labels);
}

#[test]
/// State conjunction and disjunction are the per-state minimum and maximum.
fn conjunction_and_disjunction_laws() {
    let stg = build_stg(MODEL_TOGGLE);
    let left = model_check_formula("EF a >= 2", &stg).unwrap();
    let right = model_check_formula("AG b <= 1", &stg).unwrap();
    let conjunction = model_check_formula("(EF a >= 2) && (AG b <= 1)", &stg).unwrap();
    let disjunction = model_check_formula("(EF a >= 2) || (AG b <= 1)", &stg).unwrap();

    for state in stg.states() {
        assert_eq!(conjunction[state], left[state].min(right[state]));
        assert_eq!(disjunction[state], left[state].max(right[state]));
    }
}

#[test]
/// Every computed label of every sub-formula stays within [-1, +1].
fn labels_stay_in_range() {
    for model in [MODEL_CHAIN, MODEL_TWO_GENE, MODEL_TOGGLE] {
        let stg = build_stg(model);
        let first = stg.variables().keys().next().unwrap().clone();
        let formulae = [
            format!("AG ({first} >= 0)"),
            format!("A {first} >= 1 U {first} <= 0"),
            format!("EF !({first} >= 1)"),
        ];

        for formula in &formulae {
            let tree = parse_and_normalise_formula(formula, &stg).unwrap();
            let labeling = model_check_tree(&tree, &stg).unwrap();
            for key in labeling.keys() {
                let column = labeling.column(key).unwrap();
                for state in stg.states() {
                    let degree = column[state];
                    assert!(
                        (-1.0..=1.0).contains(&degree),
                        "label {degree} of '{key}' out of range in state {state:?}"
                    );
                }
            }
        }
    }
}

#[test]
/// Evaluating several formulae against a shared labeling gives the same results as
/// evaluating them separately.
fn shared_labeling_is_consistent() {
    let stg = build_stg(MODEL_TOGGLE);
    let formulae = ["EF a >= 2", "AG (EF a >= 2)", "(EF a >= 2) && EG b <= 1"];

    let shared = model_check_multiple_formulae(&formulae, &stg).unwrap();
    for (formula, shared_labels) in formulae.iter().zip(shared.iter()) {
        let separate = model_check_formula(formula, &stg).unwrap();
        assert_eq!(*shared_labels, separate, "formula '{formula}' differs");
    }
}

#[test]
/// Duplicate sub-formulae collapse to a single column with consistent values.
fn duplicate_sub_formulae_collapse() {
    let stg = build_stg(MODEL_TWO_GENE);
    let tree = parse_and_normalise_formula("(EF a >= 1) && (EF a >= 1)", &stg).unwrap();
    let labeling = model_check_tree(&tree, &stg).unwrap();

    // one column for the proposition, one for EF, one for the conjunction
    assert_eq!(labeling.keys().count(), 3);

    let conjunction = labeling.column(tree.as_str()).unwrap();
    let child = labeling.column("(EF a >= 1)").unwrap();
    assert_eq!(conjunction, child);
}
