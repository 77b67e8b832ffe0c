use crate::_test_model_checking::_test_util::{build_stg, check_expected_degrees};
use crate::_test_model_checking::{MODEL_CHAIN, MODEL_SINGLETON, MODEL_TOGGLE, MODEL_TWO_GENE};
use crate::errors::ModelCheckError;
use crate::model_checking::model_check_formula;

#[test]
/// Boolean constants label every state with +1 / -1.
fn constants_on_singleton() {
    let stg = build_stg(MODEL_SINGLETON);
    check_expected_degrees(&stg, "true", &[(&[0], 1.0), (&[1], 1.0)]);
    check_expected_degrees(&stg, "false", &[(&[0], -1.0), (&[1], -1.0)]);
}

#[test]
/// A simple proposition on the rising chain: degrees grade from -1 to +1.
fn proposition_on_chain() {
    let stg = build_stg(MODEL_CHAIN);
    check_expected_degrees(
        &stg,
        "x >= 2",
        &[(&[0], -1.0), (&[1], -0.5), (&[2], 1.0)],
    );
    check_expected_degrees(
        &stg,
        "x <= 0",
        &[(&[0], 1.0), (&[1], -0.5), (&[2], -1.0)],
    );
}

#[test]
/// An unsatisfiable atomic intersection has an empty domain: every state gets -1.
fn empty_intersection_on_chain() {
    let stg = build_stg(MODEL_CHAIN);
    check_expected_degrees(
        &stg,
        "x >= 2 & x <= 0",
        &[(&[0], -1.0), (&[1], -1.0), (&[2], -1.0)],
    );
}

#[test]
/// The state-stratum conjunction of the same comparisons is the per-state minimum
/// instead, so the middle state keeps its milder violation.
fn conjunction_on_chain() {
    let stg = build_stg(MODEL_CHAIN);
    check_expected_degrees(
        &stg,
        "x >= 2 && x <= 0",
        &[(&[0], -1.0), (&[1], -0.5), (&[2], -1.0)],
    );
}

#[test]
/// Next-state operators on the chain (every state has a single successor).
fn next_operators_on_chain() {
    let stg = build_stg(MODEL_CHAIN);
    let expected = [(&[0u32][..], -0.5), (&[1][..], 1.0), (&[2][..], 1.0)];
    check_expected_degrees(&stg, "AX x >= 2", &expected);
    check_expected_degrees(&stg, "EX x >= 2", &expected);
}

#[test]
/// AG over the two-gene activation cascade: only states that already satisfy the
/// proposition and never leave it keep a positive degree.
fn ag_on_two_gene_cascade() {
    let stg = build_stg(MODEL_TWO_GENE);
    check_expected_degrees(
        &stg,
        "AG a >= 1",
        &[
            (&[0, 0], -1.0),
            (&[0, 1], -1.0),
            (&[1, 0], 1.0),
            (&[1, 1], 1.0),
        ],
    );
}

#[test]
/// The witness state (1,1) is reachable from everywhere in the cascade.
fn ef_on_two_gene_cascade() {
    let stg = build_stg(MODEL_TWO_GENE);
    let expected = [
        (&[0u32, 0][..], 1.0),
        (&[0, 1][..], 1.0),
        (&[1, 0][..], 1.0),
        (&[1, 1][..], 1.0),
    ];
    check_expected_degrees(&stg, "EF (a >= 1 & b >= 1)", &expected);
    check_expected_degrees(&stg, "EF (a >= 1 && b >= 1)", &expected);
}

#[test]
/// A weak until with an unsatisfiable right operand degenerates to the globally
/// operator; with an always-true left operand the degree is +1 everywhere.
fn weak_until_degenerates_to_globally() {
    let stg = build_stg(MODEL_TWO_GENE);
    check_expected_degrees(
        &stg,
        "A a >= 0 W false",
        &[
            (&[0, 0], 1.0),
            (&[0, 1], 1.0),
            (&[1, 0], 1.0),
            (&[1, 1], 1.0),
        ],
    );
}

#[test]
/// Reachability of the a-dominant attractor on the toggle switch: states that already
/// committed to the b-dominant branch cannot reach it.
fn ef_on_toggle_switch() {
    let stg = build_stg(MODEL_TOGGLE);
    check_expected_degrees(
        &stg,
        "EF a >= 2",
        &[
            (&[0, 0], 1.0),
            (&[1, 0], 1.0),
            (&[2, 0], 1.0),
            (&[1, 1], 1.0),
            (&[2, 1], 1.0),
            (&[1, 2], 1.0),
            (&[2, 2], 1.0),
            (&[0, 1], -1.0),
            (&[0, 2], -1.0),
        ],
    );
}

#[test]
/// AF on the toggle switch: only the committed a-branch is forced to reach a >= 2;
/// undecided states keep the degree of their own violation.
fn af_on_toggle_switch() {
    let stg = build_stg(MODEL_TOGGLE);
    check_expected_degrees(
        &stg,
        "AF a >= 2",
        &[
            (&[2, 0], 1.0),
            (&[2, 1], 1.0),
            (&[2, 2], 1.0),
            (&[1, 0], 1.0),
            (&[1, 1], -0.5),
            (&[1, 2], -0.5),
            (&[0, 0], -1.0),
            (&[0, 1], -1.0),
            (&[0, 2], -1.0),
        ],
    );
}

#[test]
/// AG on the toggle switch: keeping a low forever only succeeds once b dominates.
fn ag_on_toggle_switch() {
    let stg = build_stg(MODEL_TOGGLE);
    check_expected_degrees(
        &stg,
        "AG a <= 1",
        &[
            (&[0, 1], 1.0),
            (&[0, 2], 1.0),
            (&[0, 0], -1.0),
            (&[1, 0], -1.0),
            (&[2, 0], -1.0),
            (&[1, 1], -1.0),
            (&[2, 1], -1.0),
            (&[1, 2], -1.0),
            (&[2, 2], -1.0),
        ],
    );
}

#[test]
/// EG on the toggle switch: a state may pick its best branch, but its degree stays
/// bounded by its own depth inside the domain.
fn eg_on_toggle_switch() {
    let stg = build_stg(MODEL_TOGGLE);
    check_expected_degrees(
        &stg,
        "EG a <= 1",
        &[
            (&[0, 0], 1.0),
            (&[0, 1], 1.0),
            (&[0, 2], 1.0),
            (&[1, 1], 0.5),
            (&[1, 2], 0.5),
            (&[1, 0], -1.0),
            (&[2, 0], -1.0),
            (&[2, 1], -1.0),
            (&[2, 2], -1.0),
        ],
    );
}

#[test]
/// EU on the toggle switch: reach b-dominance while keeping a low.
fn eu_on_toggle_switch() {
    let stg = build_stg(MODEL_TOGGLE);
    check_expected_degrees(
        &stg,
        "E a <= 1 U b >= 2",
        &[
            (&[0, 0], 1.0),
            (&[0, 1], 1.0),
            (&[0, 2], 1.0),
            (&[1, 2], 1.0),
            (&[2, 2], 1.0),
            (&[1, 1], 0.5),
            (&[2, 1], -0.5),
            (&[1, 0], -1.0),
            (&[2, 0], -1.0),
        ],
    );
}

#[test]
/// Formulae over undeclared variables are rejected.
fn unknown_proposition_is_rejected() {
    let stg = build_stg(MODEL_CHAIN);
    assert!(matches!(
        model_check_formula("AG y >= 1", &stg),
        Err(ModelCheckError::MalformedFormula(_))
    ));
}
