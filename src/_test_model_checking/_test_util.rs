use crate::load_inputs::parse_input_document;
use crate::model_checking::model_check_formula;
use crate::network::mvgrn::MultivaluedGrn;
use crate::network::state_graph::StateTransitionGraph;

/// Build the state-transition graph for one of the literal network models.
pub(super) fn build_stg(network_json: &str) -> StateTransitionGraph {
    let json = format!(r#"{{ "network": {network_json}, "formula": "true" }}"#);
    let doc = parse_input_document(json.as_str()).unwrap();
    let grn = MultivaluedGrn::from_input(&doc.network).unwrap();
    StateTransitionGraph::new(&grn).unwrap()
}

/// Evaluate `formula` on the graph and compare the satisfaction degree of every listed
/// state with its expected value.
pub(super) fn check_expected_degrees(
    stg: &StateTransitionGraph,
    formula: &str,
    expected: &[(&[u32], f64)],
) {
    let labels = model_check_formula(formula, stg).unwrap();
    assert_eq!(labels.len(), stg.states().len());
    for (state, degree) in expected {
        assert_eq!(
            labels[&state.to_vec()],
            *degree,
            "wrong degree of '{formula}' in state {state:?}"
        );
    }
}
