//! Model-checking analysis from start to finish, with progress output and result prints.

use crate::errors::ModelCheckError;
use crate::evaluation::algorithm::eval_node;
use crate::evaluation::labeling::{QuantLabeling, StateLabels};
use crate::load_inputs::InputDocument;
use crate::mc_utils::{generate_initial_states, validate_initial_states};
use crate::network::mvgrn::MultivaluedGrn;
use crate::network::state_graph::StateTransitionGraph;
use crate::network::State;
use crate::preprocessing::parser::parse_ctl_formula;
use crate::preprocessing::utils::{eliminate_negations, validate_propositions};
use crate::result_print::*;

use std::time::SystemTime;

/// Aggregated satisfaction degrees of a formula over the set of initial states.
#[derive(Clone, Debug, PartialEq)]
pub struct SatisfactionSummary {
    pub minimum: f64,
    pub maximum: f64,
    pub mean: f64,
    /// A witness initial state attaining the minimum.
    pub min_state: State,
    /// A witness initial state attaining the maximum.
    pub max_state: State,
}

/// Summarise the satisfaction degrees of one labeling column over the initial states.
///
/// The witnesses are the first states attaining the extremes in the (sorted) iteration
/// order of `initial_states`.
pub fn summarize_initial_states(
    labels: &StateLabels,
    initial_states: &[State],
) -> Result<SatisfactionSummary, ModelCheckError> {
    let mut minimum = f64::INFINITY;
    let mut maximum = f64::NEG_INFINITY;
    let mut cumulative = 0.0;
    let mut min_state: Option<&State> = None;
    let mut max_state: Option<&State> = None;

    for state in initial_states {
        let Some(degree) = labels.get(state).copied() else {
            return Err(ModelCheckError::InternalInvariant(format!(
                "no label computed for initial state {state:?}"
            )));
        };
        if degree < minimum {
            minimum = degree;
            min_state = Some(state);
        }
        if degree > maximum {
            maximum = degree;
            max_state = Some(state);
        }
        cumulative += degree;
    }

    match (min_state, max_state) {
        (Some(min_state), Some(max_state)) => Ok(SatisfactionSummary {
            minimum,
            maximum,
            mean: cumulative / initial_states.len() as f64,
            min_state: min_state.clone(),
            max_state: max_state.clone(),
        }),
        _ => Err(ModelCheckError::InternalInvariant(
            "cannot summarise over an empty set of initial states".to_string(),
        )),
    }
}

/// Perform the whole model-checking analysis for one input document. This comprises the
/// complete process from parsing to summarising the results.
///
/// Print the selected amount of progress and result info (summary only / + timing /
/// + phases / exhaustive per-state degrees).
pub fn analyse_input_document(
    doc: &InputDocument,
    print_opt: PrintOptions,
) -> Result<(), ModelCheckError> {
    let start = SystemTime::now();
    print_if_allowed(
        "============ INITIAL PHASE ============".to_string(),
        print_opt,
    );

    // parse the formula and rewrite it to positive normal form
    let tree = parse_ctl_formula(doc.formula.as_str())?;
    print_if_allowed(format!("Original formula:     {}", doc.formula), print_opt);
    print_if_allowed(format!("Parsed version:       {tree}"), print_opt);

    let grn = MultivaluedGrn::from_input(&doc.network)?;
    validate_propositions(&tree, &grn.variables)?;
    let tree = eliminate_negations(tree);
    print_if_allowed(format!("Positive normal form: {tree}"), print_opt);
    print_if_allowed("-----".to_string(), print_opt);

    // build the state-transition graph
    let stg = StateTransitionGraph::new(&grn)?;
    print_if_allowed(
        format!(
            "Loaded MvGRN model with {} variables and {} regulations.",
            grn.variables.len(),
            grn.regulations.len()
        ),
        print_opt,
    );
    print_if_allowed(
        format!("Built STG that admits {} states.", stg.states().len()),
        print_opt,
    );

    // materialise the initial states
    let regions = doc.init_states.as_deref().unwrap_or(&[]);
    validate_initial_states(regions, &grn.variables)?;
    let initial_states = generate_initial_states(doc.init_states.as_ref(), &grn.variables)?;
    print_if_allowed(
        format!("Materialised {} initial states.", initial_states.len()),
        print_opt,
    );
    if let Ok(elapsed) = start.elapsed() {
        print_if_allowed(
            format!(
                "Time to parse the formula + build STG: {}ms.",
                elapsed.as_millis()
            ),
            print_opt,
        );
    }
    print_if_allowed("-----".to_string(), print_opt);

    // evaluate all sub-formulae in dependency order
    print_if_allowed(
        "============ EVALUATION PHASE ============".to_string(),
        print_opt,
    );
    let eval_start = SystemTime::now();
    let mut labeling = QuantLabeling::new();
    for sub_formula in tree.sub_formulae() {
        eval_node(sub_formula, &stg, &mut labeling)?;
        print_if_allowed(format!("Evaluated sub-formula: {sub_formula}"), print_opt);
    }

    if print_opt != PrintOptions::NoPrint {
        if let Ok(elapsed) = eval_start.elapsed() {
            println!("Time to evaluate the formula: {}ms.", elapsed.as_millis());
        }
        println!("-----");
    }

    // summarise the root column over the initial states
    let root_labels = labeling.column(tree.as_str())?;
    let summary = summarize_initial_states(root_labels, &initial_states)?;
    print_summary(doc.formula.as_str(), &summary);

    if print_opt == PrintOptions::FullPrint {
        print_states_full(root_labels, &initial_states);
    }
    Ok(())
}
