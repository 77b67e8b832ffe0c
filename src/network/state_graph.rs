//! The state-transition graph of a multi-valued network, with enumerable successors and
//! predecessors.
//!
//! The graph is total: every state has at least one outgoing edge, because a state without
//! any regulator-driven successor gets a self-loop.

use crate::errors::ModelCheckError;
use crate::network::mvgrn::{ContextInterval, MultivaluedGrn, Regulation};
use crate::network::State;

use indexmap::IndexMap;
use itertools::Itertools;

use std::collections::HashMap;

/// The directed graph over all states of a network.
///
/// Built once per run and immutable thereafter. Successor and predecessor lists are
/// precomputed for every state.
#[derive(Clone, Debug)]
pub struct StateTransitionGraph {
    variables: IndexMap<String, u32>,
    states: Vec<State>,
    successors: HashMap<State, Vec<State>>,
    predecessors: HashMap<State, Vec<State>>,
}

/// Enumerate the full state space of the given variables, in row-major order (the last
/// declared variable changes fastest).
pub fn generate_all_states(variables: &IndexMap<String, u32>) -> Vec<State> {
    variables
        .values()
        .map(|max_value| 0..=*max_value)
        .multi_cartesian_product()
        .collect()
}

impl StateTransitionGraph {
    /// Construct the state-transition graph of the given network.
    ///
    /// Fails with [ModelCheckError::MalformedNetwork] if successor enumeration ever
    /// produces a state outside the declared space.
    pub fn new(grn: &MultivaluedGrn) -> Result<StateTransitionGraph, ModelCheckError> {
        let variables = grn.variables.clone();
        let states = generate_all_states(&variables);

        // resolve, per variable, its regulation and the coordinates of its regulators
        let compiled: Vec<Option<(&Regulation, Vec<usize>)>> = variables
            .keys()
            .map(|name| {
                grn.regulations
                    .iter()
                    .find(|regulation| regulation.target == *name)
                    .map(|regulation| {
                        // regulator names were validated during network parsing
                        let regulator_indices = regulation
                            .regulators
                            .iter()
                            .map(|regulator| {
                                variables.get_index_of(regulator.variable.as_str()).unwrap()
                            })
                            .collect();
                        (regulation, regulator_indices)
                    })
            })
            .collect();

        let mut successors: HashMap<State, Vec<State>> = HashMap::with_capacity(states.len());
        let mut predecessors: HashMap<State, Vec<State>> =
            states.iter().map(|s| (s.clone(), Vec::new())).collect();

        for state in &states {
            let mut state_successors = compute_state_successors(state, &compiled);
            if state_successors.is_empty() {
                // a state with no regulator-driven successor keeps a self-loop
                state_successors.push(state.clone());
            }

            for successor in &state_successors {
                // the predecessor map is keyed by exactly the declared state space
                let Some(successor_predecessors) = predecessors.get_mut(successor) else {
                    return Err(ModelCheckError::MalformedNetwork(format!(
                        "Successor {successor:?} of state {state:?} is outside the state space."
                    )));
                };
                successor_predecessors.push(state.clone());
            }
            successors.insert(state.clone(), state_successors);
        }

        Ok(StateTransitionGraph {
            variables,
            states,
            successors,
            predecessors,
        })
    }

    /// All states of the graph, in a deterministic (row-major) order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Direct successors of the given state; never empty for states of the graph.
    pub fn successors(&self, state: &State) -> &[State] {
        self.successors.get(state).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Direct predecessors of the given state.
    pub fn predecessors(&self, state: &State) -> &[State] {
        self.predecessors
            .get(state)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The ordered mapping from variable names to maximum activities.
    pub fn variables(&self) -> &IndexMap<String, u32> {
        &self.variables
    }

    /// The maximum activities in variable declaration order.
    pub fn max_activities(&self) -> Vec<u32> {
        self.variables.values().copied().collect()
    }
}

/// Compute all regulator-driven successor states of `state`.
///
/// Each regulated variable evaluates its first matching context and makes a unitary step
/// toward that context's target value; proposals that would not change the variable are
/// dropped.
fn compute_state_successors(
    state: &State,
    compiled: &[Option<(&Regulation, Vec<usize>)>],
) -> Vec<State> {
    let mut successors = Vec::new();

    for (var_idx, entry) in compiled.iter().enumerate() {
        let Some((regulation, regulator_indices)) = entry else {
            continue; // variable without regulation is a static input
        };
        let regulator_values: Vec<u32> = regulator_indices.iter().map(|i| state[*i]).collect();

        // find the first matching context and step toward its target
        for context in &regulation.contexts {
            if is_context_satisfied(&context.intervals, regulation, &regulator_values) {
                let delta = context.target_value as i64 - state[var_idx] as i64;
                if delta != 0 {
                    let mut next_state = state.clone();
                    next_state[var_idx] = (state[var_idx] as i64 + delta.signum()) as u32;
                    successors.push(next_state);
                }
                break;
            }
        }
    }

    successors
}

/// Check whether a context's intervals are satisfied by the given regulator values.
///
/// An interval index `k` means the regulator's value lies in the `k`-th (1-based) interval
/// carved out by its thresholds.
fn is_context_satisfied(
    intervals: &[ContextInterval],
    regulation: &Regulation,
    regulator_values: &[u32],
) -> bool {
    for (i, interval) in intervals.iter().enumerate() {
        let ContextInterval::Index(expected) = interval else {
            continue;
        };
        let thresholds = &regulation.regulators[i].thresholds;
        let value = regulator_values[i];
        // count the thresholds below or at the value to get its 1-based interval index
        let actual = thresholds.partition_point(|t| *t <= value) as u32 + 1;
        if actual != *expected {
            return false;
        }
    }
    true
}
