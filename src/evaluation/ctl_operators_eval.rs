//! Contains the quantitative evaluation of the individual CTL operators.
//!
//! Every function computes one labeling column from the columns of the operator's direct
//! sub-formulae (which the driver guarantees to be finished). The temporal operators
//! AG/EG and AF/EF/AU/EU run priority-queue back-propagation fixed points; the queue
//! discipline is decrease-only (greatest fixed points) or increase-only (least fixed
//! points), which together with the bounded value range guarantees termination.

use crate::errors::ModelCheckError;
use crate::evaluation::domain_of_validity::{complement_dov, compute_dov};
use crate::evaluation::labeling::{QuantLabeling, StateLabels};
use crate::evaluation::priority_queue::{MaxPriorityQueue, MinPriorityQueue};
use crate::evaluation::weighted_distance::{
    find_extreme_depth, get_border_states, weighted_distance,
};
use crate::network::state_graph::StateTransitionGraph;
use crate::network::State;
use crate::preprocessing::ctl_tree::AtomicTreeNode;

/// Read the degree of a single state from a finished column.
fn state_value(labels: &StateLabels, state: &State) -> Result<f64, ModelCheckError> {
    labels.get(state).copied().ok_or_else(|| {
        ModelCheckError::InternalInvariant(format!("no label computed for state {state:?}"))
    })
}

/// The smallest degree among the successors of `state` (universal branching).
fn min_over_successors(
    stg: &StateTransitionGraph,
    labels: &StateLabels,
    state: &State,
) -> Result<f64, ModelCheckError> {
    let mut minimum = f64::INFINITY;
    for successor in stg.successors(state) {
        minimum = minimum.min(state_value(labels, successor)?);
    }
    Ok(minimum)
}

/// The largest degree among the successors of `state` (existential branching).
fn max_over_successors(
    stg: &StateTransitionGraph,
    labels: &StateLabels,
    state: &State,
) -> Result<f64, ModelCheckError> {
    let mut maximum = f64::NEG_INFINITY;
    for successor in stg.successors(state) {
        maximum = maximum.max(state_value(labels, successor)?);
    }
    Ok(maximum)
}

/// Evaluate a Boolean constant: `+1` everywhere for `true`, `-1` for `false`.
pub fn eval_constant(stg: &StateTransitionGraph, value: bool) -> StateLabels {
    let degree = if value { 1.0 } else { -1.0 };
    stg.states().iter().map(|s| (s.clone(), degree)).collect()
}

/// Evaluate an atomic-stratum sub-formula through its weighted Hamming geometry.
///
/// States inside the domain of validity are labeled with their depth (distance to the
/// co-border) normalised by the greatest depth; states outside with the negated distance
/// to the border normalised by the greatest such distance. An infinite normalisation
/// constant (empty frontier) pins the degree to ±1.
pub fn eval_atomic(
    stg: &StateTransitionGraph,
    node: &AtomicTreeNode,
) -> Result<StateLabels, ModelCheckError> {
    let max_activities = stg.max_activities();
    let dov = compute_dov(node, stg.variables())?;
    let co_dov = complement_dov(&dov, stg.variables());
    let (border, co_border) = get_border_states(&dov, &max_activities);

    let max_dov_depth = find_extreme_depth(&dov, &co_border, &max_activities)?;
    let max_co_dov_depth = find_extreme_depth(&co_dov, &border, &max_activities)?;

    let mut labels = StateLabels::with_capacity(stg.states().len());
    for state in stg.states() {
        let degree = if dov.contains(state) {
            if max_dov_depth.is_infinite() {
                1.0
            } else {
                weighted_distance(state, &co_border, &max_activities)? / max_dov_depth
            }
        } else if max_co_dov_depth.is_infinite() {
            -1.0
        } else {
            -weighted_distance(state, &border, &max_activities)? / max_co_dov_depth
        };
        labels.insert(state.clone(), degree);
    }
    Ok(labels)
}

/// Evaluate a conjunction as the per-state minimum of its operands.
pub fn eval_conjunction(
    stg: &StateTransitionGraph,
    labeling: &QuantLabeling,
    left_key: &str,
    right_key: &str,
) -> Result<StateLabels, ModelCheckError> {
    let left = labeling.column(left_key)?;
    let right = labeling.column(right_key)?;

    let mut labels = StateLabels::with_capacity(stg.states().len());
    for state in stg.states() {
        let degree = state_value(left, state)?.min(state_value(right, state)?);
        labels.insert(state.clone(), degree);
    }
    Ok(labels)
}

/// Evaluate a disjunction as the per-state maximum of its operands.
pub fn eval_disjunction(
    stg: &StateTransitionGraph,
    labeling: &QuantLabeling,
    left_key: &str,
    right_key: &str,
) -> Result<StateLabels, ModelCheckError> {
    let left = labeling.column(left_key)?;
    let right = labeling.column(right_key)?;

    let mut labels = StateLabels::with_capacity(stg.states().len());
    for state in stg.states() {
        let degree = state_value(left, state)?.max(state_value(right, state)?);
        labels.insert(state.clone(), degree);
    }
    Ok(labels)
}

/// Evaluate the AX operator: the minimum of the operand over all successors.
pub fn eval_ax(
    stg: &StateTransitionGraph,
    labeling: &QuantLabeling,
    child_key: &str,
) -> Result<StateLabels, ModelCheckError> {
    let child = labeling.column(child_key)?;
    let mut labels = StateLabels::with_capacity(stg.states().len());
    for state in stg.states() {
        labels.insert(state.clone(), min_over_successors(stg, child, state)?);
    }
    Ok(labels)
}

/// Evaluate the EX operator: the maximum of the operand over all successors.
pub fn eval_ex(
    stg: &StateTransitionGraph,
    labeling: &QuantLabeling,
    child_key: &str,
) -> Result<StateLabels, ModelCheckError> {
    let child = labeling.column(child_key)?;
    let mut labels = StateLabels::with_capacity(stg.states().len());
    for state in stg.states() {
        labels.insert(state.clone(), max_over_successors(stg, child, state)?);
    }
    Ok(labels)
}

/// Evaluate the AG operator as a greatest fixed point.
///
/// Every state starts at its operand degree and can only decrease, toward the minimum of
/// its successors' AG degrees. The min-queue processes the worst propagated values first;
/// a state whose degree dropped notifies its predecessors with the newly written value.
pub fn eval_ag(
    stg: &StateTransitionGraph,
    labeling: &QuantLabeling,
    child_key: &str,
) -> Result<StateLabels, ModelCheckError> {
    let mut labels = labeling.column(child_key)?.clone();
    let mut queue = MinPriorityQueue::new();
    for state in stg.states() {
        let propagated = min_over_successors(stg, &labels, state)?;
        queue.push_or_decrease(state.clone(), propagated)?;
    }

    while let Some((state, _)) = queue.pop_min() {
        let propagated = min_over_successors(stg, &labels, &state)?;
        if propagated < state_value(&labels, &state)? {
            labels.insert(state.clone(), propagated);
            for predecessor in stg.predecessors(&state) {
                queue.push_or_decrease(predecessor.clone(), propagated)?;
            }
        }
    }
    Ok(labels)
}

/// Evaluate the EG operator as a greatest fixed point.
///
/// Like [eval_ag], but a state decreases toward the *maximum* of its successors' EG
/// degrees (one good branch suffices).
pub fn eval_eg(
    stg: &StateTransitionGraph,
    labeling: &QuantLabeling,
    child_key: &str,
) -> Result<StateLabels, ModelCheckError> {
    let mut labels = labeling.column(child_key)?.clone();
    let mut queue = MinPriorityQueue::new();
    for state in stg.states() {
        let propagated = max_over_successors(stg, &labels, state)?;
        queue.push_or_decrease(state.clone(), propagated)?;
    }

    while let Some((state, _)) = queue.pop_min() {
        let propagated = max_over_successors(stg, &labels, &state)?;
        if propagated < state_value(&labels, &state)? {
            labels.insert(state.clone(), propagated);
            for predecessor in stg.predecessors(&state) {
                queue.push_or_decrease(predecessor.clone(), propagated)?;
            }
        }
    }
    Ok(labels)
}

/// Evaluate the AF operator as a least fixed point.
///
/// Every state starts at its operand degree and can only increase, toward the minimum of
/// its successors' AF degrees (all branches must eventually reach the operand).
pub fn eval_af(
    stg: &StateTransitionGraph,
    labeling: &QuantLabeling,
    child_key: &str,
) -> Result<StateLabels, ModelCheckError> {
    let mut labels = labeling.column(child_key)?.clone();
    let mut queue = MaxPriorityQueue::new();
    for state in stg.states() {
        let propagated = min_over_successors(stg, &labels, state)?;
        queue.push_or_increase(state.clone(), propagated)?;
    }

    while let Some((state, _)) = queue.pop_max() {
        let propagated = min_over_successors(stg, &labels, &state)?;
        if propagated > state_value(&labels, &state)? {
            labels.insert(state.clone(), propagated);
            for predecessor in stg.predecessors(&state) {
                queue.push_or_increase(predecessor.clone(), propagated)?;
            }
        }
    }
    Ok(labels)
}

/// Evaluate the EF operator as a least fixed point.
///
/// Like [eval_af], but a state increases toward the *maximum* of its successors' EF
/// degrees (a single witness path suffices).
pub fn eval_ef(
    stg: &StateTransitionGraph,
    labeling: &QuantLabeling,
    child_key: &str,
) -> Result<StateLabels, ModelCheckError> {
    let mut labels = labeling.column(child_key)?.clone();
    let mut queue = MaxPriorityQueue::new();
    for state in stg.states() {
        let propagated = max_over_successors(stg, &labels, state)?;
        queue.push_or_increase(state.clone(), propagated)?;
    }

    while let Some((state, _)) = queue.pop_max() {
        let propagated = max_over_successors(stg, &labels, &state)?;
        if propagated > state_value(&labels, &state)? {
            labels.insert(state.clone(), propagated);
            for predecessor in stg.predecessors(&state) {
                queue.push_or_increase(predecessor.clone(), propagated)?;
            }
        }
    }
    Ok(labels)
}

/// Evaluate the AU operator as a least fixed point.
///
/// Every state starts at the degree of the right operand. A state may improve to
/// `min(left, min over successors of the until degree)`: extending the prefix with the
/// current state is only as good as its weakest link.
pub fn eval_au(
    stg: &StateTransitionGraph,
    labeling: &QuantLabeling,
    left_key: &str,
    right_key: &str,
) -> Result<StateLabels, ModelCheckError> {
    let left = labeling.column(left_key)?;
    let mut labels = labeling.column(right_key)?.clone();
    let mut queue = MaxPriorityQueue::new();
    for state in stg.states() {
        let propagated = min_over_successors(stg, &labels, state)?;
        queue.push_or_increase(state.clone(), propagated.min(state_value(left, state)?))?;
    }

    while let Some((state, _)) = queue.pop_max() {
        let propagated = min_over_successors(stg, &labels, &state)?;
        let extended = propagated.min(state_value(left, &state)?);
        if extended > state_value(&labels, &state)? {
            labels.insert(state.clone(), extended);
            for predecessor in stg.predecessors(&state) {
                queue.push_or_increase(predecessor.clone(), extended)?;
            }
        }
    }
    Ok(labels)
}

/// Evaluate the EU operator as a least fixed point.
///
/// Like [eval_au], but the successor quantifier is the maximum (an existential witness
/// path suffices).
pub fn eval_eu(
    stg: &StateTransitionGraph,
    labeling: &QuantLabeling,
    left_key: &str,
    right_key: &str,
) -> Result<StateLabels, ModelCheckError> {
    let left = labeling.column(left_key)?;
    let mut labels = labeling.column(right_key)?.clone();
    let mut queue = MaxPriorityQueue::new();
    for state in stg.states() {
        let propagated = max_over_successors(stg, &labels, state)?;
        queue.push_or_increase(state.clone(), propagated.min(state_value(left, state)?))?;
    }

    while let Some((state, _)) = queue.pop_max() {
        let propagated = max_over_successors(stg, &labels, &state)?;
        let extended = propagated.min(state_value(left, &state)?);
        if extended > state_value(&labels, &state)? {
            labels.insert(state.clone(), extended);
            for predecessor in stg.predecessors(&state) {
                queue.push_or_increase(predecessor.clone(), extended)?;
            }
        }
    }
    Ok(labels)
}
