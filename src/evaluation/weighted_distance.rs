//! Weighted Hamming geometry over the state space: neighbour enumeration, border
//! extraction, and the Dijkstra searches behind the quantitative semantics of atomic
//! propositions.
//!
//! A Hamming step changes exactly one coordinate by ±1 while staying within bounds; its
//! length is the coordinate weight `1/max_activity`. Distances are sums of step lengths
//! along shortest paths.

use crate::errors::ModelCheckError;
use crate::evaluation::priority_queue::MinPriorityQueue;
use crate::network::{State, StateSet};

use std::collections::{HashMap, HashSet};

/// Per-coordinate weights `1/m_i` derived from the maximum activities.
pub fn coordinate_weights(max_activities: &[u32]) -> Vec<f64> {
    max_activities.iter().map(|m| 1.0 / *m as f64).collect()
}

/// Enumerate all valid Hamming neighbours of `state` together with their step lengths.
pub fn hamming_neighbors(
    state: &State,
    max_activities: &[u32],
    weights: &[f64],
) -> Vec<(f64, State)> {
    let mut neighbors = Vec::with_capacity(2 * state.len());
    for i in 0..state.len() {
        for delta in [-1i64, 1] {
            let value = state[i] as i64 + delta;
            if value < 0 || value > max_activities[i] as i64 {
                continue;
            }
            let mut neighbor = state.clone();
            neighbor[i] = value as u32;
            neighbors.push((weights[i], neighbor));
        }
    }
    neighbors
}

/// Identify border states of `dov` and of its complement.
///
/// A state of `dov` is a border state if at least one of its Hamming neighbours lies
/// outside `dov`; those outside neighbours form the co-border. Returns the pair
/// `(border, co_border)`.
pub fn get_border_states(dov: &StateSet, max_activities: &[u32]) -> (StateSet, StateSet) {
    let weights = coordinate_weights(max_activities);
    let mut border = StateSet::new();
    let mut co_border = StateSet::new();

    for state in dov {
        for (_, neighbor) in hamming_neighbors(state, max_activities, &weights) {
            if !dov.contains(&neighbor) {
                border.insert(state.clone());
                co_border.insert(neighbor);
            }
        }
    }

    (border, co_border)
}

/// Compute the shortest weighted Hamming distance from `state` to any state of `targets`
/// by Dijkstra's algorithm over the Hamming graph.
///
/// Returns `+∞` if no target state is reachable (in particular when `targets` is empty).
pub fn weighted_distance(
    state: &State,
    targets: &StateSet,
    max_activities: &[u32],
) -> Result<f64, ModelCheckError> {
    let weights = coordinate_weights(max_activities);
    let mut queue = MinPriorityQueue::new();
    queue.push_or_decrease(state.clone(), 0.0)?;
    let mut visited: HashSet<State> = HashSet::new();

    while let Some((current, distance)) = queue.pop_min() {
        if targets.contains(&current) {
            return Ok(distance);
        }
        visited.insert(current.clone());

        for (step, neighbor) in hamming_neighbors(&current, max_activities, &weights) {
            if !visited.contains(&neighbor) {
                queue.push_or_decrease(neighbor, distance + step)?;
            }
        }
    }

    Ok(f64::INFINITY)
}

/// Find the greatest weighted distance any state of `region` lies from `frontier`.
///
/// Runs a multi-source Dijkstra seeded at the frontier (distance 0), relaxing only
/// through states of the region. Returns `+∞` when the region is empty or some of its
/// states cannot be reached from the frontier (e.g. the frontier is empty because the
/// region fills the whole space).
pub fn find_extreme_depth(
    region: &StateSet,
    frontier: &StateSet,
    max_activities: &[u32],
) -> Result<f64, ModelCheckError> {
    if region.is_empty() {
        return Ok(f64::INFINITY);
    }

    let weights = coordinate_weights(max_activities);
    let mut distances: HashMap<State, f64> =
        region.iter().map(|s| (s.clone(), f64::INFINITY)).collect();
    let mut queue = MinPriorityQueue::new();
    for state in frontier {
        queue.push_or_decrease(state.clone(), 0.0)?;
    }

    while let Some((current, distance)) = queue.pop_min() {
        for (step, neighbor) in hamming_neighbors(&current, max_activities, &weights) {
            let Some(best) = distances.get_mut(&neighbor) else {
                continue; // only relax through states of the region
            };
            let candidate = distance + step;
            if candidate < *best {
                *best = candidate;
                queue.push_or_decrease(neighbor, candidate)?;
            }
        }
    }

    Ok(distances.values().fold(f64::NEG_INFINITY, |a, b| a.max(*b)))
}
