//! Model checking utilities regarding the initial-state specification.
//!
//! An initial-state specification is a list of regions; each region maps a variable to
//! its list of admissible values, and unconstrained variables range over their whole
//! activity range. The materialised set is the union of the per-region Cartesian
//! products.

use crate::errors::ModelCheckError;
use crate::network::state_graph::generate_all_states;
use crate::network::State;

use indexmap::IndexMap;
use itertools::Itertools;

use std::collections::{BTreeSet, HashMap};

/// Check that every region constrains only declared variables and only with values inside
/// their activity ranges.
pub fn validate_initial_states(
    regions: &[HashMap<String, Vec<i64>>],
    variables: &IndexMap<String, u32>,
) -> Result<(), ModelCheckError> {
    for region in regions {
        for (name, values) in region {
            let Some(max_value) = variables.get(name.as_str()) else {
                return Err(ModelCheckError::MalformedFormula(format!(
                    "Initial-state variable '{name}' is not declared in the network."
                )));
            };
            if values.iter().any(|v| *v < 0 || *v > *max_value as i64) {
                return Err(ModelCheckError::MalformedFormula(format!(
                    "Some value from {values:?} for variable '{name}' is out of bounds. \
                     Allowed range is [0, {max_value}]."
                )));
            }
        }
    }
    Ok(())
}

/// Materialise the set of initial states, sorted for deterministic iteration.
///
/// A missing (or empty) specification selects all states. The regions must have been
/// validated by [validate_initial_states]. A specification that selects no state at all
/// is rejected.
pub fn generate_initial_states(
    regions: Option<&Vec<HashMap<String, Vec<i64>>>>,
    variables: &IndexMap<String, u32>,
) -> Result<Vec<State>, ModelCheckError> {
    let Some(regions) = regions.filter(|r| !r.is_empty()) else {
        return Ok(generate_all_states(variables));
    };

    let mut result: BTreeSet<State> = BTreeSet::new();
    for region in regions {
        let domains: Vec<Vec<u32>> = variables
            .iter()
            .map(|(name, max_value)| match region.get(name.as_str()) {
                Some(values) => values.iter().map(|v| *v as u32).collect(),
                None => (0..=*max_value).collect(),
            })
            .collect();
        result.extend(domains.into_iter().multi_cartesian_product());
    }

    if result.is_empty() {
        return Err(ModelCheckError::MalformedFormula(
            "The initial-state specification selects no states.".to_string(),
        ));
    }
    Ok(result.into_iter().collect())
}
