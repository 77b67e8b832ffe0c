//! The validated multi-valued gene-regulatory network model.
//!
//! A network consists of variables with maximum activity levels and, for each regulated
//! variable, a list of regulators (with activity thresholds) and regulatory contexts.
//! A context addresses, for every regulator, one of the activity intervals carved out by
//! its thresholds (or all of them with a don't-care), and prescribes a target value.

use crate::errors::ModelCheckError;
use crate::load_inputs::{ContextData, IntervalData, NetworkData, RegulationData, RegulatorData};

use indexmap::IndexMap;

/// One regulator of a target variable, with its strictly ascending activity thresholds.
///
/// Thresholds carve the regulator's activity range `[0, max]` into `|thresholds| + 1`
/// intervals, addressed 1-based by regulatory contexts.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Regulator {
    pub variable: String,
    pub thresholds: Vec<u32>,
}

/// One entry of a context's interval list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContextInterval {
    /// The regulator's value must fall into the given (1-based) threshold interval.
    Index(u32),
    /// Don't care.
    Any,
}

/// One regulatory context: interval constraints (one per regulator) and the target value
/// the regulated variable moves toward when the constraints are satisfied.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegulatoryContext {
    pub intervals: Vec<ContextInterval>,
    pub target_value: u32,
}

/// The full regulation of one target variable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Regulation {
    pub target: String,
    pub regulators: Vec<Regulator>,
    pub contexts: Vec<RegulatoryContext>,
}

/// A validated multi-valued gene-regulatory network.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MultivaluedGrn {
    /// Maximum activity per variable; declaration order defines coordinate indices.
    pub variables: IndexMap<String, u32>,
    pub regulations: Vec<Regulation>,
}

impl MultivaluedGrn {
    /// Validate raw network data and build the typed model.
    pub fn from_input(data: &NetworkData) -> Result<MultivaluedGrn, ModelCheckError> {
        let variables = validate_variables(data)?;
        let regulations = data
            .regulations
            .iter()
            .map(|regulation| validate_regulation(regulation, &variables))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MultivaluedGrn {
            variables,
            regulations,
        })
    }
}

/// Check that each variable has a positive maximum activity value.
fn validate_variables(data: &NetworkData) -> Result<IndexMap<String, u32>, ModelCheckError> {
    if data.variables.is_empty() {
        return Err(ModelCheckError::MalformedNetwork(
            "The network must declare at least one variable.".to_string(),
        ));
    }

    let mut variables = IndexMap::new();
    for (name, max_value) in &data.variables {
        if *max_value <= 0 {
            return Err(ModelCheckError::MalformedNetwork(format!(
                "Invalid max activity value {max_value} for '{name}'. Must be an integer > 0."
            )));
        }
        variables.insert(name.clone(), *max_value as u32);
    }
    Ok(variables)
}

/// Validate an individual regulation structure.
fn validate_regulation(
    regulation: &RegulationData,
    variables: &IndexMap<String, u32>,
) -> Result<Regulation, ModelCheckError> {
    let target = regulation.target.clone();
    let Some(target_max) = variables.get(target.as_str()) else {
        return Err(ModelCheckError::MalformedNetwork(format!(
            "Target '{target}' is not defined in 'variables'."
        )));
    };

    let regulators = regulation
        .regulators
        .iter()
        .map(|regulator| validate_regulator(regulator, variables))
        .collect::<Result<Vec<_>, _>>()?;

    let contexts = regulation
        .contexts
        .iter()
        .map(|context| validate_context(context, &target, *target_max, &regulators))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Regulation {
        target,
        regulators,
        contexts,
    })
}

/// Validate an individual regulator and its thresholds.
fn validate_regulator(
    regulator: &RegulatorData,
    variables: &IndexMap<String, u32>,
) -> Result<Regulator, ModelCheckError> {
    let name = regulator.variable.clone();
    let Some(max_value) = variables.get(name.as_str()) else {
        return Err(ModelCheckError::MalformedNetwork(format!(
            "Regulator '{name}' is not defined in 'variables'."
        )));
    };

    if !regulator
        .thresholds
        .iter()
        .all(|t| 0 < *t && *t <= *max_value as i64)
    {
        return Err(ModelCheckError::MalformedNetwork(format!(
            "Invalid thresholds {:?} for '{name}'. Must be within [1, {max_value}].",
            regulator.thresholds
        )));
    }
    if !regulator
        .thresholds
        .windows(2)
        .all(|pair| pair[0] < pair[1])
    {
        return Err(ModelCheckError::MalformedNetwork(format!(
            "Invalid thresholds {:?} for '{name}'. Thresholds must be ascending.",
            regulator.thresholds
        )));
    }

    Ok(Regulator {
        variable: name,
        thresholds: regulator.thresholds.iter().map(|t| *t as u32).collect(),
    })
}

/// Validate an individual context against the target's range and the regulator list.
fn validate_context(
    context: &ContextData,
    target: &str,
    target_max: u32,
    regulators: &[Regulator],
) -> Result<RegulatoryContext, ModelCheckError> {
    if context.target_value < 0 || context.target_value > target_max as i64 {
        return Err(ModelCheckError::MalformedNetwork(format!(
            "Target value {} for '{target}' must be in range [0, {target_max}].",
            context.target_value
        )));
    }
    if context.intervals.len() != regulators.len() {
        return Err(ModelCheckError::MalformedNetwork(format!(
            "Length of 'intervals' ({}) does not match number of regulators ({}) for '{target}'.",
            context.intervals.len(),
            regulators.len()
        )));
    }

    let mut intervals = Vec::with_capacity(context.intervals.len());
    for (idx, interval) in context.intervals.iter().enumerate() {
        match interval {
            IntervalData::Wildcard(s) if s == "*" => intervals.push(ContextInterval::Any),
            IntervalData::Wildcard(s) => {
                return Err(ModelCheckError::MalformedNetwork(format!(
                    "Interval '{s}' at position {idx} for '{target}' is invalid. \
                     Must be an integer or '*'."
                )));
            }
            IntervalData::Index(value) => {
                let interval_count = regulators[idx].thresholds.len() as i64 + 1;
                if *value < 1 || *value > interval_count {
                    return Err(ModelCheckError::MalformedNetwork(format!(
                        "Interval index {value} at position {idx} for '{target}' is invalid. \
                         Must be within [1, {interval_count}]."
                    )));
                }
                intervals.push(ContextInterval::Index(*value as u32));
            }
        }
    }

    Ok(RegulatoryContext {
        intervals,
        target_value: context.target_value as u32,
    })
}
