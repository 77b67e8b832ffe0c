//! The quantitative labeling table filled during evaluation.
//!
//! The table maps each sub-formula key (its canonical string) to one column of per-state
//! satisfaction degrees. An absent cell counts as unset; the evaluation driver fills the
//! columns children first, so a missing column on read indicates a bug in the engine.

use crate::errors::ModelCheckError;
use crate::network::State;

use std::collections::HashMap;

/// One labeling column: the satisfaction degree of a single sub-formula in every state.
pub type StateLabels = HashMap<State, f64>;

/// The quantitative labeling of all evaluated sub-formulae.
///
/// Duplicate sub-formulae share a single column, because columns are keyed by the
/// canonical sub-formula string.
#[derive(Clone, Debug, Default)]
pub struct QuantLabeling {
    columns: HashMap<String, StateLabels>,
}

impl QuantLabeling {
    /// Instantiate an empty labeling (all cells unset).
    pub fn new() -> QuantLabeling {
        QuantLabeling {
            columns: HashMap::new(),
        }
    }

    /// Check whether the column of the given sub-formula key is already computed.
    pub fn has_column(&self, key: &str) -> bool {
        self.columns.contains_key(key)
    }

    /// Store the finished column of a sub-formula.
    pub fn insert_column(&mut self, key: &str, labels: StateLabels) {
        self.columns.insert(key.to_string(), labels);
    }

    /// Read the finished column of a sub-formula.
    pub fn column(&self, key: &str) -> Result<&StateLabels, ModelCheckError> {
        self.columns.get(key).ok_or_else(|| {
            ModelCheckError::InternalInvariant(format!(
                "label column for '{key}' read before it was computed"
            ))
        })
    }

    /// Read the satisfaction degree of a sub-formula in a single state.
    pub fn value(&self, key: &str, state: &State) -> Result<f64, ModelCheckError> {
        self.column(key)?.get(state).copied().ok_or_else(|| {
            ModelCheckError::InternalInvariant(format!(
                "no label of '{key}' computed for state {state:?}"
            ))
        })
    }

    /// Iterate over the keys of all computed columns.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.columns.keys()
    }
}
