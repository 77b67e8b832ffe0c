//! Contains wrappers for loading the JSON input document.
//!
//! The structs here mirror the document one to one and keep integers signed and
//! unvalidated; the semantic checks live in [crate::network::mvgrn] (network) and
//! [crate::mc_utils] (initial states), so that range violations surface as the proper
//! error kind instead of a deserialisation failure.

use crate::errors::ModelCheckError;

use indexmap::IndexMap;
use serde::Deserialize;

use std::collections::HashMap;
use std::fs::read_to_string;

/// The whole input document: a network, a formula, and an optional initial-state
/// specification.
#[derive(Clone, Debug, Deserialize)]
pub struct InputDocument {
    pub network: NetworkData,
    pub formula: String,
    /// Each region maps a variable to its list of admissible values; variables left out
    /// are unconstrained. A missing specification means all states are initial.
    #[serde(default)]
    pub init_states: Option<Vec<HashMap<String, Vec<i64>>>>,
}

/// Raw network description: variable maxima (in declaration order) and regulations.
#[derive(Clone, Debug, Deserialize)]
pub struct NetworkData {
    pub variables: IndexMap<String, i64>,
    pub regulations: Vec<RegulationData>,
}

/// Raw description of the regulation of one target variable.
#[derive(Clone, Debug, Deserialize)]
pub struct RegulationData {
    pub target: String,
    pub regulators: Vec<RegulatorData>,
    pub contexts: Vec<ContextData>,
}

/// Raw description of one regulator and its activity thresholds.
#[derive(Clone, Debug, Deserialize)]
pub struct RegulatorData {
    pub variable: String,
    pub thresholds: Vec<i64>,
}

/// Raw description of one regulatory context.
#[derive(Clone, Debug, Deserialize)]
pub struct ContextData {
    pub intervals: Vec<IntervalData>,
    pub target_value: i64,
}

/// One entry of a context's interval list: either a 1-based interval index, or the
/// don't-care string `"*"`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum IntervalData {
    Index(i64),
    Wildcard(String),
}

/// Parse the input document from a JSON string.
pub fn parse_input_document(json: &str) -> Result<InputDocument, ModelCheckError> {
    serde_json::from_str(json).map_err(|e| ModelCheckError::MalformedInput(e.to_string()))
}

/// Read and parse the input document from the specified file.
pub fn load_input_document(path: &str) -> Result<InputDocument, ModelCheckError> {
    let contents = read_to_string(path)
        .map_err(|e| ModelCheckError::MalformedInput(format!("cannot read '{path}': {e}")))?;
    parse_input_document(contents.as_str())
}
