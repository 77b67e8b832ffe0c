//! Components regarding the multi-valued gene-regulatory network model and its
//! state-transition graph.

pub mod mvgrn;
pub mod state_graph;

/// A single network state, one activity level per variable (in declaration order).
pub type State = Vec<u32>;

/// A set of network states (e.g., a domain of validity or its border).
pub type StateSet = std::collections::HashSet<State>;
