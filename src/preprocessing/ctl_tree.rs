//! Syntax tree structs for quantitative CTL formulae and functionality for their manipulation.
//!
//! The tree is split into two strata. The atomic stratum ([AtomicTreeNode]) is closed under
//! negation, union and intersection, and denotes a subset of the state space. The state
//! stratum ([CtlTreeNode]) is closed under the Boolean and temporal connectives and lifts
//! whole atomic subtrees as its leaves.

use crate::preprocessing::operator_enums::*;

use std::cmp;
use std::fmt;

/// Enum of possible node types in an atomic-stratum syntax tree.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum AtomicNodeType {
    /// A single comparison `variable >= k` / `variable <= k`.
    Proposition(AtomicProposition),
    /// A negated atomic sub-formula; eliminated before evaluation.
    Negation(Box<AtomicTreeNode>),
    /// Union `|` or intersection `&` of two atomic sub-formulae.
    Binary(AtomicBinaryOp, Box<AtomicTreeNode>, Box<AtomicTreeNode>),
}

/// A single node in a syntax tree of an atomic-stratum sub-formula.
///
/// Each node tracks its:
///     - `formula_str`; A canonical string representation used as the key for uniqueness
///       testing and for the labeling table.
///     - `height`; A positive integer starting from 0 (for atomic propositions).
///     - `node_type`; A collection of node data represented through [AtomicNodeType].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct AtomicTreeNode {
    pub formula_str: String,
    pub height: u32,
    pub node_type: AtomicNodeType,
}

impl AtomicTreeNode {
    /// Create a leaf node for the given atomic proposition.
    pub fn mk_proposition(prop: AtomicProposition) -> AtomicTreeNode {
        AtomicTreeNode {
            formula_str: prop.to_string(),
            height: 0,
            node_type: AtomicNodeType::Proposition(prop),
        }
    }

    /// Create a negation node over an atomic child.
    pub fn mk_negation(child: AtomicTreeNode) -> AtomicTreeNode {
        AtomicTreeNode {
            formula_str: format!("(!{child})"),
            height: child.height + 1,
            node_type: AtomicNodeType::Negation(Box::new(child)),
        }
    }

    /// Create a union or intersection node from the given arguments.
    pub fn mk_binary(
        left: AtomicTreeNode,
        right: AtomicTreeNode,
        op: AtomicBinaryOp,
    ) -> AtomicTreeNode {
        AtomicTreeNode {
            formula_str: format!("({left} {op} {right})"),
            height: cmp::max(left.height, right.height) + 1,
            node_type: AtomicNodeType::Binary(op, Box::new(left), Box::new(right)),
        }
    }

    pub fn as_str(&self) -> &str {
        self.formula_str.as_str()
    }
}

impl fmt::Display for AtomicTreeNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.formula_str)
    }
}

/// Enum of possible node types in a state-stratum syntax tree.
///
/// In particular, a node type can be:
///     - A "constant" node for `true` / `false`.
///     - An "atomic" node lifting a whole atomic-stratum subtree as a leaf.
///     - A "unary" node, with a temporal [UnaryOp] and a sub-formula.
///     - A "binary" node, with a [BinaryOp] and two sub-formulae.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum NodeType {
    Constant(bool),
    Atomic(AtomicTreeNode),
    Unary(UnaryOp, Box<CtlTreeNode>),
    Binary(BinaryOp, Box<CtlTreeNode>, Box<CtlTreeNode>),
}

/// A single node in a syntax tree of a quantitative CTL formula.
///
/// Each node tracks its `formula_str` (the canonical textual key of the sub-formula, stable
/// under structural identity), its `height`, and its `node_type`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct CtlTreeNode {
    pub formula_str: String,
    pub height: u32,
    pub node_type: NodeType,
}

impl CtlTreeNode {
    /// Create a [CtlTreeNode] representing a Boolean constant.
    pub fn mk_constant(value: bool) -> CtlTreeNode {
        CtlTreeNode {
            formula_str: if value { "True" } else { "False" }.to_string(),
            height: 0,
            node_type: NodeType::Constant(value),
        }
    }

    /// Lift an atomic-stratum subtree into the state stratum.
    pub fn mk_atomic(atomic: AtomicTreeNode) -> CtlTreeNode {
        CtlTreeNode {
            formula_str: atomic.formula_str.clone(),
            height: atomic.height,
            node_type: NodeType::Atomic(atomic),
        }
    }

    /// Create a unary temporal [CtlTreeNode] from the given arguments.
    pub fn mk_unary(child: CtlTreeNode, op: UnaryOp) -> CtlTreeNode {
        CtlTreeNode {
            formula_str: format!("({op} {child})"),
            height: child.height + 1,
            node_type: NodeType::Unary(op, Box::new(child)),
        }
    }

    /// Create a binary [CtlTreeNode] from the given arguments.
    ///
    /// Until-style operators are rendered in their input syntax (`(A l U r)`), so the
    /// canonical string of every node can be parsed back into an equal tree.
    pub fn mk_binary(left: CtlTreeNode, right: CtlTreeNode, op: BinaryOp) -> CtlTreeNode {
        let formula_str = match op {
            BinaryOp::And | BinaryOp::Or => format!("({left} {op} {right})"),
            BinaryOp::AU => format!("(A {left} U {right})"),
            BinaryOp::EU => format!("(E {left} U {right})"),
            BinaryOp::AW => format!("(A {left} W {right})"),
            BinaryOp::EW => format!("(E {left} W {right})"),
        };
        CtlTreeNode {
            formula_str,
            height: cmp::max(left.height, right.height) + 1,
            node_type: NodeType::Binary(op, Box::new(left), Box::new(right)),
        }
    }

    /// Collect the sub-formulae of this formula in post order (children before parents,
    /// left before right). Atomic subtrees are leaves of the enumeration.
    ///
    /// The order guarantees that when the evaluator processes the list front to back, all
    /// sub-formulae of a formula have already been evaluated. Duplicates are kept here and
    /// collapse later by their canonical key.
    pub fn sub_formulae(&self) -> Vec<&CtlTreeNode> {
        let mut result = Vec::new();
        self.collect_sub_formulae(&mut result);
        result
    }

    fn collect_sub_formulae<'a>(&'a self, result: &mut Vec<&'a CtlTreeNode>) {
        match &self.node_type {
            NodeType::Constant(_) | NodeType::Atomic(_) => {}
            NodeType::Unary(_, child) => child.collect_sub_formulae(result),
            NodeType::Binary(_, left, right) => {
                left.collect_sub_formulae(result);
                right.collect_sub_formulae(result);
            }
        }
        result.push(self);
    }

    pub fn as_str(&self) -> &str {
        self.formula_str.as_str()
    }
}

impl fmt::Display for CtlTreeNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.formula_str)
    }
}
