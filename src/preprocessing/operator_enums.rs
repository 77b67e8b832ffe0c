//! Contains enum structures for the operators and atoms of quantitative CTL formulae,
//! separated into the state stratum and the atomic stratum.

use std::fmt;

/// Enum for all unary temporal operators of the state stratum.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum UnaryOp {
    EX, // 'EX'
    AX, // 'AX'
    EF, // 'EF'
    AF, // 'AF'
    EG, // 'EG'
    AG, // 'AG'
}

/// Enum for all binary operators of the state stratum.
///
/// The until operators are written `A φ U ψ` (and similarly for `E`/`W`) in the input
/// syntax; the combined variants only exist in the syntax tree.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum BinaryOp {
    And, // '&&'
    Or,  // '||'
    EU,  // 'E _ U _'
    AU,  // 'A _ U _'
    EW,  // 'E _ W _'
    AW,  // 'A _ W _'
}

/// Enum for the binary set operators of the atomic stratum.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum AtomicBinaryOp {
    Union,        // '|'
    Intersection, // '&'
}

/// Enum for the comparison operators allowed in atomic propositions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum ComparisonOp {
    Geq, // '>='
    Leq, // '<='
}

/// A single atomic proposition `variable >= k` or `variable <= k`.
///
/// The threshold is signed because negation elimination may shift it below zero
/// (such propositions simply have an empty domain of validity).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct AtomicProposition {
    pub variable: String,
    pub op: ComparisonOp,
    pub threshold: i32,
}

impl AtomicProposition {
    pub fn new(variable: &str, op: ComparisonOp, threshold: i32) -> AtomicProposition {
        AtomicProposition {
            variable: variable.to_string(),
            op,
            threshold,
        }
    }
}

/// Path quantifier token preceding an until operator (`A` or `E`).
/// Only appears in token streams, never in the syntax tree.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PathQuantifier {
    ForAll, // 'A'
    Exists, // 'E'
}

/// Until-style infix token (`U` or `W`).
/// Only appears in token streams, never in the syntax tree.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum UntilVariant {
    Until,     // 'U'
    WeakUntil, // 'W'
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BinaryOp::And => write!(f, "&&"),
            BinaryOp::Or => write!(f, "||"),
            // temporal operators are displayed as they are
            c => write!(f, "{c:?}"),
        }
    }
}

impl fmt::Display for AtomicBinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AtomicBinaryOp::Union => write!(f, "|"),
            AtomicBinaryOp::Intersection => write!(f, "&"),
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ComparisonOp::Geq => write!(f, ">="),
            ComparisonOp::Leq => write!(f, "<="),
        }
    }
}

impl fmt::Display for AtomicProposition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.variable, self.op, self.threshold)
    }
}
