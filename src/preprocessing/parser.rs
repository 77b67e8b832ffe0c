//! Contains functionality regarding parsing formula tokens into a syntax tree.
//!
//! The operator precedence is the following (the lower, the stronger):
//!  - atomic negation: 1
//!  - atomic intersection: 2, atomic union: 3
//!  - unary temporal operators: 4
//!  - until-style temporal operators: 5
//!  - state conjunction: 6, state disjunction: 7
//!

use crate::errors::ModelCheckError;
use crate::preprocessing::ctl_tree::{AtomicTreeNode, CtlTreeNode};
use crate::preprocessing::operator_enums::*;
use crate::preprocessing::tokenizer::{CtlToken, try_tokenize_formula};

/// Parse a quantitative CTL formula string representation into an actual formula tree.
/// Basically a wrapper for tokenize+parse.
///
/// Propositions are not yet validated against a network here, and negations are not yet
/// eliminated; see [crate::preprocessing::utils] for both.
pub fn parse_ctl_formula(formula: &str) -> Result<CtlTreeNode, ModelCheckError> {
    let tokens = try_tokenize_formula(formula)?;
    parse_ctl_tokens(&tokens)
}

/// Parse `tokens` of a quantitative CTL formula into an abstract syntax tree using
/// recursive steps.
pub fn parse_ctl_tokens(tokens: &[CtlToken]) -> Result<CtlTreeNode, ModelCheckError> {
    parse_1_disjunction(tokens)
}

/// Utility method to find the first occurrence of a specific token in the token tree.
fn index_of_first(tokens: &[CtlToken], token: CtlToken) -> Option<usize> {
    tokens.iter().position(|t| *t == token)
}

/// Utility method to find the first occurrence of an until-style infix in the token tree.
fn index_of_first_until(tokens: &[CtlToken]) -> Option<usize> {
    tokens.iter().position(|t| matches!(t, CtlToken::Until(_)))
}

/// Recursive parsing step 1: extract `||` operators.
fn parse_1_disjunction(tokens: &[CtlToken]) -> Result<CtlTreeNode, ModelCheckError> {
    let or_token = index_of_first(tokens, CtlToken::Binary(BinaryOp::Or));
    Ok(if let Some(i) = or_token {
        CtlTreeNode::mk_binary(
            parse_2_conjunction(&tokens[..i])?,
            parse_1_disjunction(&tokens[(i + 1)..])?,
            BinaryOp::Or,
        )
    } else {
        parse_2_conjunction(tokens)?
    })
}

/// Recursive parsing step 2: extract `&&` operators.
fn parse_2_conjunction(tokens: &[CtlToken]) -> Result<CtlTreeNode, ModelCheckError> {
    let and_token = index_of_first(tokens, CtlToken::Binary(BinaryOp::And));
    Ok(if let Some(i) = and_token {
        CtlTreeNode::mk_binary(
            parse_3_until(&tokens[..i])?,
            parse_2_conjunction(&tokens[(i + 1)..])?,
            BinaryOp::And,
        )
    } else {
        parse_3_until(tokens)?
    })
}

/// Recursive parsing step 3: extract until-style operators `A _ U _`, `E _ U _`,
/// `A _ W _`, `E _ W _`.
///
/// A path quantifier is only valid as the first token of its sub-formula; things like
/// "AG A p U q" are fine (the unary step loops back here), but the quantified operand of
/// another until must be parenthesised.
fn parse_3_until(tokens: &[CtlToken]) -> Result<CtlTreeNode, ModelCheckError> {
    if let Some(CtlToken::Quantifier(quantifier)) = tokens.first() {
        let i = index_of_first_until(tokens).ok_or_else(|| {
            ModelCheckError::MalformedFormula(format!(
                "Expected 'U' or 'W' after path quantifier '{}'.",
                tokens[0]
            ))
        })?;
        let CtlToken::Until(variant) = &tokens[i] else {
            unreachable!() // we already made sure that this is indeed an until token
        };
        let op = match (quantifier, variant) {
            (PathQuantifier::ForAll, UntilVariant::Until) => BinaryOp::AU,
            (PathQuantifier::ForAll, UntilVariant::WeakUntil) => BinaryOp::AW,
            (PathQuantifier::Exists, UntilVariant::Until) => BinaryOp::EU,
            (PathQuantifier::Exists, UntilVariant::WeakUntil) => BinaryOp::EW,
        };
        Ok(CtlTreeNode::mk_binary(
            parse_4_unary(&tokens[1..i])?,
            parse_3_until(&tokens[(i + 1)..])?,
            op,
        ))
    } else {
        parse_4_unary(tokens)
    }
}

/// Recursive parsing step 4: extract unary temporal operators.
fn parse_4_unary(tokens: &[CtlToken]) -> Result<CtlTreeNode, ModelCheckError> {
    if let Some(CtlToken::Unary(op)) = tokens.first() {
        // the operand may itself start with a path quantifier, so loop back to step 3
        Ok(CtlTreeNode::mk_unary(parse_3_until(&tokens[1..])?, *op))
    } else {
        parse_5_terminal_and_parentheses(tokens)
    }
}

/// Recursive parsing step 5: extract constants, recursively solve sub-formulae in
/// parentheses, and hand everything else to the atomic-stratum parser.
fn parse_5_terminal_and_parentheses(tokens: &[CtlToken]) -> Result<CtlTreeNode, ModelCheckError> {
    if tokens.is_empty() {
        return Err(ModelCheckError::MalformedFormula(
            "Expected formula, found nothing.".to_string(),
        ));
    }
    if tokens.len() == 1 {
        match &tokens[0] {
            CtlToken::Constant(value) => return Ok(CtlTreeNode::mk_constant(*value)),
            CtlToken::Tokens(inner) => return parse_ctl_tokens(inner),
            _ => {}
        }
    }
    // whatever remains must be a pure atomic-stratum sub-formula
    Ok(CtlTreeNode::mk_atomic(parse_atomic_tokens(tokens)?))
}

/// Parse `tokens` of an atomic-stratum sub-formula (propositions combined with `!`, `&`,
/// `|`) into an atomic syntax tree.
pub fn parse_atomic_tokens(tokens: &[CtlToken]) -> Result<AtomicTreeNode, ModelCheckError> {
    parse_a1_union(tokens)
}

/// Recursive atomic parsing step 1: extract `|` operators.
fn parse_a1_union(tokens: &[CtlToken]) -> Result<AtomicTreeNode, ModelCheckError> {
    let union_token = index_of_first(tokens, CtlToken::AtomicBinary(AtomicBinaryOp::Union));
    Ok(if let Some(i) = union_token {
        AtomicTreeNode::mk_binary(
            parse_a2_intersection(&tokens[..i])?,
            parse_a1_union(&tokens[(i + 1)..])?,
            AtomicBinaryOp::Union,
        )
    } else {
        parse_a2_intersection(tokens)?
    })
}

/// Recursive atomic parsing step 2: extract `&` operators.
fn parse_a2_intersection(tokens: &[CtlToken]) -> Result<AtomicTreeNode, ModelCheckError> {
    let isect_token = index_of_first(tokens, CtlToken::AtomicBinary(AtomicBinaryOp::Intersection));
    Ok(if let Some(i) = isect_token {
        AtomicTreeNode::mk_binary(
            parse_a3_negation(&tokens[..i])?,
            parse_a2_intersection(&tokens[(i + 1)..])?,
            AtomicBinaryOp::Intersection,
        )
    } else {
        parse_a3_negation(tokens)?
    })
}

/// Recursive atomic parsing step 3: extract `!` operators.
fn parse_a3_negation(tokens: &[CtlToken]) -> Result<AtomicTreeNode, ModelCheckError> {
    if tokens.first() == Some(&CtlToken::Not) {
        Ok(AtomicTreeNode::mk_negation(parse_a3_negation(&tokens[1..])?))
    } else {
        parse_a4_terminal_and_parentheses(tokens)
    }
}

/// Recursive atomic parsing step 4: extract propositions and recursively solve atomic
/// sub-formulae in parentheses.
///
/// Encountering a state-stratum token here means the formula mixes the strata incorrectly
/// (e.g. a negation applied to a temporal operator).
fn parse_a4_terminal_and_parentheses(
    tokens: &[CtlToken],
) -> Result<AtomicTreeNode, ModelCheckError> {
    if tokens.is_empty() {
        return Err(ModelCheckError::MalformedFormula(
            "Expected atomic sub-formula, found nothing.".to_string(),
        ));
    }
    if tokens.len() > 1 {
        return Err(ModelCheckError::MalformedFormula(format!(
            "Unexpected '{}' inside an atomic sub-formula.",
            tokens[1]
        )));
    }
    match &tokens[0] {
        CtlToken::Proposition(prop) => Ok(AtomicTreeNode::mk_proposition(prop.clone())),
        CtlToken::Tokens(inner) => parse_a1_union(inner),
        other => Err(ModelCheckError::MalformedFormula(format!(
            "'{other}' cannot appear inside an atomic sub-formula."
        ))),
    }
}
