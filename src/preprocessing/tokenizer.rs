//! Contains functionality regarding the tokenizing of quantitative CTL formula strings.

use crate::errors::ModelCheckError;
use crate::preprocessing::operator_enums::*;

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

/// Enum of all possible tokens occurring in a quantitative CTL formula string.
#[derive(Clone, Debug, PartialEq)]
pub enum CtlToken {
    /// Unary temporal operators: 'AG', 'AF', 'AX', 'EG', 'EF', 'EX'.
    Unary(UnaryOp),
    /// Binary operators of the state stratum: '&&', '||'.
    Binary(BinaryOp),
    /// Binary operators of the atomic stratum: '&', '|'.
    AtomicBinary(AtomicBinaryOp),
    /// Negation '!' (atomic stratum only).
    Not,
    /// Path quantifier 'A' or 'E' opening an until-style operator.
    Quantifier(PathQuantifier),
    /// Infix 'U' or 'W' of an until-style operator.
    Until(UntilVariant),
    /// Atomic proposition `variable >= k` / `variable <= k`.
    Proposition(AtomicProposition),
    /// The 'true' / 'false' constant.
    Constant(bool),
    /// A block of tokens inside parentheses.
    Tokens(Vec<CtlToken>),
}

/// Try to tokenize given quantitative CTL formula string.
///
/// This is a wrapper for the (more general) recursive [try_tokenize_recursive] function.
pub fn try_tokenize_formula(formula: &str) -> Result<Vec<CtlToken>, ModelCheckError> {
    try_tokenize_recursive(&mut formula.chars().peekable(), true)
}

/// Process a peekable iterator of characters into a vector of [CtlToken]s.
fn try_tokenize_recursive(
    input_chars: &mut Peekable<Chars>,
    top_level: bool,
) -> Result<Vec<CtlToken>, ModelCheckError> {
    let mut output = Vec::new();

    while let Some(c) = input_chars.next() {
        match c {
            c if c.is_whitespace() => {} // skip whitespace
            '!' => output.push(CtlToken::Not),
            '&' => {
                if input_chars.peek() == Some(&'&') {
                    input_chars.next();
                    output.push(CtlToken::Binary(BinaryOp::And));
                } else {
                    output.push(CtlToken::AtomicBinary(AtomicBinaryOp::Intersection));
                }
            }
            '|' => {
                if input_chars.peek() == Some(&'|') {
                    input_chars.next();
                    output.push(CtlToken::Binary(BinaryOp::Or));
                } else {
                    output.push(CtlToken::AtomicBinary(AtomicBinaryOp::Union));
                }
            }
            // comparison operators are only valid directly after a variable name
            '>' | '<' => {
                return Err(ModelCheckError::MalformedFormula(format!(
                    "Unexpected '{c}' without preceding variable name."
                )));
            }
            ')' => {
                return if !top_level {
                    Ok(output)
                } else {
                    Err(ModelCheckError::MalformedFormula(
                        "Unexpected ')' without opening counterpart.".to_string(),
                    ))
                };
            }
            '(' => {
                // start a nested token group
                let token_group = try_tokenize_recursive(input_chars, false)?;
                output.push(CtlToken::Tokens(token_group));
            }
            c if is_valid_start_of_name(c) => {
                let name = collect_name(input_chars, c);
                match name.as_str() {
                    "AG" => output.push(CtlToken::Unary(UnaryOp::AG)),
                    "AF" => output.push(CtlToken::Unary(UnaryOp::AF)),
                    "AX" => output.push(CtlToken::Unary(UnaryOp::AX)),
                    "EG" => output.push(CtlToken::Unary(UnaryOp::EG)),
                    "EF" => output.push(CtlToken::Unary(UnaryOp::EF)),
                    "EX" => output.push(CtlToken::Unary(UnaryOp::EX)),
                    "A" => output.push(CtlToken::Quantifier(PathQuantifier::ForAll)),
                    "E" => output.push(CtlToken::Quantifier(PathQuantifier::Exists)),
                    "U" => output.push(CtlToken::Until(UntilVariant::Until)),
                    "W" => output.push(CtlToken::Until(UntilVariant::WeakUntil)),
                    "true" => output.push(CtlToken::Constant(true)),
                    "false" => output.push(CtlToken::Constant(false)),
                    // any other name must open an atomic proposition
                    _ => output.push(collect_proposition(input_chars, &name)?),
                }
            }
            _ => {
                return Err(ModelCheckError::MalformedFormula(format!(
                    "Unexpected character '{c}'."
                )));
            }
        }
    }

    if top_level {
        Ok(output)
    } else {
        Err(ModelCheckError::MalformedFormula(
            "Expected ')' to previously encountered opening counterpart.".to_string(),
        ))
    }
}

/// Check if given char can start a name (of a variable or an operator keyword).
fn is_valid_start_of_name(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Check if given char can appear in a name.
fn is_valid_in_name(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Collect the rest of a name from the iterator, starting with the already consumed `first`.
fn collect_name(input_chars: &mut Peekable<Chars>, first: char) -> String {
    let mut name = String::from(first);
    while let Some(c) = input_chars.peek() {
        if !is_valid_in_name(*c) {
            break;
        }
        name.push(*c);
        input_chars.next();
    }
    name
}

/// Collect the comparison operator and threshold of an atomic proposition whose variable
/// `name` was already consumed.
fn collect_proposition(
    input_chars: &mut Peekable<Chars>,
    name: &str,
) -> Result<CtlToken, ModelCheckError> {
    skip_whitespaces(input_chars);

    let op = match input_chars.next() {
        Some('>') => {
            if input_chars.next() != Some('=') {
                return Err(ModelCheckError::InvalidOperator(format!(
                    "'>' after '{name}' (only '>=' and '<=' are supported)"
                )));
            }
            ComparisonOp::Geq
        }
        Some('<') => {
            if input_chars.next() != Some('=') {
                return Err(ModelCheckError::InvalidOperator(format!(
                    "'<' after '{name}' (only '>=' and '<=' are supported)"
                )));
            }
            ComparisonOp::Leq
        }
        other => {
            return Err(ModelCheckError::MalformedFormula(format!(
                "Expected '>=' or '<=' after '{name}', found {other:?}."
            )));
        }
    };

    skip_whitespaces(input_chars);

    // a leading '-' is accepted so that canonical keys of rewritten propositions re-tokenize
    let mut number = String::new();
    if input_chars.peek() == Some(&'-') {
        number.push('-');
        input_chars.next();
    }
    while let Some(c) = input_chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        number.push(*c);
        input_chars.next();
    }

    let threshold: i32 = number.parse().map_err(|_| {
        ModelCheckError::MalformedFormula(format!(
            "Expected integer threshold after '{name} {op}'."
        ))
    })?;

    Ok(CtlToken::Proposition(AtomicProposition::new(
        name, op, threshold,
    )))
}

fn skip_whitespaces(input_chars: &mut Peekable<Chars>) {
    while let Some(c) = input_chars.peek() {
        if !c.is_whitespace() {
            break;
        }
        input_chars.next();
    }
}

impl fmt::Display for CtlToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CtlToken::Unary(op) => write!(f, "{op}"),
            CtlToken::Binary(op) => write!(f, "{op}"),
            CtlToken::AtomicBinary(op) => write!(f, "{op}"),
            CtlToken::Not => write!(f, "!"),
            CtlToken::Quantifier(PathQuantifier::ForAll) => write!(f, "A"),
            CtlToken::Quantifier(PathQuantifier::Exists) => write!(f, "E"),
            CtlToken::Until(UntilVariant::Until) => write!(f, "U"),
            CtlToken::Until(UntilVariant::WeakUntil) => write!(f, "W"),
            CtlToken::Proposition(prop) => write!(f, "{prop}"),
            CtlToken::Constant(value) => write!(f, "{value}"),
            CtlToken::Tokens(_) => write!(f, "( ... )"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::ModelCheckError;
    use crate::preprocessing::operator_enums::*;
    use crate::preprocessing::tokenizer::{CtlToken, try_tokenize_formula};

    #[test]
    /// Test tokenization of a formula mixing both strata.
    fn tokenize_valid_formula() {
        let tokens = try_tokenize_formula("AG (gene_a >= 2 & gene_b <= 0) && EF true").unwrap();
        assert_eq!(
            tokens,
            vec![
                CtlToken::Unary(UnaryOp::AG),
                CtlToken::Tokens(vec![
                    CtlToken::Proposition(AtomicProposition::new("gene_a", ComparisonOp::Geq, 2)),
                    CtlToken::AtomicBinary(AtomicBinaryOp::Intersection),
                    CtlToken::Proposition(AtomicProposition::new("gene_b", ComparisonOp::Leq, 0)),
                ]),
                CtlToken::Binary(BinaryOp::And),
                CtlToken::Unary(UnaryOp::EF),
                CtlToken::Constant(true),
            ]
        );
    }

    #[test]
    /// Test tokenization of until-style operators and negation.
    fn tokenize_until_and_negation() {
        let tokens = try_tokenize_formula("A !x >= 1 U y <= -1").unwrap();
        assert_eq!(
            tokens,
            vec![
                CtlToken::Quantifier(PathQuantifier::ForAll),
                CtlToken::Not,
                CtlToken::Proposition(AtomicProposition::new("x", ComparisonOp::Geq, 1)),
                CtlToken::Until(UntilVariant::Until),
                CtlToken::Proposition(AtomicProposition::new("y", ComparisonOp::Leq, -1)),
            ]
        );
    }

    #[test]
    /// Test that operator keywords are not confused with variable names.
    fn tokenize_operator_like_names() {
        let tokens = try_tokenize_formula("AGx >= 1 || Elong <= 2").unwrap();
        assert_eq!(
            tokens,
            vec![
                CtlToken::Proposition(AtomicProposition::new("AGx", ComparisonOp::Geq, 1)),
                CtlToken::Binary(BinaryOp::Or),
                CtlToken::Proposition(AtomicProposition::new("Elong", ComparisonOp::Leq, 2)),
            ]
        );
    }

    #[test]
    /// Test tokenization errors.
    fn tokenize_invalid_formulae() {
        // unsupported comparison operator
        assert!(matches!(
            try_tokenize_formula("x > 1"),
            Err(ModelCheckError::InvalidOperator(_))
        ));
        // missing threshold
        assert!(matches!(
            try_tokenize_formula("x >= "),
            Err(ModelCheckError::MalformedFormula(_))
        ));
        // unbalanced parentheses
        assert!(matches!(
            try_tokenize_formula("(x >= 1"),
            Err(ModelCheckError::MalformedFormula(_))
        ));
        assert!(matches!(
            try_tokenize_formula("x >= 1)"),
            Err(ModelCheckError::MalformedFormula(_))
        ));
        // name without comparison
        assert!(matches!(
            try_tokenize_formula("AG x"),
            Err(ModelCheckError::MalformedFormula(_))
        ));
    }
}
