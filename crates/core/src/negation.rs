//! Resolution of `-noname` tokens into proposed values for `name`.

use crate::config::{bool_literal, FALSE_LITERAL, NEGATION_PREFIX, TRUE_LITERAL};
use crate::token::Token;

/// Reads a stored option value as a boolean.
///
/// Only `"0"` is false. Everything else, the empty string included, is true.
pub fn parse_bool(value: &str) -> bool {
    value != FALSE_LITERAL
}

/// A token whose name carries the negation prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegatedToken {
    /// The option being negated (prefix stripped).
    pub target: String,
    /// Whether the negation itself is switched on (`-noX`, `-noX=1`) or
    /// off (`-noX=0`).
    pub negate: bool,
}

impl NegatedToken {
    /// Interprets `token` as a negation if its name starts with the prefix.
    ///
    /// No attempt is made to tell a real option called `nothing` apart from a
    /// negated `thing`.
    pub fn from_token(token: &Token) -> Option<Self> {
        let target = token.name.strip_prefix(NEGATION_PREFIX)?;
        let raw = token.value.as_deref().unwrap_or(TRUE_LITERAL);

        Some(Self {
            target: target.to_string(),
            negate: parse_bool(raw),
        })
    }

    /// The value this negation proposes for its target: the complement of
    /// [`Self::negate`].
    pub fn proposal(&self) -> &'static str {
        bool_literal(!self.negate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;

    fn negated(argument: &str) -> Option<NegatedToken> {
        NegatedToken::from_token(&tokenize(argument).unwrap())
    }

    #[test]
    fn test_parse_bool() {
        assert!(!parse_bool("0"));
        assert!(parse_bool("1"));
        assert!(parse_bool(""));
        assert!(parse_bool("false"));
        assert!(parse_bool("00"));
    }

    #[test]
    fn test_bare_negation_proposes_false() {
        let token = negated("-noESP").unwrap();
        assert_eq!(token.target, "ESP");
        assert!(token.negate);
        assert_eq!(token.proposal(), FALSE_LITERAL);
    }

    #[test]
    fn test_negation_with_one_proposes_false() {
        assert_eq!(negated("-noESP=1").unwrap().proposal(), FALSE_LITERAL);
    }

    #[test]
    fn test_negation_with_zero_proposes_true() {
        let token = negated("-noESP=0").unwrap();
        assert!(!token.negate);
        assert_eq!(token.proposal(), TRUE_LITERAL);
    }

    #[test]
    fn test_negation_with_empty_value_proposes_false() {
        assert_eq!(negated("-noESP=").unwrap().proposal(), FALSE_LITERAL);
    }

    #[test]
    fn test_double_dash_negation() {
        assert_eq!(negated("--noESP"), negated("-noESP"));
    }

    #[test]
    fn test_non_negated_names() {
        assert!(negated("-ESP").is_none());
        assert!(negated("-NoESP").is_none());
        assert!(negated("-n").is_none());
    }

    #[test]
    fn test_prefix_only_targets_empty_name() {
        let token = negated("-no").unwrap();
        assert_eq!(token.target, "");
    }

    #[test]
    fn test_prefixed_real_name_is_still_a_negation() {
        let token = negated("-nothing").unwrap();
        assert_eq!(token.target, "thing");
    }
}
