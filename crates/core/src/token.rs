//! Turns a single raw argument into a structured option token.

use crate::config::{MAX_PREFIX_DASHES, OPTION_PREFIX, VALUE_SEPARATOR};

/// One option occurrence on the command line.
///
/// `value` distinguishes `-name` (`None`) from `-name=` (`Some("")`). Both are
/// stored as the empty string once they reach the option store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Option name with the leading dashes removed.
    pub name: String,
    /// Everything after the first `=`, if there was one.
    pub value: Option<String>,
}

impl Token {
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Whether the argument carried an explicit `=value` part.
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// The string the option store keeps for this token.
    pub fn stored_value(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

/// Tokenizes one raw argument.
///
/// Returns `None` for arguments without a leading dash; those are positional
/// and belong to the host application. Never fails otherwise: a bare `-` or
/// `--` becomes a token with an empty name.
///
/// # Examples
///
/// ```
/// use flagmap_core::token::tokenize;
///
/// let token = tokenize("--level=debug").unwrap();
/// assert_eq!(token.name, "level");
/// assert_eq!(token.value.as_deref(), Some("debug"));
///
/// assert!(tokenize("input.txt").is_none());
/// ```
pub fn tokenize(argument: &str) -> Option<Token> {
    let mut rest = argument.strip_prefix(OPTION_PREFIX)?;
    for _ in 1..MAX_PREFIX_DASHES {
        rest = rest.strip_prefix(OPTION_PREFIX).unwrap_or(rest);
    }

    let token = match rest.split_once(VALUE_SEPARATOR) {
        Some((name, value)) => Token::new(name, Some(value.to_string())),
        None => Token::new(rest, None),
    };

    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_bare_flag() {
        let token = tokenize("-ESP").unwrap();
        assert_eq!(token.name, "ESP");
        assert!(!token.has_value());
        assert_eq!(token.stored_value(), "");
    }

    #[test]
    fn test_tokenize_explicit_empty_value() {
        let token = tokenize("-ESP=").unwrap();
        assert_eq!(token.name, "ESP");
        assert!(token.has_value());
        assert_eq!(token.value.as_deref(), Some(""));
        assert_eq!(token.stored_value(), "");
    }

    #[test]
    fn test_tokenize_value() {
        let token = tokenize("-ESP=11").unwrap();
        assert_eq!(token, Token::new("ESP", Some("11".to_string())));
    }

    #[test]
    fn test_tokenize_double_dash_matches_single_dash() {
        assert_eq!(tokenize("--ESP=verbose"), tokenize("-ESP=verbose"));
        assert_eq!(tokenize("--ESP"), tokenize("-ESP"));
    }

    #[test]
    fn test_tokenize_third_dash_is_kept() {
        let token = tokenize("---ESP").unwrap();
        assert_eq!(token.name, "-ESP");
    }

    #[test]
    fn test_tokenize_splits_at_first_separator() {
        let token = tokenize("-define=key=value").unwrap();
        assert_eq!(token.name, "define");
        assert_eq!(token.value.as_deref(), Some("key=value"));
    }

    #[test]
    fn test_tokenize_positional_is_ignored() {
        assert!(tokenize("ESP").is_none());
        assert!(tokenize("").is_none());
        assert!(tokenize("a-b").is_none());
    }

    #[test]
    fn test_tokenize_dashes_only() {
        assert_eq!(tokenize("-"), Some(Token::new("", None)));
        assert_eq!(tokenize("--"), Some(Token::new("", None)));
        assert_eq!(tokenize("-=x"), Some(Token::new("", Some("x".to_string()))));
    }

    #[test]
    fn test_tokenize_is_case_sensitive() {
        assert_ne!(tokenize("-esp"), tokenize("-ESP"));
    }
}
