//! Literals the option grammar is built from.
//!
//! The parser has no file or environment configuration of its own; these
//! constants are the whole of its "settings".

/// Character that marks an argument as an option.
pub const OPTION_PREFIX: char = '-';

/// How many leading [`OPTION_PREFIX`] characters are stripped from an option.
/// `-name` and `--name` are the same option; `---name` names `-name`.
pub const MAX_PREFIX_DASHES: usize = 2;

/// Separates an option's name from its value.
pub const VALUE_SEPARATOR: char = '=';

/// Reserved name prefix turning `-noname` into a negation of `name`.
pub const NEGATION_PREFIX: &str = "no";

/// The only stored value that reads as `false`.
pub const FALSE_LITERAL: &str = "0";

/// Stored value written for `true` by negations and soft setters.
pub const TRUE_LITERAL: &str = "1";

/// Renders a boolean the way the option store keeps it.
///
/// # Examples
///
/// ```
/// use flagmap_core::config::bool_literal;
///
/// assert_eq!(bool_literal(true), "1");
/// assert_eq!(bool_literal(false), "0");
/// ```
pub fn bool_literal(value: bool) -> &'static str {
    if value {
        TRUE_LITERAL
    } else {
        FALSE_LITERAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_literal() {
        assert_eq!(bool_literal(true), TRUE_LITERAL);
        assert_eq!(bool_literal(false), FALSE_LITERAL);
    }

    #[test]
    fn test_negation_prefix_constant() {
        assert_eq!(NEGATION_PREFIX, "no");
    }

    #[test]
    fn test_prefix_constants() {
        assert_eq!(OPTION_PREFIX, '-');
        assert_eq!(MAX_PREFIX_DASHES, 2);
        assert_eq!(VALUE_SEPARATOR, '=');
    }
}
