//! The option store and its typed accessors.
//!
//! [`OptionMap::parse`] scans the arguments once, splitting them into positive
//! and negated tokens. Within each group the last occurrence of a name wins.
//! The negated proposals are then overlaid by the positive values, so an
//! explicit `-name` always beats `-noname` whatever their order.

use indexmap::map::Entry;
use indexmap::{IndexMap, IndexSet};
use log::{debug, trace};
use serde::Serialize;

use crate::config::bool_literal;
use crate::error::{Error, Result};
use crate::negation::{parse_bool, NegatedToken};
use crate::token::tokenize;

/// Canonical option names mapped to their stored string values.
///
/// A name that is present is "set", even when its value is empty; a name that
/// is absent makes every accessor fall back to the caller's default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OptionMap {
    values: IndexMap<String, String>,
    #[serde(skip)]
    occurrences: IndexMap<String, Vec<String>>,
}

impl OptionMap {
    /// Parses raw arguments into a fresh option map.
    ///
    /// Arguments without a leading dash are skipped. Parsing never fails.
    /// Names keep the order in which they first appeared.
    ///
    /// # Examples
    ///
    /// ```
    /// use flagmap_core::OptionMap;
    ///
    /// let options = OptionMap::parse(["-noESP", "--level=3", "input.txt"]);
    /// assert!(!options.get_bool("ESP", true));
    /// assert_eq!(options.get_int("level", 0), 3);
    /// assert!(!options.is_set("input.txt"));
    /// ```
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut order: IndexSet<String> = IndexSet::new();
        let mut positives: IndexMap<String, String> = IndexMap::new();
        let mut proposals: IndexMap<String, &'static str> = IndexMap::new();
        let mut occurrences: IndexMap<String, Vec<String>> = IndexMap::new();
        let mut ignored = 0usize;

        for argument in args {
            let argument = argument.as_ref();
            let Some(token) = tokenize(argument) else {
                trace!("Ignoring positional argument `{argument}`");
                ignored += 1;
                continue;
            };

            if let Some(negated) = NegatedToken::from_token(&token) {
                let proposal = negated.proposal();
                order.insert(negated.target.clone());
                proposals.insert(negated.target, proposal);
                continue;
            }

            let value = token.stored_value().to_string();
            order.insert(token.name.clone());
            occurrences
                .entry(token.name.clone())
                .or_default()
                .push(value.clone());
            positives.insert(token.name, value);
        }

        let mut values = IndexMap::with_capacity(order.len());
        for name in order {
            let value = match (positives.swap_remove(&name), proposals.get(&name)) {
                (Some(value), Some(proposal)) => {
                    trace!("Option `{name}` given explicitly, ignoring its negation (`{proposal}`)");
                    value
                }
                (Some(value), None) => value,
                (None, Some(proposal)) => (*proposal).to_string(),
                (None, None) => continue,
            };
            values.insert(name, value);
        }

        debug!(
            "Parsed {} option(s), ignored {} positional argument(s)",
            values.len(),
            ignored
        );

        Self {
            values,
            occurrences,
        }
    }

    /// Parses the arguments of the current process, skipping the program name.
    pub fn from_env() -> Self {
        Self::parse(
            std::env::args_os()
                .skip(1)
                .map(|argument| argument.to_string_lossy().into_owned()),
        )
    }

    /// Whether `name` was set, by a positive token, a negation or a soft set.
    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// The stored string, or `default` when `name` is unset.
    ///
    /// A set option with an empty value returns `""`, not `default`.
    pub fn get_string<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.values.get(name).map_or(default, String::as_str)
    }

    /// The stored value as an integer, or `default` when `name` is unset.
    ///
    /// A set option whose value is not an integer (including the empty value
    /// of a bare `-name`) reads as `0`; the default is not used.
    pub fn get_int(&self, name: &str, default: i64) -> i64 {
        match self.try_get_int(name) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                debug!("{e} Reading it as 0.");
                0
            }
        }
    }

    /// Strict integer lookup: `Ok(None)` when unset, an error when the stored
    /// value has surrounding whitespace, stray characters, or overflows `i64`.
    pub fn try_get_int(&self, name: &str) -> Result<Option<i64>> {
        self.values
            .get(name)
            .map(|value| {
                value
                    .parse::<i64>()
                    .map_err(|_| Error::invalid_integer(name, value))
            })
            .transpose()
    }

    /// The stored value as a boolean (`false` only for `"0"`), or `default`
    /// when `name` is unset.
    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        self.values.get(name).map_or(default, |value| parse_bool(value))
    }

    /// [`Self::get_bool`] with a `false` default.
    pub fn get_flag(&self, name: &str) -> bool {
        self.get_bool(name, false)
    }

    /// Every value given to `name` by a positive token, in argument order.
    ///
    /// Negations and soft sets are not recorded here.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.occurrences
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Sets `name` to `value` unless it is already set. Returns whether the
    /// value was stored.
    pub fn soft_set(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        match self.values.entry(name.into()) {
            Entry::Occupied(entry) => {
                trace!("Option `{}` already set, not overriding", entry.key());
                false
            }
            Entry::Vacant(entry) => {
                entry.insert(value.into());
                true
            }
        }
    }

    /// [`Self::soft_set`] with a boolean, stored as `"1"` or `"0"`.
    pub fn soft_set_bool(&mut self, name: impl Into<String>, value: bool) -> bool {
        self.soft_set(name, bool_literal(value))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
