//! Typed queries against a parsed option map.
//!
//! A query is written `TYPE:NAME` or `TYPE:NAME=DEFAULT`, where `TYPE` is
//! `bool`, `int` or `string`. Defaults are checked when the query is parsed,
//! so evaluating one cannot fail.

use std::fmt;
use std::str::FromStr;

use flagmap_core::error::{Error, Result};
use flagmap_core::negation::parse_bool;
use flagmap_core::OptionMap;
use serde::Serialize;

const KIND_SEPARATOR: char = ':';
const DEFAULT_SEPARATOR: char = '=';

/// A single typed lookup with its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Bool { name: String, default: bool },
    Int { name: String, default: i64 },
    String { name: String, default: String },
}

/// The answer to a [`Query`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Bool(bool),
    Int(i64),
    String(String),
}

impl Query {
    pub fn name(&self) -> &str {
        match self {
            Query::Bool { name, .. } | Query::Int { name, .. } | Query::String { name, .. } => name,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Query::Bool { .. } => "bool",
            Query::Int { .. } => "int",
            Query::String { .. } => "string",
        }
    }

    /// The answer given when the option is unset.
    pub fn default_answer(&self) -> Answer {
        match self {
            Query::Bool { default, .. } => Answer::Bool(*default),
            Query::Int { default, .. } => Answer::Int(*default),
            Query::String { default, .. } => Answer::String(default.clone()),
        }
    }

    pub fn evaluate(&self, options: &OptionMap) -> Answer {
        match self {
            Query::Bool { name, default } => Answer::Bool(options.get_bool(name, *default)),
            Query::Int { name, default } => Answer::Int(options.get_int(name, *default)),
            Query::String { name, default } => {
                Answer::String(options.get_string(name, default).to_string())
            }
        }
    }
}

impl FromStr for Query {
    type Err = Error;

    /// Parses `TYPE:NAME[=DEFAULT]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::QueryFormat`] when the separator or name is missing,
    /// [`Error::UnknownQueryType`] for an unknown `TYPE` and
    /// [`Error::InvalidDefault`] when an `int` default is not an integer.
    fn from_str(query: &str) -> Result<Self> {
        let (kind, rest) = query
            .split_once(KIND_SEPARATOR)
            .ok_or_else(|| Error::QueryFormat(query.to_string()))?;

        let (name, default) = match rest.split_once(DEFAULT_SEPARATOR) {
            Some((name, default)) => (name, Some(default)),
            None => (rest, None),
        };

        if name.is_empty() {
            return Err(Error::QueryFormat(query.to_string()));
        }
        let name = name.to_string();

        match kind {
            "bool" => Ok(Query::Bool {
                name,
                default: default.is_some_and(parse_bool),
            }),
            "int" => {
                let default = match default {
                    Some(value) => value
                        .parse::<i64>()
                        .map_err(|_| Error::invalid_default(&name, value))?,
                    None => 0,
                };
                Ok(Query::Int { name, default })
            }
            "string" => Ok(Query::String {
                name,
                default: default.unwrap_or_default().to_string(),
            }),
            other => Err(Error::UnknownQueryType(other.to_string())),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Bool(value) => write!(f, "{value}"),
            Answer::Int(value) => write!(f, "{value}"),
            Answer::String(value) => write!(f, "{value:?}"),
        }
    }
}
