use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Option `{}` is set to `{}`, which is not an integer.", .name, .value)]
    InvalidInteger { name: String, value: String },

    #[error("Invalid query `{}`: expected `TYPE:NAME` or `TYPE:NAME=DEFAULT`", .0)]
    QueryFormat(String),

    #[error("Unknown query type `{}`: expected one of `bool`, `int` or `string`", .0)]
    UnknownQueryType(String),

    #[error("Default `{}` for integer query `{}` is not an integer.", .value, .name)]
    InvalidDefault { name: String, value: String },

    #[error("Error rendering report: {}", .0)]
    Render(String),
}

impl Error {
    pub fn invalid_integer(name: &str, value: &str) -> Self {
        Self::InvalidInteger {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    pub fn invalid_default(name: &str, value: &str) -> Self {
        Self::InvalidDefault {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}
