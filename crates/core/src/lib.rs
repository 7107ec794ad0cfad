//! Flagmap Core Library
//!
//! This crate turns raw process arguments into an option map and answers
//! typed queries against it. It is meant to be called once at startup to
//! decide how the rest of an application behaves.
//!
//! # Key Features
//!
//! - **Forgiving Tokenizer**: `-name`, `--name`, `-name=value`; anything without
//!   a leading dash is left to the host application
//! - **Negated Flags**: `-noname` proposes `false` for `name`, `-noname=0` proposes `true`
//! - **Explicit Wins**: a positive `-name` always overrides `-noname`, in any order
//! - **Typed Accessors**: string, integer and boolean lookups with caller defaults
//! - **Re-parsing**: [`SharedOptions`] swaps whole maps for concurrent readers
//!
//! # Examples
//!
//! ```
//! use flagmap_core::OptionMap;
//!
//! let options = OptionMap::parse(["--datadir=/tmp/node", "-noupnp", "-port=NaN"]);
//!
//! assert_eq!(options.get_string("datadir", "~/.node"), "/tmp/node");
//! assert!(!options.get_bool("upnp", true));
//! // Set but not a number: reads as 0, not as the default.
//! assert_eq!(options.get_int("port", 8333), 0);
//! assert_eq!(options.get_int("rpcport", 8332), 8332);
//! ```

pub mod config;
pub mod error;
pub mod negation;
pub mod options;
pub mod shared;
pub mod token;

pub use options::OptionMap;
pub use shared::SharedOptions;
