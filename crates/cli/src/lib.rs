//! Flagmap CLI Library
//!
//! This crate provides `flagmap`, a small diagnostic front-end for
//! [`flagmap_core`]. It parses the arguments given after `--` exactly as an
//! application would at startup, then prints the resulting option map and
//! the answers to any typed queries.
//!
//! # Architecture
//!
//! - [`cli_args`]: the binary's own command-line interface
//! - [`query`]: `TYPE:NAME[=DEFAULT]` queries and their answers
//! - [`report`]: text and YAML rendering
//!
//! # Examples
//!
//! ```bash
//! # Show the option map
//! flagmap -- -ESP --level=3 -nolisten
//!
//! # Ask typed questions
//! flagmap -q bool:listen=1 -q int:level -- -nolisten --level=3
//!
//! # Machine-readable output
//! flagmap --yaml -q string:datadir=~/.node -- -datadir=/tmp/node
//! ```

pub mod cli_args;
pub mod query;
pub mod report;

use flagmap_core::error::Result;
use flagmap_core::OptionMap;
use log::debug;

use crate::cli_args::Args;
use crate::report::Report;

/// Parses `args.arguments` and renders the report the binary prints.
///
/// # Errors
///
/// Returns an error if YAML rendering fails.
pub fn run(args: &Args) -> Result<String> {
    let options = OptionMap::parse(&args.arguments);
    debug!("Answering {} query(ies)", args.queries.len());

    let report = Report::build(&options, &args.queries, !args.no_store);

    if args.yaml {
        report.to_yaml()
    } else {
        Ok(report.to_text())
    }
}
