//! Command-line argument parsing for the `flagmap` binary.
//!
//! The binary's own options are handled by `clap`. Everything after `--` is
//! handed untouched to the option parser under inspection.

use clap::Parser;

use crate::query::Query;

/// Command-line arguments for the flagmap CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use flagmap_cli::cli_args::Args;
///
/// let args = Args::parse_from(["flagmap", "-q", "bool:ESP", "--", "-noESP"]);
/// assert_eq!(args.arguments, vec!["-noESP"]);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(
    name = "flagmap",
    version,
    about = "Parse raw arguments into an option map and query it",
    term_width = 0
)]
pub struct Args {
    /// Typed query to answer, as `TYPE:NAME` or `TYPE:NAME=DEFAULT`.
    ///
    /// `TYPE` is one of `bool`, `int` or `string`. May be repeated.
    ///
    /// # Examples
    /// ```bash
    /// flagmap -q bool:listen=1 -q int:port=8333 -- -nolisten -port=18333
    /// ```
    #[arg(long = "query", short = 'q', action = clap::ArgAction::Append)]
    pub queries: Vec<Query>,

    /// Render the report as YAML instead of plain text.
    #[arg(long, action)]
    pub yaml: bool,

    /// Only print query answers, not the parsed option map.
    #[arg(long, action)]
    pub no_store: bool,

    /// Raw arguments to parse, given after `--`.
    #[arg(last = true)]
    pub arguments: Vec<String>,
}
