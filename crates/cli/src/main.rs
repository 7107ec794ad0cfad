use clap::Parser;
use flagmap_cli::cli_args::Args;
use flagmap_core::error::Result;
use std::process::ExitCode;

fn execute() -> Result<()> {
    let args = Args::parse();
    let output = flagmap_cli::run(&args)?;
    print!("{output}");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
