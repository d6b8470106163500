// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.
mod args;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;

use args::Args;
use dependency_visualizer::InvocationParameters;

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let params = validate_parameters(args)?;
    print_parameters(&params)
}

/// Validate the command line arguments.
///
/// # Errors
/// Returns an error if the repository mode is unknown or does not match the repository.
fn validate_parameters(args: Args) -> Result<InvocationParameters> {
    eprintln!(
        "Validating repository: repo={}, repo_mode={}",
        args.repo, args.repo_mode
    );
    // No context here: the validation message is printed as is.
    let params = InvocationParameters::new(
        args.package,
        args.repo,
        &args.repo_mode,
        args.output,
        args.filter,
    )?;
    eprintln!(
        "Validation completed: package={}, repo_mode={}",
        params.package(),
        params.repo_mode()
    );
    Ok(params)
}

/// Print the parameters as `name=value` lines.
///
/// # Errors
/// Returns an error if stdout cannot be written.
fn print_parameters(params: &InvocationParameters) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{params}").context("Failed to write parameters to stdout")?;
    stdout
        .flush()
        .context("Failed to flush parameters to stdout")?;
    Ok(())
}
