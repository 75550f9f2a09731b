//! AI-Writing Fix CLI
//!
//! Detects AI-like expressions in Japanese text and reports them as text or
//! as a JSON report for AI tools.

mod cli;
mod config_source;
mod error;
mod output;
mod report;

use std::fs;
use std::process::ExitCode;

use aifix_core::Linter;
use clap::Parser;
use miette::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{CheckOptions, Cli, DEMO, Invocation, USAGE};
use crate::config_source::ConfigSource;
use crate::error::CliError;
use crate::output::{render_json, render_text};
use crate::report::Report;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let debug_enabled = std::env::var_os("DEBUG").is_some();

    // Initialize logging
    let filter = if debug_enabled {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.invocation() {
        Invocation::Demo => {
            print!("{DEMO}");
            ExitCode::SUCCESS
        }
        Invocation::Usage => {
            eprint!("{USAGE}");
            ExitCode::from(1)
        }
        Invocation::Check(options) => match run(&options) {
            Ok(found_issues) => {
                if found_issues {
                    ExitCode::from(1)
                } else {
                    ExitCode::SUCCESS
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                if debug_enabled {
                    eprintln!("{:?}", e);
                }
                ExitCode::from(1)
            }
        },
    }
}

/// Lints the target file and prints the report. Returns true if any issue
/// was found.
fn run(options: &CheckOptions) -> Result<bool> {
    let path = std::path::absolute(&options.file).map_err(CliError::Io)?;
    if fs::metadata(&path).is_err() {
        return Err(CliError::FileNotFound(path).into());
    }
    let content = fs::read_to_string(&path).map_err(CliError::Io)?;

    let cwd = std::env::current_dir().map_err(CliError::Io)?;
    let source = ConfigSource::detect(&cwd);
    // Holds the temporary default config until the run ends.
    let active = source.load()?;
    if let Some(temp_file) = active.temp_file() {
        debug!("Using default rules via {}", temp_file.display());
    }

    let linter = Linter::new(&active.descriptor).map_err(CliError::Linter)?;
    let targets = [path.clone()];

    let lint_result = first_result(linter.lint_files(&targets), CliError::NoLintResult)?;
    let fix_result = first_result(linter.fix_files(&targets), CliError::NoFixResult)?;
    if fix_result.is_modified() {
        debug!(
            "Fix pass: {} fixable, {} remaining",
            fix_result.applied.len(),
            fix_result.remaining.len()
        );
    } else {
        debug!("Fix pass: nothing to fix");
    }

    let diagnostics = &lint_result.diagnostics;
    if options.json {
        let report = Report::new(&path, &content, diagnostics);
        println!("{}", render_json(&report).map_err(CliError::Serialize)?);
    } else {
        print!("{}", render_text(&path, diagnostics, source.is_default()));
    }

    Ok(!lint_result.is_clean())
}

/// Takes the single result of a one-file engine call.
fn first_result<T>(
    (results, failures): aifix_core::LintFilesResult<T>,
    missing: CliError,
) -> Result<T, CliError> {
    if let Some((_, error)) = failures.into_iter().next() {
        return Err(CliError::Linter(error));
    }
    results.into_iter().next().ok_or(missing)
}
