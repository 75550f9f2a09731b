//! CLI argument definitions

use std::path::PathBuf;

use clap::Parser;

/// Raw command line. clap's own help and version flags are disabled so every
/// argument reaches [`Invocation::resolve`].
#[derive(Parser, Debug)]
#[command(name = "ai-fix")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Target file followed by flags (--json, --demo). Unknown flags are ignored.
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Resolves the captured arguments into what the run should do.
    pub fn invocation(&self) -> Invocation {
        Invocation::resolve(&self.args)
    }
}

/// What a single run of the CLI does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Print the demo text and exit successfully.
    Demo,
    /// No target file: print usage and fail.
    Usage,
    /// Lint a file.
    Check(CheckOptions),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    /// Target file as given on the command line.
    pub file: PathBuf,
    /// Emit the JSON report instead of text.
    pub json: bool,
}

impl Invocation {
    /// `--demo` anywhere wins. The target file is the first argument that is
    /// not a `--` flag.
    pub fn resolve<S: AsRef<str>>(args: &[S]) -> Self {
        let mut file = None;
        let mut json = false;

        for arg in args.iter().map(AsRef::as_ref) {
            match arg {
                "--demo" => return Invocation::Demo,
                "--json" => json = true,
                flag if flag.starts_with("--") => {}
                path => {
                    if file.is_none() {
                        file = Some(PathBuf::from(path));
                    }
                }
            }
        }

        match file {
            Some(file) => Invocation::Check(CheckOptions { file, json }),
            None => Invocation::Usage,
        }
    }
}

pub const USAGE: &str = "\
AI-Writing Fix CLI - Detect AI-like expressions in Japanese text

Usage: ai-fix <file> [--json]

Options:
  --json     Output structured JSON report for AI tools
  --demo     Show quick demo and usage examples

Examples:
  ai-fix document.md              # Show issues found
  ai-fix document.md --json       # JSON output for AI tools

Perfect for Claude Code integration! 🤖
";

pub const DEMO: &str = "\
🚀 AI-Writing Fix CLI Demo

This tool detects AI-like expressions in Japanese text:
- 🎯 Hyperbolic expressions (革命的、世界初)
- 🚀 Mechanical emoji lists
- ⚡ Formulaic emphasis patterns

Try with your own file:
  ai-fix your-file.md --json

For Claude Code integration:
  ai-fix draft.md --json > report.json
";
