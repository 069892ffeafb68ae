//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "preflight",
    version,
    about = "Rule-based pre-flight compliance checker",
    long_about = "Preflight — walk a project tree, run configured checks, and write an aggregated pass/warn/fail report.\n\nConfiguration precedence: CLI > preflight.toml > defaults.",
    after_help = "Examples:\n  preflight check\n  preflight check --root ../app --output json --no-report\n  preflight list",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,

    #[arg(short, long, global = true, action = clap::ArgAction::SetTrue, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(long, global = true, action = clap::ArgAction::SetTrue, help = "Emit logs as JSON lines on stderr")]
    pub log_json: bool,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current preflight version.")]
    Version,
    /// Run configured checks
    #[command(
        about = "Run checks",
        long_about = "Run every configured check in order, print the results, and write the report artifact. Exits 1 on failures (or warnings with --fail-on-warn), 2 on configuration or report errors.",
        after_help = "Examples:\n  preflight check\n  preflight check --report build/preflight.json --fail-on-warn"
    )]
    Check {
        #[arg(long, help = "Directory to start config discovery from (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Target project root (default: config dir or [root])")]
        root: Option<String>,
        #[arg(long, value_enum, help = "Output mode (default: human)")]
        output: Option<OutputMode>,
        #[arg(long, help = "Report artifact path (default: test_report.json)")]
        report: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Do not write the report artifact")]
        no_report: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Exit non-zero when any check warns")]
        fail_on_warn: bool,
    },
    /// List configured checks
    #[command(
        about = "List checks",
        long_about = "List configured checks with their kind, in execution order."
    )]
    List {
        #[arg(long, help = "Directory to start config discovery from (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, value_enum, help = "Output mode (default: human)")]
        output: Option<OutputMode>,
    },
}

/// Presentation modes accepted by `--output`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputMode::Human => "human",
            OutputMode::Json => "json",
        }
    }
}
