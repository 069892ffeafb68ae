//! Preflight CLI binary entry point.
//! Resolves configuration, runs the checks, prints and persists the report.

use clap::Parser;
use preflight::cli::{Cli, Commands, OutputMode};
use preflight::config::{self, Effective, Overrides};
use preflight::{checks, output, run_pipeline, telemetry, FsProvider, ReportBuilder};
use std::process::ExitCode;
use tracing::{error, Level};

fn resolve_or_exit(overrides: &Overrides<'_>) -> Result<Effective, ExitCode> {
    match config::resolve_effective(overrides) {
        Ok(eff) => {
            if !eff.config_found {
                eprintln!("note: no preflight.toml found; no checks configured.");
            }
            Ok(eff)
        }
        Err(e) => {
            error!(error = %e, "configuration error");
            eprintln!("error: {e}");
            Err(ExitCode::from(2))
        }
    }
}

fn run_check(eff: Effective) -> ExitCode {
    let files = FsProvider::new(&eff.target_root);
    let defs = checks::build_checks(&eff.checks);
    let report = run_pipeline(&files, &defs);

    if let Err(e) = output::print_report(&report, &eff.output) {
        eprintln!("error: {e}");
        return ExitCode::from(2);
    }
    if let Some(path) = eff.report.as_deref() {
        if let Err(e) = ReportBuilder::write_to(&report, path) {
            error!(error = %e, "report artifact not produced");
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
        if eff.output != "json" {
            eprintln!("report saved to: {}", path.display());
        }
    }

    let s = &report.summary;
    if s.failed > 0 || (eff.fail_on_warn && s.warned > 0) {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    telemetry::init_tracing(cli.log_json, level);

    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Commands::Check {
            repo_root,
            root,
            output: out,
            report,
            no_report,
            fail_on_warn,
        } => {
            let overrides = Overrides {
                repo_root: repo_root.as_deref(),
                root: root.as_deref(),
                output: out.map(OutputMode::as_str),
                report: report.as_deref(),
                no_report,
                fail_on_warn: if fail_on_warn { Some(true) } else { None },
            };
            match resolve_or_exit(&overrides) {
                Ok(eff) => run_check(eff),
                Err(code) => code,
            }
        }
        Commands::List {
            repo_root,
            output: out,
        } => {
            let overrides = Overrides {
                repo_root: repo_root.as_deref(),
                output: out.map(OutputMode::as_str),
                ..Default::default()
            };
            match resolve_or_exit(&overrides) {
                Ok(eff) => {
                    output::print_check_list(&eff.checks, &eff.output);
                    ExitCode::SUCCESS
                }
                Err(code) => code,
            }
        }
    }
}
