//! Preflight core library.
//!
//! Runs an ordered sequence of independent checks against a read-only view
//! of a project tree, folds their findings into a summary, and produces a
//! serializable report.
//!
//! High-level modules:
//! - `provider`: Read-only file tree access (`FileProvider`).
//! - `check`: The `Check` capability and a closure adapter.
//! - `checks`: Built-in configurable checks.
//! - `runner`: Sequential execution with per-check fault containment.
//! - `aggregate`: Summary counters and the flat issue list.
//! - `report`: Report assembly and JSON serialization.
//! - `pipeline`: The runner → aggregator → builder chain.
//! - `config`: Discovery and effective configuration resolution.
//! - `output`: Human/JSON printers.
//! - `cli`, `telemetry`: Binary support.
pub mod aggregate;
pub mod check;
pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod provider;
pub mod report;
pub mod runner;
pub mod telemetry;

pub use aggregate::ResultAggregator;
pub use check::{Check, FnCheck};
pub use error::{CheckError, ConfigError, ProviderError, ReportError};
pub use models::{Finding, Report, Status, Summary};
pub use pipeline::{run_pipeline, run_pipeline_with_clock};
pub use provider::{FileProvider, FsProvider, MemoryProvider};
pub use report::ReportBuilder;
pub use runner::{CheckRunner, Clock, FixedClock, SystemClock};
