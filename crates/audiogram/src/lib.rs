//! Clinical summaries of audiogram images.
//!
//! The binary parses the command line, builds a [`LogContext`](audiogram_core::LogContext)
//! and hands both to [`run`]; the returned [`AnalysisOutcome`] decides the
//! exit code.

pub mod cli;
mod config;
mod run;

pub use cli::{Cli, DEFAULT_PROMPT};
pub use config::{
    AnalyzerConfig, ConfigOverrides, ConfigOverridesBuilder, DEFAULT_CONFIG_FILE, ENV_PREFIX,
};
pub use run::{AnalysisOutcome, AnalysisRequest, FailureStage, analyze, run, run_with_env};
