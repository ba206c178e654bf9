//! Orchestration of one summary request.

use std::collections::HashMap;

use audiogram_core::{LogContext, ModelSpec, SamplingParams};
use audiogram_error::{AudiogramError, ConfigError};
use audiogram_interface::VisionLanguageEngine;
use audiogram_models::{OpenAICompatibleEngine, build_messages, load_model, run_inference};
use derive_getters::Getters;
use tracing::{error, info, instrument};

use crate::cli::Cli;
use crate::config::AnalyzerConfig;

/// Where in the pipeline an analysis failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureStage {
    /// Configuration could not be loaded or validated
    Configuration,
    /// Model could not be brought online
    ModelLoad,
    /// Generation failed or produced nothing
    Inference,
}

/// Result of one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// The model produced a summary.
    Summary(String),
    /// The run failed; the error was already logged where it happened.
    Failed {
        /// Pipeline stage that failed
        stage: FailureStage,
        /// The error that stopped the run
        error: AudiogramError,
    },
}

impl AnalysisOutcome {
    /// Summary text, if the run succeeded.
    pub fn summary(&self) -> Option<&str> {
        match self {
            AnalysisOutcome::Summary(text) => Some(text),
            AnalysisOutcome::Failed { .. } => None,
        }
    }

    /// Process exit code.
    ///
    /// Always 0 unless `strict`; then 1 for load failures, 2 for inference
    /// failures and 3 for configuration failures.
    pub fn exit_code(&self, strict: bool) -> u8 {
        match self {
            AnalysisOutcome::Summary(_) => 0,
            AnalysisOutcome::Failed { .. } if !strict => 0,
            AnalysisOutcome::Failed { stage, .. } => match stage {
                FailureStage::ModelLoad => 1,
                FailureStage::Inference => 2,
                FailureStage::Configuration => 3,
            },
        }
    }
}

/// Everything one analysis needs.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct AnalysisRequest {
    /// URL of the audiogram image
    image_url: String,
    /// Instruction sent with the image
    prompt: String,
    /// Model to load
    model: ModelSpec,
    /// Sampling for the inference call
    sampling: SamplingParams,
}

impl AnalysisRequest {
    /// Creates a request.
    pub fn new(
        image_url: impl Into<String>,
        prompt: impl Into<String>,
        model: ModelSpec,
        sampling: SamplingParams,
    ) -> Self {
        Self {
            image_url: image_url.into(),
            prompt: prompt.into(),
            model,
            sampling,
        }
    }

    /// Request for the image and prompt on the command line.
    pub fn from_cli(cli: &Cli, config: &AnalyzerConfig) -> Self {
        Self::new(
            cli.image_url.clone(),
            cli.prompt.clone(),
            config.model_spec(),
            config.sampling(),
        )
    }
}

/// Loads the model, asks it about the image and logs the summary.
///
/// Never returns an error: failures become [`AnalysisOutcome::Failed`] after a
/// single `Execution failed.` line.
pub fn analyze<E: VisionLanguageEngine>(
    ctx: &LogContext,
    engine: &E,
    request: &AnalysisRequest,
) -> AnalysisOutcome {
    ctx.in_scope(|| match summarize(engine, request) {
        Ok(summary) => {
            info!("Clinical summary:\n{}", summary);
            AnalysisOutcome::Summary(summary)
        }
        Err((stage, error)) => failed(stage, error),
    })
}

#[instrument(skip_all, fields(model = %request.model().model()))]
fn summarize<E: VisionLanguageEngine>(
    engine: &E,
    request: &AnalysisRequest,
) -> Result<String, (FailureStage, AudiogramError)> {
    let handle = load_model(engine, request.model())
        .map_err(|e| (FailureStage::ModelLoad, AudiogramError::from(e)))?;
    let messages = build_messages(request.prompt(), request.image_url());
    run_inference(engine, &handle, &messages, request.sampling())
        .map_err(|e| (FailureStage::Inference, AudiogramError::from(e)))
}

fn failed(stage: FailureStage, error: AudiogramError) -> AnalysisOutcome {
    error!("Execution failed.");
    AnalysisOutcome::Failed { stage, error }
}

/// Runs the command line against the configured local server.
pub fn run(ctx: &LogContext, cli: &Cli) -> AnalysisOutcome {
    run_with_env(ctx, cli, None)
}

/// Like [`run`], reading `AUDIOGRAM_*` variables from `env` instead of the
/// process environment when given.
pub fn run_with_env(
    ctx: &LogContext,
    cli: &Cli,
    env: Option<HashMap<String, String>>,
) -> AnalysisOutcome {
    let prepared = ctx.in_scope(|| prepare(cli, env));

    match prepared {
        Ok((config, engine)) => analyze(ctx, &engine, &AnalysisRequest::from_cli(cli, &config)),
        Err((stage, error)) => ctx.in_scope(|| failed(stage, error)),
    }
}

fn prepare(
    cli: &Cli,
    env: Option<HashMap<String, String>>,
) -> Result<(AnalyzerConfig, OpenAICompatibleEngine), (FailureStage, AudiogramError)> {
    let config = AnalyzerConfig::load_with_env(cli.config.as_deref(), env)
        .and_then(|config| config.with_overrides(cli.overrides()))
        .inspect_err(|e: &ConfigError| error!("Invalid configuration: {}", e))
        .map_err(|e| (FailureStage::Configuration, AudiogramError::from(e)))?;

    let engine = OpenAICompatibleEngine::new(
        config.base_url(),
        config.api_key().clone(),
        config.request_timeout(),
    )
    .inspect_err(|e| error!("Failed to initialize model: {}", e))
    .map_err(|e| (FailureStage::ModelLoad, AudiogramError::from(e)))?;

    Ok((config, engine))
}
