//! Command-line arguments.

use std::path::PathBuf;

use audiogram_core::TokenizerMode;
use clap::Parser;

use crate::config::ConfigOverrides;

/// Instruction sent with the image when `--prompt` is not given.
pub const DEFAULT_PROMPT: &str = "You are a hearing specialist.\n\
Given the audiogram image, write a clinical summary describing the degree and type of hearing loss \
in both ears and whether it is symmetrical. Use precise medical language. Respond in English.";

/// Command-line arguments for the audiogram analyzer.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "audiogram")]
#[command(about = "Generate a clinical summary from an audiogram image using a local vision-language model")]
#[command(version)]
pub struct Cli {
    /// Public URL of the audiogram image
    #[arg(long)]
    pub image_url: String,

    /// Prompt to send to the model
    #[arg(long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// Path to configuration file (default: ./audiogram.toml if present)
    #[arg(long, env = "AUDIOGRAM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Base URL of the OpenAI-compatible server
    #[arg(long)]
    pub base_url: Option<String>,

    /// Model identifier
    #[arg(long)]
    pub model: Option<String>,

    /// Tokenizer mode: auto, slow or mistral
    #[arg(long)]
    pub tokenizer_mode: Option<TokenizerMode>,

    /// Maximum tokens to generate
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Sampling temperature
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Exit non-zero when the analysis fails (1 load, 2 inference, 3 configuration)
    #[arg(long)]
    pub strict_exit: bool,
}

impl Cli {
    /// Flags that override configuration values.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides::new(
            self.base_url.clone(),
            self.model.clone(),
            self.tokenizer_mode,
            self.max_tokens,
            self.temperature,
        )
    }
}
