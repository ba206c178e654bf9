//! Layered configuration.
//!
//! Precedence, lowest first: built-in defaults, TOML file, `AUDIOGRAM_*`
//! environment variables, command-line flags.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use audiogram_core::{
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE, ModelSpec, SamplingParams,
    TokenizerMode,
};
use audiogram_error::{ConfigError, ConfigErrorKind};
use audiogram_models::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use derive_getters::Getters;
use serde::Deserialize;
use tracing::{debug, instrument};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "audiogram.toml";

/// Prefix of environment variables read as configuration.
pub const ENV_PREFIX: &str = "AUDIOGRAM";

/// Settings for reaching the model and sampling from it.
#[derive(Debug, Clone, PartialEq, Deserialize, Getters)]
pub struct AnalyzerConfig {
    /// Serving endpoint root
    base_url: String,
    /// Model identifier
    model: String,
    /// Tokenizer mode the server runs the model with
    tokenizer_mode: TokenizerMode,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// Sampling temperature
    temperature: f32,
    /// Per-request timeout in seconds
    request_timeout_secs: u64,
    /// Bearer token for the serving endpoint
    #[serde(default)]
    api_key: Option<String>,
}

/// Command-line values that take precedence over every other layer.
#[derive(Debug, Clone, Default, PartialEq, derive_builder::Builder)]
#[builder(setter(into, strip_option), default)]
pub struct ConfigOverrides {
    base_url: Option<String>,
    model: Option<String>,
    tokenizer_mode: Option<TokenizerMode>,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
}

impl ConfigOverrides {
    /// Creates overrides from optional values.
    pub fn new(
        base_url: Option<String>,
        model: Option<String>,
        tokenizer_mode: Option<TokenizerMode>,
        max_tokens: Option<u32>,
        temperature: Option<f32>,
    ) -> Self {
        Self {
            base_url,
            model,
            tokenizer_mode,
            max_tokens,
            temperature,
        }
    }

    /// Returns a builder for constructing overrides.
    pub fn builder() -> ConfigOverridesBuilder {
        ConfigOverridesBuilder::default()
    }
}

impl AnalyzerConfig {
    /// Loads defaults, the config file and `AUDIOGRAM_*` variables.
    ///
    /// With `file` set the file must exist; otherwise
    /// [`DEFAULT_CONFIG_FILE`] is used when present. Variables come from `env`
    /// when given, else from the process environment.
    #[instrument(skip(env))]
    pub fn load_with_env(
        file: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let builder = config::Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)
            .and_then(|b| b.set_default("model", DEFAULT_MODEL))
            .and_then(|b| b.set_default("tokenizer_mode", TokenizerMode::default().to_string()))
            .and_then(|b| b.set_default("max_tokens", i64::from(DEFAULT_MAX_TOKENS)))
            .and_then(|b| b.set_default("temperature", f64::from(DEFAULT_TEMPERATURE)))
            .and_then(|b| b.set_default("request_timeout_secs", DEFAULT_TIMEOUT.as_secs()))
            .map_err(|e| ConfigError::new(ConfigErrorKind::Load(format!("Invalid default: {}", e))))?;

        let builder = match file {
            Some(path) => {
                debug!(path = %path.display(), "Reading configuration file");
                builder.add_source(config::File::from(path).required(true))
            }
            None => builder.add_source(config::File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        let config: Self = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).source(env))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ConfigError::new(ConfigErrorKind::Load(e.to_string())))?;

        config.validate()?;
        Ok(config)
    }

    /// Applies command-line overrides and re-validates.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(base_url) = overrides.base_url {
            self.base_url = base_url;
        }
        if let Some(model) = overrides.model {
            self.model = model;
        }
        if let Some(tokenizer_mode) = overrides.tokenizer_mode {
            self.tokenizer_mode = tokenizer_mode;
        }
        if let Some(max_tokens) = overrides.max_tokens {
            self.max_tokens = max_tokens;
        }
        if let Some(temperature) = overrides.temperature {
            self.temperature = temperature;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::invalid("base_url", "must not be empty"));
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::invalid("model", "must not be empty"));
        }
        if self.max_tokens == 0 {
            return Err(ConfigError::invalid("max_tokens", "must be greater than zero"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::invalid(
                "temperature",
                format!("must be between 0.0 and 2.0, got {}", self.temperature),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "request_timeout_secs",
                "must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Model to load.
    pub fn model_spec(&self) -> ModelSpec {
        ModelSpec::new(self.model.clone(), self.tokenizer_mode)
    }

    /// Sampling parameters for the inference call.
    pub fn sampling(&self) -> SamplingParams {
        SamplingParams::new(self.max_tokens, self.temperature)
    }

    /// Per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn no_env() -> Option<HashMap<String, String>> {
        Some(HashMap::new())
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("create temp config");
        file.write_all(contents.as_bytes()).expect("write temp config");
        file
    }

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::load_with_env(None, no_env()).expect("defaults load");

        assert_eq!(config.base_url(), "http://localhost:8000");
        assert_eq!(config.model_spec(), ModelSpec::new(DEFAULT_MODEL, TokenizerMode::Mistral));
        assert_eq!(config.sampling(), SamplingParams::new(1024, 0.6));
        assert_eq!(config.request_timeout(), Duration::from_secs(600));
        assert_eq!(*config.api_key(), None);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = write_config(
            r#"
base_url = "http://gpu-box:9000"
max_tokens = 512
tokenizer_mode = "auto"
"#,
        );

        let config =
            AnalyzerConfig::load_with_env(Some(file.path()), no_env()).expect("file loads");

        assert_eq!(config.base_url(), "http://gpu-box:9000");
        assert_eq!(*config.max_tokens(), 512);
        assert_eq!(*config.tokenizer_mode(), TokenizerMode::Auto);
        assert_eq!(config.model(), DEFAULT_MODEL);
    }

    #[test]
    fn test_env_overrides_file() {
        let file = write_config("max_tokens = 512\ntemperature = 0.2\n");
        let env = HashMap::from([
            ("AUDIOGRAM_MAX_TOKENS".to_string(), "2048".to_string()),
            ("AUDIOGRAM_API_KEY".to_string(), "local-secret".to_string()),
        ]);

        let config =
            AnalyzerConfig::load_with_env(Some(file.path()), Some(env)).expect("env loads");

        assert_eq!(*config.max_tokens(), 2048);
        assert_eq!(*config.temperature(), 0.2);
        assert_eq!(config.api_key().as_deref(), Some("local-secret"));
    }

    #[test]
    fn test_cli_overrides_everything() {
        let env = HashMap::from([("AUDIOGRAM_MODEL".to_string(), "from-env".to_string())]);
        let config = AnalyzerConfig::load_with_env(None, Some(env)).expect("env loads");

        let overrides = ConfigOverrides::builder()
            .model("from-cli")
            .temperature(0.0f32)
            .build()
            .expect("overrides build");
        let config = config.with_overrides(overrides).expect("valid overrides");

        assert_eq!(config.model(), "from-cli");
        assert_eq!(*config.temperature(), 0.0);
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let result = AnalyzerConfig::load_with_env(
            Some(Path::new("/nonexistent/audiogram.toml")),
            no_env(),
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_out_of_range_temperature() {
        let config = AnalyzerConfig::load_with_env(None, no_env()).expect("defaults load");
        let overrides = ConfigOverrides::builder()
            .temperature(3.5f32)
            .build()
            .expect("overrides build");

        let err = config.with_overrides(overrides).expect_err("too hot");
        assert!(matches!(
            err.kind(),
            ConfigErrorKind::InvalidValue { field: "temperature", .. }
        ));
    }

    #[test]
    fn test_rejects_zero_max_tokens() {
        let file = write_config("max_tokens = 0\n");

        let err = AnalyzerConfig::load_with_env(Some(file.path()), no_env())
            .expect_err("zero tokens");
        assert!(matches!(
            err.kind(),
            ConfigErrorKind::InvalidValue { field: "max_tokens", .. }
        ));
    }

    #[test]
    fn test_tokenizer_mode_from_env_ignores_case() {
        let env = HashMap::from([("AUDIOGRAM_TOKENIZER_MODE".to_string(), "Slow".to_string())]);

        let config = AnalyzerConfig::load_with_env(None, Some(env)).expect("env loads");

        assert_eq!(*config.tokenizer_mode(), TokenizerMode::Slow);
    }

    #[test]
    fn test_tokenizer_mode_from_file_ignores_case() {
        let file = write_config("tokenizer_mode = \"MISTRAL\"\n");

        let config =
            AnalyzerConfig::load_with_env(Some(file.path()), no_env()).expect("file loads");

        assert_eq!(*config.tokenizer_mode(), TokenizerMode::Mistral);
    }

    #[test]
    fn test_unknown_tokenizer_mode_is_a_load_error() {
        let env = HashMap::from([(
            "AUDIOGRAM_TOKENIZER_MODE".to_string(),
            "sentencepiece".to_string(),
        )]);

        let err = AnalyzerConfig::load_with_env(None, Some(env)).expect_err("unknown mode");

        assert!(matches!(err.kind(), ConfigErrorKind::Load(_)));
    }
}
