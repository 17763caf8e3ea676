//! Configuration loader
//!
//! Sources are merged in this order, later sources overriding earlier ones:
//!
//! 1. `AppConfig::default()`
//! 2. A TOML file: the explicit path, else the first of `./qag.toml`,
//!    `./config/qag.toml` and `<user config dir>/qag/qag.toml`
//! 3. Environment variables prefixed `QAG_`, with `__` separating nested
//!    keys (`QAG_CHUNKING__CHUNK_SIZE=400`)
//!
//! Well-known credential variables then fill any `api_key` left unset, and
//! the result is validated. Every failure here is fatal.

use crate::config::AppConfig;
use crate::constants::{
    ANTHROPIC_API_KEY_ENV, CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR,
    DEFAULT_CONFIG_FILENAME, GROQ_API_KEY_ENV, OPENAI_API_KEY_ENV, PROJECT_CONFIG_DIR,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use qag_domain::error::{Error, Result};
use qag_domain::ports::providers::ChunkingOptions;
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load, complete and validate configuration from all sources
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if !config_path.exists() {
                log_config_loaded(config_path, false);
                return Err(Error::config(format!(
                    "configuration file not found: {}",
                    config_path.display()
                )));
            }
            figment = figment.merge(Toml::file(config_path));
            log_config_loaded(config_path, true);
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let mut app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        fill_credentials_from(&mut app_config, |name| env::var(name).ok());
        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// First existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let mut candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(PROJECT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
        ];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME));
        }

        candidates.into_iter().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Credential variable consulted for a provider, if it needs one
pub fn credential_env_var(provider: &str) -> Option<&'static str> {
    match provider {
        "openai" => Some(OPENAI_API_KEY_ENV),
        "groq" => Some(GROQ_API_KEY_ENV),
        "anthropic" => Some(ANTHROPIC_API_KEY_ENV),
        _ => None,
    }
}

/// Fill unset `api_key` fields from credential variables
///
/// `lookup` resolves a variable name; explicit configuration always wins.
pub fn fill_credentials_from<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let resolve = |provider: &str| {
        credential_env_var(provider)
            .and_then(&lookup)
            .filter(|key| !key.trim().is_empty())
    };

    if config.embedding.api_key.is_none() {
        config.embedding.api_key = resolve(&config.embedding.provider);
    }
    if config.generative.api_key.is_none() {
        config.generative.api_key = resolve(&config.generative.provider);
    }
}

/// Validate application configuration
fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_chunking_config(config)?;
    validate_embedding_config(config)?;
    validate_retrieval_config(config)?;
    validate_generative_config(config)?;
    validate_credentials(config)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_chunking_config(config: &AppConfig) -> Result<()> {
    ChunkingOptions::new(config.chunking.chunk_size, config.chunking.overlap)
        .map(|_| ())
        .map_err(|e| Error::config(format!("chunking: {e}")))
}

fn validate_embedding_config(config: &AppConfig) -> Result<()> {
    if config.embedding.batch_size == 0 {
        return Err(Error::config("embedding batch_size cannot be 0"));
    }
    if config.embedding.timeout_secs == 0 {
        return Err(Error::config("embedding timeout_secs cannot be 0"));
    }
    if config.embedding.dimensions == Some(0) || config.vector_store.dimensions == Some(0) {
        return Err(Error::config("dimensions cannot be 0"));
    }
    Ok(())
}

fn validate_retrieval_config(config: &AppConfig) -> Result<()> {
    if config.retrieval.top_k == 0 {
        return Err(Error::config("retrieval top_k must be at least 1"));
    }
    Ok(())
}

fn validate_generative_config(config: &AppConfig) -> Result<()> {
    if config.generative.timeout_secs == 0 {
        return Err(Error::config("generative timeout_secs cannot be 0"));
    }
    if !(0.0..=2.0).contains(&config.generative.temperature) {
        return Err(Error::config(format!(
            "generative temperature {} is outside 0.0..=2.0",
            config.generative.temperature
        )));
    }
    Ok(())
}

fn validate_credentials(config: &AppConfig) -> Result<()> {
    let sections = [
        ("embedding", &config.embedding.provider, &config.embedding.api_key),
        ("generative", &config.generative.provider, &config.generative.api_key),
    ];
    for (section, provider, api_key) in sections {
        if let Some(variable) = credential_env_var(provider)
            && api_key.is_none()
        {
            return Err(Error::config(format!(
                "{section} provider '{provider}' requires an API key; set {variable} or {section}.api_key"
            )));
        }
    }
    Ok(())
}
