//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["quiz-quorum.toml", ".quiz-quorum.toml"];

/// Environment variables and the config keys they set
const ENV_KEYS: [(&str, &str); 8] = [
    ("GEMINI_API_KEY", "provider.api_key"),
    ("GEMINI_MODEL", "provider.model"),
    ("MAX_CONCURRENT_WORKERS", "workers.max_concurrent"),
    ("MAX_VALIDATION_ITERATIONS", "consensus.max_iterations"),
    ("GEMINI_MAX_RETRIES", "retry.max_attempts"),
    ("GEMINI_BASE_RETRY_DELAY_MS", "retry.base_delay_ms"),
    ("GEMINI_RETRY_MULTIPLIER", "retry.multiplier"),
    ("LOG_LEVEL", "logging.level"),
];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (`GEMINI_API_KEY`, `MAX_CONCURRENT_WORKERS`, ...)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./quiz-quorum.toml` or `./.quiz-quorum.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/quiz-quorum/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Defaults plus environment only (for --no-config)
    pub fn load_without_files() -> Result<FileConfig, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Self::env())
            .extract()
            .map_err(Box::new)
    }

    fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Self::env())
    }

    fn env() -> Env {
        Env::raw()
            .only(&ENV_KEYS.map(|(var, _)| var))
            .map(|key| {
                ENV_KEYS
                    .iter()
                    .find(|(var, _)| key.as_str().eq_ignore_ascii_case(var))
                    .map(|(_, path)| (*path).into())
                    .unwrap_or_else(|| key.as_str().into())
            })
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/quiz-quorum/config.toml if set,
    /// otherwise falls back to ~/.config/quiz-quorum/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("quiz-quorum").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] {}", ENV_KEYS.map(|(var, _)| var).join(", "));

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            println!("  [{mark}] Explicit: {}", path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./quiz-quorum.toml or ./.quiz-quorum.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
