//! Configuration file loading for quiz-quorum
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables (`GEMINI_API_KEY`, `MAX_CONCURRENT_WORKERS`, ...)
//! 2. `--config <path>` specified file
//! 3. Project root: `./quiz-quorum.toml` or `./.quiz-quorum.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/quiz-quorum/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileConsensusConfig, FileLoggingConfig, FileOutputConfig, FileProviderConfig,
    FileRetryConfig, FileWorkersConfig,
};
pub use loader::ConfigLoader;
