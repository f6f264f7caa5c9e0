//! Plugin configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::application::services::{DEFAULT_MAX_AVATAR_BYTES, DEFAULT_RESIZE_BOUND};
use crate::infrastructure::http_fetcher::DEFAULT_HTTP_TIMEOUT_SECS;

const APP_NAME: &str = "clip-avatar";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "tecknian";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Converts to tracing level.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Plugin configuration from the config file and CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Override for the plugin data directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,

    /// Bounding box applied to both avatar axes, in pixels.
    #[serde(default = "default_resize_bound")]
    pub resize_bound: u32,

    /// Host-side ceiling on avatar payloads, in bytes.
    #[serde(default = "default_max_avatar_bytes")]
    pub max_avatar_bytes: u64,
}

fn default_http_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

fn default_resize_bound() -> u32 {
    DEFAULT_RESIZE_BOUND
}

fn default_max_avatar_bytes() -> u64 {
    DEFAULT_MAX_AVATAR_BYTES
}

use super::args::CliArgs;

impl AppConfig {
    /// Loads configuration from the given file, the default location, or
    /// built-in defaults when no file exists.
    #[must_use]
    pub fn load(path_override: Option<&Path>) -> Self {
        let Some(path) = path_override
            .map(Path::to_path_buf)
            .or_else(Self::default_config_path)
        else {
            return Self::default();
        };

        match fs::read_to_string(&path) {
            Ok(raw) => toml::from_str(&raw).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "Malformed config file, using defaults");
                Self::default()
            }),
            // A missing file is the normal first run.
            Err(_) => Self::default(),
        }
    }

    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(data_dir) = args.data_dir {
            self.data_dir = Some(data_dir);
        }
        if let Some(timeout) = args.http_timeout_secs {
            self.http_timeout_secs = timeout;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default config file path.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        Self::default_config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            data_dir: None,
            http_timeout_secs: default_http_timeout_secs(),
            resize_bound: default_resize_bound(),
            max_avatar_bytes: default_max_avatar_bytes(),
        }
    }
}
