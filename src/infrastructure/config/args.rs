use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "clip-avatar",
    version,
    about = "Set your voice-chat avatar straight from the clipboard",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Override for the plugin data directory.
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// HTTP request timeout in seconds.
    #[arg(long)]
    pub http_timeout_secs: Option<u64>,

    /// Client id standing in for the host session.
    #[arg(long, default_value_t = 1)]
    pub client_id: u64,

    /// Clear the current avatar instead of setting one.
    #[arg(long)]
    pub clear: bool,
}
