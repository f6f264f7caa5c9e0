//! Infrastructure layer with adapters for external capabilities.

pub mod clipboard;
/// Plugin configuration.
pub mod config;
/// Blocking HTTP fetch adapter.
pub mod http_fetcher;
/// Loopback host session.
pub mod session;
/// Plugin data storage bootstrap.
pub mod storage;

pub use clipboard::SystemClipboard;
pub use config::{AppConfig, CliArgs, LogLevel};
pub use http_fetcher::{DEFAULT_HTTP_TIMEOUT_SECS, HttpUrlFetcher};
pub use session::PreviewSession;
pub use storage::prepare_data_dir;
