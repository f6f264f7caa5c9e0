mod clipboard_port;
mod host_session_port;
mod url_fetch_port;

pub use clipboard_port::ClipboardPort;
pub use host_session_port::{HostError, HostSessionPort, TransferId};
pub use url_fetch_port::{FetchError, UrlFetchPort};
