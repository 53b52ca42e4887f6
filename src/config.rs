//! What the logging middleware records.

use serde::{Deserialize, Serialize};

/// Flags controlling which records [`Interceptor`](crate::Interceptor) emits.
///
/// Built once at startup and shared read-only by every request. Field names
/// are camelCase on the wire so the struct can be fed straight from a proxy's
/// plugin configuration; missing fields take their default.
///
/// ```rust
/// use reqlog::Config;
///
/// let config = Config::default();
/// assert!(config.log_request && config.log_response && !config.log_headers);
///
/// let verbose = Config { log_headers: true, ..Config::default() };
/// # let _ = verbose;
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Log method, path, version, host, peer and user-agent before delegating.
    pub log_request: bool,
    /// Log method, path, status and latency after the downstream handler returns.
    pub log_response: bool,
    /// Also log every request header value. Only honoured with `log_request`.
    pub log_headers: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_request: true,
            log_response: true,
            log_headers: false,
        }
    }
}

impl Config {
    /// Header records are emitted only as part of request logging.
    pub(crate) fn headers_enabled(&self) -> bool {
        self.log_request && self.log_headers
    }
}
