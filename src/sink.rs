//! Log records and where they go.
//!
//! [`Interceptor`](crate::Interceptor) never talks to a global logger. It hands
//! each [`LogEvent`] to the [`LogSink`] it was built with. The default,
//! [`TracingSink`], forwards events to `tracing`; tests swap in a sink that
//! records them.

use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use http::{HeaderName, HeaderValue, Method, StatusCode, Version};
use tracing::info;

// ── LogEvent ─────────────────────────────────────────────────────────────────

/// One log record. Borrowed from the request being handled.
///
/// `Display` renders a single line, for sinks that only take text.
#[derive(Clone, Copy, Debug)]
pub enum LogEvent<'a> {
    /// Emitted before delegation when request logging is on.
    Request {
        name: &'a str,
        method: &'a Method,
        path: &'a str,
        version: Version,
        host: &'a str,
        remote_addr: Option<SocketAddr>,
        user_agent: &'a str,
    },
    /// One per header value, right after [`LogEvent::Request`], when header
    /// logging is on.
    Header {
        name: &'a str,
        header: &'a HeaderName,
        value: &'a HeaderValue,
    },
    /// Emitted after the downstream handler returns when response logging is on.
    Response {
        name: &'a str,
        method: &'a Method,
        path: &'a str,
        status: StatusCode,
        elapsed: Duration,
    },
}

impl fmt::Display for LogEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request { method, path, version, host, remote_addr, user_agent, .. } => {
                write!(f, "[REQUEST] {method} {path} {version:?} host={host} remote_addr=")?;
                match remote_addr {
                    Some(addr) => write!(f, "{addr}")?,
                    None => f.write_str("-")?,
                }
                write!(f, " user_agent={user_agent:?}")
            }
            Self::Header { header, value, .. } => {
                write!(f, "[REQUEST] header {header}: {}", String::from_utf8_lossy(value.as_bytes()))
            }
            Self::Response { method, path, status, elapsed, .. } => {
                write!(f, "[RESPONSE] {method} {path} - status {} - {elapsed:?}", status.as_u16())
            }
        }
    }
}

// ── LogSink ──────────────────────────────────────────────────────────────────

/// Accepts log records. Fire-and-forget: a sink handles its own failures.
///
/// ```rust
/// use reqlog::{LogEvent, LogSink};
///
/// struct Stderr;
///
/// impl LogSink for Stderr {
///     fn record(&self, event: &LogEvent<'_>) {
///         eprintln!("{event}");
///     }
/// }
/// ```
pub trait LogSink: Send + Sync + 'static {
    fn record(&self, event: &LogEvent<'_>);
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn record(&self, event: &LogEvent<'_>) {
        (**self).record(event)
    }
}

// ── TracingSink ──────────────────────────────────────────────────────────────

/// Default sink: every event becomes an `info` event on target `reqlog`
/// with structured fields.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn record(&self, event: &LogEvent<'_>) {
        match *event {
            LogEvent::Request { name, method, path, version, host, remote_addr, user_agent } => {
                let remote_addr = remote_addr.map(|a| a.to_string()).unwrap_or_default();
                info!(
                    target: "reqlog",
                    plugin = name,
                    %method,
                    path,
                    version = ?version,
                    host,
                    %remote_addr,
                    user_agent,
                    "request"
                );
            }
            LogEvent::Header { name, header, value } => {
                info!(
                    target: "reqlog",
                    plugin = name,
                    header = header.as_str(),
                    value = %String::from_utf8_lossy(value.as_bytes()),
                    "request header"
                );
            }
            LogEvent::Response { name, method, path, status, elapsed } => {
                info!(
                    target: "reqlog",
                    plugin = name,
                    %method,
                    path,
                    status = status.as_u16(),
                    elapsed_ms = elapsed.as_secs_f64() * 1000.0,
                    "response"
                );
            }
        }
    }
}
