//! The response-sink capability and its in-memory implementation.
//!
//! Handlers do not return responses; they write into a [`ResponseSink`] handed
//! to them by the caller. That is what lets a middleware stand between the
//! caller and the handler and watch what gets written.

use std::io;

use bytes::{Bytes, BytesMut};
use http::{HeaderMap, StatusCode};
use http_body_util::Full;
use tracing::warn;

// ── ResponseSink ─────────────────────────────────────────────────────────────

/// Where a handler writes its response.
///
/// The contract follows the usual HTTP writer model: set headers and status
/// first, then write body bytes. A response that never sets a status is a
/// `200 OK`.
pub trait ResponseSink: Send {
    /// Sets the status code. Transports may ignore calls made after the body
    /// has started.
    fn set_status(&mut self, status: StatusCode);

    fn headers(&self) -> &HeaderMap;

    /// Mutable access for setting or appending headers.
    fn headers_mut(&mut self) -> &mut HeaderMap;

    /// Appends body bytes.
    fn write(&mut self, chunk: &[u8]) -> io::Result<()>;
}

// ── BufferedResponse ─────────────────────────────────────────────────────────

/// A [`ResponseSink`] that collects the response in memory.
///
/// The status may change freely until the first [`write`](ResponseSink::write).
/// That write commits it (200 if never set); later `set_status` calls are
/// ignored and reported at `warn` level.
///
/// ```rust
/// use http::StatusCode;
/// use reqlog::{BufferedResponse, ResponseSink};
///
/// let mut res = BufferedResponse::new();
/// res.set_status(StatusCode::CREATED);
/// res.write(b"{}").unwrap();
///
/// let res = res.into_response();
/// assert_eq!(res.status(), StatusCode::CREATED);
/// ```
#[derive(Debug, Default)]
pub struct BufferedResponse {
    status: Option<StatusCode>,
    headers: HeaderMap,
    body: BytesMut,
    committed: bool,
}

impl BufferedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// The explicitly set status, `None` if the handler has not set one.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Whether the status line is fixed (body writing has started).
    pub fn is_committed(&self) -> bool {
        self.committed
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Converts into an `http::Response`, defaulting the status to `200 OK`.
    pub fn into_response(self) -> http::Response<Full<Bytes>> {
        let mut res = http::Response::new(Full::new(self.body.freeze()));
        *res.status_mut() = self.status.unwrap_or(StatusCode::OK);
        *res.headers_mut() = self.headers;
        res
    }
}

impl ResponseSink for BufferedResponse {
    fn set_status(&mut self, status: StatusCode) {
        if self.committed {
            warn!(
                ignored = status.as_u16(),
                current = self.status.unwrap_or(StatusCode::OK).as_u16(),
                "superfluous set_status after body write"
            );
            return;
        }
        self.status = Some(status);
    }

    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn write(&mut self, chunk: &[u8]) -> io::Result<()> {
        if !self.committed {
            self.committed = true;
            self.status.get_or_insert(StatusCode::OK);
        }
        self.body.extend_from_slice(chunk);
        Ok(())
    }
}
