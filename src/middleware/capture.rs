//! Status-capturing response wrapper.

use std::io;

use http::{HeaderMap, StatusCode};

use crate::response::ResponseSink;

/// Wraps a [`ResponseSink`] for the duration of one request and remembers the
/// status the handler set.
///
/// Every call is forwarded unchanged to the wrapped sink. `set_status` is the
/// only one observed: the value is recorded first, overwriting any earlier
/// one, then forwarded. Until the handler sets a status the capture reads
/// `200 OK`, which is what an unset status means on the wire.
pub struct StatusCapture<'a> {
    inner: &'a mut dyn ResponseSink,
    status: StatusCode,
}

impl<'a> StatusCapture<'a> {
    pub fn new(inner: &'a mut dyn ResponseSink) -> Self {
        Self { inner, status: StatusCode::OK }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn into_status(self) -> StatusCode {
        self.status
    }
}

impl ResponseSink for StatusCapture<'_> {
    fn set_status(&mut self, status: StatusCode) {
        self.status = status;
        self.inner.set_status(status);
    }

    fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        self.inner.headers_mut()
    }

    fn write(&mut self, chunk: &[u8]) -> io::Result<()> {
        self.inner.write(chunk)
    }
}
