//! Incoming HTTP request type.

use std::net::SocketAddr;

use bytes::Bytes;
use http::{HeaderMap, Method, Uri, Version, header};

/// An incoming HTTP request with its body fully read.
///
/// Handlers receive it by reference: a middleware keeps reading the same
/// request after the downstream handler has returned.
///
/// ```rust
/// use bytes::Bytes;
/// use reqlog::Request;
///
/// let req = Request::from(
///     http::Request::get("/users/42")
///         .header("user-agent", "curl/8.0")
///         .body(Bytes::new())
///         .unwrap(),
/// )
/// .with_remote_addr("10.0.0.7:51000".parse().unwrap());
///
/// assert_eq!(req.path(), "/users/42");
/// assert_eq!(req.user_agent(), "curl/8.0");
/// ```
#[derive(Debug)]
pub struct Request {
    method: Method,
    uri: Uri,
    version: Version,
    headers: HeaderMap,
    body: Bytes,
    remote_addr: Option<SocketAddr>,
}

impl Request {
    pub fn with_remote_addr(mut self, addr: SocketAddr) -> Self {
        self.remote_addr = Some(addr);
        self
    }

    pub fn method(&self) -> &Method { &self.method }
    pub fn uri(&self) -> &Uri { &self.uri }
    pub fn path(&self) -> &str { self.uri.path() }
    pub fn version(&self) -> Version { self.version }
    pub fn headers(&self) -> &HeaderMap { &self.headers }
    pub fn body(&self) -> &Bytes { &self.body }

    /// Peer address of the connection, when the request came off a socket.
    pub fn remote_addr(&self) -> Option<SocketAddr> { self.remote_addr }

    /// Case-insensitive header lookup. Returns the first value, if it is valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The `user-agent` header, or `""` when absent.
    pub fn user_agent(&self) -> &str {
        self.header(header::USER_AGENT.as_str()).unwrap_or_default()
    }

    /// Target host: the URI authority (HTTP/2 `:authority`, absolute-form
    /// requests), falling back to the `host` header. `""` when neither is set.
    pub fn host(&self) -> &str {
        match self.uri.authority() {
            Some(authority) => authority.as_str(),
            None => self.header(header::HOST.as_str()).unwrap_or_default(),
        }
    }
}

impl From<http::Request<Bytes>> for Request {
    fn from(req: http::Request<Bytes>) -> Self {
        let (parts, body) = req.into_parts();
        Self {
            method: parts.method,
            uri: parts.uri,
            version: parts.version,
            headers: parts.headers,
            body,
            remote_addr: None,
        }
    }
}
