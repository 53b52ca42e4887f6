//! Unified error type.

/// Failure raised by a [`Handler`](crate::Handler).
///
/// Middleware passes these through untouched: whatever the downstream handler
/// returned is what the caller sees.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error type returned by reqlog's fallible operations.
///
/// Handler failures are [`BoxError`]s and never pass through here. This type
/// surfaces infrastructure failures of the bundled [`Server`](crate::Server):
/// parsing the listen address, binding to a port, or reading the local address.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid socket address: {0}")]
    Addr(#[from] std::net::AddrParseError),
}
