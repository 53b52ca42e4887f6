//! Middleware layer.
//!
//! Middleware intercepts requests and responses and is the right place for
//! cross-cutting concerns. A middleware is a [`Handler`](crate::Handler) that
//! owns the next handler and decides what happens around the call to it.
//!
//! Built-in middleware:
//! - [`log::Interceptor`] — request and response records with status and latency
//! - [`capture::StatusCapture`] — the per-request sink wrapper it is built on

pub mod capture;
pub mod log;
