//! Handler trait and chain composition.
//!
//! # How a chain is put together
//!
//! Every link in a chain implements the same [`Handler`] capability. A
//! middleware owns the next link and calls it from its own `handle`, so a
//! chain is just nesting:
//!
//! ```text
//! Interceptor::new(App, config, "access")      ← outer link
//!        ↓ handle(&req, &mut sink)
//! StatusCapture::new(&mut sink)                ← per-request wrapper
//!        ↓ next.handle(&req, &mut capture)
//! App::handle                                  ← writes status/headers/body
//! ```
//!
//! `handle` returns a boxed future so links can be stored as trait objects
//! (`Arc<dyn Handler>`) and still be `async`. The future borrows the request
//! and the sink for as long as the handler runs, which is what lets a
//! middleware read the request again after delegation.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::BoxError;
use crate::request::Request;
use crate::response::ResponseSink;

/// A heap-allocated, type-erased future returned by [`Handler::handle`].
///
/// `Send` lets the hosting runtime move it across worker threads. The
/// lifetime ties it to the borrowed request and sink.
pub type BoxFuture<'a> = Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + 'a>>;

/// A shared, type-erased handler.
pub type BoxedHandler = Arc<dyn Handler>;

/// Handles one request by writing into a [`ResponseSink`].
///
/// Returning `Err` signals a failure to the caller; whatever was already
/// written to the sink stays written.
///
/// ```rust
/// use http::StatusCode;
/// use reqlog::{BoxFuture, Handler, Request, ResponseSink};
///
/// struct Teapot;
///
/// impl Handler for Teapot {
///     fn handle<'a>(&'a self, _req: &'a Request, res: &'a mut dyn ResponseSink) -> BoxFuture<'a> {
///         Box::pin(async move {
///             res.set_status(StatusCode::IM_A_TEAPOT);
///             res.write(b"short and stout")?;
///             Ok(())
///         })
///     }
/// }
/// ```
pub trait Handler: Send + Sync + 'static {
    fn handle<'a>(&'a self, req: &'a Request, res: &'a mut dyn ResponseSink) -> BoxFuture<'a>;
}

impl<H: Handler + ?Sized> Handler for Arc<H> {
    fn handle<'a>(&'a self, req: &'a Request, res: &'a mut dyn ResponseSink) -> BoxFuture<'a> {
        (**self).handle(req, res)
    }
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn handle<'a>(&'a self, req: &'a Request, res: &'a mut dyn ResponseSink) -> BoxFuture<'a> {
        (**self).handle(req, res)
    }
}
