//! # reqlog
//!
//! Request/response logging middleware for handler chains.
//! It watches traffic go by. It does not touch it.
//!
//! ## The contract
//!
//! An [`Interceptor`] wraps the next [`Handler`] in the chain. For every
//! request it:
//!
//! - logs method, path, version, host, peer and user-agent (and, if asked,
//!   every header value) **before** delegating;
//! - hands the downstream handler a [`StatusCapture`] in place of the real
//!   [`ResponseSink`], so it can see which status was set;
//! - logs method, path, status and latency **after** the handler returns,
//!   whether it returned `Ok` or `Err`.
//!
//! What reqlog intentionally ignores: bodies, metrics, sampling, shipping
//! logs anywhere. Records go to a [`LogSink`]; the default [`TracingSink`]
//! emits them as `tracing` events and your subscriber does the rest.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use http::StatusCode;
//! use reqlog::{BoxFuture, Config, Handler, Interceptor, Request, ResponseSink, Server};
//!
//! struct Users;
//!
//! impl Handler for Users {
//!     fn handle<'a>(&'a self, req: &'a Request, res: &'a mut dyn ResponseSink) -> BoxFuture<'a> {
//!         Box::pin(async move {
//!             if req.path() != "/users/42" {
//!                 res.set_status(StatusCode::NOT_FOUND);
//!                 return Ok(());
//!             }
//!             res.headers_mut().insert("content-type", "application/json".parse()?);
//!             res.write(br#"{"id":42}"#)?;
//!             Ok(())
//!         })
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), reqlog::Error> {
//!     tracing_subscriber::fmt::init();
//!
//!     let config = Config { log_headers: true, ..Config::default() };
//!     let app = Interceptor::new(Users, config, "access-log");
//!
//!     Server::bind("0.0.0.0:3000").await?.serve(app).await
//! }
//! ```

mod config;
mod error;
mod handler;
mod request;
mod response;
mod server;
mod sink;

pub mod middleware;

pub use config::Config;
pub use error::{BoxError, Error};
pub use handler::{BoxFuture, BoxedHandler, Handler};
pub use middleware::capture::StatusCapture;
pub use middleware::log::Interceptor;
pub use request::Request;
pub use response::{BufferedResponse, ResponseSink};
pub use server::Server;
pub use sink::{LogEvent, LogSink, TracingSink};
