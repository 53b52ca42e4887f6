//! Request/response logging middleware.

use std::time::Instant;

use crate::config::Config;
use crate::handler::{BoxFuture, Handler};
use crate::middleware::capture::StatusCapture;
use crate::request::Request;
use crate::response::ResponseSink;
use crate::sink::{LogEvent, LogSink, TracingSink};

/// Logs every request on the way in and its status and latency on the way out.
///
/// The interceptor is itself a [`Handler`], so it slots anywhere in a chain.
/// It never touches the body, never finalizes the response, and returns the
/// downstream result as-is, errors included.
///
/// ```rust
/// use reqlog::{BoxFuture, Config, Handler, Interceptor, Request, ResponseSink};
///
/// struct App;
///
/// impl Handler for App {
///     fn handle<'a>(&'a self, _req: &'a Request, res: &'a mut dyn ResponseSink) -> BoxFuture<'a> {
///         Box::pin(async move { Ok(res.write(b"ok")?) })
///     }
/// }
///
/// let chain = Interceptor::new(App, Config::default(), "access-log");
/// assert_eq!(chain.name(), "access-log");
/// ```
pub struct Interceptor<H, S = TracingSink> {
    next: H,
    name: String,
    config: Config,
    sink: S,
}

impl<H: Handler> Interceptor<H> {
    /// Wraps `next`, sending records to `tracing`.
    pub fn new(next: H, config: Config, name: impl Into<String>) -> Self {
        Self::with_sink(next, config, name, TracingSink)
    }
}

impl<H: Handler, S: LogSink> Interceptor<H, S> {
    /// Wraps `next`, sending records to `sink`.
    pub fn with_sink(next: H, config: Config, name: impl Into<String>, sink: S) -> Self {
        Self { next, name: name.into(), config, sink }
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn config(&self) -> &Config { &self.config }

    fn log_request(&self, req: &Request) {
        self.sink.record(&LogEvent::Request {
            name: &self.name,
            method: req.method(),
            path: req.path(),
            version: req.version(),
            host: req.host(),
            remote_addr: req.remote_addr(),
            user_agent: req.user_agent(),
        });

        if self.config.headers_enabled() {
            // HeaderMap iteration yields one item per value.
            for (header, value) in req.headers() {
                self.sink.record(&LogEvent::Header { name: &self.name, header, value });
            }
        }
    }
}

impl<H: Handler, S: LogSink> Handler for Interceptor<H, S> {
    fn handle<'a>(&'a self, req: &'a Request, res: &'a mut dyn ResponseSink) -> BoxFuture<'a> {
        Box::pin(async move {
            let start = Instant::now();

            if self.config.log_request {
                self.log_request(req);
            }

            let mut capture = StatusCapture::new(res);
            let result = self.next.handle(req, &mut capture).await;

            if self.config.log_response {
                self.sink.record(&LogEvent::Response {
                    name: &self.name,
                    method: req.method(),
                    path: req.path(),
                    status: capture.into_status(),
                    elapsed: start.elapsed(),
                });
            }

            result
        })
    }
}
