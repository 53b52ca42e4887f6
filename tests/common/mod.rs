#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use bytes::Bytes;
use http::StatusCode;
use reqlog::{BoxFuture, Handler, LogEvent, LogSink, Request, ResponseSink};

/// Owned copy of a [`LogEvent`], so tests can inspect it after the request is gone.
#[derive(Clone, Debug, PartialEq)]
pub enum Record {
    Request {
        name: String,
        method: String,
        path: String,
        version: String,
        host: String,
        remote_addr: Option<SocketAddr>,
        user_agent: String,
    },
    Header {
        header: String,
        value: String,
    },
    Response {
        name: String,
        method: String,
        path: String,
        status: StatusCode,
        elapsed: Duration,
    },
}

/// Log sink that keeps every record and its rendered line.
#[derive(Clone, Default)]
pub struct Recorder {
    records: Arc<Mutex<Vec<Record>>>,
    lines: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<Record> {
        self.records.lock().unwrap().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn responses(&self) -> Vec<(String, StatusCode, Duration)> {
        self.records()
            .into_iter()
            .filter_map(|r| match r {
                Record::Response { path, status, elapsed, .. } => Some((path, status, elapsed)),
                _ => None,
            })
            .collect()
    }
}

impl LogSink for Recorder {
    fn record(&self, event: &LogEvent<'_>) {
        let record = match *event {
            LogEvent::Request { name, method, path, version, host, remote_addr, user_agent } => {
                Record::Request {
                    name: name.to_owned(),
                    method: method.to_string(),
                    path: path.to_owned(),
                    version: format!("{version:?}"),
                    host: host.to_owned(),
                    remote_addr,
                    user_agent: user_agent.to_owned(),
                }
            }
            LogEvent::Header { header, value, .. } => Record::Header {
                header: header.as_str().to_owned(),
                value: value.to_str().unwrap_or_default().to_owned(),
            },
            LogEvent::Response { name, method, path, status, elapsed } => Record::Response {
                name: name.to_owned(),
                method: method.to_string(),
                path: path.to_owned(),
                status,
                elapsed,
            },
        };
        self.records.lock().unwrap().push(record);
        self.lines.lock().unwrap().push(event.to_string());
    }
}

pub fn get(path: &str) -> Request {
    Request::from(http::Request::get(path).body(Bytes::new()).unwrap())
}

// ── Test handlers ─────────────────────────────────────────────────────────────

/// Writes headers and a body, never sets a status.
pub struct Hello;

impl Handler for Hello {
    fn handle<'a>(&'a self, _req: &'a Request, res: &'a mut dyn ResponseSink) -> BoxFuture<'a> {
        Box::pin(async move {
            res.headers_mut().insert("content-type", "text/plain".parse()?);
            res.headers_mut().append("set-cookie", "a=1".parse()?);
            res.headers_mut().append("set-cookie", "b=2".parse()?);
            res.write(b"Hello, ")?;
            res.write(b"World!")?;
            Ok(())
        })
    }
}

/// Sets the given status, then writes the body in several chunks.
pub struct Respond(pub StatusCode);

impl Handler for Respond {
    fn handle<'a>(&'a self, _req: &'a Request, res: &'a mut dyn ResponseSink) -> BoxFuture<'a> {
        Box::pin(async move {
            res.set_status(self.0);
            for chunk in ["not", " ", "found"] {
                res.write(chunk.as_bytes())?;
            }
            Ok(())
        })
    }
}

/// Sleeps before returning.
pub struct Sleep(pub Duration);

impl Handler for Sleep {
    fn handle<'a>(&'a self, _req: &'a Request, _res: &'a mut dyn ResponseSink) -> BoxFuture<'a> {
        Box::pin(async move {
            tokio::time::sleep(self.0).await;
            Ok(())
        })
    }
}

#[derive(Debug, thiserror::Error)]
#[error("upstream exploded")]
pub struct Boom;

/// Sets 502 and then fails.
pub struct Fail;

impl Handler for Fail {
    fn handle<'a>(&'a self, _req: &'a Request, res: &'a mut dyn ResponseSink) -> BoxFuture<'a> {
        Box::pin(async move {
            res.set_status(StatusCode::BAD_GATEWAY);
            Err(Boom.into())
        })
    }
}

/// `/n/{i}` answers `200 + i % 100` after a short, index-dependent delay.
pub struct ByIndex;

impl ByIndex {
    pub fn status_for(i: u16) -> StatusCode {
        StatusCode::from_u16(200 + i % 100).unwrap()
    }
}

impl Handler for ByIndex {
    fn handle<'a>(&'a self, req: &'a Request, res: &'a mut dyn ResponseSink) -> BoxFuture<'a> {
        Box::pin(async move {
            let i: u16 = req.path().trim_start_matches("/n/").parse()?;
            tokio::time::sleep(Duration::from_millis(u64::from(i % 7))).await;
            res.set_status(Self::status_for(i));
            res.write(req.path().as_bytes())?;
            Ok(())
        })
    }
}
