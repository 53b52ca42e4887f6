//! Minimal reqlog example — a small JSON service behind the logging middleware.
//!
//! Run with:
//!   cargo run --example basic
//!
//! Try:
//!   curl http://localhost:3000/users/42
//!   curl -H 'x-test: a' -H 'x-test: b' http://localhost:3000/users/7
//!   curl -X DELETE http://localhost:3000/users/42

use http::{Method, StatusCode};
use reqlog::{BoxFuture, Config, Handler, Interceptor, Request, ResponseSink, Server};

struct Users;

impl Handler for Users {
    fn handle<'a>(&'a self, req: &'a Request, res: &'a mut dyn ResponseSink) -> BoxFuture<'a> {
        Box::pin(async move {
            let Some(id) = req.path().strip_prefix("/users/") else {
                res.set_status(StatusCode::NOT_FOUND);
                return Ok(());
            };

            match *req.method() {
                // GET /users/:id
                Method::GET => {
                    res.headers_mut().insert("content-type", "application/json".parse()?);
                    res.write(format!(r#"{{"id":"{id}","name":"alice"}}"#).as_bytes())?;
                }
                // DELETE /users/:id → 204 No Content
                Method::DELETE => res.set_status(StatusCode::NO_CONTENT),
                _ => res.set_status(StatusCode::METHOD_NOT_ALLOWED),
            }
            Ok(())
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), reqlog::Error> {
    tracing_subscriber::fmt::init();

    // In a proxy deployment this comes from the plugin configuration.
    let config: Config = serde_json::from_str(r#"{"logHeaders": true}"#)
        .unwrap_or_default();

    let app = Interceptor::new(Users, config, "access-log");

    Server::bind("0.0.0.0:3000").await?.serve(app).await
}
