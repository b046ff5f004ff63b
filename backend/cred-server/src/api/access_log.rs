use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// One log line per request: method, path, status, latency.
///
/// Only the path is logged. Query strings and bodies can carry credentials.
pub async fn access_log(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    log::info!(
        "{} {} {} {}",
        method,
        path,
        response.status().as_u16(),
        humantime::format_duration(started.elapsed())
    );

    response
}
