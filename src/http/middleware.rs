use crate::http::extractors::ClientIp;
use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

pub async fn log_requests(ClientIp(client_ip): ClientIp, request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let start_time = Instant::now();
    let response = next.run(request).await;
    let elapsed_time = start_time.elapsed().as_micros();

    tracing::info!(
        task = "http_request",
        http_method = %method,
        endpoint = %path,
        client_ip = %client_ip,
        status = response.status().as_u16(),
        processing_time_us = elapsed_time,
    );

    response
}
