//! HTTP Middleware
//!
//! Logs every 4xx/5xx response with its method and URI.

use axum::{extract::Request, middleware::Next, response::Response};

pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::get,
        Router,
    };
    use tower::util::ServiceExt;

    fn create_test_router() -> Router {
        Router::new()
            .route("/ok", get(|| async { "OK" }))
            .route("/bad", get(|| async { StatusCode::BAD_REQUEST }))
            .route("/gateway", get(|| async { StatusCode::BAD_GATEWAY }))
            .layer(axum::middleware::from_fn(error_logging_middleware))
    }

    #[tokio::test]
    async fn test_statuses_pass_through() {
        for (uri, expected) in [
            ("/ok", StatusCode::OK),
            ("/bad", StatusCode::BAD_REQUEST),
            ("/gateway", StatusCode::BAD_GATEWAY),
        ] {
            let request = HttpRequest::builder().uri(uri).body(Body::empty()).unwrap();
            let response = create_test_router().oneshot(request).await.unwrap();
            assert_eq!(response.status(), expected);
        }
    }
}
