//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: matches the request path against
//! the fixed route table, dispatches to the endpoint handlers, and emits the
//! access log line.

use crate::config::AppState;
use crate::handler::endpoints;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use chrono::Local;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
///
/// Generic over the request body because no route reads one. The method is
/// never inspected either, so every registered path answers GET, HEAD, POST
/// and the rest alike.
pub async fn handle_request<B>(
    req: Request<B>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let response = route_request(req.uri().path());

    if state.config.logging.access_log {
        let entry = access_entry(&req, peer_addr, &response, started);
        logger::log_access(&entry, state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route request based on path: exact match only, unknown paths get 404
fn route_request(path: &str) -> Response<Full<Bytes>> {
    match path {
        "/" => endpoints::serve_index(),
        "/text" => endpoints::serve_text(),
        "/html" => endpoints::serve_html(),
        "/json" => endpoints::serve_json(),
        "/health" => endpoints::serve_health(),
        _ => http::build_404_response(),
    }
}

/// Collect the access-log fields for one request/response pair
fn access_entry<B>(
    req: &Request<B>,
    peer_addr: SocketAddr,
    response: &Response<Full<Bytes>>,
    started: Instant,
) -> AccessLogEntry {
    AccessLogEntry {
        remote_addr: peer_addr.ip().to_string(),
        time: Local::now(),
        method: req.method().to_string(),
        path: req.uri().path().to_string(),
        query: req.uri().query().map(ToString::to_string),
        http_version: http_version_str(req.version()).to_string(),
        status: response.status().as_u16(),
        body_bytes: response.body().size_hint().exact().unwrap_or(0),
        referer: header_string(req, "referer"),
        user_agent: header_string(req, "user-agent"),
        request_time_us: u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
    }
}

/// Extract a header value as an owned string
fn header_string<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

/// Render the HTTP version the way the access-log formats expect ("1.1", "2")
fn http_version_str(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, LoggingConfig, PerformanceConfig, ServerConfig};
    use crate::logger::AccessLogFormat;
    use crate::person::Person;
    use http_body_util::BodyExt;
    use hyper::Method;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState::new(Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                workers: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                access_log: false,
                access_log_format: AccessLogFormat::Combined,
                access_log_file: None,
                error_log_file: None,
            },
            performance: PerformanceConfig {
                keep_alive_timeout: 75,
                read_timeout: 0,
                write_timeout: 0,
                max_connections: None,
            },
        }))
    }

    fn peer() -> SocketAddr {
        "127.0.0.1:50000".parse().expect("peer addr")
    }

    async fn dispatch(method: Method, path: &str) -> Response<Full<Bytes>> {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .body(())
            .expect("request");
        handle_request(req, peer(), test_state())
            .await
            .expect("infallible")
    }

    async fn body_string(response: Response<Full<Bytes>>) -> String {
        let collected = response.into_body().collect().await.expect("collect body");
        String::from_utf8(collected.to_bytes().to_vec()).expect("utf8 body")
    }

    #[tokio::test]
    async fn test_dispatch_index() {
        let response = dispatch(Method::GET, "/").await;
        assert_eq!(response.status(), 200);
        assert!(body_string(response).await.contains("Available Routes"));
    }

    #[tokio::test]
    async fn test_dispatch_text() {
        let response = dispatch(Method::GET, "/text").await;
        assert_eq!(response.status(), 200);
        assert_eq!(
            body_string(response).await,
            "Name: John Doe\nAge: 30\nCity: Paris"
        );
    }

    #[tokio::test]
    async fn test_dispatch_json() {
        let response = dispatch(Method::GET, "/json").await;
        assert_eq!(response.status(), 200);
        assert_eq!(
            body_string(response).await,
            r#"{"name":"John Doe","age":30,"city":"Paris"}"#
        );
    }

    #[tokio::test]
    async fn test_unknown_path_gets_404() {
        let response = dispatch(Method::GET, "/nonexistent").await;
        assert_eq!(response.status(), 404);
        assert_eq!(body_string(response).await, "404 Not Found");
    }

    #[tokio::test]
    async fn test_exact_match_only() {
        assert_eq!(dispatch(Method::GET, "/text/").await.status(), 404);
        assert_eq!(dispatch(Method::GET, "/texts").await.status(), 404);
        assert_eq!(dispatch(Method::GET, "/Text").await.status(), 404);
        assert_eq!(dispatch(Method::GET, "/health/live").await.status(), 404);
    }

    #[tokio::test]
    async fn test_any_method_is_served() {
        let methods = [
            Method::GET,
            Method::HEAD,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ];

        for method in methods {
            let response = dispatch(method.clone(), "/json").await;
            assert_eq!(response.status(), 200, "method {method} should be served");

            let bytes = response
                .into_body()
                .collect()
                .await
                .expect("collect body")
                .to_bytes();
            let decoded: Person = serde_json::from_slice(&bytes).expect("decode body");
            assert_eq!(decoded, Person::fixed());
        }
    }

    #[tokio::test]
    async fn test_query_string_ignored_by_matching() {
        let response = dispatch(Method::GET, "/text?verbose=1").await;
        assert_eq!(response.status(), 200);
    }

    #[test]
    fn test_access_entry_fields() {
        let req = Request::builder()
            .method(Method::GET)
            .uri("/json?pretty=1")
            .header("User-Agent", "curl/8.0")
            .header("Referer", "http://localhost/")
            .body(())
            .expect("request");

        let response = route_request("/json");
        let entry = access_entry(&req, peer(), &response, Instant::now());

        assert_eq!(entry.remote_addr, "127.0.0.1");
        assert_eq!(entry.method, "GET");
        assert_eq!(entry.path, "/json");
        assert_eq!(entry.query.as_deref(), Some("pretty=1"));
        assert_eq!(entry.http_version, "1.1");
        assert_eq!(entry.status, 200);
        assert!(entry.body_bytes > 0);
        assert_eq!(entry.referer.as_deref(), Some("http://localhost/"));
        assert_eq!(entry.user_agent.as_deref(), Some("curl/8.0"));
    }
}
