//! Fixed-record endpoint handlers
//!
//! One handler per registered route. Every handler rebuilds the record
//! locally; the request itself is never consulted, which is what makes the
//! routes method-agnostic.

use crate::http;
use crate::person::Person;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

/// Serve the record as plain text (`/text`)
pub fn serve_text() -> Response<Full<Bytes>> {
    let person = Person::fixed();
    let body = format!(
        "Name: {}\nAge: {}\nCity: {}",
        person.name, person.age, person.city
    );
    http::build_text_response(body)
}

/// Serve the record as an HTML page (`/html`)
pub fn serve_html() -> Response<Full<Bytes>> {
    let person = Person::fixed();
    let html = format!(
        r"<!DOCTYPE html>
<html>
<head>
    <title>Human Info</title>
</head>
<body>
    <h1>Human Information</h1>
    <p><strong>Name:</strong> {}</p>
    <p><strong>Age:</strong> {}</p>
    <p><strong>City:</strong> {}</p>
</body>
</html>",
        person.name, person.age, person.city
    );
    http::build_html_response(html)
}

/// Serve the record as JSON (`/json`)
pub fn serve_json() -> Response<Full<Bytes>> {
    http::build_json_response(StatusCode::OK, &Person::fixed())
}

/// Serve the route index (`/`)
pub fn serve_index() -> Response<Full<Bytes>> {
    let html = String::from(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>API Routes</title>
</head>
<body>
    <h1>Available Routes</h1>
    <ul>
        <li><a href="/text">/text</a> - Text response</li>
        <li><a href="/html">/html</a> - HTML response</li>
        <li><a href="/json">/json</a> - JSON response</li>
    </ul>
</body>
</html>"#,
    );
    http::build_html_response(html)
}

/// Serve the health check (`/health`)
pub fn serve_health() -> Response<Full<Bytes>> {
    http::build_json_response(StatusCode::OK, &serde_json::json!({ "status": "healthy" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_string(response: Response<Full<Bytes>>) -> String {
        let collected = response.into_body().collect().await.expect("collect body");
        String::from_utf8(collected.to_bytes().to_vec()).expect("utf8 body")
    }

    fn content_type(response: &Response<Full<Bytes>>) -> &str {
        response
            .headers()
            .get("Content-Type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
    }

    #[tokio::test]
    async fn test_text_endpoint() {
        let response = serve_text();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(content_type(&response), "text/plain");
        assert_eq!(
            body_string(response).await,
            "Name: John Doe\nAge: 30\nCity: Paris"
        );
    }

    #[tokio::test]
    async fn test_html_endpoint() {
        let response = serve_html();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(content_type(&response), "text/html");

        let body = body_string(response).await;
        assert!(body.contains("<html>"));
        assert!(body.contains("<h1>Human Information</h1>"));
        assert!(body.contains("<strong>Name:</strong> John Doe"));
        assert!(body.contains("<strong>Age:</strong> 30"));
        assert!(body.contains("<strong>City:</strong> Paris"));
    }

    #[tokio::test]
    async fn test_json_endpoint() {
        let response = serve_json();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(content_type(&response), "application/json");

        let body = body_string(response).await;
        assert_eq!(body, r#"{"name":"John Doe","age":30,"city":"Paris"}"#);

        let decoded: Person = serde_json::from_str(&body).expect("decode body");
        assert_eq!(decoded, Person::fixed());
    }

    #[tokio::test]
    async fn test_index_endpoint() {
        let response = serve_index();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(content_type(&response), "text/html");

        let body = body_string(response).await;
        assert!(body.contains("<html>"));
        assert!(body.contains("<h1>Available Routes</h1>"));
        assert!(body.contains(r#"<a href="/text">/text</a>"#));
        assert!(body.contains(r#"<a href="/html">/html</a>"#));
        assert!(body.contains(r#"<a href="/json">/json</a>"#));
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = serve_health();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(content_type(&response), "application/json");

        let body = body_string(response).await;
        let decoded: serde_json::Value = serde_json::from_str(&body).expect("decode body");
        assert_eq!(decoded, serde_json::json!({"status": "healthy"}));
    }
}
