//! HTTP response builders.
//!
//! Both builders are pure and infallible: header values are static and the
//! body is always a JSON document.

use lambda_http::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use lambda_http::http::{HeaderValue, StatusCode};
use lambda_http::{Body, Response};
use serde::Serialize;
use serde_json::json;

use crate::constants::cors;

/// 200 response carrying `data` as JSON, with the full CORS header set.
///
/// Falls back to a 500 error response if `data` cannot be serialized.
pub fn success_response<T: Serialize>(data: &T) -> Response<Body> {
    let body = match serde_json::to_string(data) {
        Ok(body) => body,
        Err(err) => {
            return error_response(&err.to_string(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let mut resp = json_response(StatusCode::OK, body);
    let headers = resp.headers_mut();
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(cors::ALLOW_HEADERS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(cors::ALLOW_METHODS),
    );
    resp
}

/// Response with the given status and body `{"error": message}`.
pub fn error_response(message: &str, status: StatusCode) -> Response<Body> {
    json_response(status, json!({ "error": message }).to_string())
}

fn json_response(status: StatusCode, body: String) -> Response<Body> {
    let mut resp = Response::new(Body::Text(body));
    *resp.status_mut() = status;
    let headers = resp.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(cors::ALLOW_ORIGIN),
    );
    resp
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn body_json(resp: &Response<Body>) -> Value {
        match resp.body() {
            Body::Text(text) => serde_json::from_str(text).unwrap(),
            other => panic!("expected a text body, got {other:?}"),
        }
    }

    #[test]
    fn success_carries_full_cors_set() {
        let resp = success_response(&json!({ "symbol": "AAPL" }));
        assert_eq!(resp.status(), StatusCode::OK);

        let headers = resp.headers();
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            headers[ACCESS_CONTROL_ALLOW_HEADERS],
            "Content-Type,X-Amz-Date,Authorization,X-Api-Key"
        );
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_METHODS], "GET,POST,OPTIONS");
        assert_eq!(body_json(&resp), json!({ "symbol": "AAPL" }));
    }

    #[test]
    fn error_carries_origin_only() {
        let resp = error_response("boom \"quoted\"", StatusCode::BAD_GATEWAY);
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let headers = resp.headers();
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert!(headers.get(ACCESS_CONTROL_ALLOW_HEADERS).is_none());
        assert!(headers.get(ACCESS_CONTROL_ALLOW_METHODS).is_none());
        assert_eq!(body_json(&resp), json!({ "error": "boom \"quoted\"" }));
    }
}
