//! CORS policy.
//!
//! Two modes, decided per request from its effective method:
//! - **open**: read requests (GET/HEAD) reflect any origin.
//! - **gated**: mutating requests reflect the origin only when it appears on
//!   the configured allow-list; otherwise the cross-origin grant is withheld
//!   while the request itself still proceeds same-origin.
//!
//! The layer sits outside the auth gate, so pre-flight OPTIONS requests are
//! answered with an empty 200 and never reach credential verification. A
//! pre-flight's effective method comes from `Access-Control-Request-Method`.

use axum::http::header::ACCESS_CONTROL_REQUEST_METHOD;
use axum::http::request::Parts;
use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the CORS layer for the whole router.
pub fn cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin, parts| {
            if is_read_request(parts) {
                return true;
            }
            allowed_origins.iter().any(|allowed| allowed == origin)
        }))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// The method the browser will actually send: for a pre-flight that is the
/// declared `Access-Control-Request-Method`, not OPTIONS itself.
fn effective_method(parts: &Parts) -> Method {
    if parts.method == Method::OPTIONS {
        parts
            .headers
            .get(ACCESS_CONTROL_REQUEST_METHOD)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse().ok())
            .unwrap_or(Method::OPTIONS)
    } else {
        parts.method.clone()
    }
}

fn is_read_request(parts: &Parts) -> bool {
    let method = effective_method(parts);
    method == Method::GET || method == Method::HEAD
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts(method: Method, preflight_for: Option<&str>) -> Parts {
        let mut builder = Request::builder().method(method).uri("/campsites");
        if let Some(requested) = preflight_for {
            builder = builder.header(ACCESS_CONTROL_REQUEST_METHOD, requested);
        }
        let (parts, _) = builder.body(()).unwrap().into_parts();
        parts
    }

    #[test]
    fn get_requests_are_reads() {
        assert!(is_read_request(&parts(Method::GET, None)));
        assert!(!is_read_request(&parts(Method::POST, None)));
    }

    #[test]
    fn preflight_uses_declared_method() {
        assert!(is_read_request(&parts(Method::OPTIONS, Some("GET"))));
        assert!(!is_read_request(&parts(Method::OPTIONS, Some("DELETE"))));
        assert!(!is_read_request(&parts(Method::OPTIONS, None)));
    }
}
