/**
 * CORS Layer
 *
 * The endpoints are called directly from browsers on other origins. Preflight
 * `OPTIONS` requests are answered by the layer itself with a fixed set of
 * headers, and every other response carries `Access-Control-Allow-Origin: *`.
 *
 * The layer only recognises preflights that carry
 * `Access-Control-Request-Method`. Any other `OPTIONS` request is routed to
 * `preflight`, which answers with the same fixed headers.
 */

use axum::{
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, AUTHORIZATION, CONTENT_TYPE,
        },
        HeaderName, HeaderValue, Method, StatusCode,
    },
    response::IntoResponse,
};
use tower_http::cors::{Any, CorsLayer};

/// Headers browsers may send with cross-origin requests
pub const ALLOWED_HEADERS: [HeaderName; 4] = [
    AUTHORIZATION,
    HeaderName::from_static("x-client-info"),
    HeaderName::from_static("apikey"),
    CONTENT_TYPE,
];

const ALLOWED_HEADERS_VALUE: &str = "authorization, x-client-info, apikey, content-type";
const ALLOWED_METHODS_VALUE: &str = "POST, OPTIONS";

/// Build the CORS layer applied to every route
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(ALLOWED_HEADERS)
}

/// Answer any `OPTIONS` request with the fixed CORS headers
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*")),
            (ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOWED_HEADERS_VALUE)),
            (ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOWED_METHODS_VALUE)),
        ],
    )
}
