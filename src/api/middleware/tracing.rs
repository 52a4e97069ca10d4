//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// Every request gets an `INFO` span carrying method, URI and HTTP version.
/// The response is logged inside that span with its status and latency in
/// milliseconds; 5xx responses are additionally logged at `ERROR`.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/add/example.com/foo version=HTTP/1.1}: shortlink::application::services::link_service: New link kind=uuid short_link=3f2a9c1e long_link=https://example.com/foo
/// INFO request{method=GET uri=/add/example.com/foo version=HTTP/1.1}: tower_http::trace::on_response: finished processing request latency=4 ms status=200
/// INFO request{method=GET uri=/3f2a9c1e version=HTTP/1.1}: tower_http::trace::on_response: finished processing request latency=1 ms status=302
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
