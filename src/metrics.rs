//! Prometheus metrics for vidstream-service.
//!
//! Exposes the service collectors and an HTTP handler for the `/metrics`
//! endpoint.

use actix_web::HttpResponse;
use lazy_static::lazy_static;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};

lazy_static! {
    /// Successfully recorded video view increments. Failed increments are
    /// dropped by design, so this undercounts rather than blocks.
    pub static ref VIDEO_VIEW_EVENTS: IntCounter = register_int_counter!(
        "vidstream_video_view_events_total",
        "Number of recorded video view increments"
    )
    .expect("metric registration");
}

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}
