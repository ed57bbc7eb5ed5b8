//! Prometheus metrics for the storefront API.
//!
//! Routes are labelled with ObjectId segments collapsed to `{id}`, so the
//! label set stays bounded by the router table.

use std::sync::LazyLock;

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
    core::Collector,
};
use salvo::{
    Request, Response, handler,
    http::{StatusCode, header::CONTENT_TYPE},
};
use tracing::error;

use boutique_app::domain::saved_items::SavedList;

const DURATION_BUCKETS: [f64; 10] = [0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0];

#[derive(Debug)]
struct ApiMetrics {
    registry: Registry,
    requests: IntCounterVec,
    durations: HistogramVec,
    in_flight: IntGauge,
    saved_item_conflicts: IntCounterVec,
}

static METRICS: LazyLock<Option<ApiMetrics>> = LazyLock::new(|| match ApiMetrics::build() {
    Ok(metrics) => Some(metrics),
    Err(source) => {
        error!("failed to build prometheus metrics: {source}");
        None
    }
});

impl ApiMetrics {
    fn build() -> Result<Self, prometheus::Error> {
        let registry = Registry::new_custom(Some("boutique_json".to_owned()), None)?;

        let requests = register(
            &registry,
            IntCounterVec::new(
                Opts::new("http_requests_total", "HTTP requests by method, route and status class."),
                &["method", "route", "status_class"],
            )?,
        )?;

        let durations = register(
            &registry,
            HistogramVec::new(
                HistogramOpts::new(
                    "http_request_duration_seconds",
                    "HTTP request latency by method and route.",
                )
                .buckets(DURATION_BUCKETS.to_vec()),
                &["method", "route"],
            )?,
        )?;

        let in_flight = register(
            &registry,
            IntGauge::new("http_requests_in_flight", "HTTP requests currently being served.")?,
        )?;

        let saved_item_conflicts = register(
            &registry,
            IntCounterVec::new(
                Opts::new(
                    "saved_item_conflicts_total",
                    "Rejected duplicate cart or wishlist additions by list.",
                ),
                &["list"],
            )?,
        )?;

        Ok(Self {
            registry,
            requests,
            durations,
            in_flight,
            saved_item_conflicts,
        })
    }
}

fn register<C>(registry: &Registry, collector: C) -> Result<C, prometheus::Error>
where
    C: Collector + Clone + 'static,
{
    registry.register(Box::new(collector.clone()))?;

    Ok(collector)
}

/// Decrements the in-flight gauge when the request finishes.
#[derive(Debug)]
pub(super) struct InFlight(Option<&'static IntGauge>);

impl InFlight {
    pub(super) fn track() -> Self {
        let gauge = METRICS.as_ref().map(|metrics| &metrics.in_flight);

        if let Some(gauge) = gauge {
            gauge.inc();
        }

        Self(gauge)
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if let Some(gauge) = self.0 {
            gauge.dec();
        }
    }
}

pub(super) fn observe_request(method: &str, route: &str, status: StatusCode, seconds: f64) {
    let Some(metrics) = METRICS.as_ref() else {
        return;
    };

    metrics
        .requests
        .with_label_values(&[method, route, status_class(status)])
        .inc();

    metrics
        .durations
        .with_label_values(&[method, route])
        .observe(seconds);
}

/// Count a duplicate item rejected by the cart or wishlist.
pub(crate) fn record_saved_item_conflict(list: SavedList) {
    if let Some(metrics) = METRICS.as_ref() {
        metrics
            .saved_item_conflicts
            .with_label_values(&[list.as_str()])
            .inc();
    }
}

/// Prometheus text exposition.
#[handler]
pub(crate) async fn metrics_handler(_req: &mut Request, res: &mut Response) {
    let Some(metrics) = METRICS.as_ref() else {
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        return;
    };

    let encoder = TextEncoder::new();
    let mut encoded = Vec::new();

    if let Err(source) = encoder.encode(&metrics.registry.gather(), &mut encoded) {
        error!("failed to encode metrics: {source}");
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        return;
    }

    if let Err(source) = res.add_header(CONTENT_TYPE, encoder.format_type(), true) {
        error!("failed to set metrics content type: {source}");
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        return;
    }

    res.render(String::from_utf8_lossy(&encoded).into_owned());
}

fn status_class(status: StatusCode) -> &'static str {
    match status.as_u16() / 100 {
        1 => "1xx",
        2 => "2xx",
        3 => "3xx",
        4 => "4xx",
        5 => "5xx",
        _ => "other",
    }
}
