// Private module declaration
mod server;

use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, IntGaugeVec, Opts, Registry};

// Re-export for public API
pub use server::configure;

// ============================================================================
// Metrics Module - Prometheus metrics for the booking API
// ============================================================================
//
// Provides metrics for:
// - HTTP traffic (requests by route and status, latency)
// - Store activity (operations by outcome, current record counts)
//
// All metrics are registered with a per-process Registry and scraped via
// GET /metrics on the API port.
// ============================================================================

pub struct Metrics {
    registry: Registry,

    // HTTP Metrics
    pub http_requests_total: IntCounterVec,
    pub http_request_duration: HistogramVec,

    // Store Metrics
    pub store_operations_total: IntCounterVec,
    pub store_records: IntGaugeVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        // HTTP Metrics
        let http_requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total HTTP requests handled"),
            &["method", "route", "status"],
        )?;
        registry.register(Box::new(http_requests_total.clone()))?;

        let http_request_duration = HistogramVec::new(
            HistogramOpts::new("http_request_duration_seconds", "HTTP request handling duration")
                .buckets(vec![0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]),
            &["method", "route"],
        )?;
        registry.register(Box::new(http_request_duration.clone()))?;

        // Store Metrics
        let store_operations_total = IntCounterVec::new(
            Opts::new("store_operations_total", "Store operations by outcome"),
            &["store", "operation", "outcome"],
        )?;
        registry.register(Box::new(store_operations_total.clone()))?;

        let store_records = IntGaugeVec::new(
            Opts::new("store_records", "Records currently held by each store"),
            &["store"],
        )?;
        registry.register(Box::new(store_records.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration,
            store_operations_total,
            store_records,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Helper to record a finished HTTP request
    pub fn record_http_request(&self, method: &str, route: &str, status: u16, duration_secs: f64) {
        self.http_requests_total
            .with_label_values(&[method, route, &status.to_string()])
            .inc();
        self.http_request_duration
            .with_label_values(&[method, route])
            .observe(duration_secs);
    }

    /// Helper to record a store call; `outcome` is "ok" or the error kind
    pub fn record_store_operation(&self, store: &str, operation: &str, outcome: &str) {
        self.store_operations_total
            .with_label_values(&[store, operation, outcome])
            .inc();
    }

    /// Helper to publish the current size of a store
    pub fn set_store_records(&self, store: &str, count: usize) {
        self.store_records
            .with_label_values(&[store])
            .set(i64::try_from(count).unwrap_or(i64::MAX));
    }
}
