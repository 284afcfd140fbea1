use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use lazy_static::lazy_static;
use prometheus::IntCounter;

use crate::{Result, ServerError};

lazy_static! {
    pub static ref GITHUB_API_CALLS: IntCounter =
        IntCounter::new("github_api_calls", "GitHub API calls").unwrap();
    pub static ref SYNC_RUNS: IntCounter =
        IntCounter::new("sync_runs", "Synchronization runs").unwrap();
}

fn metrics_error<E: std::fmt::Display>(e: E) -> ServerError {
    ServerError::MetricsError {
        reason: e.to_string(),
    }
}

pub(crate) fn build_metrics_handler() -> Result<PrometheusMetrics> {
    let prometheus = PrometheusMetricsBuilder::new("api")
        .endpoint("/metrics")
        .build()
        .map_err(metrics_error)?;

    setup_process_metrics(&prometheus)?;

    prometheus
        .registry
        .register(Box::new(GITHUB_API_CALLS.clone()))
        .map_err(metrics_error)?;
    prometheus
        .registry
        .register(Box::new(SYNC_RUNS.clone()))
        .map_err(metrics_error)?;

    Ok(prometheus)
}

#[cfg(unix)]
fn setup_process_metrics(metrics: &PrometheusMetrics) -> Result<()> {
    use prometheus::process_collector::ProcessCollector;

    metrics
        .registry
        .register(Box::new(ProcessCollector::for_self()))
        .map_err(metrics_error)
}

#[cfg(not(unix))]
fn setup_process_metrics(_metrics: &PrometheusMetrics) -> Result<()> {
    tracing::warn!("Process metrics are not supported on this platform.");
    Ok(())
}
