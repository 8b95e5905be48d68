use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::analysis::AnalysisError;

/// Install the Prometheus exporter and register all application metrics.
/// Returns a `PrometheusHandle` whose `render()` method produces the
/// text/plain Prometheus scrape payload.
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    register_series();
    Ok(handle)
}

/// A handle backed by a recorder that is not installed globally.
/// Lets tests and embedders serve `/metrics` without owning the process recorder.
pub fn detached_handle() -> PrometheusHandle {
    PrometheusBuilder::new().build_recorder().handle()
}

/// Pre-register series so they appear even before the first increment.
fn register_series() {
    counter!("wallet_analyses_total").absolute(0);
    counter!("trades_fetched_total").absolute(0);
    for kind in AnalysisError::KINDS {
        counter!("wallet_analysis_failures_total", "kind" => kind).absolute(0);
    }

    // Histogram is lazily created on first record; force creation.
    histogram!("trade_fetch_latency_seconds").record(0.0);
}
