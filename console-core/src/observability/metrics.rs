//! Prometheus exposition for the `metrics` facade.
//!
//! The recorder is installed once per process; the request middleware records
//! into it through the `metrics` macros and `/metrics` renders the snapshot.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder if it is not installed yet and return its handle.
pub fn init_metrics() -> &'static PrometheusHandle {
    HANDLE.get_or_init(|| {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        if let Err(e) = metrics::set_global_recorder(recorder) {
            // Another recorder owns the facade; the handle still renders, just empty.
            tracing::warn!(error = %e, "Global metrics recorder already installed");
        }
        handle
    })
}

/// Render all recorded metrics in the Prometheus text format.
pub fn render_metrics() -> String {
    init_metrics().render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_show_up_in_rendered_output() {
        init_metrics();
        metrics::counter!("console_core_test_total").increment(3);

        let rendered = render_metrics();
        assert!(rendered.contains("console_core_test_total 3"));
    }
}
