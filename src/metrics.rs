//! Metrics setup.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Builds a Prometheus recorder, installs it as the global metrics recorder and returns a handle
/// to render the recorded metrics with.
///
/// Fails if a global recorder has already been set.
pub fn build_exporter() -> eyre::Result<PrometheusHandle> {
    let recorder = PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();

    metrics::set_global_recorder(recorder)
        .map_err(|err| eyre::eyre!("could not set metrics recorder: {err}"))?;

    Ok(handle)
}
