//! Prometheus exporter for the counters recorded through the `metrics` facade.
//!
//! Rendering happens on demand from the metrics endpoint; no separate
//! listener is started.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use sms_core::telemetry;

use crate::InfrastructureError;

/// Handle to the Prometheus recorder
#[derive(Clone)]
pub struct PrometheusExporter {
    handle: PrometheusHandle,
}

impl PrometheusExporter {
    /// Install the recorder globally and describe the facade's counters
    ///
    /// Only one recorder can be installed per process.
    pub fn install() -> Result<Self, InfrastructureError> {
        let handle = PrometheusBuilder::new().install_recorder().map_err(|e| {
            InfrastructureError::Metrics(format!("failed to install Prometheus recorder: {e}"))
        })?;

        telemetry::register_metrics();
        tracing::info!("Prometheus metrics recorder installed");

        Ok(Self { handle })
    }

    /// Recorder that is not installed globally; renders nothing recorded elsewhere
    pub fn detached() -> Self {
        let recorder = PrometheusBuilder::new().build_recorder();
        Self {
            handle: recorder.handle(),
        }
    }

    pub fn handle(&self) -> &PrometheusHandle {
        &self.handle
    }

    /// Render all collected metrics in Prometheus text format
    pub fn render(&self) -> String {
        self.handle.render()
    }
}
