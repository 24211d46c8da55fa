use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const PREDICTIONS_TOTAL: &str = "income_predictions_total";
pub const PREDICTION_FALLBACK_TOTAL: &str = "income_prediction_fallback_total";
pub const PREDICTION_ERRORS_TOTAL: &str = "income_prediction_errors_total";
pub const PREDICTION_LATENCY_SECONDS: &str = "income_prediction_latency_seconds";

const DEFAULT_FILTER: &str = "income_service=info,predict_example=info";

/// Installs the global tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()?;
    Ok(())
}

/// Installs the process-wide Prometheus recorder and returns its render handle.
pub fn install_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    Ok(handle)
}

/// A handle backed by a recorder that is not installed globally.
pub fn detached_metrics() -> PrometheusHandle {
    PrometheusBuilder::new().build_recorder().handle()
}
