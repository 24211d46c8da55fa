use income_service::{config, model, server, telemetry};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Init
    telemetry::init_tracing()?;
    let metrics = telemetry::install_metrics()?;
    if let Err(err) = model::loader::init_ort() {
        tracing::warn!(error = %err, "ONNX Runtime environment initialization failed");
    }

    // 2. Load Config
    let config_path = std::env::var(config::CONFIG_ENV)
        .unwrap_or_else(|_| config::DEFAULT_CONFIG_PATH.to_string());
    let config = config::AppConfig::load(&config_path)?;

    // 3. Load the model; the service runs without one
    let model_state = model::ModelState::load(&config.model);

    // 4. Create Router
    let app = server::routes::create_router(model_state, metrics);

    // 5. Bind & Serve
    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    tracing::info!("Server listening on http://{}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
