use crate::cli::ServeArgs;
use crate::infra::{AppState, Services};
use crate::routes::app_routes;
use alusive_ml::config::AppConfig;
use alusive_ml::error::AppError;
use alusive_ml::telemetry;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    // Model loading is blocking and fails fast on a schema mismatch.
    let services = {
        let config = config.clone();
        tokio::task::spawn_blocking(move || Services::load(&config))
            .await
            .map_err(|err| AppError::Io(std::io::Error::other(err)))??
    };

    let app = app_routes(services)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "alusive ml service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
