use crate::cli::ServeArgs;
use crate::infra::{load_catalog, ready_session, AppState};
use crate::routes::catalog_router;
use axum_prometheus::PrometheusMetricLayer;
use careerbridge::config::AppConfig;
use careerbridge::error::AppError;
use careerbridge::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));

    let catalog = load_catalog(args.catalog.as_deref())?;
    let session = ready_session(config.search.page_size, catalog)?;
    info!(
        jobs = session.result_count(),
        page_size = config.search.page_size,
        "opportunity catalog loaded"
    );

    let app_state = AppState {
        session: Arc::new(Mutex::new(session)),
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = catalog_router(app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "careerbridge search service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
