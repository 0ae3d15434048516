use std::{net::SocketAddr, sync::Arc};

use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use clap::Parser;
use medivoice_api::{
    application::{
        http::server::http_server::{router, state},
        logger::init_logger,
    },
    args::Args,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let app_state = state(args.clone()).await?;

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
    let app = router(app_state)?
        .route(
            &format!("{}/metrics", args.server.root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(prometheus_layer);

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("MediVoice API listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutting down");
}
