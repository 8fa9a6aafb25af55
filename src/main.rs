use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;

use voxrelay::application::services::RelayService;
use voxrelay::infrastructure::download::ReqwestAudioDownloader;
use voxrelay::infrastructure::inference::InferenceClientFactory;
use voxrelay::infrastructure::observability::{TracingConfig, init_tracing};
use voxrelay::infrastructure::staging::TempFileStager;
use voxrelay::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;
    let address = settings.server.address();

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment),
        &address,
    );

    let downloader = Arc::new(ReqwestAudioDownloader::from_settings(&settings.download)?);
    let stager = Arc::new(TempFileStager::from_settings(&settings.staging)?);
    tracing::info!(directory = %stager.directory().display(), "Staging directory ready");

    let inference_client =
        match InferenceClientFactory::create(&settings.inference, &settings.scaffold).await {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    space = %settings.inference.space,
                    "Inference client failed to initialize, transcription requests will be rejected"
                );
                None
            }
        };

    let relay_service = Arc::new(RelayService::new(
        downloader,
        stager,
        inference_client,
        settings.inference.timeout(),
    ));

    let router = create_router(AppState::new(relay_service));

    let listener = TcpListener::bind(&address).await?;
    tracing::info!("Server running at http://{}", address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
