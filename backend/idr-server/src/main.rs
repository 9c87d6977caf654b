use idr_config::Config;
use idr_server::{AppState, ServerArgs, build_router, logger};
use idr_service::{DirectoryService, Metrics, ShutdownCoordinator};
use idr_store::{RecordStore, SnapshotManager};

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    let args = ServerArgs::parse();

    let mut config = Config::load()?;
    args.apply(&mut config);
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.effective_level(),
        config.logging.file_path(),
        config.logging.colored,
    )?;

    info!("Starting idr-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Restore before the listener exists so no request sees a partial directory
    let store = RecordStore::new();
    let snapshots = SnapshotManager::new(
        store.clone(),
        config.snapshot.path(),
        config.snapshot.interval(),
    )
    .with_observer(Arc::new(Metrics::new()));
    let restored = snapshots.restore().await;

    let service = DirectoryService::new(store, config.validation);
    service.metrics().records(restored);

    let shutdown = ShutdownCoordinator::new();
    let app = build_router(AppState::new(
        service,
        snapshots.clone(),
        shutdown.clone(),
    ));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown_for_signal.shutdown();
    });

    let timer = tokio::spawn(
        snapshots
            .clone()
            .run(shutdown.subscribe_guard().into_wait()),
    );

    info!("Server ready to accept connections");
    let served = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown.subscribe_guard().into_wait())
    .await;

    // Stop the timer even if serve ended on its own
    shutdown.shutdown();
    if let Err(e) = timer.await {
        error!("Snapshot timer task failed: {}", e);
    }

    snapshots
        .final_snapshot(config.server.shutdown_timeout())
        .await;

    served?;
    info!("Shutdown complete");

    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix
async fn wait_for_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown");
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
