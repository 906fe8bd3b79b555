//! Process entry points for the two subcommands.
//!
//! `serve` opens the donations store read-only and runs the HTTP server. `pipeline` opens
//! both stores read-write, brings their schemas up to date, runs one ingestion pass and
//! closes both stores whatever the outcome.

use std::{io, path::Path};

use migration::{DonationsMigrator, GeocacheMigrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::net::TcpListener;

use crate::server::{
    client::{mda::MdaClient, places::PlacesClient},
    config::Config,
    error::Error,
    model::app::AppState,
    router,
    service::{
        geocode::GeocodeService,
        pipeline::{PipelineRunner, PipelineSummary},
        retry::RetryContext,
        station::StationProcessor,
    },
};

/// Connect to the donations store in read-only mode
///
/// Fails if the file does not exist, the pipeline has to create it first.
pub async fn connect_read_only(path: &Path) -> Result<DatabaseConnection, Error> {
    if !path.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!(
                "donations database {} does not exist, run the pipeline first",
                path.display()
            ),
        )
        .into());
    }

    connect(&format!("sqlite://{}?mode=ro", path.display())).await
}

/// Connect to a store in read-write mode, creating the file if needed
pub async fn connect_read_write(path: &Path) -> Result<DatabaseConnection, Error> {
    connect(&format!("sqlite://{}?mode=rwc", path.display())).await
}

async fn connect(url: &str) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(url);
    opt.sqlx_logging(false);

    Ok(Database::connect(opt).await?)
}

/// Serve the HTTP API and frontend until Ctrl+C or SIGTERM
pub async fn serve(config: &Config) -> Result<(), Error> {
    let db = connect_read_only(&config.donations_db_path).await?;

    let app = router::routes(&config.frontend_dir).with_state(AppState::from(db));

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Server running on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");

    Ok(())
}

/// Run one full fetch, geocode and store cycle
///
/// Both stores are closed before returning, on success as well as on error.
pub async fn run_pipeline(config: &Config) -> Result<PipelineSummary, Error> {
    let api_key = config.require_google_api_key()?;
    let mda = MdaClient::from_config(config)?;
    let places = PlacesClient::from_config(config, api_key)?;

    let donations_db = connect_read_write(&config.donations_db_path).await?;
    let geocache_db = match connect_read_write(&config.geocache_db_path).await {
        Ok(db) => db,
        Err(e) => {
            close(donations_db, "donations").await;
            return Err(e);
        }
    };

    let retry = RetryContext::new().with_max_attempts(config.geocode_max_attempts);
    let result = run_with_stores(&mda, &places, retry, &donations_db, &geocache_db).await;

    close(donations_db, "donations").await;
    close(geocache_db, "geocache").await;

    result
}

async fn run_with_stores(
    mda: &MdaClient,
    places: &PlacesClient,
    retry: RetryContext,
    donations_db: &DatabaseConnection,
    geocache_db: &DatabaseConnection,
) -> Result<PipelineSummary, Error> {
    DonationsMigrator::up(donations_db, None).await?;
    GeocacheMigrator::up(geocache_db, None).await?;

    let geocode = GeocodeService::new(geocache_db, places, retry);
    let processor = StationProcessor::new(donations_db, geocode);

    PipelineRunner::new(mda, processor).run().await
}

async fn close(db: DatabaseConnection, name: &str) {
    if let Err(e) = db.close().await {
        tracing::warn!("Failed to close {} database: {}", name, e);
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
