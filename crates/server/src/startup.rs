use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::Router;
use common::registry::RegistryClient;
use configs::AppConfig;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, AppState};
use service::reservation::{
    repo::seaorm::SeaOrmReservationRepository, repository::ReservationRepository, ReservationService,
};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Registry client shared by both class and professor lookups.
pub fn build_registry(cfg: &configs::RegistryConfig) -> Result<Arc<RegistryClient>, StartupError> {
    let client = RegistryClient::new(&cfg.class_url, &cfg.professor_url, Duration::from_secs(cfg.timeout_secs))
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    Ok(Arc::new(client))
}

/// Wire the service around an arbitrary repository and the HTTP registries.
pub fn build_state(repo: Arc<dyn ReservationRepository>, registry: Arc<RegistryClient>) -> AppState {
    AppState::new(ReservationService::new(repo, registry.clone(), registry))
}

pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("received Ctrl+C, shutting down");
    }
}

/// Public entry: connect storage, migrate, build the app and serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    info!("migrations applied");

    let registry = build_registry(&cfg.registry)?;
    info!(class_url = %cfg.registry.class_url, professor_url = %cfg.registry.professor_url, timeout_secs = cfg.registry.timeout_secs, "registry client ready");

    let repo: Arc<dyn ReservationRepository> = Arc::new(SeaOrmReservationRepository::new(db));
    let app = build_app(build_state(repo, registry));

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting reservation server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
