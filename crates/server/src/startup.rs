use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;
use tracing::info;

use common::types::ServiceDescriptor;
use configs::{AppConfig, DatabaseConfig, ServiceDefaults};
use migration::{InquiryMigrator, ListingMigrator, MigratorTrait};
use service::inquiry::{InquiryService, SeaOrmInquiryStore};
use service::listing::{ListingService, SeaOrmListingStore};

use crate::descriptor::{INQUIRY_SERVICE, LISTING_SERVICE};
use crate::routes;

/// Which of the two services this process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Listing,
    Inquiry,
}

impl ServiceKind {
    pub fn defaults(self) -> ServiceDefaults {
        match self {
            ServiceKind::Listing => ServiceDefaults { port: 8001, database_url: "sqlite://listings.db?mode=rwc" },
            ServiceKind::Inquiry => ServiceDefaults { port: 8002, database_url: "sqlite://inquiries.db?mode=rwc" },
        }
    }

    pub fn descriptor(self) -> &'static ServiceDescriptor {
        match self {
            ServiceKind::Listing => &LISTING_SERVICE,
            ServiceKind::Inquiry => &INQUIRY_SERVICE,
        }
    }

    /// Config file, then environment, then this service's defaults.
    pub fn load_config(self) -> anyhow::Result<AppConfig> { AppConfig::load_and_validate(self.defaults()) }
}

/// Open the pool and create this service's tables if they are missing.
pub async fn connect_and_migrate(kind: ServiceKind, cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    common::env::ensure_database_dir(&cfg.url).await?;
    let db = models::db::connect_with_config(cfg).await?;
    match kind {
        ServiceKind::Listing => ListingMigrator::up(&db, None).await?,
        ServiceKind::Inquiry => InquiryMigrator::up(&db, None).await?,
    }
    info!(service = kind.descriptor().name, "schema ready");
    Ok(db)
}

/// Wire the SeaORM store, the business service and the HTTP routes over one pool.
pub fn build_app(kind: ServiceKind, db: DatabaseConnection) -> Router {
    match kind {
        ServiceKind::Listing => {
            let store = Arc::new(SeaOrmListingStore::new(db));
            routes::listing_router(Arc::new(ListingService::new(store)))
        }
        ServiceKind::Inquiry => {
            let store = Arc::new(SeaOrmInquiryStore::new(db));
            routes::inquiry_router(Arc::new(InquiryService::new(store)))
        }
    }
}

async fn shutdown_signal(service: &'static str) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(service, error = %e, "cannot listen for ctrl_c; shutting down");
        return;
    }
    info!(service, event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Connect, migrate, bind and serve until Ctrl+C.
pub async fn run(kind: ServiceKind, cfg: AppConfig) -> anyhow::Result<()> {
    let name = kind.descriptor().name;
    let db = connect_and_migrate(kind, &cfg.database).await?;
    let app = build_app(kind, db);

    let addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(service = name, %addr, "listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal(name)).await?;
    Ok(())
}
