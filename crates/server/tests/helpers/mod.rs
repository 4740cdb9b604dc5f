#![allow(dead_code)]

use std::net::SocketAddr;

use axum::Router;
use tempfile::TempDir;
use tokio::net::TcpListener;

use configs::DatabaseConfig;
use server::startup::{build_app, connect_and_migrate, ServiceKind};

pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
    _dir: Option<TempDir>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String { format!("{}{}", self.base_url, path) }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> anyhow::Result<reqwest::Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    pub async fn get(&self, path: &str) -> anyhow::Result<reqwest::Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    pub async fn get_json(&self, path: &str) -> anyhow::Result<serde_json::Value> {
        Ok(self.get(path).await?.json().await?)
    }
}

async fn serve(app: Router) -> anyhow::Result<String> {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });
    Ok(format!("http://{}:{}", addr.ip(), addr.port()))
}

/// Full production wiring over a fresh SQLite file.
pub async fn spawn_service(kind: ServiceKind) -> anyhow::Result<TestApp> {
    let dir = tempfile::tempdir()?;
    let cfg = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", dir.path().join("e2e.db").display()),
        ..Default::default()
    };
    let db = connect_and_migrate(kind, &cfg).await?;
    let base_url = serve(build_app(kind, db)).await?;
    Ok(TestApp { base_url, client: reqwest::Client::new(), _dir: Some(dir) })
}

/// Any router, typically one built over an in-memory store.
pub async fn spawn_router(app: Router) -> anyhow::Result<TestApp> {
    let base_url = serve(app).await?;
    Ok(TestApp { base_url, client: reqwest::Client::new(), _dir: None })
}
