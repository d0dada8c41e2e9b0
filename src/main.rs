use anyhow::{Context, Result};
use crmaudit::dataset;
use crmaudit::http::{build_router, AppState};
use std::{env, path::PathBuf};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env_filter).init();
    info!("startup");

    // ─── 2) configure ────────────────────────────────────────────────
    let data_path =
        PathBuf::from(env::var("CRM_DATA_PATH").unwrap_or_else(|_| "crmdata.csv".to_string()));
    let bind_addr = env::var("CRM_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    // ─── 3) load dataset once; handlers only ever read it ────────────
    let table = dataset::load_or_empty(&data_path)?;

    // ─── 4) serve ────────────────────────────────────────────────────
    let app = build_router(AppState::new(table));
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    info!("listening on {}", bind_addr);
    axum::serve(listener, app).await.context("serving")?;

    Ok(())
}
