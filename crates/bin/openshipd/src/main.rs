//! # openshipd — Open Ship site daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise structured logging
//! - Construct the filesystem skill repository (adapter)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (Ctrl-C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use openship_adapter_content_fs::FsSkillRepository;
use openship_adapter_http_axum::state::AppState;
use openship_app::services::skill_service::SkillService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    if !config.content.site_dir.is_dir() {
        tracing::warn!(
            path = %config.content.site_dir.display(),
            "site directory missing, only skills will be served"
        );
    }
    if !config.content.skills_dir.is_dir() {
        tracing::warn!(
            path = %config.content.skills_dir.display(),
            "skills directory missing, every skill will be not found"
        );
    }

    // Repositories
    let skill_repo = FsSkillRepository::new(&config.content.skills_dir);

    // Services
    let skill_service = SkillService::new(skill_repo);

    // HTTP
    let state = AppState::new(skill_service);
    let app = openship_adapter_http_axum::router::build(state, &config.content.site_dir);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "openshipd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("openshipd stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
