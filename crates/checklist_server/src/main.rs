//! Checklist HTTP server entry point.

use checklist_core::db::{open_db, open_db_in_memory};
use checklist_core::init_logging;
use checklist_server::{build_router, AppState, ServerConfig};
use log::{error, info};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = ServerConfig::from_env();

    let log_dir = config.log_dir.to_string_lossy().into_owned();
    init_logging(&config.log_level, &log_dir)?;

    let conn = if config.uses_in_memory_db() {
        open_db_in_memory()?
    } else {
        open_db(&config.db_path)?
    };

    let app = build_router(AppState::new(conn));
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .inspect_err(|err| {
            error!(
                "event=server_bind module=server status=error addr={} error={err}",
                config.bind_addr()
            );
        })?;

    info!(
        "event=server_start module=server status=ok addr={} db_in_memory={}",
        listener.local_addr()?,
        config.uses_in_memory_db()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("event=server_stop module=server status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("event=server_signal module=server status=error error={err}");
        std::future::pending::<()>().await;
    }
}
