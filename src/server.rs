//! Server initialization for the HTTP gateway and the MCP stdio transport.
//!
//! Provides [`serve_http`] and [`serve_stdio`] entry points that wire up the
//! database, configuration, and tool registry into a running server.

use anyhow::Result;
use rmcp::ServiceExt;
use std::sync::{Arc, Mutex};

use crate::config::NeuroDockConfig;
use crate::db::{self, Db};
use crate::gateway::{self, AppState};
use crate::tools::mcp::NeuroDockTools;

/// Shared setup: open the database and wrap the config for sharing.
fn setup_shared_state(config: NeuroDockConfig) -> Result<(Db, Arc<NeuroDockConfig>)> {
    let db_path = config.resolved_db_path();
    let conn = db::open_database(&db_path)?;
    tracing::info!(db = %db_path.display(), "database ready");

    Ok((Arc::new(Mutex::new(conn)), Arc::new(config)))
}

/// Start the HTTP gateway (REST + tool protocol).
pub async fn serve_http(config: NeuroDockConfig) -> Result<()> {
    let host = config.server.host.clone();
    let port = config.server.port;
    let bind_addr = format!("{host}:{port}");

    tracing::info!(addr = %bind_addr, "starting NeuroDock HTTP gateway");

    let (db, config) = setup_shared_state(config)?;
    let app = gateway::router(AppState::new(db, config));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "gateway listening at http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("failed to listen for ctrl-c");
            tracing::info!("shutting down HTTP gateway");
        })
        .await?;

    Ok(())
}

/// Start the MCP server over stdio transport.
pub async fn serve_stdio(config: NeuroDockConfig) -> Result<()> {
    tracing::info!("starting NeuroDock MCP server on stdio");

    let (db, config) = setup_shared_state(config)?;

    let tools = NeuroDockTools::new(db, config);
    let transport = rmcp::transport::stdio();

    let server = tools.serve(transport).await?;
    tracing::info!("MCP server running — waiting for client");

    server.waiting().await?;
    tracing::info!("MCP server shut down");

    Ok(())
}
