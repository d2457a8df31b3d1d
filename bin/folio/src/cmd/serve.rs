//! Serve command - local preview host

use std::{net::SocketAddr, path::Path, sync::Arc};

use color_eyre::eyre::{Result, WrapErr};
use folio_generator::SiteRenderer;
use tokio::net::TcpListener;

use super::{check::asset_warnings, load_site};
use crate::server::{AppState, create_router};

/// Run the serve command.
///
/// Serves the site on `127.0.0.1`, rendering each section per request.
pub async fn run(config_path: &Path, port: Option<u16>, open_browser: bool) -> Result<()> {
    tracing::info!(?config_path, ?port, "Starting preview host");

    let (config, root) = load_site(config_path)?;

    let warnings = asset_warnings(&config, &root);
    if !warnings.is_empty() {
        println!();
        println!("  Warnings:");
        for warn in &warnings {
            println!("  ⚠ {warn}");
        }
        println!();
    }

    let port = port.unwrap_or(config.server.port);
    let assets_dir = config.assets.dir_in(&root);

    let renderer = SiteRenderer::new(config, &root);
    let app = create_router(Arc::new(AppState::new(renderer)), &assets_dir);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    println!();
    println!("  Preview running at http://{addr}");
    println!("  Press Ctrl+C to stop");
    println!();

    if open_browser {
        if let Err(e) = open::that(format!("http://{addr}")) {
            tracing::warn!(error = %e, "could not open browser");
        }
    }

    axum::serve(listener, app).await.wrap_err("Server error")?;

    Ok(())
}
