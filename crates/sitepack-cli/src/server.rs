//! Static file server for the output directory.

use std::path::Path;

use axum::Router;
use sitepack_config::DevServerOptions;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};

use crate::error::{CliError, Result};
use crate::ui;

/// Build the router serving `content_base`.
///
/// With history fallback, unknown paths get `content_base/<index>` so
/// client-side routes resolve.
pub fn router(content_base: &Path, index: &str, options: &DevServerOptions) -> Router {
    let files = ServeDir::new(content_base);
    let router = if options.history_fallback {
        Router::new().fallback_service(files.fallback(ServeFile::new(content_base.join(index))))
    } else {
        Router::new().fallback_service(files)
    };

    if options.compress {
        router.layer(CompressionLayer::new())
    } else {
        router
    }
}

/// Bind and serve until Ctrl-C.
pub async fn serve(app: Router, options: &DevServerOptions) -> Result<()> {
    let address = format!("{}:{}", options.host, options.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|e| CliError::Server(format!("Failed to bind to {address}: {e}")))?;

    ui::success(&format!("Serving at http://{address}"));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| CliError::Server(format!("Server error: {e}")))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
