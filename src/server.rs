//! HTTP surface: serves the catalog as JSON and, optionally, the music files.

mod routes;

use warp::Filter;

use crate::config::Settings;
use crate::library::CatalogBuilder;

pub use routes::{MUSIC_DIR_ERROR, create_filters, handle_rejection};

/// Bind the configured address and serve until Ctrl-C.
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let addr = settings.server.socket_addr()?;

    let music_dir = &settings.library.music_dir;
    if !music_dir.is_dir() {
        log::warn!(
            "Music directory {} is not readable yet; catalog requests will fail until it is",
            music_dir.display()
        );
    }

    log::info!("Creating service routes");
    let filters = create_filters(CatalogBuilder::new(settings.library.clone()))
        .recover(handle_rejection)
        .with(warp::log("spotipi::http"));

    let (socket_addr, server) =
        warp::serve(filters).try_bind_with_graceful_shutdown(addr, async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                log::warn!("Failed to listen for Ctrl-C: {err}");
                std::future::pending::<()>().await;
            }
            log::info!("Shutdown requested");
        })?;

    log::info!("Listening on http://{socket_addr}");
    log::info!(
        "Serving {} at /api/tracks",
        settings.library.music_dir.display()
    );
    server.await;
    log::info!("Stopped");

    Ok(())
}
