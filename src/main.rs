use anyhow::Context as _;
use spotipi::cli::{Cli, Command};
use spotipi::config::Settings;
use spotipi::{logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_or_exit();

    if let Err(err) = logging::init_tracing_and_logging() {
        eprintln!("Failed to initialize tracing and logging: {err}");
    }
    log::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let mut settings = Settings::load().context("loading configuration")?;

    match cli.command {
        Command::Start { port } => {
            if let Some(port) = port {
                settings.server.port = port;
            }
            settings.validate().map_err(anyhow::Error::msg)?;
            log::debug!("Settings: {settings:?}");
            server::run(settings).await
        }
    }
}
