use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/spotipi/config.toml` or `~/.config/spotipi/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SPOTIPI__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub library: LibrarySettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Interface address to bind, e.g. `127.0.0.1` or `::`.
    pub host: String,
    /// TCP port. The `start [PORT]` argument overrides this.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5173,
        }
    }
}

impl ServerSettings {
    /// Resolve `host:port` into a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        let ip: std::net::IpAddr = self.host.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Directory that is scanned on every catalog request.
    pub music_dir: PathBuf,
    /// File name suffixes to treat as audio, including the leading dot.
    ///
    /// Matching is case-sensitive: `.mp3` does not match `SONG.MP3`.
    pub extensions: Vec<String>,
    /// URL path prefix under which the music files are published.
    pub public_prefix: String,
    /// Upper bound for reading the tags of a single file (milliseconds).
    pub extract_timeout_ms: u64,
    /// How many files have their tags read at the same time during one build.
    ///
    /// The per-file deadline only starts once a file gets one of these slots.
    pub max_concurrent_extractions: usize,
    /// Whether symlinked entries are resolved while listing.
    pub follow_links: bool,
    /// Whether the server also publishes the files under `public_prefix`.
    pub serve_files: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            music_dir: PathBuf::from("static/music"),
            extensions: vec![".mp3".into(), ".flac".into(), ".opus".into(), ".wav".into()],
            public_prefix: "/music".to_string(),
            extract_timeout_ms: 10_000,
            max_concurrent_extractions: 16,
            follow_links: true,
            serve_files: true,
        }
    }
}

impl LibrarySettings {
    pub fn extract_timeout(&self) -> Duration {
        Duration::from_millis(self.extract_timeout_ms)
    }

    /// The public prefix as a single path segment without slashes, e.g. `music`.
    pub fn prefix_segment(&self) -> &str {
        self.public_prefix.trim_matches('/')
    }
}
