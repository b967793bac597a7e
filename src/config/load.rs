use std::{env, path::PathBuf};

use super::schema::Settings;

/// `Settings::load` layers environment variables (prefix `SPOTIPI__`) over an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            log::debug!("Reading configuration from {}", path.display());
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("SPOTIPI")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("library.extensions")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Reject settings the server cannot run with.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("server.port must be between 1 and 65535".to_string());
        }
        if self.library.extensions.is_empty() {
            return Err("library.extensions must not be empty".to_string());
        }
        if let Some(ext) = self
            .library
            .extensions
            .iter()
            .find(|e| !e.starts_with('.') || e.len() < 2)
        {
            return Err(format!(
                "library.extensions entry {ext:?} must start with '.' followed by a suffix"
            ));
        }
        if self.library.prefix_segment().is_empty() || self.library.prefix_segment().contains('/')
        {
            return Err("library.public_prefix must be a single path segment like /music".to_string());
        }
        if self.library.extract_timeout_ms == 0 {
            return Err("library.extract_timeout_ms must be >= 1".to_string());
        }
        if self.library.max_concurrent_extractions == 0 {
            return Err("library.max_concurrent_extractions must be >= 1".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `SPOTIPI_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("SPOTIPI_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/spotipi/config.toml`
/// or `~/.config/spotipi/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("spotipi").join("config.toml"))
}
