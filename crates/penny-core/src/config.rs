//! Application configuration
//!
//! Resolution order, lowest precedence first:
//! 1. Embedded defaults (compiled into the binary)
//! 2. Config file: an explicit path, else `<data dir>/penny/config.toml` when present
//! 3. Environment: `PENNY_DB`, `PENNY_HOST`, `PENNY_PORT`, `PENNY_ALLOWED_ORIGINS`
//!
//! Command-line flags are applied on top by the caller. The database
//! passphrase (`PENNY_DB_KEY`) is read from the environment only and never
//! stored here.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/penny.toml");

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub static_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                path: PathBuf::from("penny.db"),
            },
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 3000,
                allowed_origins: vec![],
                static_dir: None,
            },
        }
    }
}

impl AppConfig {
    /// Load from file and environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = load_file(path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `PENNY_*` overrides using `lookup` to read variables
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("PENNY_DB").filter(|v| !v.is_empty()) {
            self.database.path = PathBuf::from(path);
        }
        if let Some(host) = lookup("PENNY_HOST").filter(|v| !v.is_empty()) {
            self.server.host = host;
        }
        if let Some(port) = lookup("PENNY_PORT").filter(|v| !v.is_empty()) {
            self.server.port = port
                .parse()
                .map_err(|_| Error::InvalidData(format!("Invalid PENNY_PORT: {}", port)))?;
        }
        if let Some(origins) = lookup("PENNY_ALLOWED_ORIGINS") {
            self.server.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }
        Ok(())
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("penny").join("config.toml"))
}

fn load_file(explicit: Option<&Path>) -> Result<AppConfig> {
    let content = match explicit {
        // An explicit path must exist
        Some(path) => fs::read_to_string(path).map_err(|e| {
            Error::InvalidData(format!("Failed to read config {}: {}", path.display(), e))
        })?,
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading config file");
                fs::read_to_string(&path)?
            }
            None => DEFAULT_CONFIG.to_string(),
        },
    };

    parse_config(&content)
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    database: Option<RawDatabase>,
    server: Option<RawServer>,
}

#[derive(Debug, Deserialize)]
struct RawDatabase {
    path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawServer {
    host: Option<String>,
    port: Option<u16>,
    allowed_origins: Option<Vec<String>>,
    static_dir: Option<PathBuf>,
}

/// Parse config from TOML content, filling gaps with defaults
pub fn parse_config(content: &str) -> Result<AppConfig> {
    let raw: RawConfig = toml::from_str(content)?;
    let mut config = AppConfig::default();

    if let Some(database) = raw.database {
        if let Some(path) = database.path {
            config.database.path = path;
        }
    }

    if let Some(server) = raw.server {
        if let Some(host) = server.host {
            config.server.host = host;
        }
        if let Some(port) = server.port {
            config.server.port = port;
        }
        if let Some(origins) = server.allowed_origins {
            config.server.allowed_origins = origins;
        }
        config.server.static_dir = server.static_dir;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_parse_default_config() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config(
            r#"
            [server]
            port = 8080
            allowed_origins = ["http://localhost:5173"]
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.allowed_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.database.path, PathBuf::from("penny.db"));
    }

    #[test]
    fn test_parse_invalid_config() {
        assert!(matches!(
            parse_config("[server]\nport = \"not a port\""),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("PENNY_DB", "/tmp/override.db"),
            ("PENNY_PORT", "4000"),
            ("PENNY_ALLOWED_ORIGINS", "http://a.test, http://b.test,"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.database.path, PathBuf::from("/tmp/override.db"));
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(
            config.server.allowed_origins,
            vec!["http://a.test", "http://b.test"]
        );
    }

    #[test]
    fn test_invalid_port_override() {
        let mut config = AppConfig::default();
        let result = config.apply_overrides(|key| {
            (key == "PENNY_PORT").then(|| "seventy".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[database]\npath = \"custom.db\"").unwrap();

        let config = load_file(Some(file.path())).unwrap();
        assert_eq!(config.database.path, PathBuf::from("custom.db"));

        let missing = load_file(Some(Path::new("/nonexistent/penny.toml")));
        assert!(missing.is_err());
    }
}
