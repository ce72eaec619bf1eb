//! Configuration file support for the dashboard
//!
//! Settings are read from a `dashboard.toml` (or `.dashboard.toml`) file
//! found in the given directory or one of its parents. Every key is
//! optional; command line flags override the file.
//!
//! ## Configuration File Format
//!
//! ```toml
//! # dashboard.toml
//!
//! [server]
//! host = "127.0.0.1"
//! port = 8050
//! open_browser = true
//! # Base URL the frontend should call (for separate deployments)
//! api_endpoint = "http://localhost:8050"
//!
//! [display]
//! title = "Dashboard de Desempenho de Paciente"
//! sidebar_title = "Opções de Resultados"
//! toggle_label = "Mostrar/Ocultar Opções"
//! bar_title = "Resultados dos Testes"
//! bar_axis_title = "Testes"
//! ```

use std::fs;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::projector::{ChartLabels, DEFAULT_BAR_AXIS_TITLE, DEFAULT_BAR_TITLE};

/// Errors that can occur when loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid host address: {0}")]
    InvalidHost(String),
}

/// Server configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Open the dashboard in a browser once the server is listening
    #[serde(default = "default_open_browser")]
    pub open_browser: bool,

    #[serde(default)]
    pub api_endpoint: Option<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8050
}

fn default_open_browser() -> bool {
    true
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            open_browser: default_open_browser(),
            api_endpoint: None,
        }
    }
}

impl ServerSection {
    /// Socket address the server binds to
    ///
    /// `host` may be an IP literal or a hostname such as `localhost`; the
    /// first resolved address is used.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .ok()
            .and_then(|mut addrs| addrs.next())
            .ok_or_else(|| ConfigError::InvalidHost(self.host.clone()))
    }
}

/// Texts shown on the page and the charts
#[derive(Debug, Clone, Deserialize)]
pub struct DisplaySection {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_sidebar_title")]
    pub sidebar_title: String,

    #[serde(default = "default_toggle_label")]
    pub toggle_label: String,

    #[serde(default = "default_bar_title")]
    pub bar_title: String,

    #[serde(default = "default_bar_axis_title")]
    pub bar_axis_title: String,
}

fn default_title() -> String {
    "Dashboard de Desempenho de Paciente".to_string()
}

fn default_sidebar_title() -> String {
    "Opções de Resultados".to_string()
}

fn default_toggle_label() -> String {
    "Mostrar/Ocultar Opções".to_string()
}

fn default_bar_title() -> String {
    DEFAULT_BAR_TITLE.to_string()
}

fn default_bar_axis_title() -> String {
    DEFAULT_BAR_AXIS_TITLE.to_string()
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            title: default_title(),
            sidebar_title: default_sidebar_title(),
            toggle_label: default_toggle_label(),
            bar_title: default_bar_title(),
            bar_axis_title: default_bar_axis_title(),
        }
    }
}

impl DisplaySection {
    pub fn chart_labels(&self) -> ChartLabels {
        ChartLabels {
            bar_title: self.bar_title.clone(),
            bar_axis_title: self.bar_axis_title.clone(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub display: DisplaySection,
}

/// Load configuration, searching upwards from `start_path`
///
/// Returns the defaults when no config file exists.
pub fn load_config(start_path: &Path) -> Result<DashboardConfig, ConfigError> {
    match find_config_file(start_path) {
        Some(path) => load_config_file(&path),
        None => Ok(DashboardConfig::default()),
    }
}

/// Load a specific config file
pub fn load_config_file(path: &Path) -> Result<DashboardConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: DashboardConfig = toml::from_str(&content)?;
    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

/// Find the config file by searching up the directory tree
pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
    let config_names = ["dashboard.toml", ".dashboard.toml"];

    let mut current = if start_path.is_file() {
        start_path.parent()?.to_path_buf()
    } else {
        start_path.to_path_buf()
    };

    loop {
        for name in &config_names {
            let config_path = current.join(name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => break,
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.server.port, 8050);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.server.open_browser);
        assert!(config.server.api_endpoint.is_none());
        assert_eq!(config.display.bar_title, "Resultados dos Testes");
        assert_eq!(config.display.title, "Dashboard de Desempenho de Paciente");
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
            [server]
            port = 9000
            open_browser = false

            [display]
            bar_title = "Resultados"
        "#;

        let config: DashboardConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert!(!config.server.open_browser);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.display.bar_title, "Resultados");
        assert_eq!(config.display.bar_axis_title, "Testes");
        assert_eq!(config.display.chart_labels().bar_title, "Resultados");
    }

    #[test]
    fn test_socket_addr() {
        let server = ServerSection {
            host: "0.0.0.0".to_string(),
            port: 8080,
            ..ServerSection::default()
        };
        assert_eq!(server.socket_addr().unwrap().to_string(), "0.0.0.0:8080");

        let local = ServerSection {
            host: "localhost".to_string(),
            port: 8081,
            ..ServerSection::default()
        };
        let addr = local.socket_addr().unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 8081);

        let bad = ServerSection {
            host: "not a host".to_string(),
            ..ServerSection::default()
        };
        assert!(matches!(bad.socket_addr(), Err(ConfigError::InvalidHost(_))));
    }

    #[test]
    fn test_find_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("dashboard.toml"), "[server]\nport = 9100\n").unwrap();

        let config = load_config(&nested).unwrap();
        assert_eq!(config.server.port, 9100);
    }

    #[test]
    fn test_invalid_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.toml");
        fs::write(&path, "[server]\nport = \"eighty\"\n").unwrap();

        assert!(matches!(
            load_config_file(&path),
            Err(ConfigError::ParseError(_))
        ));
    }
}
