//! Explorer configuration
//!
//! Configuration loaded from `.file-explorer.toml`. Keys may be written in
//! snake_case or in the camelCase used by web hosts (`startExpanded`).

use file_explorer::layout::ROUNDED_RADIUS;
use file_explorer::{ConnectorStyle, ExplorerOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for this schema.
    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Explorer configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ExplorerConfig {
    /// Open every directory on first load
    #[serde(default = "default_start_expanded", alias = "startExpanded")]
    pub start_expanded: bool,

    /// Connector line style: "solid", "dashed" or "none"
    #[serde(default, alias = "nodeConnector")]
    pub node_connector: ConnectorStyle,

    /// Round the connector elbows
    #[serde(default = "default_rounded_connectors", alias = "roundedConnectors")]
    pub rounded_connectors: bool,

    /// Indent per tree level in pixels
    #[serde(default = "default_indent_px", alias = "indentPx")]
    pub indent_px: f64,

    /// Fold single-child directory chains into one row
    #[serde(default, alias = "collapsePackages")]
    pub collapse_packages: bool,
}

fn default_start_expanded() -> bool {
    true
}

fn default_rounded_connectors() -> bool {
    true
}

fn default_indent_px() -> f64 {
    16.0
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            start_expanded: default_start_expanded(),
            node_connector: ConnectorStyle::default(),
            rounded_connectors: default_rounded_connectors(),
            indent_px: default_indent_px(),
            collapse_packages: false,
        }
    }
}

impl ExplorerConfig {
    /// Load config from CWD, home or config directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::from_toml(&content) {
                Ok(config) => {
                    log::info!("Loaded explorer config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("{}", e);
                }
            }
        }

        log::debug!("Using default explorer config");
        Self::default()
    }

    /// Load config from an explicit path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        log::info!("Loaded explorer config from {}", path.display());
        Ok(config)
    }

    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Corner radius for connector elbows
    pub fn corner_radius(&self) -> f64 {
        if self.rounded_connectors {
            ROUNDED_RADIUS
        } else {
            0.0
        }
    }

    /// Whether the renderer should route connectors at all
    pub fn connectors_enabled(&self) -> bool {
        self.node_connector.is_visible()
    }

    /// Runtime options for the explorer state
    pub fn options(&self) -> ExplorerOptions {
        ExplorerOptions {
            start_expanded: self.start_expanded,
            collapse_packages: self.collapse_packages,
            node_connector: self.node_connector,
            corner_radius: self.corner_radius(),
            indent_px: self.indent_px,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ExplorerConfig::default();
        assert!(config.start_expanded);
        assert_eq!(config.node_connector, ConnectorStyle::Solid);
        assert!(config.rounded_connectors);
        assert_eq!(config.indent_px, 16.0);
        assert!(!config.collapse_packages);
        assert_eq!(config.corner_radius(), 6.0);
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            node_connector = "dashed"
            rounded_connectors = false
            collapse_packages = true
        "#;
        let config = ExplorerConfig::from_toml(toml).unwrap();
        assert_eq!(config.node_connector, ConnectorStyle::Dashed);
        assert_eq!(config.corner_radius(), 0.0);
        assert!(config.collapse_packages);
        // start_expanded should use default
        assert!(config.start_expanded);
    }

    #[test]
    fn test_config_camel_case_keys() {
        let toml = r#"
            startExpanded = false
            nodeConnector = "none"
            indentPx = 12
        "#;
        let config = ExplorerConfig::from_toml(toml).unwrap();
        assert!(!config.start_expanded);
        assert!(!config.connectors_enabled());
        assert_eq!(config.indent_px, 12.0);
    }

    #[test]
    fn test_connectors_enabled_unless_none() {
        let dashed = ExplorerConfig::from_toml(r#"node_connector = "dashed""#).unwrap();
        assert!(dashed.connectors_enabled());
        assert!(ExplorerConfig::default().connectors_enabled());
    }

    #[test]
    fn test_config_rejects_unknown_connector() {
        let result = ExplorerConfig::from_toml(r#"node_connector = "wavy""#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_options_mapping() {
        let config = ExplorerConfig {
            rounded_connectors: false,
            collapse_packages: true,
            ..Default::default()
        };
        let options = config.options();
        assert_eq!(options.corner_radius, 0.0);
        assert!(options.collapse_packages);
        assert!(options.start_expanded);
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "collapsePackages = true").unwrap();

        let config = ExplorerConfig::load_from_path(file.path()).unwrap();
        assert!(config.collapse_packages);

        let missing = ExplorerConfig::load_from_path(Path::new("/nonexistent/explorer.toml"));
        assert!(matches!(missing, Err(ConfigError::Io(_))));
    }
}
