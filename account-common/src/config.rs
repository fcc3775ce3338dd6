use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

fn default_platform_name() -> String {
    "Elite A.I. Academy".to_string()
}

fn default_dashboard_url() -> String {
    "/dashboard".to_string()
}

fn default_account_help_url() -> String {
    "/manual".to_string()
}

fn default_true() -> bool {
    true
}

/// Deployment-specific values the panel copy refers to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PanelConfig {
    /// Shown wherever the copy names the site
    #[serde(default = "default_platform_name")]
    pub platform_name: String,
    /// Where learners can view their certificates before deleting
    #[serde(default = "default_dashboard_url")]
    pub dashboard_url: String,
    /// Help page for changing email, name or password instead
    #[serde(default = "default_account_help_url")]
    pub account_help_url: String,
    #[serde(default = "default_true")]
    pub open_links_in_new_tab: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            platform_name: default_platform_name(),
            dashboard_url: default_dashboard_url(),
            account_help_url: default_account_help_url(),
            open_links_in_new_tab: true,
        }
    }
}

impl PanelConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&contents)?;
        info!("Loaded panel config from {}", path.display());
        Ok(config)
    }
}
