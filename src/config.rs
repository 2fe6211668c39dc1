use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ReleaseTagError, Result};
use crate::notes::DEFAULT_CATEGORIES;

/// Represents the complete configuration for release-tag.
///
/// Controls which remote and branch to synchronize with, the tag prefix, and
/// the conventional-commit categories kept in release notes.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_branch")]
    pub branch: String,

    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,

    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

/// Returns the default list of release-note categories.
fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            remote: default_remote(),
            branch: default_branch(),
            tag_prefix: default_tag_prefix(),
            categories: default_categories(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releasetag.toml` in current directory
/// 3. `.releasetag.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./releasetag.toml").exists() {
        fs::read_to_string("./releasetag.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".releasetag.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| ReleaseTagError::config(format!("invalid configuration file: {}", e)))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.remote, "origin");
        assert_eq!(config.branch, "main");
        assert_eq!(config.tag_prefix, "v");
        assert!(config.categories.contains(&"fix".to_string()));
        assert!(config.categories.contains(&"openai".to_string()));
        assert_eq!(config.categories.len(), DEFAULT_CATEGORIES.len());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("branch = \"master\"").unwrap();
        assert_eq!(config.branch, "master");
        assert_eq!(config.remote, "origin");
        assert_eq!(config.tag_prefix, "v");
    }

    #[test]
    fn test_full_config() {
        let toml_content = r#"
remote = "upstream"
branch = "develop"
tag_prefix = "rel-"
categories = ["fix", "feat"]
"#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.remote, "upstream");
        assert_eq!(config.branch, "develop");
        assert_eq!(config.tag_prefix, "rel-");
        assert_eq!(config.categories, vec!["fix", "feat"]);
    }
}
