//! CLI configuration file.
//!
//! An optional TOML file supplying defaults that flags override:
//!
//! ```toml
//! namespace = "staging"
//! output = "json"
//!
//! [[classes]]
//! name = "mysqldb"
//! plans = ["free", "secureDB"]
//! ```
//!
//! When `classes` is present the in-memory provisioner only accepts the
//! listed class/plan pairs.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde::Deserialize;
use svcat_core::DEFAULT_NAMESPACE;
use svcat_executor::Catalog;
use tracing::debug;

use crate::output::OutputFormat;

/// Settings read from the configuration file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Namespace used when `--namespace` is not given
    pub namespace: Option<String>,
    /// Output format used when `--output` is not given
    pub output: Option<OutputFormat>,
    /// Offered classes and their plans
    pub classes: Vec<ClassEntry>,
}

/// One class in the catalog
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassEntry {
    /// Class name
    pub name: String,
    /// Plan names offered by the class
    #[serde(default)]
    pub plans: Vec<String>,
}

impl CliConfig {
    /// Load configuration
    ///
    /// An explicit path must exist. Without one, `~/.svcat/config.toml` is
    /// read if present and defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Read and parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| anyhow!("cannot read config file {}: {}", path.display(), e))?;
        let config = Self::from_toml_str(&text)
            .map_err(|e| anyhow!("invalid config file {}: {}", path.display(), e))?;
        debug!(path = %path.display(), classes = config.classes.len(), "loaded config");
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Namespace to use: flag, then config file, then the built-in default
    pub fn resolve_namespace(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.namespace.clone())
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string())
    }

    /// Catalog built from the `classes` table
    pub fn catalog(&self) -> Catalog {
        let mut catalog = Catalog::new();
        for class in &self.classes {
            catalog.add_class(class.name.as_str(), class.plans.iter().map(String::as_str));
        }
        catalog
    }
}

fn default_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".svcat").join("config.toml"))
}
