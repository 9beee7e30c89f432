//! Generator configuration
//!
//! # Hierarchy
//!
//! Configuration is loaded in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Project config: `<root>/strapi-postman.toml`
//! 3. Environment variables: `STRAPI_POSTMAN_*`
//! 4. CLI flags (applied by the binary)
//!
//! # Example Config
//!
//! ```toml
//! output = "docs/postman.json"
//! base_url = "https://cms.example.com"
//! collection_name = "Marketing site API"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::debug;

use crate::{Error, Result};

/// Project config file name, looked up in the project root.
pub const CONFIG_FILE: &str = "strapi-postman.toml";

/// Output file name when none is configured.
pub const DEFAULT_OUTPUT: &str = "postman_collection.json";

pub const DEFAULT_BASE_URL: &str = "http://localhost:1337";
pub const DEFAULT_COLLECTION_NAME: &str = "Strapi Content API";
pub const DEFAULT_COLLECTION_DESCRIPTION: &str =
    "Automatically generated Postman collection based on local Strapi schemas.";

pub const ENV_OUTPUT: &str = "STRAPI_POSTMAN_OUTPUT";
pub const ENV_BASE_URL: &str = "STRAPI_POSTMAN_BASE_URL";

/// Fully resolved settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Strapi project root (contains `src/api`)
    pub root: PathBuf,
    /// Where the collection is written
    pub output: PathBuf,
    /// Default value of the `baseUrl` collection variable
    pub base_url: String,
    pub collection_name: String,
    pub collection_description: String,
}

impl GeneratorConfig {
    /// Defaults for a project root.
    #[must_use]
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            output: root.join(DEFAULT_OUTPUT),
            root,
            base_url: DEFAULT_BASE_URL.to_string(),
            collection_name: DEFAULT_COLLECTION_NAME.to_string(),
            collection_description: DEFAULT_COLLECTION_DESCRIPTION.to_string(),
        }
    }

    /// Load configuration for a root from file and environment.
    ///
    /// The result is not validated: callers apply their own overrides first
    /// and then call [`GeneratorConfig::validate`].
    ///
    /// # Errors
    ///
    /// Returns error if the config file exists but is unreadable or malformed TOML.
    pub fn load(root: impl Into<PathBuf>) -> Result<Self> {
        Self::load_with_env(root, |key| std::env::var(key).ok())
    }

    /// [`GeneratorConfig::load`] with an explicit environment lookup.
    ///
    /// # Errors
    ///
    /// Same as [`GeneratorConfig::load`].
    pub fn load_with_env<F>(root: impl Into<PathBuf>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::for_root(root);

        let file_path = config.root.join(CONFIG_FILE);
        if file_path.is_file() {
            debug!(path = %file_path.display(), "loading project config");
            let file = ConfigFile::read(&file_path)?;
            config.merge(file);
        }

        config.apply_env(env);
        Ok(config)
    }

    /// Overlay values present in a config file.
    pub fn merge(&mut self, file: ConfigFile) {
        if let Some(output) = file.output {
            self.output = self.resolve(output);
        }
        if let Some(base_url) = file.base_url {
            self.base_url = base_url;
        }
        if let Some(name) = file.collection_name {
            self.collection_name = name;
        }
        if let Some(description) = file.collection_description {
            self.collection_description = description;
        }
    }

    /// Apply environment variable overrides
    fn apply_env<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // STRAPI_POSTMAN_OUTPUT
        if let Some(value) = env(ENV_OUTPUT).filter(|v| !v.is_empty()) {
            self.output = self.resolve(PathBuf::from(value));
        }

        // STRAPI_POSTMAN_BASE_URL
        if let Some(value) = env(ENV_BASE_URL).filter(|v| !v.is_empty()) {
            self.base_url = value;
        }
    }

    /// Set an output path; relative paths resolve against the root.
    pub fn set_output(&mut self, output: impl Into<PathBuf>) {
        self.output = self.resolve(output.into());
    }

    /// Check invariants after all layers were applied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for an empty base URL or collection name.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::InvalidConfig("base_url cannot be empty".into()));
        }
        if self.collection_name.trim().is_empty() {
            return Err(Error::InvalidConfig("collection_name cannot be empty".into()));
        }
        if self.output.file_name().is_none() {
            return Err(Error::InvalidConfig(format!(
                "output must name a file: {}",
                self.output.display()
            )));
        }
        Ok(())
    }

    fn resolve(&self, path: PathBuf) -> PathBuf {
        if path.is_absolute() {
            path
        } else {
            self.root.join(path)
        }
    }
}

/// `strapi-postman.toml`; every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub output: Option<PathBuf>,
    pub base_url: Option<String>,
    pub collection_name: Option<String>,
    pub collection_description: Option<String>,
}

impl ConfigFile {
    /// Read and parse a config file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is malformed TOML.
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        toml::from_str(&content).map_err(|e| {
            Error::InvalidConfig(format!("Failed to parse config: {}: {e}", path.display()))
        })
    }
}
