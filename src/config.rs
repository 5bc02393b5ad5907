//! Project configuration loaded from `clientgen.yaml`
//!
//! Every field has a default so a project without a configuration file gets a
//! fully working setup. The file only needs to name what differs from the
//! defaults, e.g.:
//!
//! ```yaml
//! spec: specs/devices-api.yaml
//! package_name: devices-client
//! generator:
//!   image: openapitools/openapi-generator-cli:v7.8.0
//!   extra_args: ["--skip-validate-spec"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ClientgenError, Result};

/// Configuration file name at the workspace root
pub const CONFIG_FILE: &str = "clientgen.yaml";

/// Project configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// OpenAPI document, relative to the workspace root
    #[serde(default = "default_spec")]
    pub spec: String,

    /// Directory the generator writes the client into, relative to the root
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Virtual environment directory, relative to the root
    #[serde(default = "default_venv_dir")]
    pub venv_dir: String,

    /// Dependency manifest installed after the generated package
    #[serde(default = "default_requirements")]
    pub requirements: String,

    /// Distribution name of the generated package, as pip knows it
    #[serde(default = "default_package_name")]
    pub package_name: String,

    /// Placeholder file preserved by `clean` so the output directory stays
    /// tracked in version control when empty
    #[serde(default = "default_sentinel")]
    pub sentinel: String,

    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// External tool commands; override to pin absolute paths or substitutes
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ToolsConfig {
    /// Container runtime used for the generator run
    #[serde(default = "default_container_runtime")]
    pub container_runtime: String,

    /// Python interpreter used to create the virtual environment
    #[serde(default = "default_python")]
    pub python: String,
}

/// Containerized generator invocation
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Generator image reference
    #[serde(default = "default_image")]
    pub image: String,

    /// Generator name passed as `-g`
    #[serde(default = "default_generator")]
    pub generator: String,

    /// Extra arguments appended verbatim to the generate invocation
    #[serde(default)]
    pub extra_args: Vec<String>,
}

fn default_spec() -> String {
    "openapi.yaml".to_string()
}

fn default_output_dir() -> String {
    "openapi_client".to_string()
}

fn default_venv_dir() -> String {
    "venv".to_string()
}

fn default_requirements() -> String {
    "requirements.txt".to_string()
}

fn default_package_name() -> String {
    "openapi-client".to_string()
}

fn default_sentinel() -> String {
    ".gitkeep".to_string()
}

fn default_container_runtime() -> String {
    "docker".to_string()
}

fn default_python() -> String {
    "python3".to_string()
}

fn default_image() -> String {
    "openapitools/openapi-generator-cli:v7.8.0".to_string()
}

fn default_generator() -> String {
    "python".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spec: default_spec(),
            output_dir: default_output_dir(),
            venv_dir: default_venv_dir(),
            requirements: default_requirements(),
            package_name: default_package_name(),
            sentinel: default_sentinel(),
            tools: ToolsConfig::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            container_runtime: default_container_runtime(),
            python: default_python(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            image: default_image(),
            generator: default_generator(),
            extra_args: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from the workspace root
    ///
    /// A missing `clientgen.yaml` yields the default configuration.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);

        if !path.is_file() {
            return Ok(Self::default());
        }

        let contents =
            std::fs::read_to_string(&path).map_err(|e| ClientgenError::ConfigReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        // An empty file marks the workspace root without overriding anything
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| ClientgenError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
