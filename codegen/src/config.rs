//! Generation settings, read from a TOML file.
//!
//! ```toml
//! module = "value_space"
//! violation_type = "ValueSpaceViolation"
//! struct_name = "Person"
//!
//! [[property]]
//! name = "age"
//! range = "http://www.w3.org/2001/XMLSchema#unsignedByte"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Settings for [`generate`](crate::generate).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenConfig {
    /// Module name (and file stem) of the generated checker module.
    pub module: String,
    /// Name of the generated violation type.
    pub violation_type: String,
    /// Name of the generated accessor struct.
    pub struct_name: String,
    /// Properties to generate typed accessors for.
    #[serde(rename = "property")]
    pub properties: Vec<PropertyConfig>,
}

/// One accessor-backed property.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyConfig {
    /// Property label; converted to a snake_case field name.
    pub name: String,
    /// Datatype identifier of the property's range. `xsd:` prefixed and bare
    /// local names are expanded.
    pub range: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            module: "value_space".to_string(),
            violation_type: "ValueSpaceViolation".to_string(),
            struct_name: "Resource".to_string(),
            properties: Vec::new(),
        }
    }
}

impl CodegenConfig {
    /// Parses a config from TOML text. Omitted keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or has unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse codegen config")
    }

    /// Loads a config file; a missing file yields [`CodegenConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no codegen config, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("Invalid config {}", path.display()))
    }
}
