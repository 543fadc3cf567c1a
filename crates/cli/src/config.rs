//! CLI configuration via `recordkit.toml`
//!
//! The file is optional. When present (in the working directory, or at the
//! path given by `--config`) it sets the default output mode, the debug
//! dump layout, and declares extra record types that are registered next to
//! the built-in ones.

use std::fs;
use std::path::{Path, PathBuf};

use recordkit_core::{DescribeOptions, RecordRegistry, SignatureSlot, ValueKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "recordkit.toml";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read or written
    #[error("Failed to access {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema
    #[error("Invalid config {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// An output mode other than "human" or "json"
    #[error("Invalid output mode '{0}'. Expected \"human\" or \"json\".")]
    OutputMode(String),

    /// A declared record type was rejected by the registry
    #[error("Invalid record definition '{name}': {source}")]
    Record {
        name: String,
        #[source]
        source: recordkit_core::Error,
    },
}

/// Layout of the debug dump, persisted under `[describe]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DescribeConfig {
    /// Extra spaces per nesting level (default: 4)
    #[serde(default = "default_nest_indent")]
    pub nest_indent: usize,
    /// Line printed after every record block (default: 65 dashes)
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_nest_indent() -> usize {
    recordkit_core::describe::DEFAULT_NEST_INDENT
}

fn default_separator() -> String {
    recordkit_core::describe::DEFAULT_SEPARATOR.to_string()
}

impl Default for DescribeConfig {
    fn default() -> Self {
        Self {
            nest_indent: default_nest_indent(),
            separator: default_separator(),
        }
    }
}

impl From<&DescribeConfig> for DescribeOptions {
    fn from(c: &DescribeConfig) -> Self {
        DescribeOptions {
            separator: c.separator.clone(),
            nest_indent: c.nest_indent,
        }
    }
}

/// One slot of a declared record type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldDefinition {
    /// Optional label; all fields of a record must agree on having one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Kind display name: "String", "Int", "Double" or "Bool"
    pub kind: String,
}

/// A record type declared in the config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordDefinition {
    /// Record type name
    pub name: String,
    /// Ordered slots
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

impl RecordDefinition {
    fn slots(&self) -> Result<Vec<SignatureSlot>, recordkit_core::Error> {
        self.fields
            .iter()
            .map(|f| {
                let kind = ValueKind::from_name(&f.kind)
                    .ok_or_else(|| recordkit_core::Error::UnknownKind(f.kind.clone()))?;
                Ok(match &f.label {
                    Some(label) => SignatureSlot::labeled(label.clone(), kind),
                    None => SignatureSlot::unlabeled(kind),
                })
            })
            .collect()
    }
}

/// CLI configuration loaded from `recordkit.toml`.
///
/// # Example
///
/// ```toml
/// output = "human"
///
/// [describe]
/// nest_indent = 4
///
/// [[records]]
/// name = "Point"
/// fields = [{ label = "x", kind = "Double" }, { label = "y", kind = "Double" }]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CliConfig {
    /// Output mode: `"human"` (default) or `"json"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Debug dump layout.
    #[serde(default)]
    pub describe: DescribeConfig,
    /// Extra record types.
    #[serde(default)]
    pub records: Vec<RecordDefinition>,
}

impl CliConfig {
    /// Parse config text.
    pub fn from_toml(path: &Path, text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from an explicit path, or from `recordkit.toml` in the working
    /// directory when it exists. Missing default file → defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(CONFIG_FILE_NAME);
                if !default.exists() {
                    debug!(target: "recordkit::cli", "No config file, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml(&path, &text)?;
        info!(target: "recordkit::cli", path = %path.display(), records = config.records.len(), "Loaded config");
        Ok(config)
    }

    /// Whether JSON output is the configured default.
    ///
    /// # Errors
    ///
    /// Returns an error if the mode is not `"human"` or `"json"`.
    pub fn json_output(&self) -> Result<bool, ConfigError> {
        match self.output.as_deref() {
            None | Some("human") => Ok(false),
            Some("json") => Ok(true),
            Some(other) => Err(ConfigError::OutputMode(other.to_string())),
        }
    }

    /// Register every declared record type.
    pub fn register_records(&self, registry: &mut RecordRegistry) -> Result<(), ConfigError> {
        for def in &self.records {
            let wrap = |source| ConfigError::Record {
                name: def.name.clone(),
                source,
            };
            let slots = def.slots().map_err(wrap)?;
            registry.define_signature(&def.name, slots).map_err(wrap)?;
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# recordkit configuration
#
# Output mode: "human" (default) or "json"
output = "human"

# Debug dump layout
[describe]
# Extra spaces per nesting level
nest_indent = 4
# Line printed after every record block
separator = "-----------------------------------------------------------------"

# Extra record types, registered next to Author, Book and Car.
# Either label every field or none of them.
# Kinds: "String", "Int", "Double", "Bool"
#
# [[records]]
# name = "Point"
# fields = [
#     { label = "x", kind = "Double" },
#     { label = "y", kind = "Double" },
# ]
"#
    }

    /// Write the default config file to `path` unless one already exists.
    ///
    /// Returns `true` if a file was written.
    pub fn write_default(path: &Path) -> Result<bool, ConfigError> {
        if path.exists() {
            return Ok(false);
        }
        fs::write(path, Self::default_toml()).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(true)
    }
}
