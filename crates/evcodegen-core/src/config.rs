//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// evcodegen configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Headers scanned when none are given on the command line
    pub default_headers: Vec<PathBuf>,

    /// Macros that match a family pattern but are not family members
    pub denylist: Vec<DeniedMacro>,

    /// Naming strings for the generated files
    pub render: RenderOptions,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_headers: vec![
                PathBuf::from("/usr/include/linux/input.h"),
                PathBuf::from("/usr/include/linux/input-event-codes.h"),
                PathBuf::from("/usr/include/linux/uinput.h"),
            ],
            denylist: vec![DeniedMacro::new("EV", "VERSION")],
            render: RenderOptions::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load a configuration from a YAML file
    ///
    /// Fields missing from the file keep their defaults.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse a configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Whether a (prefix, suffix) pair is on the denylist
    pub fn is_denied(&self, prefix: &str, suffix: &str) -> bool {
        self.denylist
            .iter()
            .any(|d| d.prefix == prefix && d.suffix == suffix)
    }
}

/// A (prefix, suffix) pair excluded from generation, e.g. `EV_VERSION`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeniedMacro {
    pub prefix: String,
    pub suffix: String,
}

impl DeniedMacro {
    pub fn new(prefix: &str, suffix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        }
    }
}

/// Naming strings substituted into the file templates
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// C++ namespace wrapping all generated types
    pub namespace: String,

    /// Directory the definition file includes the declaration file from
    pub include_dir: String,

    /// Prefix of the include guard macro
    pub guard_prefix: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            namespace: "evdevpp".into(),
            include_dir: "evdevpp".into(),
            guard_prefix: "EVDEVPP_EVDEVPP_".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.default_headers.len(), 3);
        assert!(config.is_denied("EV", "VERSION"));
        assert!(!config.is_denied("EV", "KEY"));
        assert_eq!(config.render.namespace, "evdevpp");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
denylist:
  - prefix: EV
    suffix: VERSION
  - prefix: KEY
    suffix: MAX
render:
  namespace: input
"#;
        let config = GeneratorConfig::from_yaml_str(yaml).unwrap();
        assert!(config.is_denied("KEY", "MAX"));
        assert!(config.is_denied("EV", "VERSION"));
        assert_eq!(config.render.namespace, "input");
        assert_eq!(config.render.guard_prefix, "EVDEVPP_EVDEVPP_");
        assert_eq!(config.default_headers.len(), 3);
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let result = GeneratorConfig::from_yaml_str("denylist: 3");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_headers: [/tmp/a.h]").unwrap();

        let config = GeneratorConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.default_headers, vec![PathBuf::from("/tmp/a.h")]);
    }
}
