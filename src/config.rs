//! @dose
//! purpose: Configuration file parsing for stub2dts.toml. Holds the output toggles, the
//!     stubs/output locations, exclusion patterns and extra signature overrides, and
//!     resolves the stubs directory when none is given on the command line.
//!
//! when-editing:
//!     - !Config is loaded once at startup and passed through the call chain
//!     - !false in [parameters] means "suppress this parameter"
//!     - CLI flags win over config values; config wins over platform defaults
//!
//! invariants:
//!     - Config::load returns default config if stub2dts.toml doesn't exist
//!     - Config overrides are merged on top of the built-in tables, never beneath them
//!
//! gotchas:
//!     - Only macOS and Windows have a default stubs directory
//!     - Relative paths in the config resolve against the project root

use crate::overrides::{OverrideTables, ParamOverride};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "stub2dts.toml";

/// Default name of the generated declaration file
pub const DEFAULT_OUTPUT: &str = "BitwigControllerApi.d.ts";

#[cfg(target_os = "macos")]
const PLATFORM_STUBS_DIR: Option<&str> =
    Some("/Applications/Bitwig Studio.app/Contents/Resources/Documentation/control-surface/js-stubs");

#[cfg(target_os = "windows")]
const PLATFORM_STUBS_DIR: Option<&str> =
    Some("C:/Program Files (x86)/Bitwig Studio/resources/doc/control-surface/js-stubs");

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const PLATFORM_STUBS_DIR: Option<&str> = None;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No default stubs directory on platform '{0}'; pass STUBS_DIR or set stubs_dir in stub2dts.toml")]
    UnsupportedPlatform(&'static str),
}

/// Main configuration structure matching stub2dts.toml
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the JavaScript stubs
    pub stubs_dir: Option<PathBuf>,

    /// Declaration file to write
    pub output: PathBuf,

    /// Copy doc comments into the declaration file
    pub with_comments: bool,

    /// Emit parameter and return type annotations
    pub with_types: bool,

    /// Start from the compiled-in override tables
    pub builtin_overrides: bool,

    /// Stub file name patterns to skip
    pub exclude: Vec<String>,

    /// Extra parameter overrides, `Class.method.param` -> text or false
    #[serde(deserialize_with = "deserialize_parameter_overrides")]
    pub parameters: BTreeMap<String, ParamOverride>,

    /// Extra method overrides, `Class.method` -> parameter list text
    pub methods: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stubs_dir: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            with_comments: true,
            with_types: true,
            builtin_overrides: true,
            exclude: Vec::new(),
            parameters: BTreeMap::new(),
            methods: BTreeMap::new(),
        }
    }
}

/// Deserialize parameter overrides whose values are a string or false (suppressed)
fn deserialize_parameter_overrides<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, ParamOverride>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OverrideValue {
        Text(String),
        Bool(bool),
    }

    let raw = BTreeMap::<String, OverrideValue>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(key, value)| match value {
            OverrideValue::Text(text) => Ok((key, ParamOverride::Replace(text))),
            OverrideValue::Bool(false) => Ok((key, ParamOverride::Suppress)),
            OverrideValue::Bool(true) => Err(serde::de::Error::custom(format!(
                "parameter override '{}' must be a string or false",
                key
            ))),
        })
        .collect()
}

impl Config {
    /// Load configuration from stub2dts.toml in the given root directory
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);

        if !config_path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&config_path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse {}: {}", CONFIG_FILE, e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read {}: {}", CONFIG_FILE, e);
                Self::default()
            }
        }
    }

    /// Build the override tables: built-ins (unless disabled) plus config entries
    pub fn override_tables(&self) -> OverrideTables {
        let mut tables = if self.builtin_overrides {
            OverrideTables::builtin()
        } else {
            OverrideTables::empty()
        };
        tables.extend_parameters(self.parameters.clone());
        tables.extend_methods(self.methods.clone());
        tables
    }

    /// Pick the stubs directory: explicit argument, then config, then platform default
    pub fn stubs_dir(&self, explicit: Option<&Path>, root: &Path) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = explicit.or(self.stubs_dir.as_deref()) {
            return Ok(resolve(root, dir));
        }
        PLATFORM_STUBS_DIR
            .map(PathBuf::from)
            .ok_or(ConfigError::UnsupportedPlatform(std::env::consts::OS))
    }
}

/// Join a relative path onto the root; absolute paths are kept
pub fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.stubs_dir.is_none());
        assert_eq!(config.output, PathBuf::from("BitwigControllerApi.d.ts"));
        assert!(config.with_comments);
        assert!(config.with_types);
        assert!(config.builtin_overrides);
        assert!(config.exclude.is_empty());
        assert!(config.parameters.is_empty());
        assert!(config.methods.is_empty());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path());
        assert!(config.with_types);
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_load_basic_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_content = r#"
stubs_dir = "js-stubs"
output = "types/api.d.ts"
with_comments = false
exclude = ["*.md"]
"#;
        fs::write(temp_dir.path().join(CONFIG_FILE), config_content).unwrap();

        let config = Config::load(temp_dir.path());
        assert_eq!(config.stubs_dir, Some(PathBuf::from("js-stubs")));
        assert_eq!(config.output, PathBuf::from("types/api.d.ts"));
        assert!(!config.with_comments);
        assert!(config.with_types);
        assert_eq!(config.exclude, vec!["*.md"]);
    }

    #[test]
    fn test_load_config_with_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let config_content = r#"
[parameters]
"Clip.addStepObserver.callback" = "callback : (step: number) => void"
"Clip.launch./*" = false

[methods]
"Clip.play" = "fromStart?: boolean"
"#;
        fs::write(temp_dir.path().join(CONFIG_FILE), config_content).unwrap();

        let config = Config::load(temp_dir.path());
        assert_eq!(
            config.parameters.get("Clip.addStepObserver.callback"),
            Some(&ParamOverride::Replace(
                "callback : (step: number) => void".to_string()
            ))
        );
        assert_eq!(
            config.parameters.get("Clip.launch./*"),
            Some(&ParamOverride::Suppress)
        );

        let tables = config.override_tables();
        assert_eq!(tables.method("Clip", "play"), Some("fromStart?: boolean"));
        assert_eq!(tables.method("BooleanValue", "toggle"), Some("exclusive?"));
        assert_eq!(
            tables.parameter("Clip", "launch", "/*"),
            Some(&ParamOverride::Suppress)
        );
    }

    #[test]
    fn test_true_parameter_override_rejected() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "[parameters]\n\"Clip.play.x\" = true\n",
        )
        .unwrap();

        // Invalid config falls back to defaults
        let config = Config::load(temp_dir.path());
        assert!(config.parameters.is_empty());
    }

    #[test]
    fn test_builtin_overrides_disabled() {
        let config = Config {
            builtin_overrides: false,
            ..Config::default()
        };
        let tables = config.override_tables();
        assert_eq!(tables.parameter_count(), 0);
        assert_eq!(tables.method_count(), 0);
    }

    #[test]
    fn test_stubs_dir_precedence() {
        let root = Path::new("/project");
        let config = Config {
            stubs_dir: Some(PathBuf::from("from-config")),
            ..Config::default()
        };

        assert_eq!(
            config.stubs_dir(Some(Path::new("cli")), root).unwrap(),
            PathBuf::from("/project/cli")
        );
        assert_eq!(
            config.stubs_dir(None, root).unwrap(),
            PathBuf::from("/project/from-config")
        );
        assert_eq!(
            config.stubs_dir(Some(Path::new("/abs/stubs")), root).unwrap(),
            PathBuf::from("/abs/stubs")
        );
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    #[test]
    fn test_stubs_dir_unsupported_platform() {
        let err = Config::default()
            .stubs_dir(None, Path::new("/project"))
            .unwrap_err();
        assert!(err.to_string().contains("pass STUBS_DIR"));
    }
}
