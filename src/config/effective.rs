//! Effective configuration with provenance
//!
//! The effective config is the merged configuration plus a record of the
//! sources that contributed to it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use wk_merge::{Merger, ReplaceSequences};

use super::defaults::BuiltinDefaults;
use crate::components::day::DayConfig;
use crate::components::radio_group::RadioGroupConfig;
use crate::components::select::SelectConfig;
use crate::components::tabs::TabsConfig;
use crate::components::timepicker::{TimePickerConfig, SECONDS_IN_DAY};
use crate::locale::Locale;
use crate::overrides::{parse_overrides, ComponentRegistry, OverrideError, Overrides};
use crate::theme::Theme;

/// Origin of a configuration source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ConfigOrigin {
    Builtin,
    File,
    Caller,
}

/// A contributing config source with provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSource {
    /// Origin of this source
    pub origin: ConfigOrigin,

    /// File path (None for builtin/caller)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// SHA-256 digest of raw file bytes (None for builtin/caller)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

/// Effective configuration with provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectiveConfig {
    /// The merged configuration object
    pub config: Value,

    /// Contributing sources in precedence order
    pub sources: Vec<ConfigSource>,
}

impl EffectiveConfig {
    /// Build effective config from layers.
    ///
    /// A config path that does not exist is skipped.
    pub fn build(
        config_path: Option<&Path>,
        caller_overrides: Option<Value>,
    ) -> Result<Self, ConfigError> {
        let mut layers = Vec::new();
        let mut sources = Vec::new();

        // Layer 1: Built-in defaults
        layers.push(BuiltinDefaults::default().to_value());
        sources.push(ConfigSource {
            origin: ConfigOrigin::Builtin,
            path: None,
            digest: None,
        });

        // Layer 2: Config file
        if let Some(path) = config_path {
            if path.exists() {
                let (value, digest) = Self::load_toml_file(path)?;
                tracing::debug!(path = %path.display(), %digest, "loaded config file");
                layers.push(value);
                sources.push(ConfigSource {
                    origin: ConfigOrigin::File,
                    path: Some(path.to_string_lossy().to_string()),
                    digest: Some(digest),
                });
            } else {
                tracing::debug!(path = %path.display(), "config file not found, skipping");
            }
        }

        // Layer 3: Caller overrides
        if let Some(caller) = caller_overrides {
            layers.push(caller);
            sources.push(ConfigSource {
                origin: ConfigOrigin::Caller,
                path: None,
                digest: None,
            });
        }

        // Arrays in config replace rather than merge by index
        let merged = Merger::with_policy(ReplaceSequences)
            .merge(Value::Object(Map::new()), layers.iter());

        Self::validate_config(&merged)?;
        tracing::debug!(layers = sources.len(), "effective config built");

        Ok(Self {
            config: merged,
            sources,
        })
    }

    /// Load and parse a TOML file, returning the value and digest
    fn load_toml_file(path: &Path) -> Result<(Value, String), ConfigError> {
        let bytes = fs::read(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest = hex::encode(hasher.finalize());

        let contents = String::from_utf8(bytes)
            .map_err(|e| ConfigError::Parse(format!("Invalid UTF-8: {}", e)))?;

        let toml_value: toml::Value = toml::from_str(&contents)
            .map_err(|e| ConfigError::Parse(format!("TOML parse error: {}", e)))?;

        Ok((Self::toml_to_json(toml_value), digest))
    }

    /// Convert TOML Value to JSON Value
    fn toml_to_json(toml: toml::Value) -> Value {
        match toml {
            toml::Value::String(s) => Value::String(s),
            toml::Value::Integer(i) => Value::Number(i.into()),
            toml::Value::Float(f) => serde_json::Number::from_f64(f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            toml::Value::Boolean(b) => Value::Bool(b),
            toml::Value::Datetime(dt) => Value::String(dt.to_string()),
            toml::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Self::toml_to_json).collect())
            }
            toml::Value::Table(table) => Value::Object(
                table
                    .into_iter()
                    .map(|(k, v)| (k, Self::toml_to_json(v)))
                    .collect(),
            ),
        }
    }

    /// Validate configuration values
    fn validate_config(config: &Value) -> Result<(), ConfigError> {
        let theme: Theme = Self::section_of(config, "theme")?;
        let [small, medium, large] = theme.breakpoints.ascending();
        if !(small < medium && medium < large) {
            return Err(ConfigError::Validation(format!(
                "theme breakpoints must ascend, got {} / {} / {}",
                small, medium, large
            )));
        }

        let timepicker: TimePickerConfig = Self::section_of(config, "timepicker")?;
        if timepicker.step == 0 || timepicker.step > SECONDS_IN_DAY {
            return Err(ConfigError::Validation(format!(
                "timepicker.step must be in (0, {}]",
                SECONDS_IN_DAY
            )));
        }

        let select: SelectConfig = Self::section_of(config, "select")?;
        if select.label_key.is_empty() || select.value_key.is_empty() {
            return Err(ConfigError::Validation(
                "select.labelKey and select.valueKey must not be empty".to_string(),
            ));
        }

        if let Some(overrides) = config.get("overrides") {
            if !overrides.is_object() {
                return Err(ConfigError::Validation(
                    "overrides must be a table keyed by component".to_string(),
                ));
            }
        }

        Ok(())
    }

    fn section_of<T: DeserializeOwned + Default>(
        config: &Value,
        section: &str,
    ) -> Result<T, ConfigError> {
        match config.get(section) {
            None | Some(Value::Null) => Ok(T::default()),
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| ConfigError::Parse(format!("section '{}': {}", section, e))),
        }
    }

    /// Deserialize one top-level section; missing sections use defaults.
    pub fn section<T: DeserializeOwned + Default>(&self, section: &str) -> Result<T, ConfigError> {
        Self::section_of(&self.config, section)
    }

    pub fn theme(&self) -> Result<Theme, ConfigError> {
        self.section("theme")
    }

    pub fn locale(&self) -> Result<Locale, ConfigError> {
        self.section("locale")
    }

    pub fn select(&self) -> Result<SelectConfig, ConfigError> {
        self.section("select")
    }

    pub fn timepicker(&self) -> Result<TimePickerConfig, ConfigError> {
        self.section("timepicker")
    }

    pub fn day(&self) -> Result<DayConfig, ConfigError> {
        self.section("day")
    }

    pub fn tabs(&self) -> Result<TabsConfig, ConfigError> {
        self.section("tabs")
    }

    pub fn radio_group(&self) -> Result<RadioGroupConfig, ConfigError> {
        self.section("radio_group")
    }

    /// Overrides stored for `component` under `[overrides.<component>]`.
    ///
    /// Component replacements are looked up by name in `registry`.
    pub fn overrides(
        &self,
        component: &str,
        registry: &ComponentRegistry,
    ) -> Result<Overrides, ConfigError> {
        let value = self
            .get(&format!("overrides.{}", component))
            .unwrap_or(&Value::Null);
        Ok(parse_overrides(value, registry)?)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Get a config value by path (dot-separated)
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut current = &self.config;
        for part in path.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    /// Get a config value as u64
    pub fn get_u64(&self, path: &str) -> Option<u64> {
        self.get(path).and_then(|v| v.as_u64())
    }

    /// Get a config value as string
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(|v| v.as_str())
    }

    /// Get a config value as bool
    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.get(path).and_then(|v| v.as_bool())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Override(#[from] OverrideError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::{Component, Override};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_build_with_defaults_only() {
        let config = EffectiveConfig::build(None, None).unwrap();

        assert_eq!(config.get_u64("timepicker.step"), Some(900));
        assert_eq!(config.get_str("select.labelKey"), Some("label"));
        assert_eq!(config.get_bool("day.peekNextMonth"), Some(true));
    }

    #[test]
    fn test_build_with_caller_override() {
        let caller = serde_json::json!({"timepicker": {"step": 1800}});

        let config = EffectiveConfig::build(None, Some(caller)).unwrap();

        assert_eq!(config.timepicker().unwrap().step, 1800);
        assert_eq!(config.get_str("timepicker.format"), Some("12"));
    }

    #[test]
    fn test_validation_step() {
        let caller = serde_json::json!({"timepicker": {"step": 0}});

        let result = EffectiveConfig::build(None, Some(caller));
        assert!(result.unwrap_err().to_string().contains("timepicker.step"));
    }

    #[test]
    fn test_validation_breakpoints() {
        let caller = serde_json::json!({"theme": {"breakpoints": {"small": 900, "medium": 600, "large": 1136}}});

        let err = EffectiveConfig::build(None, Some(caller)).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_wrong_section_type_is_parse_error() {
        let caller = serde_json::json!({"select": {"multi": "yes"}});

        let err = EffectiveConfig::build(None, Some(caller)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(ref m) if m.contains("select")));
    }

    #[test]
    fn test_load_toml_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "[theme.colors]").unwrap();
        writeln!(temp, "accent = \"#FF00FF\"").unwrap();
        writeln!(temp, "[select]").unwrap();
        writeln!(temp, "multi = true").unwrap();

        let config = EffectiveConfig::build(Some(temp.path()), None).unwrap();

        let theme = config.theme().unwrap();
        assert_eq!(theme.color("accent"), Some("#FF00FF"));
        assert_eq!(theme.color("primary"), Some("#000000"));
        assert!(config.select().unwrap().multi);
        assert_eq!(config.sources[1].origin, ConfigOrigin::File);
        assert_eq!(config.sources[1].digest.as_ref().map(String::len), Some(64));
    }

    #[test]
    fn test_missing_file_is_skipped() {
        let config =
            EffectiveConfig::build(Some(Path::new("/nonexistent/widgets.toml")), None).unwrap();

        assert_eq!(config.sources.len(), 1);
        assert_eq!(config.sources[0].origin, ConfigOrigin::Builtin);
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "[theme").unwrap();

        let err = EffectiveConfig::build(Some(temp.path()), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_overrides_section() {
        let caller = serde_json::json!({
            "overrides": {
                "tabs": {
                    "Root": "FancyRoot",
                    "TabBar": {"style": {"gap": "8px"}}
                }
            }
        });
        let config = EffectiveConfig::build(None, Some(caller)).unwrap();

        let mut registry = ComponentRegistry::new();
        registry.register(Component::styled("FancyRoot"));

        let tabs = config.overrides("tabs", &registry).unwrap();
        assert_eq!(
            tabs.get("Root"),
            Some(&Override::Component(Component::styled("FancyRoot")))
        );
        assert!(config.overrides("day", &registry).unwrap().is_empty());
    }

    #[test]
    fn test_bad_override_is_reported() {
        let caller = serde_json::json!({"overrides": {"tabs": {"Root": 3}}});
        let config = EffectiveConfig::build(None, Some(caller)).unwrap();

        let err = config.overrides("tabs", &ComponentRegistry::new()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Override(OverrideError::InvalidOverride { .. })
        ));
    }

    #[test]
    fn test_sources_serialize_without_empty_fields() {
        let config = EffectiveConfig::build(None, None).unwrap();
        let json = config.to_json().unwrap();

        assert!(json.contains("\"origin\": \"builtin\""));
        assert!(!json.contains("digest"));
    }
}
