//! Autocorrect configuration
//!
//! Stores the rule scopes and trigger characters in
//! `~/.config/autocorrect/config.yaml`. The engine never caches this; the
//! host hands out its current copy on every lookup.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Embedded default configuration, written by `autocorrect --init-config`
pub const DEFAULT_CONFIG_YAML: &str = include_str!("../default-config.yaml");

/// Scope key whose rules apply to every language
pub const WILDCARD_SCOPE: &str = "*";

/// Trigger characters used when the configuration does not name any
pub const DEFAULT_TRIGGER_CHARS: [&str; 8] = [" ", ";", "(", ")", "{", "}", "\n", "\t"];

/// Pattern -> replacement pairs of one scope
pub type ScopeRules = BTreeMap<String, String>;

/// Language id (or `*`) -> rules of that scope
pub type LanguageRules = BTreeMap<String, ScopeRules>;

/// Autocorrect configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutocorrectConfig {
    /// Whether substitution is active when the session starts
    #[serde(default = "default_enabled", deserialize_with = "lenient::flag")]
    pub enabled: bool,

    /// Rules keyed by language id, with `*` applying everywhere
    #[serde(
        default,
        alias = "languageSpecific",
        deserialize_with = "lenient::language_rules"
    )]
    pub language_specific: LanguageRules,

    /// Single characters whose insertion may trigger a substitution
    #[serde(
        default = "default_trigger_chars",
        alias = "triggerChars",
        deserialize_with = "lenient::trigger_chars"
    )]
    pub trigger_chars: Vec<String>,
}

fn default_enabled() -> bool {
    true
}

fn default_trigger_chars() -> Vec<String> {
    DEFAULT_TRIGGER_CHARS.iter().map(|s| s.to_string()).collect()
}

impl Default for AutocorrectConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            language_specific: LanguageRules::new(),
            trigger_chars: default_trigger_chars(),
        }
    }
}

impl AutocorrectConfig {
    /// Parse a configuration from YAML text
    ///
    /// Malformed entries inside an otherwise valid document are dropped with a
    /// warning. An empty document yields the defaults.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write the embedded default configuration to `path`
    ///
    /// Creates the parent directory if it doesn't exist. Refuses to overwrite
    /// an existing file.
    pub fn write_default(path: &Path) -> Result<(), ConfigError> {
        if path.exists() {
            return Err(ConfigError::AlreadyExists(path.display().to_string()));
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Io(format!("Failed to create config directory: {}", e))
            })?;
        }

        std::fs::write(path, DEFAULT_CONFIG_YAML).map_err(|e| {
            ConfigError::Io(format!(
                "Failed to write config to {}: {}",
                path.display(),
                e
            ))
        })?;

        tracing::info!("Wrote default config to {}", path.display());
        Ok(())
    }

    /// Rules of a single scope, if configured
    pub fn scope(&self, scope: &str) -> Option<&ScopeRules> {
        self.language_specific.get(scope)
    }
}

/// Errors that can occur when reading or writing the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    AlreadyExists(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::AlreadyExists(p) => write!(f, "Config already exists at {}", p),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Field deserializers that drop malformed entries instead of failing the
/// whole document
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_yaml::Value;

    use super::{default_trigger_chars, LanguageRules};

    pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Bool(b) => b,
            other => {
                tracing::warn!(value = ?other, "`enabled` is not a boolean, assuming true");
                true
            }
        })
    }

    pub fn language_rules<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<LanguageRules, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(language_rules_from_value(&value))
    }

    pub fn trigger_chars<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<String>, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(trigger_chars_from_value(&value))
    }

    pub(super) fn language_rules_from_value(value: &Value) -> LanguageRules {
        let mut rules = LanguageRules::new();

        let Some(scopes) = value.as_mapping() else {
            if !value.is_null() {
                tracing::warn!("`language_specific` is not a mapping, ignoring it");
            }
            return rules;
        };

        for (scope, entries) in scopes {
            let Some(scope) = scope.as_str() else {
                tracing::warn!(scope = ?scope, "skipping rule scope with a non-string key");
                continue;
            };
            let Some(entries) = entries.as_mapping() else {
                if !entries.is_null() {
                    tracing::warn!(scope, "rule scope is not a mapping, ignoring it");
                }
                continue;
            };

            let scope_rules = rules.entry(scope.to_string()).or_default();
            for (pattern, replacement) in entries {
                match (pattern.as_str(), replacement.as_str()) {
                    (Some(pattern), Some(replacement)) if !pattern.is_empty() => {
                        scope_rules.insert(pattern.to_string(), replacement.to_string());
                    }
                    _ => {
                        tracing::warn!(scope, pattern = ?pattern, "skipping malformed rule");
                    }
                }
            }
        }

        rules
    }

    pub(super) fn trigger_chars_from_value(value: &Value) -> Vec<String> {
        let Some(entries) = value.as_sequence() else {
            tracing::warn!("`trigger_chars` is not a list, using defaults");
            return default_trigger_chars();
        };

        entries
            .iter()
            .filter_map(|entry| match entry.as_str() {
                Some(s) if s.chars().count() == 1 => Some(s.to_string()),
                _ => {
                    tracing::warn!(entry = ?entry, "skipping trigger that is not a single character");
                    None
                }
            })
            .collect()
    }
}
