//! Configuration management for textkit.
//!
//! Parses `textkit.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [json]
//! indent = 4          # 2, 4 or "tab"
//!
//! [readability]
//! words_per_minute = 200
//!
//! [regex]
//! default_flags = "g"
//! max_matches = 10000
//!
//! [limits]
//! max_input_bytes = 10485760
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use textkit_json::Indent;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override JSON indentation.
    pub indent: Option<Indent>,
    /// Override reading speed.
    pub words_per_minute: Option<u32>,
    /// Override input size limit.
    pub max_input_bytes: Option<u64>,
}

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "textkit.toml";

/// Flag characters accepted in `regex.default_flags`.
const KNOWN_FLAGS: &str = "gimsxu";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON formatting configuration.
    pub json: JsonConfig,
    /// Readability configuration.
    pub readability: ReadabilityConfig,
    /// Regex configuration.
    pub regex: RegexConfig,
    /// Input limits.
    pub limits: LimitsConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// JSON formatting configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct JsonConfig {
    /// Indentation used by `json format`.
    pub indent: Indent,
}

/// Readability configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ReadabilityConfig {
    /// Reading speed used for reading time estimates.
    pub words_per_minute: u32,
}

impl Default for ReadabilityConfig {
    fn default() -> Self {
        Self {
            words_per_minute: 200,
        }
    }
}

/// Regex configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RegexConfig {
    /// Flags used when none are given on the command line.
    pub default_flags: String,
    /// Maximum number of matches collected per run.
    pub max_matches: usize,
}

impl Default for RegexConfig {
    fn default() -> Self {
        Self {
            default_flags: "g".to_owned(),
            max_matches: 10_000,
        }
    }
}

/// Input limits.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Inputs larger than this are rejected before processing.
    pub max_input_bytes: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: 10 * 1024 * 1024,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

fn require_positive(value: u64, field: &str) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::Validation(format!(
            "{field} must be greater than 0"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `textkit.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading, and the result is validated again.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or a value is out of range.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_from(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Search for a config file in `start` and its parents.
    #[must_use]
    pub fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(indent) = settings.indent {
            self.json.indent = indent;
        }
        if let Some(wpm) = settings.words_per_minute {
            self.readability.words_per_minute = wpm;
        }
        if let Some(max_input_bytes) = settings.max_input_bytes {
            self.limits.max_input_bytes = max_input_bytes;
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive(
            u64::from(self.readability.words_per_minute),
            "readability.words_per_minute",
        )?;
        require_positive(self.regex.max_matches as u64, "regex.max_matches")?;
        require_positive(self.limits.max_input_bytes, "limits.max_input_bytes")?;

        if let Some(bad) = self
            .regex
            .default_flags
            .chars()
            .find(|c| !KNOWN_FLAGS.contains(*c))
        {
            return Err(ConfigError::Validation(format!(
                "regex.default_flags contains unsupported flag '{bad}'"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.json.indent, Indent::Two);
        assert_eq!(config.readability.words_per_minute, 200);
        assert_eq!(config.regex.default_flags, "g");
        assert_eq!(config.regex.max_matches, 10_000);
        assert_eq!(config.limits.max_input_bytes, 10 * 1024 * 1024);
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.json.indent, Indent::Two);
        assert_eq!(config.regex.default_flags, "g");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[json]
indent = 4

[readability]
words_per_minute = 250

[regex]
default_flags = "gi"
max_matches = 50

[limits]
max_input_bytes = 1024
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.json.indent, Indent::Four);
        assert_eq!(config.readability.words_per_minute, 250);
        assert_eq!(config.regex.default_flags, "gi");
        assert_eq!(config.regex.max_matches, 50);
        assert_eq!(config.limits.max_input_bytes, 1024);
    }

    #[test]
    fn test_parse_indent_forms() {
        let config: Config = toml::from_str("[json]\nindent = \"tab\"").unwrap();
        assert_eq!(config.json.indent, Indent::Tab);

        let config: Config = toml::from_str("[json]\nindent = \"4\"").unwrap();
        assert_eq!(config.json.indent, Indent::Four);

        let config: Config = toml::from_str("[json]\nindent = 2").unwrap();
        assert_eq!(config.json.indent, Indent::Two);
    }

    #[test]
    fn test_parse_invalid_indent() {
        let result: Result<Config, _> = toml::from_str("[json]\nindent = 3");
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default();
        let overrides = CliSettings {
            indent: Some(Indent::Tab),
            words_per_minute: Some(300),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.json.indent, Indent::Tab);
        assert_eq!(config.readability.words_per_minute, 300);
        assert_eq!(config.regex.default_flags, "g"); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings::default());
        assert_eq!(config.readability.words_per_minute, 200);
        assert_eq!(config.limits.max_input_bytes, 10 * 1024 * 1024);
    }

    // Validation tests

    fn assert_validation_error(config: &Config, expected: &str) {
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        assert!(msg.contains(expected), "Expected '{expected}' in: {msg}");
    }

    #[test]
    fn test_validate_default_config_passes() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_words_per_minute() {
        let mut config = Config::default();
        config.readability.words_per_minute = 0;
        assert_validation_error(&config, "readability.words_per_minute");
    }

    #[test]
    fn test_validate_zero_max_matches() {
        let mut config = Config::default();
        config.regex.max_matches = 0;
        assert_validation_error(&config, "regex.max_matches");
    }

    #[test]
    fn test_validate_zero_input_limit() {
        let mut config = Config::default();
        config.limits.max_input_bytes = 0;
        assert_validation_error(&config, "limits.max_input_bytes");
    }

    #[test]
    fn test_validate_unknown_default_flag() {
        let mut config = Config::default();
        config.regex.default_flags = "gq".to_owned();
        assert_validation_error(&config, "'q'");
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[readability]\nwords_per_minute = 180\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.readability.words_per_minute, 180);
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[limits]\nmax_input_bytes = 0\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_rejects_invalid_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();
        let overrides = CliSettings {
            words_per_minute: Some(0),
            ..Default::default()
        };

        let err = Config::load(Some(&path), Some(&overrides)).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_discover_in_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();

        assert_eq!(
            Config::discover_from(&nested),
            Some(dir.path().join(CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_discover_prefers_nearest() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("project");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();
        std::fs::write(nested.join(CONFIG_FILENAME), "").unwrap();

        assert_eq!(
            Config::discover_from(&nested),
            Some(nested.join(CONFIG_FILENAME))
        );
    }
}
