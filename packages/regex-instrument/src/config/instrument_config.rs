//! Instrumentation pass configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigFileV1, SUPPORTED_VERSIONS};
use crate::features::parsing::LanguageId;

/// Environment variable the driver reads an optional YAML config path from
pub const CONFIG_ENV_VAR: &str = "REGEX_INSTRUMENT_CONFIG";

/// What to do with a constructor call whose callee name is shadowed by a
/// local declaration (or sits inside a `with` body)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowPolicy {
    /// Instrument anyway, logging only runtime values (pattern/flags unknown)
    #[default]
    Dynamic,
    /// Leave the call untouched and report it as skipped
    Skip,
}

/// Configuration of one instrumentation pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentConfig {
    /// Callee names treated as the global regex constructor
    pub constructor_names: Vec<String>,
    pub shadow_policy: ShadowPolicy,
    /// Prefix of every identifier the generated fragments introduce
    pub identifier_prefix: String,
    /// Grammar override; `None` picks by file extension
    pub language: Option<LanguageId>,
    /// Re-parse the rewritten program and fail the pass if it is invalid
    pub verify_output: bool,
}

impl Default for InstrumentConfig {
    fn default() -> Self {
        Self {
            constructor_names: vec!["RegExp".to_string()],
            shadow_policy: ShadowPolicy::default(),
            identifier_prefix: "__rx".to_string(),
            language: None,
            verify_output: true,
        }
    }
}

impl InstrumentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn constructor_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constructor_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn shadow_policy(mut self, policy: ShadowPolicy) -> Self {
        self.shadow_policy = policy;
        self
    }

    pub fn identifier_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.identifier_prefix = prefix.into();
        self
    }

    pub fn language(mut self, language: LanguageId) -> Self {
        self.language = Some(language);
        self
    }

    pub fn verify_output(mut self, verify: bool) -> Self {
        self.verify_output = verify;
        self
    }

    pub fn is_constructor_name(&self, name: &str) -> bool {
        self.constructor_names.iter().any(|n| n == name)
    }

    /// Range/shape checks on every field
    pub fn validate(&self) -> ConfigResult<()> {
        if !is_js_identifier(&self.identifier_prefix) {
            return Err(ConfigError::InvalidValue {
                field: "identifier_prefix".to_string(),
                value: self.identifier_prefix.clone(),
                hint: "Must be a plain JavaScript identifier such as '__rx'.".to_string(),
            });
        }
        if self.constructor_names.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "constructor_names".to_string(),
                value: "[]".to_string(),
                hint: "List at least one constructor name, usually 'RegExp'.".to_string(),
            });
        }
        if let Some(bad) = self.constructor_names.iter().find(|n| !is_js_identifier(n)) {
            return Err(ConfigError::InvalidValue {
                field: "constructor_names".to_string(),
                value: bad.clone(),
                hint: "Constructor names must be identifiers.".to_string(),
            });
        }
        Ok(())
    }

    /// Load and validate a YAML configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&text)
    }

    /// Parse and validate YAML configuration text
    pub fn from_yaml_str(text: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(text)?;
        let version = file.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let mut config = Self::default();
        if let Some(names) = file.constructor_names {
            config.constructor_names = names;
        }
        if let Some(policy) = file.shadow_policy {
            config.shadow_policy = policy;
        }
        if let Some(prefix) = file.identifier_prefix {
            config.identifier_prefix = prefix;
        }
        if file.language.is_some() {
            config.language = file.language;
        }
        if let Some(verify) = file.verify_output {
            config.verify_output = verify;
        }

        config.validate()?;
        Ok(config)
    }

    /// Defaults, or the file named by `REGEX_INSTRUMENT_CONFIG` when set
    pub fn from_env() -> ConfigResult<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::from_yaml(path),
            _ => Ok(Self::default()),
        }
    }
}

fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        let config = InstrumentConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.is_constructor_name("RegExp"));
        assert!(!config.is_constructor_name("Regex"));
        assert_eq!(config.shadow_policy, ShadowPolicy::Dynamic);
    }

    #[test]
    fn test_builder_overrides() {
        let config = InstrumentConfig::new()
            .constructor_names(["RegExp", "XRegExp"])
            .shadow_policy(ShadowPolicy::Skip)
            .identifier_prefix("$trace")
            .language(LanguageId::TypeScript)
            .verify_output(false);
        assert!(config.validate().is_ok());
        assert!(config.is_constructor_name("XRegExp"));
        assert_eq!(config.language, Some(LanguageId::TypeScript));
    }

    #[test]
    fn test_invalid_prefix_rejected() {
        let config = InstrumentConfig::new().identifier_prefix("9lives");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("identifier_prefix"));
    }

    #[test]
    fn test_yaml_loading() {
        let yaml_content = r#"
version: 1
shadow_policy: skip
identifier_prefix: __regexlog
"#;
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml_content.as_bytes()).unwrap();

        let config = InstrumentConfig::from_yaml(temp_file.path()).unwrap();
        assert_eq!(config.shadow_policy, ShadowPolicy::Skip);
        assert_eq!(config.identifier_prefix, "__regexlog");
        assert_eq!(config.constructor_names, vec!["RegExp".to_string()]);
        assert!(config.verify_output);
    }

    #[test]
    fn test_yaml_missing_version() {
        let result = InstrumentConfig::from_yaml_str("shadow_policy: skip\n");
        assert!(matches!(result, Err(ConfigError::MissingVersion)));
    }

    #[test]
    fn test_yaml_unsupported_version() {
        let result = InstrumentConfig::from_yaml_str("version: 7\n");
        match result {
            Err(ConfigError::UnsupportedVersion { found, supported }) => {
                assert_eq!(found, 7);
                assert_eq!(supported, vec![1]);
            }
            other => panic!("expected UnsupportedVersion, got {:?}", other),
        }
    }

    #[test]
    fn test_yaml_all_fields() {
        let yaml = "version: 1\nconstructor_names: [RegExp, XRegExp]\nshadow_policy: dynamic\nidentifier_prefix: __rl\nlanguage: typescript\nverify_output: false\n";
        let config = InstrumentConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(
            config.constructor_names,
            vec!["RegExp".to_string(), "XRegExp".to_string()]
        );
        assert_eq!(config.shadow_policy, ShadowPolicy::Dynamic);
        assert_eq!(config.identifier_prefix, "__rl");
        assert_eq!(config.language, Some(LanguageId::TypeScript));
        assert!(!config.verify_output);
    }
}
