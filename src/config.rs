//! YAML Configuration File Support for namefp
//!
//! This module loads the name pipeline configuration from YAML files. One
//! file describes where the lemma dictionary lives, which normalization
//! stages run and how the matcher generates identity sets.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # namefp Pipeline Configuration
//! version: "1.0"
//!
//! dictionary:
//!   path: "data/names.dict"
//!
//! canonical:
//!   repair_scripts: true
//!   title_case: true
//!
//! matcher:
//!   generation_cap: 1000
//!   schemas:
//!     - [firstname, patronymic, lastname]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use canonical::NormalizeConfig;
use lexicon::Label;
use matcher::{MatchConfig, Schema};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to turn a YAML file into a usable [`NamefpConfig`].
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("cannot read namefp config {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed namefp config: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("invalid namefp config: {0}")]
    Validation(String),

    #[error("config version {0:?} is not supported (expected \"1.0\")")]
    UnsupportedVersion(String),

    #[error("config is missing `{0}`")]
    MissingField(String),
}

/// Top-level YAML configuration structure for the name pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NamefpConfig {
    /// Format version; only "1.0" is understood.
    pub version: String,

    #[serde(default)]
    pub name: Option<String>,

    /// Lemma dictionary location
    #[serde(default)]
    pub dictionary: DictionaryYamlConfig,

    /// Normalization stage configuration
    #[serde(default)]
    pub canonical: CanonicalYamlConfig,

    /// Matcher configuration
    #[serde(default)]
    pub matcher: MatcherYamlConfig,
}

impl NamefpConfig {
    /// Reads and validates the YAML file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigLoadError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: NamefpConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the version and every section that carries constraints.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.dictionary.validate()?;
        self.matcher.validate()?;

        Ok(())
    }

    /// Dictionary directory, or an error naming the missing field.
    pub fn dictionary_path(&self) -> Result<&Path, ConfigLoadError> {
        self.dictionary
            .path
            .as_deref()
            .ok_or_else(|| ConfigLoadError::MissingField("dictionary.path".into()))
    }
}

impl Default for NamefpConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            dictionary: DictionaryYamlConfig::default(),
            canonical: CanonicalYamlConfig::default(),
            matcher: MatcherYamlConfig::default(),
        }
    }
}

/// Dictionary YAML configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DictionaryYamlConfig {
    /// Directory holding `dict.fst` and its side tables
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl DictionaryYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if matches!(&self.path, Some(path) if path.as_os_str().is_empty()) {
            return Err(ConfigLoadError::Validation(
                "dictionary.path must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Normalization stage YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalYamlConfig {
    #[serde(default = "true_value")]
    pub repair_scripts: bool,

    #[serde(default = "true_value")]
    pub title_case: bool,
}

impl CanonicalYamlConfig {
    pub fn to_normalize_config(&self) -> NormalizeConfig {
        NormalizeConfig {
            repair_scripts: self.repair_scripts,
            title_case: self.title_case,
        }
    }
}

impl Default for CanonicalYamlConfig {
    fn default() -> Self {
        Self {
            repair_scripts: true,
            title_case: true,
        }
    }
}

/// Matcher YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherYamlConfig {
    #[serde(default = "default_generation_cap")]
    pub generation_cap: usize,

    /// Extra label schemas, each three or more labels long
    #[serde(default)]
    pub schemas: Vec<Vec<Label>>,
}

impl MatcherYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        self.to_match_config()
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))
    }

    pub fn to_match_config(&self) -> MatchConfig {
        MatchConfig {
            generation_cap: self.generation_cap,
            schemas: self.schemas.iter().cloned().map(Schema::new).collect(),
        }
    }
}

impl Default for MatcherYamlConfig {
    fn default() -> Self {
        Self {
            generation_cap: default_generation_cap(),
            schemas: Vec::new(),
        }
    }
}

fn true_value() -> bool {
    true
}

fn default_generation_cap() -> usize {
    MatchConfig::default().generation_cap
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "test config"
dictionary:
  path: "/var/lib/namefp/dict"
canonical:
  title_case: false
"#;

        let config = NamefpConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.name, Some("test config".to_string()));
        assert_eq!(
            config.dictionary_path().unwrap(),
            Path::new("/var/lib/namefp/dict")
        );
        assert!(config.canonical.repair_scripts);
        assert!(!config.canonical.title_case);
        assert_eq!(config.matcher.generation_cap, 1000);
    }

    #[test]
    fn test_load_from_file() {
        let yaml = r#"
version: "1.0"
matcher:
  generation_cap: 50
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = NamefpConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.matcher.to_match_config().generation_cap, 50);
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = NamefpConfig::from_file("/nonexistent/namefp.yaml").unwrap_err();
        match err {
            ConfigLoadError::FileRead { ref path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/namefp.yaml"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_default_config() {
        let config = NamefpConfig::default();
        assert_eq!(config.version, "1.0");
        assert!(config.name.is_none());
        assert!(config.validate().is_ok());
        assert_eq!(config.canonical.to_normalize_config(), NormalizeConfig::default());
    }

    #[test]
    fn test_missing_dictionary_path() {
        let config = NamefpConfig::default();
        let err = config.dictionary_path().unwrap_err();
        assert!(err.to_string().contains("dictionary.path"));
    }

    #[test]
    fn test_unsupported_version() {
        let result = NamefpConfig::from_yaml("version: \"2.0\"\n");
        assert!(matches!(result, Err(ConfigLoadError::UnsupportedVersion(v)) if v == "2.0"));
    }

    #[test]
    fn test_matcher_validation() {
        let yaml = r#"
version: "1.0"
matcher:
  generation_cap: 0
"#;

        let result = NamefpConfig::from_yaml(yaml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("generation_cap"));

        let yaml = r#"
version: "1.0"
matcher:
  schemas:
    - [firstname, lastname]
"#;
        let result = NamefpConfig::from_yaml(yaml);
        assert!(result.unwrap_err().to_string().contains("at least 3 labels"));
    }

    #[test]
    fn test_unknown_label_rejected() {
        let yaml = r#"
version: "1.0"
matcher:
  schemas:
    - [firstname, nickname, lastname]
"#;

        let result = NamefpConfig::from_yaml(yaml);
        assert!(matches!(result, Err(ConfigLoadError::YamlParse(_))));
    }

    #[test]
    fn test_full_yaml_roundtrip() {
        let yaml = r#"
version: "1.0"
name: "production"
dictionary:
  path: "data/names.dict"

canonical:
  repair_scripts: true
  title_case: true

matcher:
  generation_cap: 500
  schemas:
    - [firstname, patronymic, lastname]
    - [lastname, firstname, no-match]
"#;

        let config = NamefpConfig::from_yaml(yaml).unwrap();

        let match_cfg = config.matcher.to_match_config();
        assert_eq!(match_cfg.generation_cap, 500);
        assert_eq!(match_cfg.schemas.len(), 2);
        assert_eq!(
            match_cfg.schemas[1],
            Schema::new([Label::Lastname, Label::Firstname, Label::NoMatch])
        );

        let dumped = serde_yaml::to_string(&config).unwrap();
        let reloaded = NamefpConfig::from_yaml(&dumped).unwrap();
        assert_eq!(reloaded.matcher.schemas, config.matcher.schemas);
        assert_eq!(reloaded.dictionary.path, config.dictionary.path);
    }
}
