//! Extractor configuration.
//!
//! Controls which catalog tables are skipped and the geometry of the
//! formatted output. Every field has a default, so an empty YAML document is
//! a valid configuration.
//!
//! # Example YAML
//!
//! ```yaml
//! exclude:
//!   - xp_proc
//!   - sqlite_sequence
//! layout:
//!   line_width: 80
//!   margin: 14
//!   entry_indent: 6
//!   fragment_indent: 10
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::format::FormatLayout;

/// Legacy artifact table left behind by some applications.
pub const LEGACY_ARTIFACT_TABLE: &str = "xp_proc";

/// SQLite's internal table backing `AUTOINCREMENT` columns.
pub const SEQUENCE_TABLE: &str = "sqlite_sequence";

/// Table names the catalog query skips.
///
/// Names are kept in insertion order without duplicates. The default set
/// holds [`LEGACY_ARTIFACT_TABLE`] and [`SEQUENCE_TABLE`].
///
/// # Examples
///
/// ```
/// use schema_extractor_core::ExclusionSet;
///
/// let mut exclusions = ExclusionSet::default();
/// assert!(exclusions.contains("sqlite_sequence"));
///
/// exclusions.insert("audit_log");
/// exclusions.insert("audit_log");
/// assert_eq!(exclusions.len(), 3);
///
/// assert!(ExclusionSet::none().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ExclusionSet {
    names: Vec<String>,
}

impl ExclusionSet {
    /// An exclusion set that skips nothing.
    pub fn none() -> Self {
        Self { names: Vec::new() }
    }

    /// Adds `name`, returning `false` if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    /// Returns `true` if `name` is excluded.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Removes every name.
    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Excluded names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of excluded names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if nothing is excluded.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Rejects empty names and names containing whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTableName`] for the first offending name.
    pub fn validate(&self) -> Result<()> {
        for name in &self.names {
            if name.is_empty() || name.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidTableName(name.clone()));
            }
        }
        Ok(())
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        [LEGACY_ARTIFACT_TABLE, SEQUENCE_TABLE].into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = ExclusionSet::none();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for ExclusionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}

impl From<Vec<String>> for ExclusionSet {
    fn from(names: Vec<String>) -> Self {
        names.into_iter().collect()
    }
}

impl From<ExclusionSet> for Vec<String> {
    fn from(set: ExclusionSet) -> Self {
        set.names
    }
}

/// Top-level extractor configuration.
///
/// # Examples
///
/// ```
/// use schema_extractor_core::ExtractorConfig;
///
/// let config = ExtractorConfig::from_yaml_str("exclude: [meta]\n").unwrap();
/// assert!(config.exclude.contains("meta"));
/// assert!(!config.exclude.contains("sqlite_sequence"));
/// assert_eq!(config.layout.wrap_width(), 66);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Tables skipped by the catalog query.
    pub exclude: ExclusionSet,
    /// Geometry of the formatted output.
    pub layout: FormatLayout,
}

impl ExtractorConfig {
    /// Loads and validates configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](ConfigError::IoError) if the file cannot be read,
    /// [`YamlError`](ConfigError::YamlError) if parsing fails, or a
    /// validation error from [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config: Self = serde_yaml::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load), minus I/O failures.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](ConfigError::IoError) if the file cannot be
    /// written, or [`YamlError`](ConfigError::YamlError) if serialization
    /// fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Validates the exclusion set and the layout.
    pub fn validate(&self) -> Result<()> {
        self.exclude.validate()?;
        self.layout.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_exclusions() {
        let set = ExclusionSet::default();
        assert_eq!(set.names(), ["xp_proc", "sqlite_sequence"]);
    }

    #[test]
    fn test_exclusion_set_deduplicates() {
        let set: ExclusionSet = ["a", "b", "a"].into_iter().collect();
        assert_eq!(set.names(), ["a", "b"]);
    }

    #[test]
    fn test_exclusion_set_clear() {
        let mut set = ExclusionSet::default();
        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains("xp_proc"));
    }

    #[test]
    fn test_exclusion_set_rejects_bad_names() {
        let empty: ExclusionSet = [""].into_iter().collect();
        assert!(matches!(empty.validate(), Err(ConfigError::InvalidTableName(_))));

        let spaced: ExclusionSet = ["my table"].into_iter().collect();
        assert!(matches!(spaced.validate(), Err(ConfigError::InvalidTableName(_))));
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = ExtractorConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, ExtractorConfig::default());
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
exclude:
  - xp_proc
  - sqlite_sequence
  - android_metadata
layout:
  line_width: 100
  margin: 14
  entry_indent: 4
  fragment_indent: 8
"#;
        let config = ExtractorConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.exclude.len(), 3);
        assert!(config.exclude.contains("android_metadata"));
        assert_eq!(config.layout.wrap_width(), 86);
        assert_eq!(config.layout.entry_indent, 4);
    }

    #[test]
    fn test_partial_layout_keeps_other_defaults() {
        let config = ExtractorConfig::from_yaml_str("layout:\n  line_width: 90\n").unwrap();
        assert_eq!(config.layout.line_width, 90);
        assert_eq!(config.layout.margin, 14);
        assert_eq!(config.layout.fragment_indent, 10);
        assert_eq!(config.exclude, ExclusionSet::default());
    }

    #[test]
    fn test_invalid_layout_rejected() {
        let result = ExtractorConfig::from_yaml_str("layout:\n  line_width: 10\n");
        assert!(matches!(result, Err(ConfigError::InvalidLayout(_))));
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        let result = ExtractorConfig::from_yaml_str("exclude: {not: [a list");
        assert!(matches!(result, Err(ConfigError::YamlError(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extractor.yml");

        let mut config = ExtractorConfig::default();
        config.exclude.insert("android_metadata");
        config.save(&path).unwrap();

        let loaded = ExtractorConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let result = ExtractorConfig::load("/nonexistent/extractor.yml");
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
