use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Default separator between committee names in plural referrals
pub const DEFAULT_COMMITTEE_SEPARATOR: &str = r"\s*\band\b\s*|\s*;\s*";

/// Standing committees whose names contain "and" and must survive splitting
pub const DEFAULT_COMPOUND_COMMITTEES: &[&str] = &[
    "Ways and Means",
    "Agriculture, Food and Agrarian Reform",
    "Banks, Financial Institutions and Currencies",
    "Basic Education, Arts and Culture",
    "Civil Service, Government Reorganization and Professional Regulation",
    "Constitutional Amendments and Revision of Codes",
    "Cultural Communities and Muslim Affairs",
    "Electoral Reforms and People's Participation",
    "Environment, Natural Resources and Climate Change",
    "Ethics and Privileges",
    "Games and Amusement",
    "Government Corporations and Public Enterprises",
    "Health and Demography",
    "Higher, Technical and Vocational Education",
    "Justice and Human Rights",
    "Labor, Employment and Human Resources Development",
    "National Defense and Security, Peace, Unification and Reconciliation",
    "Public Information and Mass Media",
    "Public Order and Dangerous Drugs",
    "Science and Technology",
    "Social Justice, Welfare and Rural Development",
    "Trade, Commerce and Entrepreneurship",
    "Urban Planning, Housing and Resettlement",
    "Women, Children, Family Relations and Gender Equality",
    "Accountability of Public Officers and Investigations",
];

/// Configuration for the senate rule chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Regex separating committee names after "Committee(s) on "
    pub committee_separator: String,
    /// Committee names that contain the separator word and are kept whole
    pub compound_committees: Vec<String>,
}

/// On-disk shape of a config file; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    committee_separator: Option<String>,
    compound_committees: Option<Vec<String>>,
}

impl Config {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self {
            committee_separator: DEFAULT_COMMITTEE_SEPARATOR.to_string(),
            compound_committees: DEFAULT_COMPOUND_COMMITTEES
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }

    /// Parse a TOML document, falling back to defaults for missing keys
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(text)?;
        let mut builder = ConfigBuilder::new();
        if let Some(separator) = file.committee_separator {
            builder = builder.committee_separator(separator);
        }
        if let Some(compound) = file.compound_committees {
            builder = builder.compound_committees(compound);
        }
        builder.build()
    }

    /// Load a TOML config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&text)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.committee_separator.is_empty() {
            return Err(Error::Config(
                "Committee separator must not be empty".to_string(),
            ));
        }

        regex::Regex::new(&self.committee_separator)?;

        if let Some(blank) = self
            .compound_committees
            .iter()
            .position(|name| name.trim().is_empty())
        {
            return Err(Error::Config(format!(
                "Compound committee name at index {} is blank",
                blank
            )));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating configurations
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            config: Config::new(),
        }
    }

    /// Set the committee separator regex
    pub fn committee_separator(mut self, pattern: impl Into<String>) -> Self {
        self.config.committee_separator = pattern.into();
        self
    }

    /// Add a compound committee name
    pub fn add_compound_committee(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.config.compound_committees.contains(&name) {
            self.config.compound_committees.push(name);
        }
        self
    }

    /// Replace the compound committee names
    pub fn compound_committees(mut self, names: Vec<String>) -> Self {
        self.config.compound_committees = names;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ConfigBuilder::new().build().unwrap();
        assert_eq!(config.committee_separator, DEFAULT_COMMITTEE_SEPARATOR);
        assert!(config
            .compound_committees
            .contains(&"Ways and Means".to_string()));
    }

    #[test]
    fn test_empty_separator_rejected() {
        let err = ConfigBuilder::new().committee_separator("").build();
        assert!(matches!(err, Err(Error::Config(_))));
    }

    #[test]
    fn test_bad_regex_rejected() {
        let err = ConfigBuilder::new().committee_separator("(and").build();
        assert!(matches!(err, Err(Error::Regex(_))));
    }

    #[test]
    fn test_blank_compound_rejected() {
        let err = ConfigBuilder::new().add_compound_committee("  ").build();
        assert!(matches!(err, Err(Error::Config(_))));
    }

    #[test]
    fn test_add_compound_is_deduplicated() {
        let config = ConfigBuilder::new()
            .compound_committees(vec![])
            .add_compound_committee("Rules and Procedures")
            .add_compound_committee("Rules and Procedures")
            .build()
            .unwrap();
        assert_eq!(config.compound_committees, vec!["Rules and Procedures"]);
    }

    #[test]
    fn test_toml_partial_keys_use_defaults() {
        let config = Config::from_toml_str(r#"compound_committees = ["Finance and Budget"]"#)
            .unwrap();
        assert_eq!(config.committee_separator, DEFAULT_COMMITTEE_SEPARATOR);
        assert_eq!(config.compound_committees, vec!["Finance and Budget"]);
    }

    #[test]
    fn test_toml_unknown_key_rejected() {
        let err = Config::from_toml_str("separator = \";\"");
        assert!(matches!(err, Err(Error::Toml(_))));
    }
}
