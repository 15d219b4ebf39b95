#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{FilterCriteria, ALL_DOMAINS};
use crate::utils::error::Result;
use crate::utils::validation::{validate_domain_filter, validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/comments";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Fully resolved settings for one viewer session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    pub endpoint: String,
    pub headers: BTreeMap<String, String>,
    pub criteria: FilterCriteria,
    pub format: OutputFormat,
}

impl ViewerConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            headers: BTreeMap::new(),
            criteria: FilterCriteria::default(),
            format: OutputFormat::default(),
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl ConfigProvider for ViewerConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }
}

impl Validate for ViewerConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        for name in self.headers.keys() {
            validate_non_empty_string("headers", name)?;
        }
        if self.criteria.domain_filter != ALL_DOMAINS {
            validate_domain_filter("domain", &self.criteria.domain_filter)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ViewerConfig::default();
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_domain_filter() {
        let mut config = ViewerConfig::default();
        config.criteria.domain_filter = "two words".to_string();
        assert!(config.validate().is_err());
    }
}
