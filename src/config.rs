//! Parser configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration constants
pub mod defaults {
    /// Inputs with more significant tokens than this are not matched.
    pub const MAX_TOKENS: usize = 64;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Upper bound on the work a single call may do.
    pub max_tokens: usize,
    /// Title-case street and city names.
    pub normalize_case: bool,
    /// Keep the `+4` part of a zip code.
    pub keep_zip4: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_tokens: defaults::MAX_TOKENS,
            normalize_case: true,
            keep_zip4: true,
        }
    }
}

impl ParserConfig {
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }

    /// Read a configuration from TOML; absent keys keep their defaults.
    ///
    /// ```
    /// let config = streetaddr::ParserConfig::from_toml_str("keep_zip4 = false").unwrap();
    /// assert!(!config.keep_zip4);
    /// assert_eq!(config.max_tokens, 64);
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: ParserConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.max_tokens == 0 {
            return Err(Error::Config("max_tokens must be greater than 0".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ParserConfigBuilder {
    max_tokens: Option<usize>,
    normalize_case: Option<bool>,
    keep_zip4: Option<bool>,
}

impl ParserConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_tokens(mut self, count: usize) -> Self {
        self.max_tokens = Some(count);
        self
    }

    pub fn normalize_case(mut self, enabled: bool) -> Self {
        self.normalize_case = Some(enabled);
        self
    }

    pub fn keep_zip4(mut self, enabled: bool) -> Self {
        self.keep_zip4 = Some(enabled);
        self
    }

    pub fn build(self) -> Result<ParserConfig> {
        let defaults = ParserConfig::default();
        let config = ParserConfig {
            max_tokens: self.max_tokens.unwrap_or(defaults.max_tokens),
            normalize_case: self.normalize_case.unwrap_or(defaults.normalize_case),
            keep_zip4: self.keep_zip4.unwrap_or(defaults.keep_zip4),
        };
        config.validate()?;
        Ok(config)
    }
}
