// Sun Oct 18 2026 - Alex

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid config: {0}")]
    Invalid(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Options handed to the regex builder when a pattern is compiled.
///
/// A config is fixed for the lifetime of the compiler that owns it, so the
/// compiled form of a pattern depends only on its source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_matches_new_line: bool,
    pub ignore_whitespace: bool,
    pub unicode: bool,
    pub size_limit: usize,
    pub dfa_size_limit: usize,
    pub nest_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            ignore_whitespace: false,
            unicode: true,
            size_limit: 10 * (1 << 20),
            dfa_size_limit: 2 * (1 << 20),
            nest_limit: 250,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    pub fn with_multi_line(mut self, yes: bool) -> Self {
        self.multi_line = yes;
        self
    }

    pub fn with_dot_matches_new_line(mut self, yes: bool) -> Self {
        self.dot_matches_new_line = yes;
        self
    }

    pub fn with_ignore_whitespace(mut self, yes: bool) -> Self {
        self.ignore_whitespace = yes;
        self
    }

    pub fn with_unicode(mut self, yes: bool) -> Self {
        self.unicode = yes;
        self
    }

    pub fn with_size_limit(mut self, bytes: usize) -> Self {
        self.size_limit = bytes;
        self
    }

    pub fn with_dfa_size_limit(mut self, bytes: usize) -> Self {
        self.dfa_size_limit = bytes;
        self
    }

    pub fn with_nest_limit(mut self, limit: u32) -> Self {
        self.nest_limit = limit;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size_limit == 0 {
            return Err(ConfigError::Invalid("size_limit must be greater than 0".to_string()));
        }
        if self.dfa_size_limit == 0 {
            return Err(ConfigError::Invalid("dfa_size_limit must be greater than 0".to_string()));
        }
        if self.nest_limit == 0 {
            return Err(ConfigError::Invalid("nest_limit must be greater than 0".to_string()));
        }
        Ok(())
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(contents)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
        assert!(Config::default().unicode);
    }

    #[test]
    fn test_zero_limits_rejected() {
        let config = Config::new().with_size_limit(0);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = Config::new().with_nest_limit(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = Config::from_json(r#"{ "case_insensitive": true }"#).unwrap();
        assert!(config.case_insensitive);
        assert_eq!(config.nest_limit, Config::default().nest_limit);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(Config::from_json("{ nope"), Err(ConfigError::Parse(_))));
        assert!(matches!(
            Config::from_json(r#"{ "dfa_size_limit": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let config = Config::new().with_multi_line(true).with_nest_limit(32);
        let json = config.to_json().unwrap();
        assert_eq!(Config::from_json(&json).unwrap(), config);
    }
}
