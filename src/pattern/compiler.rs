// Sun Oct 18 2026 - Alex

use crate::config::Config;
use crate::pattern::{CompiledPattern, PatternError};
use regex::bytes::{Regex, RegexBuilder};
use std::error::Error;

/// Turns pattern source text into a compiled pattern.
///
/// `compile` may be called concurrently, including for the same source, and
/// must depend only on `source` and the compiler's own fixed settings: the
/// cache freely discards the result of a racing compilation.
pub trait PatternCompiler: Send + Sync {
    type Pattern: CompiledPattern;
    type Error: Error;

    fn compile(&self, source: &str) -> Result<Self::Pattern, Self::Error>;
}

#[derive(Debug, Clone, Default)]
pub struct RegexCompiler {
    config: Config,
}

impl RegexCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn builder(&self, source: &str) -> RegexBuilder {
        let mut builder = RegexBuilder::new(source);
        builder
            .case_insensitive(self.config.case_insensitive)
            .multi_line(self.config.multi_line)
            .dot_matches_new_line(self.config.dot_matches_new_line)
            .ignore_whitespace(self.config.ignore_whitespace)
            .unicode(self.config.unicode)
            .size_limit(self.config.size_limit)
            .dfa_size_limit(self.config.dfa_size_limit)
            .nest_limit(self.config.nest_limit);
        builder
    }
}

impl PatternCompiler for RegexCompiler {
    type Pattern = Regex;
    type Error = PatternError;

    fn compile(&self, source: &str) -> Result<Regex, PatternError> {
        Ok(self.builder(source).build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_valid() {
        let compiler = RegexCompiler::new();
        let re = compiler.compile("ab+c").unwrap();
        assert!(re.is_match_text("abbbc"));
    }

    #[test]
    fn test_compile_invalid_surfaces_regex_error() {
        let compiler = RegexCompiler::new();
        let err = compiler.compile("[").unwrap_err();
        let expected = regex::bytes::Regex::new("[").unwrap_err();
        assert_eq!(err.to_string(), expected.to_string());
    }

    #[test]
    fn test_config_is_applied() {
        let compiler = RegexCompiler::with_config(Config::new().with_case_insensitive(true));
        let re = compiler.compile("hello").unwrap();
        assert!(re.is_match_text("HeLLo world"));

        let re = RegexCompiler::new().compile("hello").unwrap();
        assert!(!re.is_match_text("HELLO"));
    }

    #[test]
    fn test_nest_limit_rejects_deep_patterns() {
        let compiler = RegexCompiler::with_config(Config::new().with_nest_limit(2));
        assert!(compiler.compile("((((a))))").is_err());
        assert!(RegexCompiler::new().compile("((((a))))").is_ok());
    }
}
