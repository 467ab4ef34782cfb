// Sun Oct 18 2026 - Alex

pub mod config;
pub mod pattern;
pub mod utils;

pub use config::{Config, ConfigError};
pub use pattern::{
    CacheStats, CompiledPattern, PatternCache, PatternCompiler, PatternError, PatternMatcher,
    RegexCompiler,
};
