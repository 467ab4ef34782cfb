// Sun Oct 18 2026 - Alex

pub mod cache;
pub mod compiler;
pub mod error;
pub mod matcher;
pub mod pattern;
pub mod stats;

pub use cache::PatternCache;
pub use compiler::{PatternCompiler, RegexCompiler};
pub use error::PatternError;
pub use matcher::PatternMatcher;
pub use pattern::CompiledPattern;
pub use stats::CacheStats;
