// Sun Oct 18 2026 - Alex

use crate::pattern::{CompiledPattern, PatternCache, PatternCompiler, RegexCompiler};
use std::sync::Arc;

/// Matches inputs against patterns given as source text, compiling each
/// pattern at most once per cache (barring concurrent first use).
///
/// Every operation reports whether the input contains any match. A pattern
/// that fails to compile yields its compilation error and the input is not
/// looked at.
pub struct PatternMatcher<C: PatternCompiler = RegexCompiler> {
    cache: Arc<PatternCache<C>>,
}

impl PatternMatcher<RegexCompiler> {
    pub fn new() -> Self {
        Self::with_cache(Arc::new(PatternCache::new()))
    }
}

impl Default for PatternMatcher<RegexCompiler> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: PatternCompiler> Clone for PatternMatcher<C> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<C: PatternCompiler> PatternMatcher<C> {
    pub fn with_cache(cache: Arc<PatternCache<C>>) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &Arc<PatternCache<C>> {
        &self.cache
    }

    pub fn match_bytes(&self, pattern: &str, data: &[u8]) -> Result<bool, C::Error> {
        let compiled = self.cache.resolve(pattern)?;
        Ok(compiled.is_match_bytes(data))
    }

    /// Matches the characters produced by `source`.
    ///
    /// How much of `source` is consumed is up to the compiled pattern; the
    /// regex backend drains it. On a compilation error `source` is untouched.
    pub fn match_stream<I>(&self, pattern: &str, source: I) -> Result<bool, C::Error>
    where
        I: IntoIterator<Item = char>,
    {
        let compiled = self.cache.resolve(pattern)?;
        Ok(compiled.is_match_chars(&mut source.into_iter()))
    }

    pub fn match_text(&self, pattern: &str, text: &str) -> Result<bool, C::Error> {
        let compiled = self.cache.resolve(pattern)?;
        Ok(compiled.is_match_text(text))
    }
}
