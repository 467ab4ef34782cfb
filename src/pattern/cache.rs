// Sun Oct 18 2026 - Alex

use crate::config::{Config, ConfigError};
use crate::pattern::stats::StatsCounters;
use crate::pattern::{CacheStats, PatternCompiler, RegexCompiler};
use crate::utils::truncate_string;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

const LOG_PATTERN_CHARS: usize = 64;

/// Memoizes compiled patterns by their exact source text.
///
/// Lookups take the read lock only for the map access. Compilation runs with
/// no lock held and the write lock is taken only to insert the result, so
/// concurrent misses on the same new pattern may each compile it; the last
/// insert wins and every caller still gets a usable pattern. Failed
/// compilations are never stored.
///
/// Entries are never removed.
pub struct PatternCache<C: PatternCompiler = RegexCompiler> {
    cache: RwLock<HashMap<String, Arc<C::Pattern>>>,
    compiler: C,
    stats: StatsCounters,
}

impl PatternCache<RegexCompiler> {
    pub fn new() -> Self {
        Self::with_compiler(RegexCompiler::new())
    }

    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_compiler(RegexCompiler::with_config(config)))
    }
}

impl Default for PatternCache<RegexCompiler> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: PatternCompiler> PatternCache<C> {
    pub fn with_compiler(compiler: C) -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
            compiler,
            stats: StatsCounters::default(),
        }
    }

    /// Returns the compiled form of `source`, compiling and caching it on a
    /// miss. A compilation error is returned as-is and nothing is cached.
    pub fn resolve(&self, source: &str) -> Result<Arc<C::Pattern>, C::Error> {
        if let Some(pattern) = self.get(source) {
            self.stats.record_hit();
            log::trace!("Pattern cache hit: {}", truncate_string(source, LOG_PATTERN_CHARS));
            return Ok(pattern);
        }

        self.stats.record_miss();
        self.compile_and_insert(source)
    }

    fn compile_and_insert(&self, source: &str) -> Result<Arc<C::Pattern>, C::Error> {
        let pattern = match self.compiler.compile(source) {
            Ok(pattern) => Arc::new(pattern),
            Err(e) => {
                self.stats.record_failure();
                log::debug!(
                    "Pattern compilation failed for {}: {}",
                    truncate_string(source, LOG_PATTERN_CHARS),
                    e
                );
                return Err(e);
            }
        };
        self.stats.record_compilation();

        let replaced = self.cache.write().insert(source.to_string(), Arc::clone(&pattern));

        if replaced.is_some() {
            self.stats.record_race();
            log::debug!(
                "Replaced concurrently compiled pattern: {}",
                truncate_string(source, LOG_PATTERN_CHARS)
            );
        } else {
            log::debug!("Compiled and cached pattern: {}", truncate_string(source, LOG_PATTERN_CHARS));
        }

        Ok(pattern)
    }

    /// Looks `source` up without compiling it.
    pub fn get(&self, source: &str) -> Option<Arc<C::Pattern>> {
        self.cache.read().get(source).cloned()
    }

    pub fn contains(&self, source: &str) -> bool {
        self.cache.read().contains_key(source)
    }

    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    pub fn keys(&self) -> Vec<String> {
        self.cache.read().keys().cloned().collect()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.len())
    }

    pub fn compiler(&self) -> &C {
        &self.compiler
    }
}

impl<C: PatternCompiler> fmt::Debug for PatternCache<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternCache")
            .field("entries", &self.len())
            .finish_non_exhaustive()
    }
}
