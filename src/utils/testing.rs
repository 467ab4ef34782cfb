// Sun Oct 18 2026 - Alex

use crate::pattern::{PatternCompiler, PatternError, RegexCompiler};
use regex::bytes::Regex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Regex compiler that counts how often it is asked to compile.
///
/// Clones share the counter, so a test can keep one handle and give the
/// other to a cache.
#[derive(Debug, Clone, Default)]
pub struct CountingCompiler {
    inner: RegexCompiler,
    calls: Arc<AtomicUsize>,
}

impl CountingCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PatternCompiler for CountingCompiler {
    type Pattern = Regex;
    type Error = PatternError;

    fn compile(&self, source: &str) -> Result<Regex, PatternError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.compile(source)
    }
}
