// Sun Oct 18 2026 - Alex

use regex::bytes::Regex;

/// A compiled pattern that can be matched from many threads at once.
///
/// Implementors must not mutate themselves when matching; the cache hands
/// out the same instance to every caller.
pub trait CompiledPattern: Send + Sync {
    /// Reports whether `data` contains any match.
    fn is_match_bytes(&self, data: &[u8]) -> bool;

    fn is_match_text(&self, text: &str) -> bool {
        self.is_match_bytes(text.as_bytes())
    }

    /// Drains `source` and reports whether the characters it yielded contain
    /// any match.
    fn is_match_chars(&self, source: &mut dyn Iterator<Item = char>) -> bool {
        let text: String = source.collect();
        self.is_match_text(&text)
    }
}

impl CompiledPattern for Regex {
    fn is_match_bytes(&self, data: &[u8]) -> bool {
        self.is_match(data)
    }
}
