// Sun Oct 18 2026 - Alex

use thiserror::Error;

/// The only way resolving a pattern can fail: the engine rejected its source.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    #[error(transparent)]
    Compile(#[from] regex::Error),
}
