//! Editorial rules that are product decisions rather than code constants.

use crate::content::slug::SlugConfig;

/// Default upper bound for a teaser: one short paragraph.
pub const DEFAULT_TEASER_MAX_CHARS: usize = 300;

/// Tunables for post validation and identifier derivation.
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// Maximum teaser length in characters.
    pub teaser_max_chars: usize,
    pub slug: SlugConfig,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            teaser_max_chars: DEFAULT_TEASER_MAX_CHARS,
            slug: SlugConfig::default(),
        }
    }
}
