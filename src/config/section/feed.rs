//! `[feed]` section configuration.
//!
//! ```toml
//! [feed]
//! limit = 10   # Posts returned by GET /api/posts
//! ```

use serde::{Deserialize, Serialize};

/// Homepage feed settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub limit: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self { limit: 10 }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_feed_limit() {
        assert_eq!(test_parse_config("").feed.limit, 10);
        assert_eq!(test_parse_config("[feed]\nlimit = 3").feed.limit, 3);
    }
}
