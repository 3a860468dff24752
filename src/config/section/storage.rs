//! `[storage]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [storage]
//! public = "public"        # Statically served root
//! data = "data"            # Private data directory
//! posts = "posts"          # Subdirectory of `public`, also the URL segment
//! index = "posts.json"     # Posts index file inside `data`
//! sitemap = "sitemap.xml"  # Sitemap file inside `public`
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Storage layout, relative to the project root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub public: PathBuf,
    pub data: PathBuf,
    /// Single path segment; used for both the directory and post URLs.
    pub posts: String,
    pub index: PathBuf,
    pub sitemap: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            public: "public".into(),
            data: "data".into(),
            posts: "posts".to_string(),
            index: "posts.json".into(),
            sitemap: "sitemap.xml".into(),
        }
    }
}

impl StorageConfig {
    /// Resolve every artifact location against `root`.
    pub fn resolve(&self, root: &Path) -> StoragePaths {
        let public_dir = root.join(&self.public);
        let data_dir = root.join(&self.data);
        let posts_segment = self.posts.trim_matches('/').to_string();
        StoragePaths {
            posts_dir: public_dir.join(&posts_segment),
            sitemap_path: public_dir.join(&self.sitemap),
            index_path: data_dir.join(&self.index),
            posts_segment,
            public_dir,
            data_dir,
        }
    }
}

/// Absolute artifact locations.
#[derive(Debug, Clone)]
pub struct StoragePaths {
    pub public_dir: PathBuf,
    pub posts_dir: PathBuf,
    pub data_dir: PathBuf,
    pub index_path: PathBuf,
    pub sitemap_path: PathBuf,
    /// URL segment under which posts are published (`posts`).
    pub posts_segment: String,
}

impl StoragePaths {
    /// File that holds the HTML for `slug`.
    pub fn post_file(&self, slug: &str) -> PathBuf {
        self.posts_dir.join(format!("{slug}.html"))
    }

    /// Site-relative URL of a published post.
    pub fn post_url(&self, slug: &str) -> String {
        format!("/{}/{slug}.html", self.posts_segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_storage_defaults_resolve() {
        let config = test_parse_config("");
        let paths = config.storage.resolve(Path::new("/srv/site"));

        assert_eq!(paths.public_dir, PathBuf::from("/srv/site/public"));
        assert_eq!(paths.posts_dir, PathBuf::from("/srv/site/public/posts"));
        assert_eq!(paths.index_path, PathBuf::from("/srv/site/data/posts.json"));
        assert_eq!(paths.sitemap_path, PathBuf::from("/srv/site/public/sitemap.xml"));
        assert_eq!(
            paths.post_file("hello"),
            PathBuf::from("/srv/site/public/posts/hello.html")
        );
        assert_eq!(paths.post_url("hello"), "/posts/hello.html");
    }

    #[test]
    fn test_storage_custom_layout() {
        let config = test_parse_config(
            "[storage]\npublic = \"www\"\nposts = \"articles\"\nindex = \"index.json\"",
        );
        let paths = config.storage.resolve(Path::new("/root"));

        assert_eq!(paths.posts_dir, PathBuf::from("/root/www/articles"));
        assert_eq!(paths.index_path, PathBuf::from("/root/data/index.json"));
        assert_eq!(paths.post_url("a"), "/articles/a.html");
    }

    #[test]
    fn test_storage_posts_slashes_stay_under_public() {
        let config = test_parse_config("[storage]\nposts = \"/news/\"");
        let paths = config.storage.resolve(Path::new("/srv/site"));

        assert_eq!(paths.posts_dir, PathBuf::from("/srv/site/public/news"));
        assert_eq!(paths.post_url("a"), "/news/a.html");
    }
}
