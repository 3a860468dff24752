//! File-backed post storage.
//!
//! Three artifacts live on disk and are the only state:
//!
//! - `public/posts/<slug>.html`: published HTML, written verbatim
//! - `data/posts.json`: the posts index (see [`index`])
//! - `public/sitemap.xml`: derived from the index on every publish
//!
//! Publishing writes them in that order under a single lock. A failure part
//! way through leaves the earlier artifacts in place.

pub mod index;

use std::fs;

use anyhow::{Context, Result};
use parking_lot::Mutex;

use crate::{
    config::{PressConfig, StoragePaths},
    debug,
    generator::sitemap::build_sitemap,
    log,
    post::{PostRecord, ValidPost},
};
use index::{IndexLoad, update_index};

/// Storage for published posts and their derived files.
pub struct PostStore {
    paths: StoragePaths,
    origin: String,
    feed_limit: usize,
    /// Serializes publishes so index read-modify-write cycles never interleave.
    write_lock: Mutex<()>,
}

impl PostStore {
    pub fn new(config: &PressConfig) -> Self {
        Self {
            paths: config.paths(),
            origin: config.site.origin().to_string(),
            feed_limit: config.feed.limit,
            write_lock: Mutex::new(()),
        }
    }

    pub fn paths(&self) -> &StoragePaths {
        &self.paths
    }

    /// Write the post, merge it into the index and rebuild the sitemap.
    ///
    /// Returns the site-relative URL of the published post.
    pub fn publish(&self, post: ValidPost) -> Result<String> {
        let _guard = self.write_lock.lock();
        let ValidPost { html, record } = post;
        let slug = record.slug.clone();

        let posts_dir = &self.paths.posts_dir;
        fs::create_dir_all(posts_dir)
            .with_context(|| format!("Failed to create posts directory {}", posts_dir.display()))?;

        let post_path = self.paths.post_file(&slug);
        fs::write(&post_path, html)
            .with_context(|| format!("Failed to write post to {}", post_path.display()))?;

        let posts = update_index(&self.paths.index_path, record)?;
        debug!("index"; "{} posts indexed", posts.len());

        build_sitemap(&self.paths, &self.origin)?;

        let url = self.paths.post_url(&slug);
        log!("publish"; "{}", url);
        Ok(url)
    }

    /// Regenerate the sitemap without publishing anything.
    pub fn rebuild_sitemap(&self) -> Result<usize> {
        let _guard = self.write_lock.lock();
        build_sitemap(&self.paths, &self.origin)
    }

    /// Newest posts for the homepage feed. Any read failure yields an empty list.
    pub fn recent(&self) -> Vec<PostRecord> {
        let index_path = &self.paths.index_path;
        let mut posts = IndexLoad::read(index_path).into_posts(index_path);
        posts.truncate(self.feed_limit);
        posts
    }
}
