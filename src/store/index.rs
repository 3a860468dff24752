//! Posts index persistence and ordering.
//!
//! The index is a JSON array of [`PostRecord`]s, newest first, unique by
//! slug. It is reloaded and rewritten in full on every change.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};

use crate::post::{PostRecord, date::is_strictly_earlier};

/// Outcome of reading the index file.
///
/// Callers degrade every failure to an empty index; the variants exist so
/// unreadable or corrupt files can be reported instead of silently masked.
#[derive(Debug)]
pub enum IndexLoad {
    Loaded(Vec<PostRecord>),
    Missing,
    Unreadable(std::io::Error),
    Corrupt(serde_json::Error),
}

impl IndexLoad {
    /// Read and parse the index at `path`.
    pub fn read(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Self::Missing,
            Err(e) => return Self::Unreadable(e),
        };
        match serde_json::from_str(&content) {
            Ok(posts) => Self::Loaded(posts),
            Err(e) => Self::Corrupt(e),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Records, or an empty list for any failure. Failures other than a
    /// missing file are logged.
    pub fn into_posts(self, path: &Path) -> Vec<PostRecord> {
        match self {
            Self::Loaded(posts) => posts,
            Self::Missing => {
                crate::debug!("index"; "{} not found, treating as empty", path.display());
                Vec::new()
            }
            Self::Unreadable(e) => {
                crate::log!("warn"; "cannot read {}, treating as empty: {}", path.display(), e);
                Vec::new()
            }
            Self::Corrupt(e) => {
                crate::log!("warn"; "cannot parse {}, treating as empty: {}", path.display(), e);
                Vec::new()
            }
        }
    }
}

/// Insert `post` keeping the newest-first order.
///
/// Any record with the same slug is dropped first. The post then goes
/// before the first record whose date is strictly earlier, or at the end
/// when there is none. Records with equal dates keep their position ahead
/// of the new one.
pub fn insert_post(posts: &mut Vec<PostRecord>, post: PostRecord) {
    posts.retain(|p| p.slug != post.slug);

    let position = posts
        .iter()
        .position(|p| is_strictly_earlier(&p.publish_date, &post.publish_date));

    match position {
        Some(i) => posts.insert(i, post),
        None => posts.push(post),
    }
}

/// Write the full index, pretty-printed, replacing the previous file.
pub fn write_index(path: &Path, posts: &[PostRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(posts).context("Failed to serialize posts index")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write posts index to {}", path.display()))
}

/// Load, merge `post` into, and persist the index at `path`.
///
/// When the index cannot be loaded the data directory is created so the
/// write below has somewhere to land. Returns the new index.
pub fn update_index(path: &Path, post: PostRecord) -> Result<Vec<PostRecord>> {
    let load = IndexLoad::read(path);
    if !load.is_loaded()
        && let Some(dir) = path.parent()
    {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
    }

    let mut posts = load.into_posts(path);
    insert_post(&mut posts, post);
    write_index(path, &posts)?;

    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(slug: &str, date: &str) -> PostRecord {
        PostRecord {
            title: Some(slug.to_uppercase()),
            slug: slug.to_string(),
            meta_description: None,
            publish_date: date.to_string(),
        }
    }

    fn slugs(posts: &[PostRecord]) -> Vec<&str> {
        posts.iter().map(|p| p.slug.as_str()).collect()
    }

    #[test]
    fn test_insert_into_empty() {
        let mut posts = Vec::new();
        insert_post(&mut posts, record("a", "2024-01-01"));
        assert_eq!(slugs(&posts), ["a"]);
    }

    #[test]
    fn test_insert_newer_goes_first() {
        let mut posts = Vec::new();
        insert_post(&mut posts, record("old", "2024-01-01"));
        insert_post(&mut posts, record("new", "2024-06-01"));
        assert_eq!(slugs(&posts), ["new", "old"]);
    }

    #[test]
    fn test_insert_older_goes_last() {
        let mut posts = Vec::new();
        insert_post(&mut posts, record("new", "2024-06-01"));
        insert_post(&mut posts, record("old", "2024-01-01"));
        assert_eq!(slugs(&posts), ["new", "old"]);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut posts = vec![record("c", "2024-09-01"), record("a", "2024-01-01")];
        insert_post(&mut posts, record("b", "2024-05-01T12:00:00Z"));
        assert_eq!(slugs(&posts), ["c", "b", "a"]);
    }

    #[test]
    fn test_republish_replaces_entry() {
        let mut posts = vec![record("a", "2024-09-01"), record("b", "2024-01-01")];
        insert_post(&mut posts, record("a", "2023-01-01"));

        assert_eq!(posts.len(), 2);
        assert_eq!(slugs(&posts), ["b", "a"]);
        assert_eq!(posts[1].publish_date, "2023-01-01");
    }

    #[test]
    fn test_unparseable_date_is_appended() {
        let mut posts = vec![record("a", "2024-09-01")];
        insert_post(&mut posts, record("x", "someday"));
        insert_post(&mut posts, record("b", "2025-01-01"));
        assert_eq!(slugs(&posts), ["b", "a", "x"]);
    }

    #[test]
    fn test_update_index_creates_data_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("posts.json");

        let posts = update_index(&path, record("a", "2024-01-01")).unwrap();
        assert_eq!(posts.len(), 1);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n  {"));
        assert!(matches!(IndexLoad::read(&path), IndexLoad::Loaded(p) if p == posts));
    }

    #[test]
    fn test_update_index_replaces_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("posts.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(IndexLoad::read(&path), IndexLoad::Corrupt(_)));

        let posts = update_index(&path, record("a", "2024-01-01")).unwrap();
        assert_eq!(slugs(&posts), ["a"]);
        assert!(IndexLoad::read(&path).is_loaded());
    }

    #[test]
    fn test_read_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("posts.json");
        assert!(matches!(IndexLoad::read(&path), IndexLoad::Missing));
        assert!(IndexLoad::read(&path).into_posts(&path).is_empty());
    }
}
