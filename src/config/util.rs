//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Absolute names are returned as-is when they exist.
///
/// # Example
/// ```text
/// /srv/site/public/posts/     ← start
/// /srv/site/pressroom.toml    ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

/// Parse the `PORT` environment value.
pub fn parse_port(value: &str) -> Option<u16> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_file_in_parent() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("public/posts");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("pressroom.toml"), "").unwrap();

        let found = find_config_file(Path::new("pressroom.toml"), &nested).unwrap();
        assert_eq!(found, dir.path().join("pressroom.toml"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let dir = TempDir::new().unwrap();
        assert!(find_config_file(Path::new("does-not-exist-7f3a.toml"), dir.path()).is_none());
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("8080"), Some(8080));
        assert_eq!(parse_port(" 3000\n"), Some(3000));
        assert_eq!(parse_port("http"), None);
        assert_eq!(parse_port("70000"), None);
    }
}
