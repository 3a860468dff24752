//! Sitemap generation.
//!
//! Rebuilds `sitemap.xml` from the posts index. The output is a pure
//! function of the index: one fixed entry for the site root, then one entry
//! per post in index order.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!     <url>
//!         <loc>https://example.com/</loc>
//!         <changefreq>daily</changefreq>
//!         <priority>1.0</priority>
//!     </url>
//!     <url>
//!         <loc>https://example.com/posts/hello.html</loc>
//!         <lastmod>2025-01-01</lastmod>
//!         <changefreq>monthly</changefreq>
//!         <priority>0.8</priority>
//!     </url>
//! </urlset>
//! ```

use crate::{
    config::StoragePaths,
    log,
    post::{PostRecord, date::date_portion},
    store::index::IndexLoad,
};
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Rebuild the sitemap file from the index on disk.
///
/// A missing or unreadable index yields a sitemap with only the root entry.
/// No directory is created for the index. Returns the number of post entries.
pub fn build_sitemap(paths: &StoragePaths, origin: &str) -> Result<usize> {
    let posts = IndexLoad::read(&paths.index_path).into_posts(&paths.index_path);
    let sitemap = Sitemap::from_posts(origin, &paths.posts_segment, &posts);
    let count = sitemap.urls.len() - 1;
    sitemap.write(paths)?;
    Ok(count)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChangeFreq {
    Daily,
    Monthly,
}

impl ChangeFreq {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Monthly => "monthly",
        }
    }
}

pub struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: Option<String>,
    changefreq: ChangeFreq,
    priority: &'static str,
}

impl Sitemap {
    pub fn from_posts(origin: &str, posts_segment: &str, posts: &[PostRecord]) -> Self {
        let origin = origin.trim_end_matches('/');

        let root = UrlEntry {
            loc: format!("{origin}/"),
            lastmod: None,
            changefreq: ChangeFreq::Daily,
            priority: "1.0",
        };

        let urls = std::iter::once(root)
            .chain(posts.iter().map(|post| UrlEntry {
                loc: format!("{origin}/{posts_segment}/{}.html", post.slug),
                lastmod: Some(date_portion(&post.publish_date).to_string()),
                changefreq: ChangeFreq::Monthly,
                priority: "0.8",
            }))
            .collect();

        Self { urls }
    }

    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(256 + self.urls.len() * 192);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">");

        for entry in self.urls {
            xml.push_str("\n    <url>\n        <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n");
            if let Some(lastmod) = entry.lastmod {
                xml.push_str("        <lastmod>");
                xml.push_str(&escape_xml(&lastmod));
                xml.push_str("</lastmod>\n");
            }
            xml.push_str("        <changefreq>");
            xml.push_str(entry.changefreq.as_str());
            xml.push_str("</changefreq>\n        <priority>");
            xml.push_str(entry.priority);
            xml.push_str("</priority>\n    </url>");
        }

        xml.push_str("\n</urlset>");
        xml
    }

    fn write(self, paths: &StoragePaths) -> Result<()> {
        let sitemap_path = &paths.sitemap_path;
        let xml = self.into_xml();

        fs::write(sitemap_path, xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "{}", sitemap_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
