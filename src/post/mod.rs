//! Post metadata records and publish payloads.
//!
//! A [`PostRecord`] is one entry of the posts index. A [`PublishRequest`] is
//! the raw body of `POST /api/publish`, which carries the HTML alongside the
//! record fields.

pub mod date;

use serde::{Deserialize, Serialize};

/// One entry of the posts index.
///
/// Serialized with the camelCase keys the homepage feed consumes. Absent
/// optional fields are omitted rather than written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    /// ISO-8601 date-time, kept verbatim as submitted.
    pub publish_date: String,
}

/// Body of `POST /api/publish`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PublishRequest {
    pub html: Option<String>,
    pub publish_date: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub meta_description: Option<String>,
}

/// A publish request whose required fields are present and non-empty.
#[derive(Debug, Clone)]
pub struct ValidPost {
    pub html: String,
    pub record: PostRecord,
}

impl PublishRequest {
    /// Check the required fields (`html`, `publishDate`, `slug`).
    ///
    /// Returns `None` when any of them is absent or empty. Nothing else is
    /// checked: slug shape, date format and HTML content are taken as-is.
    pub fn validate(self) -> Option<ValidPost> {
        let html = self.html.filter(|s| !s.is_empty())?;
        let publish_date = self.publish_date.filter(|s| !s.is_empty())?;
        let slug = self.slug.filter(|s| !s.is_empty())?;

        Some(ValidPost {
            html,
            record: PostRecord {
                title: self.title,
                slug,
                meta_description: self.meta_description,
                publish_date,
            },
        })
    }
}
