//! Derived artifacts.
//!
//! - **Sitemap**: Search engine indexing (`sitemap.xml`), rebuilt from the
//!   posts index after every publish.

pub mod sitemap;
