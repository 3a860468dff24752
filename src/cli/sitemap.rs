//! `pressroom sitemap`: rebuild sitemap.xml from the current index.

use crate::{config::PressConfig, log, store::PostStore};
use anyhow::Result;

pub fn regenerate(config: &PressConfig) -> Result<()> {
    let store = PostStore::new(config);
    let count = store.rebuild_sitemap()?;
    log!("sitemap"; "{} post{} listed", count, if count == 1 { "" } else { "s" });
    Ok(())
}
