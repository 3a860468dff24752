//! `pressroom posts`: print the homepage feed.

use crate::{config::PressConfig, store::PostStore};
use anyhow::Result;
use std::io::{Write, stdout};

pub fn print_feed(config: &PressConfig, pretty: bool) -> Result<()> {
    let posts = PostStore::new(config).recent();
    let json = if pretty {
        serde_json::to_string_pretty(&posts)?
    } else {
        serde_json::to_string(&posts)?
    };

    let mut out = stdout().lock();
    writeln!(out, "{json}")?;
    Ok(())
}
