//! Command-line interface module.

mod args;
pub mod posts;
pub mod serve;
pub mod sitemap;

pub use args::{Cli, Commands};
