//! Configuration section definitions.

mod feed;
mod serve;
mod site;
mod storage;

pub use feed::FeedConfig;
pub use serve::ServeConfig;
pub use site::SiteConfig;
pub use storage::{StorageConfig, StoragePaths};
