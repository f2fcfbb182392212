//! Catalog Config

use std::num::NonZeroU64;

use catalog::search::DEFAULT_PAGE_SIZE;
use clap::Args;

/// Listing and export settings.
#[derive(Debug, Args)]
pub struct CatalogConfig {
    /// Products shown per page
    #[arg(long, env = "PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: NonZeroU64,
}
