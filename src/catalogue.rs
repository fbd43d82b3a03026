//! # Catalogue - the high level operations a caller drives
//!
//! Thin facade over `api::client`, plus the [`Browser`] session state for
//! callers that want stale in-flight responses discarded for them.
//!

use crate::api;
use crate::config::CatalogueConfig;
use crate::error::HolonetError;
use crate::model::{Direction, Page};
use crate::opts::FetchOpts;

pub mod browser;

pub use crate::catalogue::browser::Browser;

/// Fetch one normalized, enriched page by cursor or search term.
pub async fn fetch_page(
    config: &CatalogueConfig,
    opts: &FetchOpts,
) -> Result<Page, HolonetError> {
    api::client::people::list(config, opts).await
}

/// Fetch the well-known first page of the catalogue.
pub async fn fetch_first_page(config: &CatalogueConfig) -> Result<Page, HolonetError> {
    fetch_page(config, &FetchOpts::first_page()).await
}

/// Walk from a previously fetched page. Without a cursor in that direction
/// the input page is returned unchanged.
pub async fn advance(
    config: &CatalogueConfig,
    page: &Page,
    direction: Direction,
) -> Result<Page, HolonetError> {
    api::client::people::advance(config, page, direction).await
}
