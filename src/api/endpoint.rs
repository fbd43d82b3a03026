use serde::Serialize;
use url::Url;

use crate::config::CatalogueConfig;
use crate::constants::{API_NAMESPACE, CANONICAL_HOST, PEOPLE_URI};
use crate::error::HolonetError;
use crate::opts::FetchOpts;

/// The well-known first page of the people listing.
pub fn listing_url(config: &CatalogueConfig) -> String {
    format!(
        "{}://{}{}{}",
        config.scheme, config.host, API_NAMESPACE, PEOPLE_URI
    )
}

#[derive(Serialize)]
struct SearchParams<'a> {
    search: &'a str,
}

pub fn search_url(config: &CatalogueConfig, term: &str) -> Result<String, HolonetError> {
    let params = serde_url_params::to_string(&SearchParams { search: term })
        .map_err(|err| HolonetError::basic_str(format!("Invalid search term: {err}")))?;
    Ok(format!("{}?{}", listing_url(config), params))
}

/// Resolve the fetch target for the given opts: a non-blank search term wins,
/// then an explicit cursor (normalized to the configured host), then the
/// first page.
pub fn resolve_target(config: &CatalogueConfig, opts: &FetchOpts) -> Result<String, HolonetError> {
    if let Some(term) = opts.search_term() {
        return search_url(config, term);
    }
    match &opts.cursor {
        Some(cursor) => normalize_host(cursor, config),
        None => Ok(listing_url(config)),
    }
}

/// Rewrite any URL pointing at the canonical upstream host (or its `www.`
/// alias) to the configured scheme and host, preserving path and query
/// exactly. URLs on other hosts pass through untouched.
pub fn normalize_host(url_str: &str, config: &CatalogueConfig) -> Result<String, HolonetError> {
    let parsed = Url::parse(url_str)?;
    let host = parsed.host_str().unwrap_or_default();
    if host != CANONICAL_HOST && host != format!("www.{CANONICAL_HOST}") {
        return Ok(String::from(url_str));
    }
    let rewritten = match parsed.query() {
        Some(query) => format!(
            "{}://{}{}?{}",
            config.scheme,
            config.host,
            parsed.path(),
            query
        ),
        None => format!("{}://{}{}", config.scheme, config.host, parsed.path()),
    };
    Ok(rewritten)
}

/// Normalize a raw `next`/`previous` cursor. JSON null and empty strings map
/// to `None`; anything else is host-normalized and fed back as-is.
pub fn normalize_cursor(
    cursor: Option<String>,
    config: &CatalogueConfig,
) -> Result<Option<String>, HolonetError> {
    match cursor {
        Some(cursor) if !cursor.is_empty() => Ok(Some(normalize_host(&cursor, config)?)),
        _ => Ok(None),
    }
}
