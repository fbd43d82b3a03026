use crate::api::client;
use crate::api::client::films;
use crate::api::endpoint;
use crate::config::CatalogueConfig;
use crate::error::HolonetError;
use crate::model::{Direction, Page};
use crate::opts::FetchOpts;
use crate::view::PeopleListingResponse;

/// Fetch one page of the people listing and enrich every subject with its
/// resolved film titles. Search mode produces a single unpaged page; cursor
/// mode carries the server's next/previous cursors through host
/// normalization. Enrichment is all-or-nothing: no partial page is ever
/// returned.
pub async fn list(config: &CatalogueConfig, opts: &FetchOpts) -> Result<Page, HolonetError> {
    let url = endpoint::resolve_target(config, opts)?;
    log::debug!("people::list fetching {url}");

    let client = client::new_for_url(&url)?;
    let res = client
        .get(&url)
        .send()
        .await
        .map_err(|err| HolonetError::transport(&url, err))?;
    let body = client::parse_json_body(&url, res).await?;
    let response: Result<PeopleListingResponse, serde_json::Error> = serde_json::from_str(&body);
    let listing = match response {
        Ok(listing) => listing,
        Err(err) => {
            return Err(HolonetError::malformed_response(
                &url,
                format!("people::list error parsing response\n\nErr {err:?}\n\n{body}"),
            ))
        }
    };

    // Search results are one unpaged batch; the walk cursors only exist in
    // cursor mode.
    let (next_cursor, previous_cursor) = if opts.search_term().is_some() {
        (None, None)
    } else {
        (
            endpoint::normalize_cursor(listing.next, config)?,
            endpoint::normalize_cursor(listing.previous, config)?,
        )
    };

    let enrichments = listing
        .results
        .iter()
        .map(|entry| films::get_titles(config, &entry.films));
    let titles = futures::future::try_join_all(enrichments).await?;

    let records = listing
        .results
        .into_iter()
        .zip(titles)
        .map(|(entry, titles)| entry.into_person(titles))
        .collect();

    Ok(Page {
        records,
        next_cursor,
        previous_cursor,
    })
}

/// Walk to the adjacent page. When there is no cursor in that direction the
/// current page is returned unchanged.
pub async fn advance(
    config: &CatalogueConfig,
    page: &Page,
    direction: Direction,
) -> Result<Page, HolonetError> {
    match page.cursor(direction) {
        Some(cursor) => list(config, &FetchOpts::from_cursor(cursor)).await,
        None => {
            log::debug!("people::advance no {direction} cursor, staying on current page");
            Ok(page.clone())
        }
    }
}
