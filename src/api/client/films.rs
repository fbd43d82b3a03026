use crate::api::client;
use crate::api::endpoint;
use crate::config::CatalogueConfig;
use crate::error::HolonetError;
use crate::view::FilmResponse;

/// Resolve one linked film URL to its display title. The URL is
/// host-normalized before being dereferenced.
pub async fn get_title(
    config: &CatalogueConfig,
    film_url: impl AsRef<str>,
) -> Result<String, HolonetError> {
    let url = endpoint::normalize_host(film_url.as_ref(), config)?;
    log::debug!("films::get_title fetching {url}");

    let client = client::new_for_url(&url)?;
    let res = client
        .get(&url)
        .send()
        .await
        .map_err(|err| HolonetError::transport(&url, err))?;
    let body = client::parse_json_body(&url, res).await?;
    let response: Result<FilmResponse, serde_json::Error> = serde_json::from_str(&body);
    match response {
        Ok(film) => Ok(film.title),
        Err(err) => Err(HolonetError::malformed_response(
            &url,
            format!("films::get_title error parsing response\n\nErr {err:?}\n\n{body}"),
        )),
    }
}

/// Resolve a subject's linked film URLs concurrently. Titles come back in
/// the original link order; any single failure fails the whole batch.
pub async fn get_titles(
    config: &CatalogueConfig,
    film_urls: &[String],
) -> Result<Vec<String>, HolonetError> {
    let fetches = film_urls.iter().map(|film_url| get_title(config, film_url));
    futures::future::try_join_all(fetches).await
}
