//! # API Client - constructs HTTP clients and checks catalogue responses
//!

use reqwest::{header, Client, ClientBuilder, IntoUrl};
use std::time;

use crate::constants;
use crate::error::HolonetError;

pub mod films;
pub mod people;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const USER_AGENT: &str = "Holonet";

pub fn get_scheme_and_host_from_url<U: IntoUrl>(url: U) -> Result<(String, String), HolonetError> {
    let parsed_url = url.into_url()?;
    let mut host_str = parsed_url.host_str().unwrap_or_default().to_string();
    if let Some(port) = parsed_url.port() {
        host_str = format!("{host_str}:{port}");
    }
    Ok((parsed_url.scheme().to_owned(), host_str))
}

pub fn new_for_url<U: IntoUrl>(url: U) -> Result<Client, HolonetError> {
    let (_scheme, host) = get_scheme_and_host_from_url(url)?;
    log::trace!("client::new_for_url for host: {host}");
    match builder()
        .timeout(time::Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS))
        .build()
    {
        Ok(client) => Ok(client),
        Err(reqwest_err) => Err(HolonetError::HTTP(reqwest_err)),
    }
}

// Pagination results must reflect current upstream state, so every request
// opts out of intermediary caches.
fn builder() -> ClientBuilder {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-cache"),
    );
    Client::builder()
        .user_agent(format!("{USER_AGENT}/{VERSION}"))
        .default_headers(headers)
}

/// Checks the response status and hands back the body for parsing. A
/// non-success status becomes a `RemoteFetch` error carrying the status,
/// the request URL and a bounded excerpt of the body.
pub async fn parse_json_body(url: &str, res: reqwest::Response) -> Result<String, HolonetError> {
    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|err| HolonetError::transport(url, err))?;

    log::debug!("url: {url}\nstatus: {status}\nbody: {body}");

    if !status.is_success() {
        return Err(HolonetError::remote_fetch(status, url, &body));
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_scheme_and_host_from_url() {
        let test_cases = vec![
            (
                "https://swapi.dev/api/people/",
                ("https".to_string(), "swapi.dev".to_string()),
            ),
            (
                "http://localhost:8080",
                ("http".to_string(), "localhost:8080".to_string()),
            ),
        ];

        for (url, expected) in test_cases {
            let result = get_scheme_and_host_from_url(url);
            assert!(result.is_ok());
            assert_eq!(result.unwrap(), expected);
        }
    }

    #[test]
    fn test_get_scheme_and_host_from_url_invalid() {
        let result = get_scheme_and_host_from_url("not-a-url");
        assert!(result.is_err());
    }

    #[test]
    fn test_new_for_url() {
        let client = new_for_url("https://swapi.dev/api/people/");
        assert!(client.is_ok());
    }
}
