//! # RemoteFetchError
//!
//! Carries everything needed to diagnose a failed catalogue fetch: the
//! request URL, the HTTP status when one was received, and a bounded excerpt
//! of the response body. Transport-level failures (host unreachable, timeout)
//! have no status; the transport error description lands in `status_text`.
//!

use std::fmt;

use crate::constants::ERROR_BODY_EXCERPT_LEN;

#[derive(Debug)]
pub struct RemoteFetchError {
    pub url: String,
    pub status: Option<u16>,
    pub status_text: String,
    pub body_excerpt: String,
}

impl RemoteFetchError {
    pub fn from_status(status: reqwest::StatusCode, url: &str, body: &str) -> Self {
        RemoteFetchError {
            url: String::from(url),
            status: Some(status.as_u16()),
            status_text: String::from(status.canonical_reason().unwrap_or("Unknown")),
            body_excerpt: excerpt(body),
        }
    }

    pub fn from_transport(url: &str, error: reqwest::Error) -> Self {
        RemoteFetchError {
            url: String::from(url),
            status: None,
            status_text: error.to_string(),
            body_excerpt: String::new(),
        }
    }
}

fn excerpt(body: &str) -> String {
    body.chars().take(ERROR_BODY_EXCERPT_LEN).collect()
}

impl fmt::Display for RemoteFetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.status {
            Some(status) => write!(
                f,
                "Remote fetch failed [{} {}] from url {} '{}'",
                status, self.status_text, self.url, self.body_excerpt
            ),
            None => write!(
                f,
                "Remote fetch failed from url {}: {}",
                self.url, self.status_text
            ),
        }
    }
}

impl std::error::Error for RemoteFetchError {}
