//! Errors for the holonet library
//!
//! Enumeration for all errors that can occur when talking to the catalogue
//!

use derive_more::{Display, Error};

pub mod remote_fetch_error;
pub mod string_error;

pub use crate::error::remote_fetch_error::RemoteFetchError;
pub use crate::error::string_error::StringError;

#[derive(Debug, Display, Error)]
pub enum HolonetError {
    /// Non-success HTTP response or transport-level failure on any fetch
    RemoteFetch(Box<RemoteFetchError>),

    /// Response body did not parse as JSON or lacked the expected shape
    MalformedResponse(Box<StringError>),

    // External Library Errors
    HTTP(reqwest::Error),
    URL(url::ParseError),
    JSON(serde_json::Error),
    ENV(std::env::VarError),

    // Fallback
    Basic(StringError),
}

impl HolonetError {
    pub fn basic_str(s: impl AsRef<str>) -> Self {
        HolonetError::Basic(StringError::from(s.as_ref()))
    }

    pub fn remote_fetch(
        status: reqwest::StatusCode,
        url: impl AsRef<str>,
        body: impl AsRef<str>,
    ) -> Self {
        HolonetError::RemoteFetch(Box::new(RemoteFetchError::from_status(
            status,
            url.as_ref(),
            body.as_ref(),
        )))
    }

    pub fn transport(url: impl AsRef<str>, error: reqwest::Error) -> Self {
        HolonetError::RemoteFetch(Box::new(RemoteFetchError::from_transport(
            url.as_ref(),
            error,
        )))
    }

    pub fn malformed_response(url: impl AsRef<str>, detail: impl AsRef<str>) -> Self {
        let msg = format!(
            "Malformed response from [{}]\n{}",
            url.as_ref(),
            detail.as_ref()
        );
        HolonetError::MalformedResponse(Box::new(StringError::from(msg)))
    }
}

impl From<reqwest::Error> for HolonetError {
    fn from(error: reqwest::Error) -> Self {
        HolonetError::HTTP(error)
    }
}

impl From<url::ParseError> for HolonetError {
    fn from(error: url::ParseError) -> Self {
        HolonetError::URL(error)
    }
}

impl From<serde_json::Error> for HolonetError {
    fn from(error: serde_json::Error) -> Self {
        HolonetError::JSON(error)
    }
}

impl From<std::env::VarError> for HolonetError {
    fn from(error: std::env::VarError) -> Self {
        HolonetError::ENV(error)
    }
}
