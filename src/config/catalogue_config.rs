//! Where the catalogue lives. Defaults to the canonical upstream; a mirror
//! deployment overrides the host (and optionally the scheme) via env vars.

use std::env;

use crate::constants::{CANONICAL_HOST, DEFAULT_HOST, DEFAULT_SCHEME};
use crate::constants::{HOST_ENV_VAR, SCHEME_ENV_VAR};
use crate::error::HolonetError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueConfig {
    pub scheme: String,
    pub host: String,
}

impl Default for CatalogueConfig {
    fn default() -> CatalogueConfig {
        CatalogueConfig {
            scheme: String::from(DEFAULT_SCHEME),
            host: String::from(DEFAULT_HOST),
        }
    }
}

impl CatalogueConfig {
    pub fn new(host: impl AsRef<str>) -> CatalogueConfig {
        CatalogueConfig {
            scheme: String::from(DEFAULT_SCHEME),
            host: String::from(host.as_ref()),
        }
    }

    /// Resolve the config from the environment, falling back to the
    /// canonical upstream when no mirror is configured.
    pub fn from_env() -> Result<CatalogueConfig, HolonetError> {
        let host = match env::var(HOST_ENV_VAR) {
            Ok(host) => host,
            Err(env::VarError::NotPresent) => String::from(DEFAULT_HOST),
            Err(err) => return Err(HolonetError::from(err)),
        };
        let scheme = match env::var(SCHEME_ENV_VAR) {
            Ok(scheme) => scheme,
            Err(env::VarError::NotPresent) => String::from(DEFAULT_SCHEME),
            Err(err) => return Err(HolonetError::from(err)),
        };
        Ok(CatalogueConfig { scheme, host })
    }

    /// Adopt the scheme and host (with port) of an absolute URL, e.g. a test
    /// server address.
    pub fn from_url(url: impl AsRef<str>) -> Result<CatalogueConfig, HolonetError> {
        let parsed = url::Url::parse(url.as_ref())?;
        let mut host = parsed.host_str().unwrap_or_default().to_string();
        if let Some(port) = parsed.port() {
            host = format!("{host}:{port}");
        }
        Ok(CatalogueConfig {
            scheme: parsed.scheme().to_string(),
            host,
        })
    }

    pub fn is_mirror(&self) -> bool {
        self.host != CANONICAL_HOST
    }
}
