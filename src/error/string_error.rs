//! # StringError
//!
//! Wraps a plain message so it can live inside error enum variants.
//!

use std::fmt;

pub struct StringError(String);

impl StringError {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StringError {
    fn from(msg: &str) -> Self {
        StringError(String::from(msg))
    }
}

impl From<String> for StringError {
    fn from(msg: String) -> Self {
        StringError(msg)
    }
}

impl fmt::Display for StringError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Debug prints the bare message, error output gets noisy otherwise
impl fmt::Debug for StringError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for StringError {}
