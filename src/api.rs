//! # API - for talking to the remote catalogue
//!
//! `endpoint` builds and normalizes request URLs, `client` issues the
//! requests and checks responses.
//!

pub mod client;
pub mod endpoint;
