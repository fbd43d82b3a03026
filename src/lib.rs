//! 🛰 libholonet
//!
//! A client for browsing the Star Wars character catalogue API.
//!
//! # Examples
//!
//! Fetch the first page of the catalogue and walk forward:
//!
//! ```
//! use libholonet::catalogue;
//! use libholonet::config::CatalogueConfig;
//! use libholonet::model::Direction;
//!
//! let config = CatalogueConfig::from_env()?;
//! let page = catalogue::fetch_first_page(&config).await?;
//! for person in &page.records {
//!     println!("{} appears in {} films", person.name, person.films.len());
//! }
//! let next = catalogue::advance(&config, &page, Direction::Next).await?;
//! ```
//!
//! Search the catalogue server-side:
//!
//! ```
//! use libholonet::catalogue;
//! use libholonet::config::CatalogueConfig;
//! use libholonet::opts::FetchOpts;
//!
//! let config = CatalogueConfig::from_env()?;
//! let page = catalogue::fetch_page(&config, &FetchOpts::from_search("skywalker")).await?;
//! ```
//!
//! Drive a browsing session where stale in-flight responses are discarded:
//!
//! ```
//! use libholonet::catalogue::Browser;
//! use libholonet::config::CatalogueConfig;
//! use libholonet::opts::FetchOpts;
//!
//! let browser = Browser::new(CatalogueConfig::from_env()?);
//! browser.load(FetchOpts::first_page()).await?;
//! browser.next().await?;
//! let narrowed = browser.filter_name("luke");
//! ```

pub mod api;
pub mod catalogue;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod opts;
pub mod test;
pub mod view;
