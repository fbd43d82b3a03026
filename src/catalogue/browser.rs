//! # Browser - reactive load state over the catalogue client
//!
//! Rapid user input (typing in a search box, clicking next/previous) can put
//! several fetches in flight at once. Each load stamps a generation ticket;
//! a result is applied only while its ticket is still the newest, so the
//! newest request wins rather than the last response to resolve. A failed
//! load records the error and leaves the previously loaded page intact.
//!

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::catalogue;
use crate::config::CatalogueConfig;
use crate::error::HolonetError;
use crate::model::{Direction, Page, Person};
use crate::opts::FetchOpts;

pub struct Browser {
    config: CatalogueConfig,
    generation: AtomicU64,
    inner: Mutex<BrowserInner>,
}

#[derive(Debug, Default)]
struct BrowserInner {
    current: Option<Page>,
    last_error: Option<String>,
    loading: bool,
}

impl Browser {
    pub fn new(config: CatalogueConfig) -> Browser {
        Browser {
            config,
            generation: AtomicU64::new(0),
            inner: Mutex::new(BrowserInner::default()),
        }
    }

    /// Stamp a new request generation. Results for older tickets will be
    /// discarded by `finish_load`.
    pub fn begin_load(&self) -> u64 {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.lock().loading = true;
        ticket
    }

    /// Apply a fetch result if its ticket is still current. Returns false
    /// when the result was superseded by a newer request and discarded.
    pub fn finish_load(
        &self,
        ticket: u64,
        result: Result<Page, HolonetError>,
    ) -> Result<bool, HolonetError> {
        let mut inner = self.inner.lock();
        if ticket != self.generation.load(Ordering::SeqCst) {
            log::debug!("browser::finish_load discarding stale result for request {ticket}");
            return Ok(false);
        }
        inner.loading = false;
        match result {
            Ok(page) => {
                inner.current = Some(page);
                inner.last_error = None;
                Ok(true)
            }
            Err(err) => {
                // The previously loaded page stays visible
                inner.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Fetch and apply a page. Returns false when a newer load superseded
    /// this one before it resolved.
    pub async fn load(&self, opts: FetchOpts) -> Result<bool, HolonetError> {
        let ticket = self.begin_load();
        let result = catalogue::fetch_page(&self.config, &opts).await;
        self.finish_load(ticket, result)
    }

    /// Server-side search; the loaded page is a single unpaged batch.
    pub async fn search(&self, term: impl AsRef<str>) -> Result<bool, HolonetError> {
        self.load(FetchOpts::from_search(term)).await
    }

    pub async fn next(&self) -> Result<bool, HolonetError> {
        self.step(Direction::Next).await
    }

    pub async fn previous(&self) -> Result<bool, HolonetError> {
        self.step(Direction::Previous).await
    }

    async fn step(&self, direction: Direction) -> Result<bool, HolonetError> {
        let cursor = {
            let inner = self.inner.lock();
            inner
                .current
                .as_ref()
                .and_then(|page| page.cursor(direction))
                .map(String::from)
        };
        match cursor {
            Some(cursor) => self.load(FetchOpts::from_cursor(cursor)).await,
            None => {
                log::debug!("browser::step no {direction} cursor, nothing to do");
                Ok(false)
            }
        }
    }

    pub fn current_page(&self) -> Option<Page> {
        self.inner.lock().current.clone()
    }

    pub fn last_error(&self) -> Option<String> {
        self.inner.lock().last_error.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.lock().loading
    }

    /// Instant client-side narrowing of the most recently fetched page.
    /// Independent of the server-side search mode.
    pub fn filter_name(&self, query: &str) -> Vec<Person> {
        match &self.inner.lock().current {
            Some(page) => page.filter_by_name(query),
            None => vec![],
        }
    }
}
