//! Wildberries product search scraper.
//!
//! Pages through the Wildberries search endpoint for a query and price range,
//! flattens each product into a [`ProductRecord`], and exports the collected
//! rows to an `.xlsx` workbook named after the search.
//!
//! # Quick start
//!
//! ```no_run
//! use wb_search::{ExportOutcome, SearchFilter, WbSearch};
//!
//! let search = WbSearch::builder().build().unwrap();
//! let filter = SearchFilter::new("phone", 1000, 5000).unwrap().with_discount(10);
//!
//! match search.run(&filter).unwrap() {
//!     ExportOutcome::Written { path, rows } => println!("{rows} rows -> {}", path.display()),
//!     ExportOutcome::NoData => println!("nothing found"),
//! }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod fetch;
pub mod mapper;
pub mod models;
pub mod paginate;
pub mod request;
pub mod retry;

pub use error::{Result, WbSearchError};
pub use export::ExportOutcome;
pub use fetch::{PageFetcher, PageOutcome};
pub use models::{ProductRecord, RawProduct, SearchFilter};
pub use paginate::{Collected, PageSource, StopReason};
pub use retry::{Backoff, RetryPolicy};

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// WbSearchBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`WbSearch`] instance.
///
/// Use [`WbSearch::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](WbSearchBuilder::build).
pub struct WbSearchBuilder {
    endpoint: String,
    timeout: Duration,
    user_agent: String,
    retry: RetryPolicy,
    max_pages: u32,
    output_dir: PathBuf,
}

impl Default for WbSearchBuilder {
    fn default() -> Self {
        Self {
            endpoint: config::SEARCH_URL.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            user_agent: config::USER_AGENT.to_string(),
            retry: RetryPolicy::default(),
            max_pages: config::MAX_PAGES,
            output_dir: PathBuf::from("."),
        }
    }
}

impl WbSearchBuilder {
    /// Override the search endpoint URL.
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }

    /// Set the per-request HTTP timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `User-Agent` sent with every request.
    ///
    /// Defaults to a desktop Chrome user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the retry policy applied to every page request.
    ///
    /// Defaults to 3 attempts, 1 second apart, retrying every error.
    pub fn retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Set the maximum number of pages walked per search.
    ///
    /// Defaults to 50.
    pub fn max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Directory the workbook is written to. Defaults to the current directory.
    pub fn output_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Build the search client.
    ///
    /// Fails if the HTTP client cannot be constructed (e.g. an invalid user agent).
    pub fn build(self) -> Result<WbSearch> {
        let fetcher = PageFetcher::new(self.endpoint, self.timeout, &self.user_agent, self.retry)?;
        Ok(WbSearch {
            fetcher,
            max_pages: self.max_pages,
            output_dir: self.output_dir,
        })
    }
}

// ---------------------------------------------------------------------------
// WbSearch
// ---------------------------------------------------------------------------

/// The main entry point: collect search results and export them.
///
/// Created via [`WbSearch::builder()`].
pub struct WbSearch {
    fetcher: PageFetcher,
    max_pages: u32,
    output_dir: PathBuf,
}

impl WbSearch {
    pub fn builder() -> WbSearchBuilder {
        WbSearchBuilder::default()
    }

    /// Walk the result pages for `filter` and return every record found.
    ///
    /// Never fails: pages that cannot be fetched are skipped and reported in
    /// [`Collected::failed_pages`].
    pub fn collect(&self, filter: &SearchFilter) -> Collected {
        paginate::collect(&self.fetcher, filter, self.max_pages)
    }

    /// Write `records` to the output directory under the name derived from `filter`.
    pub fn export(&self, records: &[ProductRecord], filter: &SearchFilter) -> Result<ExportOutcome> {
        export::export(records, &self.output_dir, filter)
    }

    /// Collect, then export.
    pub fn run(&self, filter: &SearchFilter) -> Result<ExportOutcome> {
        let collected = self.collect(filter);
        self.export(&collected.records, filter)
    }

    /// Return a reference to the underlying [`PageFetcher`].
    pub fn fetcher(&self) -> &PageFetcher {
        &self.fetcher
    }

    pub fn max_pages(&self) -> u32 {
        self.max_pages
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for WbSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let retry = self.fetcher.retry_policy();
        write!(
            f,
            "WbSearch(endpoint={}, max_pages={}, attempts={}, output_dir={})",
            self.fetcher.endpoint(),
            self.max_pages,
            retry.max_attempts(),
            self.output_dir.display()
        )
    }
}
