//! HTTP fetching of single search result pages.
//!
//! A [`PageFetcher`] issues one GET per page against the search endpoint,
//! wrapped in its [`RetryPolicy`], and reports the result as a tagged
//! [`PageOutcome`] so the caller never has to catch a failure to decide
//! whether to stop or continue.

use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;

use crate::config;
use crate::error::{Result, WbSearchError};
use crate::models::{RawProduct, SearchFilter};
use crate::paginate::PageSource;
use crate::request;
use crate::retry::RetryPolicy;

// ---------------------------------------------------------------------------
// PageOutcome
// ---------------------------------------------------------------------------

/// Result of fetching one page, after retries.
#[derive(Debug)]
pub enum PageOutcome {
    /// The page decoded and carried at least one product.
    Products(Vec<RawProduct>),
    /// The page decoded but `data.products` was empty or missing.
    Empty,
    /// Every attempt failed; holds the final error.
    Failed(WbSearchError),
}

impl PageOutcome {
    /// Classify a decoded response body by its `data.products` list.
    pub fn from_body(mut body: Value) -> Self {
        match body.pointer_mut("/data/products").map(Value::take) {
            Some(Value::Array(products)) if !products.is_empty() => PageOutcome::Products(products),
            _ => PageOutcome::Empty,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, PageOutcome::Failed(_))
    }
}

// ---------------------------------------------------------------------------
// PageFetcher
// ---------------------------------------------------------------------------

/// Fetches and decodes search result pages.
pub struct PageFetcher {
    client: Client,
    endpoint: String,
    retry: RetryPolicy,
}

impl PageFetcher {
    /// Create a fetcher for `endpoint`.
    ///
    /// Every request carries `user_agent` and `Accept: */*` and is bounded by
    /// `timeout`.
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
        retry: RetryPolicy,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(config::ACCEPT));

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            retry,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Single attempt: GET the page and decode the JSON body.
    ///
    /// Transport errors, non-2xx statuses and undecodable bodies all come
    /// back as `Err`.
    pub fn fetch_json(&self, page: u32, filter: &SearchFilter) -> Result<Value> {
        let params = request::page_params(page, filter);
        tracing::debug!(page, endpoint = %self.endpoint, "requesting page");

        let resp = self
            .client
            .get(&self.endpoint)
            .query(&params)
            .send()?
            .error_for_status()?;
        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch one page under the retry policy and classify the result.
    pub fn fetch_page(&self, page: u32, filter: &SearchFilter) -> PageOutcome {
        match self.retry.run(|_attempt| self.fetch_json(page, filter)) {
            Ok(body) => PageOutcome::from_body(body),
            Err(e) => PageOutcome::Failed(e),
        }
    }
}

impl PageSource for PageFetcher {
    fn fetch_page(&self, page: u32, filter: &SearchFilter) -> PageOutcome {
        PageFetcher::fetch_page(self, page, filter)
    }
}

impl fmt::Debug for PageFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageFetcher")
            .field("endpoint", &self.endpoint)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}
