use std::fmt;

use crate::config;
use crate::error::{Result, WbSearchError};

// ---------------------------------------------------------------------------
// SearchFilter — What to search for and within which bounds
// ---------------------------------------------------------------------------

/// An immutable search filter: term, price bounds in whole currency units,
/// and minimum discount percent.
///
/// Construction validates that the term is not blank and that
/// `min_price <= max_price`, so every filter that exists is sendable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    query: String,
    min_price: u32,
    max_price: u32,
    discount: u32,
}

impl SearchFilter {
    pub fn new(query: impl Into<String>, min_price: u32, max_price: u32) -> Result<Self> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(WbSearchError::InvalidArgument(
                "search query must not be empty".to_string(),
            ));
        }
        if min_price > max_price {
            return Err(WbSearchError::InvalidArgument(format!(
                "min price {} is greater than max price {}",
                min_price, max_price
            )));
        }
        Ok(Self {
            query,
            min_price,
            max_price,
            discount: config::DEFAULT_DISCOUNT,
        })
    }

    /// Filter with the default bounds (1 to 1,000,000) and no discount threshold.
    pub fn for_query(query: impl Into<String>) -> Result<Self> {
        Self::new(query, config::DEFAULT_MIN_PRICE, config::DEFAULT_MAX_PRICE)
    }

    /// Set the minimum discount percent.
    pub fn with_discount(mut self, discount: u32) -> Self {
        self.discount = discount;
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn min_price(&self) -> u32 {
        self.min_price
    }

    pub fn max_price(&self) -> u32 {
        self.max_price
    }

    pub fn discount(&self) -> u32 {
        self.discount
    }
}

impl fmt::Display for SearchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" [{}..={}] discount>={}",
            self.query, self.min_price, self.max_price, self.discount
        )
    }
}
