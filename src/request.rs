//! Query parameter construction for the search endpoint.
//!
//! Values are returned unencoded; reqwest percent-encodes them when the
//! request is built.
//!
//! # Example
//!
//! ```rust
//! use wb_search::{request, SearchFilter};
//! let filter = SearchFilter::new("phone", 1000, 5000).unwrap();
//! let params = request::page_params(2, &filter);
//! assert_eq!(request::param(&params, "priceU"), Some("100000;500000"));
//! ```

use crate::config;
use crate::models::SearchFilter;

/// Build the query parameters for page `page` of `filter`.
///
/// Pure function of its inputs. Prices are converted to minor units
/// (`* 100`) in 64-bit arithmetic.
pub fn page_params(page: u32, filter: &SearchFilter) -> Vec<(&'static str, String)> {
    vec![
        ("appType", config::APP_TYPE.to_string()),
        ("curr", config::CURRENCY.to_string()),
        ("dest", config::DEST.to_string()),
        ("page", page.to_string()),
        ("query", filter.query().to_string()),
        ("resultset", config::RESULT_SET.to_string()),
        ("sort", config::SORT.to_string()),
        ("spp", config::SPP.to_string()),
        ("priceU", price_range(filter.min_price(), filter.max_price())),
        ("discount", filter.discount().to_string()),
    ]
}

/// Minor-unit price range in the `"{low};{high}"` form the endpoint expects.
pub fn price_range(low: u32, high: u32) -> String {
    format!("{};{}", u64::from(low) * 100, u64::from(high) * 100)
}

/// Look up a parameter value by name.
pub fn param<'a>(params: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.as_str())
}
