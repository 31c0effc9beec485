use std::time::Duration;

pub const SEARCH_URL: &str = "https://search.wb.ru/exactmatch/ru/common/v9/search";
pub const DETAIL_URL_BASE: &str = "https://www.wildberries.ru/catalog";

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/134.0.0.0 Safari/537.36";
pub const ACCEPT: &str = "*/*";

// Catalog identity expected by the search endpoint
pub const APP_TYPE: &str = "1";
pub const CURRENCY: &str = "rub";
pub const DEST: &str = "-1255987";
pub const RESULT_SET: &str = "catalog";
pub const SORT: &str = "popular";
pub const SPP: &str = "30";

pub const DEFAULT_MIN_PRICE: u32 = 1;
pub const DEFAULT_MAX_PRICE: u32 = 1_000_000;
pub const DEFAULT_DISCOUNT: u32 = 0;

/// Hard cap on pages walked per search.
pub const MAX_PAGES: u32 = 50;
pub const DEFAULT_ATTEMPTS: u32 = 3;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Detail page link for an already formatted id segment.
pub fn detail_url(id: &str) -> String {
    format!("{}/{}/detail.aspx", DETAIL_URL_BASE, id)
}
