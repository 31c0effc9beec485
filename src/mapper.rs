//! Flattening of raw search entries into [`ProductRecord`] rows.
//!
//! Mapping is total: a field that is absent, null, or of an unexpected JSON
//! type degrades to `None` instead of failing the page.

use serde_json::Value;

use crate::config;
use crate::models::{ProductRecord, RawProduct};

/// Map every entry of one page, preserving upstream order.
pub fn map_products(products: &[RawProduct]) -> Vec<ProductRecord> {
    products.iter().map(map_product).collect()
}

/// Map a single raw entry.
pub fn map_product(product: &RawProduct) -> ProductRecord {
    let base_minor = number(product, "priceU");
    // Only an absent key falls back to the base price; a present null stays null.
    let sale_minor = match product.get("salePriceU") {
        Some(v) => v.as_f64(),
        None => base_minor,
    };

    let base_minor = base_minor.filter(|v| *v != 0.0);
    let sale_minor = sale_minor.filter(|v| *v != 0.0);

    ProductRecord {
        id: product.get("id").and_then(Value::as_u64),
        name: text(product, "name"),
        price: base_minor.map(to_major),
        sale_price: sale_minor.map(to_major),
        sale: discount_percent(base_minor, sale_minor),
        brand: text(product, "brand"),
        rating: number(product, "rating"),
        supplier: text(product, "supplier"),
        supplier_rating: number(product, "supplierRating"),
        feedbacks: product.get("feedbacks").and_then(Value::as_u64),
        review_rating: number(product, "reviewRating"),
        promo_text_card: text(product, "promoTextCard"),
        promo_text_cat: text(product, "promoTextCat"),
        link: config::detail_url(&link_id(product.get("id"))),
    }
}

/// `round((1 - sale / base) * 100, 1)` over the raw minor-unit values, or `0`
/// unless both are present and non-zero.
pub fn discount_percent(base_minor: Option<f64>, sale_minor: Option<f64>) -> f64 {
    match (base_minor, sale_minor) {
        (Some(base), Some(sale)) if base != 0.0 && sale != 0.0 => {
            round_to_tenth((1.0 - sale / base) * 100.0)
        }
        _ => 0.0,
    }
}

/// The raw id as it appears in the link: scalars verbatim, `None` when the id
/// is missing or null.
fn link_id(id: Option<&Value>) -> String {
    match id {
        None | Some(Value::Null) => "None".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(true)) => "True".to_string(),
        Some(Value::Bool(false)) => "False".to_string(),
        Some(other) => other.to_string(),
    }
}

fn to_major(minor: f64) -> i64 {
    (minor / 100.0).round() as i64
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn number(product: &RawProduct, key: &str) -> Option<f64> {
    product.get(key).and_then(Value::as_f64)
}

fn text(product: &RawProduct, key: &str) -> Option<String> {
    product
        .get(key)
        .and_then(Value::as_str)
        .map(|s| s.to_string())
}
