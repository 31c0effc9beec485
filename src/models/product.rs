use serde::{Deserialize, Serialize};

/// A product entry exactly as the search endpoint returned it.
///
/// Fields are read opportunistically; a missing or mistyped field is not an error.
pub type RawProduct = serde_json::Value;

// ---------------------------------------------------------------------------
// ProductRecord — One flattened, export-ready row
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: Option<u64>,
    pub name: Option<String>,
    /// Base price in major units.
    pub price: Option<i64>,
    /// Sale price in major units; equals `price` when no distinct sale price exists.
    #[serde(rename = "salePriceU")]
    pub sale_price: Option<i64>,
    /// Discount percent, one decimal place.
    pub sale: f64,
    pub brand: Option<String>,
    pub rating: Option<f64>,
    pub supplier: Option<String>,
    pub supplier_rating: Option<f64>,
    pub feedbacks: Option<u64>,
    pub review_rating: Option<f64>,
    pub promo_text_card: Option<String>,
    pub promo_text_cat: Option<String>,
    pub link: String,
}

impl ProductRecord {
    /// Column headers in export order. Matches the serialized field names.
    pub const COLUMNS: [&'static str; 14] = [
        "id",
        "name",
        "price",
        "salePriceU",
        "sale",
        "brand",
        "rating",
        "supplier",
        "supplierRating",
        "feedbacks",
        "reviewRating",
        "promoTextCard",
        "promoTextCat",
        "link",
    ];
}
