//! Normalized catalog shapes returned to the intake frontend.

use serde::{Deserialize, Serialize};

/// A single normalized option value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OptionValue {
    pub code: String,
    pub name: String,
}

/// A catalog search hit after response reshaping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub product_no: i64,
    pub product_name: String,
    pub price: i64,
    pub options: Vec<OptionValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_image: Option<String>,
}

/// Normalized option list for a single product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionList {
    pub product_no: i64,
    pub product_name: String,
    pub options: Vec<OptionValue>,
}
