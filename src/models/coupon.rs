//! Coupon-to-product mapping with a validity window.

use serde::{Deserialize, Serialize};

/// Join between an external coupon identifier and a locally curated product
/// list. Dates are `YYYY-MM-DD`; listing filters to `end_date >= today`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponMapping {
    pub id: String,
    pub coupon_no: String,
    pub coupon_name: String,
    pub product_nos: Vec<String>,
    pub start_date: String,
    pub end_date: String,
}

/// Request body for creating a coupon mapping.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCouponMappingRequest {
    pub coupon_no: String,
    #[serde(default)]
    pub coupon_name: String,
    #[serde(default)]
    pub product_nos: Vec<String>,
    pub start_date: String,
    pub end_date: String,
}

/// Request body for updating a coupon mapping.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCouponMappingRequest {
    #[serde(default)]
    pub coupon_no: Option<String>,
    #[serde(default)]
    pub coupon_name: Option<String>,
    #[serde(default)]
    pub product_nos: Option<Vec<String>>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Query parameters for the coupon mapping listing.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ListCouponQuery {
    /// When true, expired mappings are included.
    #[serde(default)]
    pub all: bool,
}
