//! Manager-to-store mapping records.
//!
//! Unlike the flat reference lists these support per-record CRUD.

use serde::{Deserialize, Serialize};

/// Default warehouse assigned when the mapping does not name one.
pub const DEFAULT_WAREHOUSE_CODE: &str = "Y000";

/// Default trade type (VAT-applicable).
pub const DEFAULT_TRADE_TYPE: &str = "과세";

/// A manager/store mapping row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerStoreMapping {
    pub id: String,
    pub manager_code: String,
    pub manager_name: String,
    pub store_name: String,
    pub store_code: String,
    pub warehouse_code: String,
    pub trade_type: String,
}

/// Request body for creating a mapping.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMappingRequest {
    pub manager_code: String,
    pub manager_name: String,
    pub store_name: String,
    #[serde(default)]
    pub store_code: String,
    #[serde(default = "default_warehouse_code")]
    pub warehouse_code: String,
    #[serde(default = "default_trade_type")]
    pub trade_type: String,
}

fn default_warehouse_code() -> String {
    DEFAULT_WAREHOUSE_CODE.to_string()
}

fn default_trade_type() -> String {
    DEFAULT_TRADE_TYPE.to_string()
}

/// Request body for updating a mapping.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMappingRequest {
    #[serde(default)]
    pub manager_code: Option<String>,
    #[serde(default)]
    pub manager_name: Option<String>,
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub store_code: Option<String>,
    #[serde(default)]
    pub warehouse_code: Option<String>,
    #[serde(default)]
    pub trade_type: Option<String>,
}

/// Request body for the bulk import endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportMappingsRequest {
    pub mappings: Vec<CreateMappingRequest>,
}
