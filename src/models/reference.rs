//! Read-mostly reference lists consumed by the order intake forms.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The four reference-data collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    EcountStores,
    StaticManagers,
    EcountWarehouses,
    ItemCodes,
}

impl ReferenceKind {
    /// Backing table name.
    pub fn table(&self) -> &'static str {
        match self {
            ReferenceKind::EcountStores => "ecount_stores",
            ReferenceKind::StaticManagers => "static_managers",
            ReferenceKind::EcountWarehouses => "ecount_warehouses",
            ReferenceKind::ItemCodes => "item_codes",
        }
    }

    pub const ALL: [ReferenceKind; 4] = [
        ReferenceKind::EcountStores,
        ReferenceKind::StaticManagers,
        ReferenceKind::EcountWarehouses,
        ReferenceKind::ItemCodes,
    ];
}

/// A flat reference record: stable business code, display name, and any
/// kind-specific extra fields carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceEntry {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Value>,
}

/// Request body for the whole-collection replace endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceReferenceRequest {
    pub entries: Vec<ReferenceEntry>,
}

/// Query parameters guarding destructive operations.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ForceQuery {
    #[serde(default)]
    pub force: bool,
}
