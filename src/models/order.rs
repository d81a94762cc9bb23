//! Order model and the offline-order intake/update request shapes.
//!
//! Intake payloads come from a loosely-typed point-of-sale form: amounts may
//! arrive as numbers, floats, or strings with thousands separators, and old
//! form versions send a single flat line item instead of an `items` array.
//! Everything is coerced at the edge so the persisted order is well-typed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single order line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_no: Option<i64>,
    pub product_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_name: Option<String>,
    pub unit_price: i64,
    pub quantity: i64,
}

/// A persisted offline order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub store_name: String,
    pub manager_name: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub address: String,
    pub items: Vec<OrderItem>,
    pub total_amount: i64,
    pub shipping_cost: i64,
    pub is_synced: bool,
    pub is_deleted: bool,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synced_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_sync_success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_sync_message: Option<String>,
}

/// A line item as submitted by the intake form, before coercion.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DraftItem {
    #[serde(default)]
    pub product_no: Option<i64>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub option_name: Option<String>,
    #[serde(default)]
    pub unit_price: Option<Value>,
    #[serde(default)]
    pub quantity: Option<Value>,
}

impl DraftItem {
    /// Coerce a draft line item into a well-typed one.
    pub fn normalize(&self) -> OrderItem {
        OrderItem {
            product_no: self.product_no,
            product_name: self.product_name.clone().unwrap_or_default(),
            option_name: self.option_name.clone(),
            unit_price: self.unit_price.as_ref().map(coerce_amount).unwrap_or(0),
            quantity: self.quantity.as_ref().map(coerce_amount).unwrap_or(1),
        }
    }
}

/// Request body for creating an order.
///
/// The flat `product_name`/`option_name`/`unit_price`/`quantity` fields are
/// the legacy single-item form; they are only consulted when `items` is
/// missing or empty. A caller-supplied `id` is not part of this struct and is
/// therefore dropped during deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub store_name: String,
    #[serde(default)]
    pub manager_name: String,
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub items: Option<Vec<DraftItem>>,
    #[serde(default)]
    pub total_amount: Option<Value>,
    #[serde(default)]
    pub shipping_cost: Option<Value>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub option_name: Option<String>,
    #[serde(default)]
    pub unit_price: Option<Value>,
    #[serde(default)]
    pub quantity: Option<Value>,
}

impl CreateOrderRequest {
    /// Line items for the new order; synthesizes one from the legacy flat
    /// fields when the `items` array is absent or empty.
    pub fn normalized_items(&self) -> Vec<OrderItem> {
        let items: Vec<OrderItem> = self
            .items
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(DraftItem::normalize)
            .collect();

        if !items.is_empty() {
            return items;
        }

        vec![OrderItem {
            product_no: None,
            product_name: self.product_name.clone().unwrap_or_default(),
            option_name: self.option_name.clone(),
            unit_price: self.unit_price.as_ref().map(coerce_amount).unwrap_or(0),
            quantity: self.quantity.as_ref().map(coerce_amount).unwrap_or(1),
        }]
    }
}

/// Whitelist-based partial update for an order.
///
/// Unknown fields (including `id`) are silently dropped by serde; absent
/// fields leave the stored value untouched.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub manager_name: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<DraftItem>>,
    #[serde(default)]
    pub total_amount: Option<Value>,
    #[serde(default)]
    pub shipping_cost: Option<Value>,
}

/// Named filter preset over the order collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderView {
    Active,
    Completed,
    Trash,
}

impl OrderView {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(OrderView::Active),
            "completed" => Some(OrderView::Completed),
            "trash" => Some(OrderView::Trash),
            _ => None,
        }
    }
}

impl Default for OrderView {
    fn default() -> Self {
        OrderView::Active
    }
}

/// Query parameters for the order listing endpoint.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ListOrdersQuery {
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default, rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(default, rename = "endDate")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub view: Option<String>,
}

/// One per-order result from the external ERP push.
///
/// Matched by `id` when present, otherwise by the
/// `(customerName, totalAmount)` tuple.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncOutcome {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub total_amount: Option<Value>,
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Request body for the batch sync endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncBatchRequest {
    pub results: Vec<SyncOutcome>,
}

/// Coerce a loosely-typed amount to an integer.
///
/// Accepts plain numbers, floats (floored), and strings with thousands
/// separators or surrounding whitespace. Anything unparseable coerces to 0.
pub fn coerce_amount(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n.as_f64().map(|f| f.floor() as i64).unwrap_or(0),
        Value::String(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                .collect();
            cleaned.parse::<f64>().map(|f| f.floor() as i64).unwrap_or(0)
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_amount_shapes() {
        assert_eq!(coerce_amount(&json!(15000)), 15000);
        assert_eq!(coerce_amount(&json!(15000.75)), 15000);
        assert_eq!(coerce_amount(&json!("15,000")), 15000);
        assert_eq!(coerce_amount(&json!(" 15000 ")), 15000);
        assert_eq!(coerce_amount(&json!("-2,500")), -2500);
        assert_eq!(coerce_amount(&json!("free")), 0);
        assert_eq!(coerce_amount(&Value::Null), 0);
    }

    #[test]
    fn test_synthesized_item_from_flat_fields() {
        let request: CreateOrderRequest = serde_json::from_value(json!({
            "customerName": "Kim",
            "totalAmount": "15,000",
            "items": [],
            "productName": "Knit Sweater",
            "optionName": "Navy / L",
            "unitPrice": "15,000",
            "quantity": "1"
        }))
        .unwrap();

        let items = request.normalized_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product_name, "Knit Sweater");
        assert_eq!(items[0].unit_price, 15000);
        assert_eq!(items[0].quantity, 1);
    }

    #[test]
    fn test_explicit_items_win_over_flat_fields() {
        let request: CreateOrderRequest = serde_json::from_value(json!({
            "customerName": "Lee",
            "items": [
                { "productName": "Socks", "unitPrice": 3000, "quantity": 2 }
            ],
            "productName": "Ignored"
        }))
        .unwrap();

        let items = request.normalized_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product_name, "Socks");
        assert_eq!(items[0].quantity, 2);
    }

    #[test]
    fn test_update_request_ignores_id_field() {
        let request: UpdateOrderRequest = serde_json::from_value(json!({
            "id": "attacker-controlled",
            "customerName": "Park"
        }))
        .unwrap();

        assert_eq!(request.customer_name.as_deref(), Some("Park"));
    }
}
