//! Normalization of the platform's loosely-shaped catalog payloads.
//!
//! Option and image structures vary across response variants observed in the
//! field, so every fallback chain here is explicit and unit-tested per known
//! shape instead of being optional-chained at the call sites.

use serde_json::Value;

use crate::models::{coerce_amount, CatalogItem, OptionList, OptionValue};

/// Localized option-group names treated as the color group.
const COLOR_TERMS: [&str; 3] = ["color", "colour", "색상"];

/// Read the first present key as a string; numbers are stringified so an
/// id field like `option_value_no: 42` still yields a usable code.
fn field_str(value: &Value, keys: &[&str]) -> Option<String> {
    for key in keys {
        match value.get(key) {
            Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => {}
        }
    }
    None
}

/// Option groups arrive either as a flat array or wrapped in an object with
/// an `options` array.
fn option_groups(value: Option<&Value>) -> Vec<Value> {
    match value {
        Some(Value::Array(groups)) => groups.clone(),
        Some(Value::Object(_)) => value
            .and_then(|v| v.get("options"))
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

fn group_name(group: &Value) -> String {
    field_str(group, &["option_name", "name"]).unwrap_or_default()
}

fn is_color_group(group: &Value) -> bool {
    let name = group_name(group).to_lowercase();
    COLOR_TERMS.iter().any(|term| name.contains(term))
}

/// Map one upstream option value to a normalized `{code, name}` pair.
///
/// A value may be identified by an id field, a code field, or a raw value
/// field, tried in that priority order; a bare string is both code and name.
fn normalize_value(value: &Value) -> Option<OptionValue> {
    if let Value::String(s) = value {
        if s.is_empty() {
            return None;
        }
        return Some(OptionValue {
            code: s.clone(),
            name: s.clone(),
        });
    }

    let code = field_str(value, &["option_value_no", "value_no", "option_value", "value"]);
    let name = field_str(value, &["option_text", "option_value", "value_name", "value"]);

    match (code, name) {
        (Some(code), Some(name)) => Some(OptionValue { code, name }),
        (Some(code), None) => Some(OptionValue {
            name: code.clone(),
            code,
        }),
        (None, Some(name)) => Some(OptionValue {
            code: name.clone(),
            name,
        }),
        (None, None) => None,
    }
}

/// Extract the option set for a product: the first color-like group wins,
/// falling back to the first group when none matches.
pub fn extract_options(value: Option<&Value>) -> Vec<OptionValue> {
    let groups = option_groups(value);
    if groups.is_empty() {
        return Vec::new();
    }

    let group = groups
        .iter()
        .find(|g| is_color_group(g))
        .unwrap_or(&groups[0]);

    let values = group
        .get("option_value")
        .or_else(|| group.get("values"))
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    values.iter().filter_map(normalize_value).collect()
}

/// Extract detail/list/small image URLs with the documented fallback chain:
/// explicit single-image fields, then the first element of an images array
/// (big/medium/small), then the generic product-image fields.
pub fn extract_images(value: &Value) -> (Option<String>, Option<String>, Option<String>) {
    let first_image = value
        .get("images")
        .and_then(Value::as_array)
        .and_then(|a| a.first())
        .cloned()
        .unwrap_or(Value::Null);

    let detail = field_str(value, &["detail_image"])
        .or_else(|| field_str(&first_image, &["big"]))
        .or_else(|| field_str(value, &["product_image", "image_url"]));
    let list = field_str(value, &["list_image"]).or_else(|| field_str(&first_image, &["medium"]));
    let small = field_str(value, &["small_image"]).or_else(|| field_str(&first_image, &["small"]));

    (detail, list, small)
}

/// Normalize one product object from a search response.
pub fn normalize_product(value: &Value) -> Option<CatalogItem> {
    let product_no = value
        .get("product_no")
        .and_then(|v| match v {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        })?;

    let product_name = field_str(value, &["product_name"]).unwrap_or_default();
    // Price is always floored to an integer
    let price = value.get("price").map(coerce_amount).unwrap_or(0);
    let options = extract_options(value.get("options"));
    let (detail_image, list_image, small_image) = extract_images(value);

    Some(CatalogItem {
        product_no,
        product_name,
        price,
        options,
        detail_image,
        list_image,
        small_image,
    })
}

/// Normalize a product object into its option list.
pub fn normalize_option_list(value: &Value) -> Option<OptionList> {
    let item = normalize_product(value)?;
    Some(OptionList {
        product_no: item.product_no,
        product_name: item.product_name,
        options: item.options,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_group_array_color_selected() {
        let options = json!([
            { "option_name": "Size", "option_value": [ { "value_no": 1, "value_name": "L" } ] },
            { "option_name": "Color", "option_value": [
                { "value_no": 10, "value_name": "Navy" },
                { "value_no": 11, "value_name": "Charcoal" }
            ] }
        ]);

        let values = extract_options(Some(&options));
        assert_eq!(
            values,
            vec![
                OptionValue { code: "10".to_string(), name: "Navy".to_string() },
                OptionValue { code: "11".to_string(), name: "Charcoal".to_string() },
            ]
        );
    }

    #[test]
    fn test_nested_wrapper_shape() {
        let options = json!({
            "has_option": true,
            "options": [
                { "option_name": "색상", "option_value": [
                    { "option_value_no": 7, "option_text": "아이보리" }
                ] }
            ]
        });

        let values = extract_options(Some(&options));
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].code, "7");
        assert_eq!(values[0].name, "아이보리");
    }

    #[test]
    fn test_fallback_to_first_group_when_no_color_group() {
        let options = json!([
            { "option_name": "Size", "values": [
                { "value_no": 1, "value_name": "S" },
                { "value_no": 2, "value_name": "M" }
            ] },
            { "option_name": "Material", "values": [ { "value_no": 3, "value_name": "Wool" } ] }
        ]);

        let values = extract_options(Some(&options));
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].name, "S");
    }

    #[test]
    fn test_value_identity_fallback_chain() {
        // id field wins over code field wins over raw value
        let options = json!([
            { "option_name": "Color", "option_value": [
                { "option_value_no": 5, "option_value": "Red" },
                { "value_no": 6, "value_name": "Blue" },
                { "value": "Green" },
                "Plain"
            ] }
        ]);

        let values = extract_options(Some(&options));
        assert_eq!(values[0], OptionValue { code: "5".to_string(), name: "Red".to_string() });
        assert_eq!(values[1], OptionValue { code: "6".to_string(), name: "Blue".to_string() });
        assert_eq!(values[2], OptionValue { code: "Green".to_string(), name: "Green".to_string() });
        assert_eq!(values[3], OptionValue { code: "Plain".to_string(), name: "Plain".to_string() });
    }

    #[test]
    fn test_missing_options_yield_empty_set() {
        assert!(extract_options(None).is_empty());
        assert!(extract_options(Some(&json!({}))).is_empty());
        assert!(extract_options(Some(&json!([]))).is_empty());
    }

    #[test]
    fn test_explicit_image_fields_preferred() {
        let product = json!({
            "detail_image": "https://img/detail.jpg",
            "list_image": "https://img/list.jpg",
            "small_image": "https://img/small.jpg",
            "images": [ { "big": "https://img/other.jpg" } ]
        });

        let (detail, list, small) = extract_images(&product);
        assert_eq!(detail.as_deref(), Some("https://img/detail.jpg"));
        assert_eq!(list.as_deref(), Some("https://img/list.jpg"));
        assert_eq!(small.as_deref(), Some("https://img/small.jpg"));
    }

    #[test]
    fn test_images_array_fallback() {
        let product = json!({
            "images": [
                { "big": "https://img/b.jpg", "medium": "https://img/m.jpg", "small": "https://img/s.jpg" }
            ]
        });

        let (detail, list, small) = extract_images(&product);
        assert_eq!(detail.as_deref(), Some("https://img/b.jpg"));
        assert_eq!(list.as_deref(), Some("https://img/m.jpg"));
        assert_eq!(small.as_deref(), Some("https://img/s.jpg"));
    }

    #[test]
    fn test_generic_image_fallback() {
        let product = json!({ "product_image": "https://img/p.jpg" });
        let (detail, list, small) = extract_images(&product);
        assert_eq!(detail.as_deref(), Some("https://img/p.jpg"));
        assert!(list.is_none());
        assert!(small.is_none());
    }

    #[test]
    fn test_normalize_product_price_floored() {
        let product = json!({
            "product_no": 42,
            "product_name": "Wool Coat",
            "price": "129000.00",
            "options": [ { "option_name": "Color", "option_value": [
                { "value_no": 1, "value_name": "Camel" }
            ] } ]
        });

        let item = normalize_product(&product).unwrap();
        assert_eq!(item.product_no, 42);
        assert_eq!(item.price, 129000);
        assert_eq!(item.options.len(), 1);
    }

    #[test]
    fn test_normalize_product_requires_product_no() {
        assert!(normalize_product(&json!({ "product_name": "No id" })).is_none());
        // string product numbers are accepted
        let item = normalize_product(&json!({ "product_no": "77" })).unwrap();
        assert_eq!(item.product_no, 77);
    }
}
