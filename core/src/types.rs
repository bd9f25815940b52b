//! Domain DTOs for the storefront API.
//!
//! # Design
//! These types mirror the server's JSON schema but are defined independently
//! of any server crate; integration tests catch schema drift. Wire field
//! names are camelCase (`productId`), so every type carries a
//! `rename_all` attribute rather than per-field renames.

use serde::{Deserialize, Serialize};

/// A catalog entry returned by `GET /products`.
///
/// Immutable from the client's perspective; the catalog is sourced entirely
/// from the server on each page load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: String,
    pub name: String,
    pub price: f64,
}

/// One line of the shopping cart returned by `GET /cart`.
///
/// `name` is optional on the wire and omitted when absent. Uniqueness of
/// `product_id` within a cart is assumed, not enforced client-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Request payload for `POST /cart`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCart {
    pub product_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_uses_camel_case_wire_names() {
        let json = r#"{"productId":"p1","name":"Pen","price":1.5}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.product_id, "p1");
        assert_eq!(product.name, "Pen");
        assert_eq!(product.price, 1.5);
    }

    #[test]
    fn cart_item_name_is_optional() {
        let item: CartItem = serde_json::from_str(r#"{"productId":"p1","quantity":2}"#).unwrap();
        assert_eq!(item.product_id, "p1");
        assert_eq!(item.quantity, 2);
        assert!(item.name.is_none());
    }

    #[test]
    fn cart_item_omits_absent_name_when_serialized() {
        let item = CartItem {
            product_id: "p1".to_string(),
            quantity: 1,
            name: None,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("name").is_none());
        assert_eq!(json["productId"], "p1");
    }

    #[test]
    fn add_to_cart_serializes_product_id_field() {
        let payload = AddToCart {
            product_id: "p1".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({"productId": "p1"}));
    }
}
