use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: String,
    pub name: String,
    pub price: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCart {
    pub product_id: String,
}

/// Shared server state: a fixed catalog and a mutable cart keyed by
/// productId. The BTreeMap keeps `GET /cart` ordering stable.
#[derive(Clone)]
pub struct ShopState {
    catalog: Arc<Vec<Product>>,
    cart: Arc<RwLock<BTreeMap<String, CartItem>>>,
}

fn default_catalog() -> Vec<Product> {
    vec![
        Product {
            product_id: "p1".to_string(),
            name: "Pen".to_string(),
            price: 1.5,
        },
        Product {
            product_id: "p2".to_string(),
            name: "Notebook".to_string(),
            price: 4.25,
        },
        Product {
            product_id: "p3".to_string(),
            name: "Stapler".to_string(),
            price: 7.0,
        },
    ]
}

/// Router seeded with the default catalog and an empty cart.
pub fn app() -> Router {
    app_with_products(default_catalog())
}

/// Router serving exactly `catalog`, for tests that need to control it.
pub fn app_with_products(catalog: Vec<Product>) -> Router {
    let state = ShopState {
        catalog: Arc::new(catalog),
        cart: Arc::new(RwLock::new(BTreeMap::new())),
    };
    Router::new()
        .route("/products", get(list_products))
        .route("/cart", get(list_cart).post(add_to_cart))
        .route("/cart/{product_id}", delete(remove_from_cart))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve a router over exactly `catalog`, for harnesses that need to control
/// the product list without depending on axum themselves.
pub async fn run_with_products(
    listener: TcpListener,
    catalog: Vec<Product>,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_products(catalog)).await
}

async fn list_products(State(state): State<ShopState>) -> Json<Vec<Product>> {
    Json(state.catalog.as_ref().clone())
}

async fn list_cart(State(state): State<ShopState>) -> Json<Vec<CartItem>> {
    let cart = state.cart.read().await;
    Json(cart.values().cloned().collect())
}

async fn add_to_cart(
    State(state): State<ShopState>,
    Json(input): Json<AddToCart>,
) -> Result<(StatusCode, Json<CartItem>), StatusCode> {
    let product = state
        .catalog
        .iter()
        .find(|p| p.product_id == input.product_id)
        .ok_or(StatusCode::NOT_FOUND)?;

    let mut cart = state.cart.write().await;
    let item = cart
        .entry(input.product_id.clone())
        .and_modify(|item| item.quantity += 1)
        .or_insert_with(|| CartItem {
            product_id: product.product_id.clone(),
            quantity: 1,
            name: Some(product.name.clone()),
        });
    Ok((StatusCode::CREATED, Json(item.clone())))
}

async fn remove_from_cart(
    State(state): State<ShopState>,
    Path(product_id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut cart = state.cart.write().await;
    cart.remove(&product_id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_serializes_with_camel_case_fields() {
        let product = Product {
            product_id: "p1".to_string(),
            name: "Pen".to_string(),
            price: 1.5,
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["productId"], "p1");
        assert_eq!(json["name"], "Pen");
        assert_eq!(json["price"], 1.5);
    }

    #[test]
    fn cart_item_omits_name_when_absent() {
        let item = CartItem {
            product_id: "p1".to_string(),
            quantity: 2,
            name: None,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["quantity"], 2);
        assert!(json.get("name").is_none());
    }

    #[test]
    fn add_to_cart_reads_product_id_field() {
        let input: AddToCart = serde_json::from_str(r#"{"productId":"p1"}"#).unwrap();
        assert_eq!(input.product_id, "p1");
    }

    #[test]
    fn add_to_cart_rejects_missing_product_id() {
        let result: Result<AddToCart, _> = serde_json::from_str(r#"{}"#);
        assert!(result.is_err());
    }

    #[test]
    fn default_catalog_has_unique_ids() {
        let catalog = default_catalog();
        for (i, product) in catalog.iter().enumerate() {
            assert!(catalog
                .iter()
                .skip(i + 1)
                .all(|other| other.product_id != product.product_id));
        }
    }
}
