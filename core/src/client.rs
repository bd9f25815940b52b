//! Stateless HTTP request builder and response parser for the storefront API.
//!
//! # Design
//! `ShopClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`. The
//! caller executes the actual HTTP round-trip, keeping the core deterministic
//! and free of I/O dependencies.
//!
//! No operation retries, validates payload shape beyond typed JSON decoding,
//! or checks the productId format. Transport-level failures never reach this
//! layer; the host decides how to surface them.

use std::fmt;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{AddToCart, CartItem, Product};

/// Which storefront API call a request or failure belongs to.
///
/// Carried alongside every pending request so the host can route the response
/// back to the right parser, and embedded in `ApiError::RequestFailed` to
/// select the fixed failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchProducts,
    FetchCart,
    AddToCart,
    RemoveFromCart,
}

impl Operation {
    /// The user-facing message for a refused request, one fixed string per
    /// operation.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::FetchProducts => "Failed to fetch products",
            Operation::FetchCart => "Failed to fetch cart",
            Operation::AddToCart => "Failed to add to cart",
            Operation::RemoveFromCart => "Failed to remove from cart",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::FetchProducts => "fetch-products",
            Operation::FetchCart => "fetch-cart",
            Operation::AddToCart => "add-to-cart",
            Operation::RemoveFromCart => "remove-from-cart",
        };
        f.write_str(name)
    }
}

/// Synchronous, stateless client for the storefront API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct ShopClient {
    base_url: String,
}

impl ShopClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_fetch_products(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/products", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_fetch_cart(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/cart", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_add_to_cart(&self, product_id: &str) -> Result<HttpRequest, ApiError> {
        let payload = AddToCart {
            product_id: product_id.to_string(),
        };
        let body = serde_json::to_string(&payload)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/cart", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_remove_from_cart(&self, product_id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/cart/{product_id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_fetch_products(&self, response: HttpResponse) -> Result<Vec<Product>, ApiError> {
        check_status(&response, Operation::FetchProducts)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_fetch_cart(&self, response: HttpResponse) -> Result<Vec<CartItem>, ApiError> {
        check_status(&response, Operation::FetchCart)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// The response body is ignored on success; only the status matters.
    pub fn parse_add_to_cart(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, Operation::AddToCart)
    }

    /// The response body is ignored on success; only the status matters.
    pub fn parse_remove_from_cart(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, Operation::RemoveFromCart)
    }
}

/// Map any non-2xx status to `RequestFailed` for the given operation.
fn check_status(response: &HttpResponse, operation: Operation) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::RequestFailed {
        operation,
        status: response.status,
        body: response.body.clone(),
    })
}
