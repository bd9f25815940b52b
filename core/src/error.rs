//! Error types for the storefront API client.
//!
//! # Design
//! Every non-2xx response maps to `RequestFailed`, whose display form is the
//! fixed per-operation message shown in the UI ("Failed to fetch products",
//! ...). The raw status and body ride along as data for debugging rather
//! than appearing in the message. Decode and encode problems get their own
//! variants so callers can tell a refused request from a malformed one.

use std::fmt;

use crate::client::Operation;

/// Errors returned by `ShopClient` build and parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The server answered with a non-success status.
    RequestFailed {
        operation: Operation,
        status: u16,
        body: String,
    },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::RequestFailed { operation, .. } => {
                write!(f, "{}", operation.failure_message())
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_displays_the_operation_message() {
        let err = ApiError::RequestFailed {
            operation: Operation::FetchProducts,
            status: 500,
            body: "internal error".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to fetch products");
    }

    #[test]
    fn status_and_body_stay_out_of_the_message() {
        let err = ApiError::RequestFailed {
            operation: Operation::AddToCart,
            status: 404,
            body: "no such product".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to add to cart");
    }
}
