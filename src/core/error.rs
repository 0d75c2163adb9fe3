//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for catalog requests
//! - [`StorageError`] - localStorage operations for the persisted cart
//! - [`CartError`] - Cart actions referencing unknown products or lines

use thiserror::Error;

use crate::models::ProductId;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (offline, CORS, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
}

/// Errors writing the cart to localStorage.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("localStorage not available")]
    StorageUnavailable,
    #[error("failed to serialize cart: {0}")]
    SerializationFailed(String),
    #[error("failed to save to localStorage")]
    SaveFailed,
}

/// Cart actions that reference something that does not exist.
///
/// The cart is left unchanged whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("product {0} is not in the catalog")]
    ProductNotFound(ProductId),
    #[error("product {0} is not in the cart")]
    LineNotFound(ProductId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(FetchError::HttpError(503).to_string(), "HTTP error: 503");
        assert_eq!(
            CartError::ProductNotFound(42).to_string(),
            "product 42 is not in the catalog"
        );
        assert_eq!(
            StorageError::StorageUnavailable.to_string(),
            "localStorage not available"
        );
    }
}
