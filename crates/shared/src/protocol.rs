use serde::{Deserialize, Serialize};

use crate::{
    domain::{CartSummary, CartTotal},
    error::ProtocolError,
};

/// Header that marks the add-to-cart POST as a programmatic request.
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
pub const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

impl FormField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddToCartResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub cart_items_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cart_total: Option<CartTotal>,
}

impl AddToCartResponse {
    pub fn from_slice(body: &[u8]) -> Result<Self, ProtocolError> {
        let value: serde_json::Value =
            serde_json::from_slice(body).map_err(ProtocolError::MalformedJson)?;
        serde_json::from_value(value).map_err(ProtocolError::UnexpectedShape)
    }

    /// Count and total for the mini cart. A missing or unreadable total shows as zero.
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            items_count: self.cart_items_count,
            total: self
                .cart_total
                .as_ref()
                .and_then(CartTotal::amount)
                .unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_success_payload_with_string_total() {
        let body = br#"{"success":true,"message":"Added","cart_items_count":3,"cart_total":"12.5"}"#;
        let response = AddToCartResponse::from_slice(body).expect("parse");
        assert!(response.success);
        assert_eq!(response.message.as_deref(), Some("Added"));
        assert_eq!(
            response.summary(),
            CartSummary {
                items_count: 3,
                total: 12.5
            }
        );
    }

    #[test]
    fn parses_numeric_total() {
        let body = br#"{"success":true,"cart_items_count":1,"cart_total":9.99}"#;
        let response = AddToCartResponse::from_slice(body).expect("parse");
        assert_eq!(response.cart_total, Some(CartTotal::Number(9.99)));
    }

    #[test]
    fn rejection_needs_only_success_and_error() {
        let body = br#"{"success":false,"error":"Out of stock"}"#;
        let response = AddToCartResponse::from_slice(body).expect("parse");
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Out of stock"));
        assert_eq!(response.cart_items_count, 0);
    }

    #[test]
    fn html_body_is_malformed_json() {
        let err = AddToCartResponse::from_slice(b"<html>Server Error</html>").expect_err("html");
        assert!(matches!(err, ProtocolError::MalformedJson(_)));
    }

    #[test]
    fn missing_success_is_unexpected_shape() {
        let err = AddToCartResponse::from_slice(br#"{"cart_items_count":2}"#).expect_err("shape");
        assert!(matches!(err, ProtocolError::UnexpectedShape(_)));
    }

    #[test]
    fn negative_count_is_unexpected_shape() {
        let err = AddToCartResponse::from_slice(br#"{"success":true,"cart_items_count":-1}"#)
            .expect_err("shape");
        assert!(matches!(err, ProtocolError::UnexpectedShape(_)));
    }
}
