//! Shopping Cart Boundary Parsing
//!
//! Inbound ids and quantities arrive as loosely-typed JSON (strings from the
//! storefront form, numbers from API clients). These helpers turn them into
//! typed values before the cart manager ever sees them; the manager only
//! consumes validated input.

use crate::catalog::{InvalidProductId, ProductId};
use serde_json::Value;
use thiserror::Error;

/// Error for a quantity input that is not interpretable as an integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not an integer quantity: {0:?}")]
pub struct MalformedQuantity(pub String);

/// Parses a product id from a JSON string or number.
///
/// Failure is reported with the same error as an unparseable id string;
/// callers treat it as "product not found".
pub fn parse_product_id(raw: &Value) -> Result<ProductId, InvalidProductId> {
    match raw {
        Value::Number(n) => n
            .as_i64()
            .map(ProductId)
            .ok_or_else(|| InvalidProductId(n.to_string())),
        Value::String(s) => s.parse(),
        other => Err(InvalidProductId(other.to_string())),
    }
}

/// Parses a requested quantity from a JSON string or number.
///
/// Negative and zero values parse fine here; rejecting them is the cart
/// manager's bounds check, not a parse concern.
pub fn parse_quantity(raw: &Value) -> Result<i64, MalformedQuantity> {
    match raw {
        Value::Number(n) => n.as_i64().ok_or_else(|| MalformedQuantity(n.to_string())),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| MalformedQuantity(s.clone())),
        other => Err(MalformedQuantity(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_product_id_accepts_strings_and_numbers() {
        assert_eq!(parse_product_id(&json!(3)).unwrap(), ProductId(3));
        assert_eq!(parse_product_id(&json!("3")).unwrap(), ProductId(3));
        assert_eq!(parse_product_id(&json!(" 12 ")).unwrap(), ProductId(12));
    }

    #[test]
    fn test_parse_product_id_rejects_garbage() {
        assert!(parse_product_id(&json!("sku-9")).is_err());
        assert!(parse_product_id(&json!(2.5)).is_err());
        assert!(parse_product_id(&json!(null)).is_err());
        assert!(parse_product_id(&json!(["1"])).is_err());
    }

    #[test]
    fn test_parse_quantity_accepts_strings_and_numbers() {
        assert_eq!(parse_quantity(&json!(4)).unwrap(), 4);
        assert_eq!(parse_quantity(&json!("4")).unwrap(), 4);

        // Sign is preserved; bounds checks happen in the manager
        assert_eq!(parse_quantity(&json!(-3)).unwrap(), -3);
        assert_eq!(parse_quantity(&json!("0")).unwrap(), 0);
    }

    #[test]
    fn test_parse_quantity_rejects_non_integers() {
        assert!(parse_quantity(&json!("lots")).is_err());
        assert!(parse_quantity(&json!(1.5)).is_err());
        assert!(parse_quantity(&json!(null)).is_err());
    }
}
