//! Product Catalog Domain Models
//!
//! This module contains the data structures describing sellable products.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Product Identity
// =============================================================================

/// Stable identifier of a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Error returned when an input cannot be interpreted as a product id.
///
/// Callers treat this the same as looking up a product that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a product id: {0:?}")]
pub struct InvalidProductId(pub String);

impl FromStr for ProductId {
    type Err = InvalidProductId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(ProductId)
            .map_err(|_| InvalidProductId(s.to_string()))
    }
}

// =============================================================================
// Product
// =============================================================================

/// A sellable product as exposed by the catalog store.
///
/// Read-only from the cart's perspective; `inventory` is the maximum sellable
/// quantity at lookup time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Longer description shown on the product detail page
    pub description: String,

    /// Price of a single unit
    pub unit_cost: f64,

    /// Units available for sale
    pub inventory: u32,

    /// Category tag used for filtering (e.g. "men", "women"); arbitrary
    /// values are tolerated
    pub category: String,
}
