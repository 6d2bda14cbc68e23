//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the shopping cart
//! business domain.

use crate::catalog::ProductId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Cart Domain Models
// =============================================================================

/// One product's aggregated quantity and cost snapshot within a cart.
///
/// `name` and `cost` are denormalized at the time of the last successful
/// mutation; a line is not retroactively invalidated by later catalog
/// changes. Invariant: `quantity >= 1` for every line that exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product identifier this line aggregates
    pub id: ProductId,

    /// Units of the product in the cart, always at least 1
    pub quantity: u32,

    /// Product name as seen at the last mutation
    pub name: String,

    /// Line total: quantity times the unit cost seen at the last mutation
    pub cost: f64,
}

/// Input for the add-to-cart endpoint.
///
/// Both fields may arrive as JSON strings or numbers (the storefront posts
/// form-ish values); parsing happens at the boundary, see [`crate::cart::helpers`].
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    /// Product identifier, string or number
    pub product: Value,

    /// Requested quantity, string or number
    pub quantity: Value,
}

/// Response for cart read and mutation endpoints
#[derive(Serialize)]
pub struct CartResponse {
    /// The cart's lines in stored order
    pub cart: Vec<CartLine>,
}
