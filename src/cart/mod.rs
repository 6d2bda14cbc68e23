//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (CartLine, request/response shapes)
//! - Boundary parsing helpers (loosely-typed ids and quantities)
//! - The cart manager (add/merge/reject rules against the catalog)
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod manager;
pub mod models;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use manager::{AddOutcome, CartManager, CART_KEY};
pub use models::CartLine;
