//! Product Catalog Domain Module
//!
//! This module contains the read-only product catalog, including:
//! - Domain models (ProductId, Product)
//! - The lookup contract (Catalog trait) and its in-memory implementation
//! - REST API handlers for listing and fetching products

pub mod handlers;
pub mod models;
pub mod store;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{InvalidProductId, Product, ProductId};
pub use store::{Catalog, MemoryCatalog};
