//! WT Store Library
//!
//! This library provides the backend for the WT online store: a product
//! catalog with category filtering and a per-visitor shopping cart kept in
//! server-side session state.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod session;

// Infrastructure
pub mod router;
pub mod state;
