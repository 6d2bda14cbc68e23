//! REST API handlers for catalog browsing
//!
//! Listing and product-detail endpoints, a thin pass-through over the
//! `Catalog` lookup contract.

use super::models::ProductId;
use super::store::Catalog;
use crate::state::SharedState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Json, Router};
use serde::Deserialize;

/// Creates routes for catalog-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/:id", get(get_product))
}

/// Query string for the product listing
#[derive(Debug, Deserialize)]
struct ListQuery {
    /// Optional exact-match category filter
    category: Option<String>,
}

/// Endpoint: GET /products[?category=...]
/// Lists all products, or only those in the given category. An unknown
/// category yields an empty list, not an error.
async fn list_products(
    State(state): State<SharedState>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    let products = state.catalog.list(query.category.as_deref());
    Json(products)
}

/// Endpoint: GET /products/:id
/// Returns one product's details; unknown or unparseable ids are 404.
async fn get_product(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let product = id
        .parse::<ProductId>()
        .ok()
        .and_then(|id| state.catalog.product(id));

    match product {
        Some(product) => Json(product).into_response(),
        None => (StatusCode::NOT_FOUND, "The product does not exist").into_response(),
    }
}
