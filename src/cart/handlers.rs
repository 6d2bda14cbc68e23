//! REST API handlers for shopping cart operations
//!
//! This module implements the HTTP endpoints for adding to and viewing the
//! visitor's cart. Rejected adds answer exactly like successful ones: with
//! the current cart. The caller learns about rejection by seeing no change.

use super::helpers::{parse_product_id, parse_quantity};
use super::manager::{AddOutcome, CartManager};
use super::models::{AddToCartRequest, CartResponse};
use crate::session::{resolve_session_id, SESSION_COOKIE};
use crate::state::SharedState;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::{extract::State, routing::get, Json, Router};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new().route("/cart", get(view_cart).post(add_to_cart))
}

/// Endpoint: POST /cart
/// Adds a quantity of a product to the visitor's cart and returns the
/// resulting cart state.
async fn add_to_cart(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<AddToCartRequest>,
) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);
    let mut session = state.sessions.open(session_id.as_str());
    let manager = CartManager::new(&state.catalog);

    // Malformed inputs collapse onto the silent rejection paths: an
    // unparseable id behaves like an unknown product, an unparseable
    // quantity like an out-of-bounds one.
    let outcome = match (
        parse_product_id(&payload.product),
        parse_quantity(&payload.quantity),
    ) {
        (Ok(product_id), Ok(requested)) => {
            manager.add_to_cart(&mut session, product_id, requested)
        }
        (Err(_), _) => {
            session.save();
            AddOutcome::RejectedNotFound
        }
        (_, Err(_)) => {
            session.save();
            AddOutcome::RejectedBounds
        }
    };

    if outcome.is_rejected() {
        println!("CART: add rejected ({:?}) for session {}", outcome, session_id);
    }

    let cart = manager.cart_contents(&session);
    with_session_cookie(Json(CartResponse { cart }), &session_id, is_new_session)
}

/// Endpoint: GET /cart
/// Returns the visitor's current cart, empty for a fresh session.
async fn view_cart(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);
    let session = state.sessions.open(session_id.as_str());
    let cart = CartManager::new(&state.catalog).cart_contents(&session);

    with_session_cookie(Json(CartResponse { cart }), &session_id, is_new_session)
}

/// Attaches a `Set-Cookie` header when the session id was freshly minted
fn with_session_cookie(body: impl IntoResponse, session_id: &str, is_new_session: bool) -> Response {
    let mut response = body.into_response();

    if is_new_session {
        let cookie_val = format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, session_id);
        response
            .headers_mut()
            .insert(axum::http::header::SET_COOKIE, cookie_val.parse().unwrap());
    }

    response
}
